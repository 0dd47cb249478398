//! Listener hooks around SQL generation.
//!
//! Listeners are registered on a [`Platform`](crate::platform::Platform) and
//! invoked synchronously while statements are generated. They can inspect
//! the schema object being processed and append extra statements; they
//! cannot suppress or rewrite what the platform emits.
//!
//! Statements appended during [`HookPhase::Before`] are placed ahead of the
//! statements generated for the operation, those appended during
//! [`HookPhase::After`] follow them.

use std::fmt;
use std::sync::Arc;

use crate::diff::{ColumnDiff, TableDiff};
use crate::schema::{Column, Table};

/// When a hook fires relative to the operation it wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookPhase {
    /// Before the operation's statements are generated.
    Before,
    /// After the operation's statements are generated.
    After,
}

/// The operation a hook wraps.
#[derive(Debug, Clone, Copy)]
pub enum SchemaEvent<'a> {
    /// A CREATE TABLE statement, fired once per table.
    CreateTable {
        /// Table being created.
        table: &'a Table,
    },
    /// One column inside a CREATE TABLE body.
    CreateTableColumn {
        /// Table being created.
        table: &'a Table,
        /// Column being declared.
        column: &'a Column,
    },
    /// An ALTER TABLE run, fired once per diff.
    AlterTable {
        /// Diff being applied.
        diff: &'a TableDiff,
    },
    /// A column being added.
    AlterTableAddColumn {
        /// Diff being applied.
        diff: &'a TableDiff,
        /// Column being added.
        column: &'a Column,
    },
    /// A column being dropped.
    AlterTableRemoveColumn {
        /// Diff being applied.
        diff: &'a TableDiff,
        /// Column being dropped.
        column: &'a Column,
    },
    /// A column being altered.
    AlterTableChangeColumn {
        /// Diff being applied.
        diff: &'a TableDiff,
        /// The column change.
        column_diff: &'a ColumnDiff,
    },
    /// A column being renamed.
    AlterTableRenameColumn {
        /// Diff being applied.
        diff: &'a TableDiff,
        /// Old column name.
        old_name: &'a str,
        /// Column under its new name.
        column: &'a Column,
    },
}

impl SchemaEvent<'_> {
    /// Short name of the event, used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CreateTable { .. } => "create_table",
            Self::CreateTableColumn { .. } => "create_table_column",
            Self::AlterTable { .. } => "alter_table",
            Self::AlterTableAddColumn { .. } => "alter_table_add_column",
            Self::AlterTableRemoveColumn { .. } => "alter_table_remove_column",
            Self::AlterTableChangeColumn { .. } => "alter_table_change_column",
            Self::AlterTableRenameColumn { .. } => "alter_table_rename_column",
        }
    }
}

/// Observer of SQL generation.
pub trait SchemaListener: Send + Sync {
    /// Called for every hook; push extra statements onto `sql`.
    fn on_event(&self, phase: HookPhase, event: &SchemaEvent<'_>, sql: &mut Vec<String>);
}

impl<F> SchemaListener for F
where
    F: Fn(HookPhase, &SchemaEvent<'_>, &mut Vec<String>) + Send + Sync,
{
    fn on_event(&self, phase: HookPhase, event: &SchemaEvent<'_>, sql: &mut Vec<String>) {
        self(phase, event, sql);
    }
}

/// Ordered list of registered listeners.
#[derive(Clone, Default)]
pub struct Listeners {
    listeners: Vec<Arc<dyn SchemaListener>>,
}

impl Listeners {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener; listeners fire in registration order.
    pub fn add(&mut self, listener: Arc<dyn SchemaListener>) {
        self.listeners.push(listener);
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Returns true if no listener is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Invokes every listener and returns the statements they appended.
    #[must_use]
    pub fn dispatch(&self, phase: HookPhase, event: &SchemaEvent<'_>) -> Vec<String> {
        let mut sql = Vec::new();
        for listener in &self.listeners {
            listener.on_event(phase, event, &mut sql);
        }
        if !sql.is_empty() {
            tracing::trace!(
                event = event.name(),
                ?phase,
                appended = sql.len(),
                "listeners appended SQL"
            );
        }
        sql
    }

    /// Wraps `body` with the before and after hooks of `event`.
    pub(crate) fn around<E>(
        &self,
        event: &SchemaEvent<'_>,
        body: impl FnOnce() -> Result<Vec<String>, E>,
    ) -> Result<Vec<String>, E> {
        let mut sql = self.dispatch(HookPhase::Before, event);
        sql.extend(body()?);
        sql.extend(self.dispatch(HookPhase::After, event));
        Ok(sql)
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.listeners.len())
            .finish()
    }
}
