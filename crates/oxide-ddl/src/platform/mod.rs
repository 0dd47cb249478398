//! Dialect-aware SQL generation.
//!
//! A [`Platform`] pairs a static dialect descriptor with a per-instance type
//! registry and listener list. Every generator reads the schema or diff it is
//! given and returns complete SQL statements; nothing is executed here.
//!
//! ```
//! use oxide_ddl::platform::Platform;
//! use oxide_ddl::schema::{Column, Table};
//! use oxide_ddl::types::TypeKind;
//!
//! let platform = Platform::mysql();
//! let table = Table::new("test")
//!     .column(Column::new("id", TypeKind::Integer).autoincrement())
//!     .column(Column::new("test", TypeKind::String).length(255).nullable())
//!     .primary_key(["id"]);
//!
//! let sql = platform.create_table_sql(&table).unwrap();
//! assert_eq!(
//!     sql[0],
//!     "CREATE TABLE test (id INT AUTO_INCREMENT NOT NULL, \
//!      test VARCHAR(255) DEFAULT NULL, PRIMARY KEY(id))"
//! );
//! ```

mod alter;
mod create;
mod declaration;
pub mod dialect;
mod mysql;
mod postgresql;
mod sqlite;
mod sqlserver;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{DdlError, Result};
use crate::events::{Listeners, SchemaListener};
use crate::identifier::{quote_with, requires_quoting, Identifier, SEPARATOR};
use crate::keywords::KeywordList;
use crate::schema::ReferentialAction;
use crate::types::{TypeKind, TypeRegistry};

use self::dialect::DialectSpec;

/// The built-in dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformKind {
    /// MySQL 8.
    #[serde(alias = "mariadb")]
    MySql,
    /// PostgreSQL 10 and later.
    #[serde(alias = "postgres", alias = "pgsql")]
    PostgreSql,
    /// SQLite 3.
    #[serde(alias = "sqlite3")]
    Sqlite,
    /// SQL Server 2012 and later.
    #[serde(alias = "mssql")]
    SqlServer,
}

impl PlatformKind {
    /// Every built-in dialect.
    pub const ALL: [Self; 4] = [Self::MySql, Self::PostgreSql, Self::Sqlite, Self::SqlServer];

    /// The canonical name of the dialect.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.spec().name
    }

    fn spec(self) -> &'static DialectSpec {
        match self {
            Self::MySql => &mysql::SPEC,
            Self::PostgreSql => &postgresql::SPEC,
            Self::Sqlite => &sqlite::SPEC,
            Self::SqlServer => &sqlserver::SPEC,
        }
    }
}

impl fmt::Display for PlatformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PlatformKind {
    type Err = DdlError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mysql" | "mariadb" => Ok(Self::MySql),
            "postgresql" | "postgres" | "pgsql" | "pg" => Ok(Self::PostgreSql),
            "sqlite" | "sqlite3" => Ok(Self::Sqlite),
            "sqlserver" | "mssql" | "sqlsrv" => Ok(Self::SqlServer),
            _ => Err(DdlError::invalid(format!("Unknown platform '{s}'"))),
        }
    }
}

/// SQL generator for one dialect.
///
/// Generation only needs `&self`, so a platform can be shared between
/// threads. Registering type mappings takes the registry's write lock;
/// registering listeners needs `&mut self`.
#[derive(Debug)]
pub struct Platform {
    kind: PlatformKind,
    spec: &'static DialectSpec,
    registry: TypeRegistry,
    listeners: Listeners,
}

impl Platform {
    /// Creates a platform with the built-in type mappings and no listeners.
    #[must_use]
    pub fn new(kind: PlatformKind) -> Self {
        let spec = kind.spec();
        Self {
            kind,
            spec,
            registry: TypeRegistry::with_builtins(spec.type_mappings),
            listeners: Listeners::new(),
        }
    }

    /// MySQL platform.
    #[must_use]
    pub fn mysql() -> Self {
        Self::new(PlatformKind::MySql)
    }

    /// PostgreSQL platform.
    #[must_use]
    pub fn postgresql() -> Self {
        Self::new(PlatformKind::PostgreSql)
    }

    /// SQLite platform.
    #[must_use]
    pub fn sqlite() -> Self {
        Self::new(PlatformKind::Sqlite)
    }

    /// SQL Server platform.
    #[must_use]
    pub fn sqlserver() -> Self {
        Self::new(PlatformKind::SqlServer)
    }

    /// The dialect.
    #[must_use]
    pub const fn kind(&self) -> PlatformKind {
        self.kind
    }

    /// The canonical dialect name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.spec.name
    }

    /// The dialect's capability descriptor.
    #[must_use]
    pub const fn dialect(&self) -> &'static DialectSpec {
        self.spec
    }

    /// Registers a listener. Listeners fire in registration order.
    pub fn add_listener(&mut self, listener: impl SchemaListener + 'static) {
        self.listeners.add(Arc::new(listener));
    }

    /// The registered listeners.
    #[must_use]
    pub const fn listeners(&self) -> &Listeners {
        &self.listeners
    }

    /// Maps a database type alias to the kind named `kind_name`.
    ///
    /// # Errors
    ///
    /// Returns [`DdlError::UnknownType`] if `kind_name` is not a kind.
    pub fn register_type_mapping(&self, alias: &str, kind_name: &str) -> Result<TypeKind> {
        let kind = self.registry.register(alias, kind_name)?;
        tracing::debug!(platform = self.name(), alias, kind = %kind, "Registered type mapping");
        Ok(kind)
    }

    /// Resolves a database type alias.
    ///
    /// # Errors
    ///
    /// Returns [`DdlError::UnknownType`] for unregistered aliases.
    pub fn resolve_type(&self, alias: &str) -> Result<TypeKind> {
        self.registry.lookup(alias)
    }

    /// Returns true if the alias resolves to a kind.
    #[must_use]
    pub fn has_type_mapping(&self, alias: &str) -> bool {
        self.registry.contains(alias)
    }

    /// The dialect's reserved words.
    #[must_use]
    pub const fn keywords(&self) -> &'static KeywordList {
        self.spec.keywords
    }

    /// Returns true if `word` is reserved, ignoring case.
    #[must_use]
    pub fn is_reserved_keyword(&self, word: &str) -> bool {
        self.spec.keywords.is_keyword(word)
    }

    /// Quotes a single identifier part, doubling embedded quote characters.
    #[must_use]
    pub fn quote_single_identifier(&self, part: &str) -> String {
        let (open, close) = self.spec.quote;
        quote_with(part, open, close)
    }

    /// Quotes every part of a possibly schema-qualified identifier.
    #[must_use]
    pub fn quote_identifier(&self, name: &str) -> String {
        let ident = Identifier::new(name);
        self.join_parts(ident.parts().map(|part| self.quote_single_identifier(part)))
    }

    /// Quotes the parts of `ident` that need it: all of them if the caller
    /// delimited the identifier, otherwise reserved words and names with
    /// characters outside `[A-Za-z0-9_$]`.
    #[must_use]
    pub fn quote_if_needed(&self, ident: &Identifier) -> String {
        self.join_parts(
            ident
                .parts()
                .map(|part| self.quote_part_if_needed(part, ident.is_quoted())),
        )
    }

    pub(crate) fn quote_part_if_needed(&self, part: &str, force: bool) -> String {
        if force || self.is_reserved_keyword(part) || requires_quoting(part) {
            self.quote_single_identifier(part)
        } else {
            part.to_string()
        }
    }

    fn join_parts(&self, parts: impl Iterator<Item = String>) -> String {
        parts.collect::<Vec<_>>().join(&SEPARATOR.to_string())
    }

    /// Quotes a comma-separated column list.
    pub(crate) fn column_list(&self, columns: &[Identifier]) -> String {
        columns
            .iter()
            .map(|c| self.quote_if_needed(c))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Quotes a string literal, doubling single quotes.
    #[must_use]
    pub fn quote_string_literal(&self, value: &str) -> String {
        let escaped = if self.spec.backslash_escapes {
            value.replace('\\', "\\\\")
        } else {
            value.to_string()
        };
        format!("'{}'", escaped.replace('\'', "''"))
    }

    /// Canonical SQL for a referential action given in any case.
    ///
    /// # Errors
    ///
    /// Returns [`DdlError::InvalidArgument`] for anything but CASCADE,
    /// SET NULL, NO ACTION, RESTRICT and SET DEFAULT.
    pub fn foreign_key_referential_action_sql(&self, action: &str) -> Result<&'static str> {
        action.parse().map(ReferentialAction::as_sql)
    }

    /// The boolean literal for `value`.
    #[must_use]
    pub const fn boolean_literal_sql(&self, value: bool) -> &'static str {
        if value {
            self.spec.boolean_literals.0
        } else {
            self.spec.boolean_literals.1
        }
    }

    /// Expression for the current date and time.
    #[must_use]
    pub const fn current_timestamp_sql(&self) -> &'static str {
        self.spec.current_timestamp
    }

    /// Expression for the current date.
    #[must_use]
    pub const fn current_date_sql(&self) -> &'static str {
        self.spec.current_date
    }

    /// Expression for the current time.
    #[must_use]
    pub const fn current_time_sql(&self) -> &'static str {
        self.spec.current_time
    }

    /// Whether `WHERE` predicates on indexes are emitted.
    #[must_use]
    pub const fn supports_partial_indexes(&self) -> bool {
        self.spec.supports_partial_indexes
    }

    /// Whether indexes can be declared inside CREATE TABLE.
    #[must_use]
    pub const fn supports_inline_index_declarations(&self) -> bool {
        self.spec.supports_inline_indexes
    }

    /// Whether foreign keys are declared inside CREATE TABLE.
    #[must_use]
    pub const fn supports_inline_foreign_keys(&self) -> bool {
        self.spec.inline_foreign_keys
    }

    pub(crate) fn unsupported(&self, operation: impl Into<String>) -> DdlError {
        DdlError::unsupported(operation, self.spec.name)
    }
}
