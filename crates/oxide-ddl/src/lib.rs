//! Dialect-aware DDL generation for Rust.
//!
//! `oxide-ddl` turns a dialect-neutral description of a table, or of the
//! difference between two versions of a table, into the exact SQL statements
//! a database needs:
//! - Identifiers are quoted only where required (reserved words, special
//!   characters, explicitly delimited names)
//! - Types are declared per dialect, with a per-platform alias registry
//! - ALTER TABLE statements follow a fixed, dependency-safe order
//!
//! # Architecture
//!
//! - **Schema** - `Table`, `Column`, `Index`, `UniqueConstraint`,
//!   `ForeignKeyConstraint`
//! - **Diff** - `TableDiff` and `ColumnDiff`, produced by an external
//!   comparator or by hand
//! - **Platform** - SQL generation for MySQL, PostgreSQL, SQLite and
//!   SQL Server, driven by static dialect descriptors
//! - **Events** - listener hooks that can append statements
//!
//! # Example
//!
//! ```rust
//! use oxide_ddl::prelude::*;
//!
//! let platform = Platform::postgresql();
//!
//! let diff = TableDiff::new("users")
//!     .remove_column(Column::new("foo", TypeKind::Integer))
//!     .add_column(Column::new("quota", TypeKind::Integer).nullable())
//!     .rename_to("userlist");
//!
//! let sql = platform.alter_table_sql(&diff).unwrap();
//! assert_eq!(
//!     sql,
//!     vec![
//!         "ALTER TABLE users DROP COLUMN foo",
//!         "ALTER TABLE users ADD quota INT DEFAULT NULL",
//!         "ALTER TABLE users RENAME TO userlist",
//!     ]
//! );
//! ```
//!
//! # CLI Usage
//!
//! ```bash
//! # Print CREATE TABLE statements for a JSON table description
//! oxide-ddl --platform postgresql create-table users.json
//!
//! # Print ALTER TABLE statements for a JSON diff
//! oxide-ddl --platform mysql alter-table users-diff.json
//!
//! # Check whether a word is reserved
//! oxide-ddl --platform sqlserver keywords --check user
//! ```

pub mod config;
pub mod diff;
pub mod error;
pub mod events;
pub mod identifier;
pub mod keywords;
pub mod platform;
pub mod schema;
pub mod types;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::EngineConfig;
    pub use crate::diff::{ColumnDiff, ColumnProperty, TableDiff};
    pub use crate::error::{DdlError, Result};
    pub use crate::events::{HookPhase, SchemaEvent, SchemaListener};
    pub use crate::identifier::{unquote_identifier, Identifier};
    pub use crate::platform::{Platform, PlatformKind};
    pub use crate::schema::{
        Column, DefaultValue, ForeignKeyConstraint, Index, ReferentialAction, Table,
        UniqueConstraint,
    };
    pub use crate::types::{TypeKind, TypeOptions};
}
