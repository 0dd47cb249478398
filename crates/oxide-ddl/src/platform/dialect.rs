//! Dialect capability descriptors.
//!
//! A [`DialectSpec`] is plain data: quote characters, reserved words, type
//! keywords and a handful of capability switches. The generation code in the
//! parent module branches on these values; adding a dialect means adding a
//! new descriptor, not new control flow.

use crate::keywords::KeywordList;
use crate::types::TypeKind;

/// Keywords used to declare each [`TypeKind`].
#[derive(Debug)]
pub struct TypeKeywords {
    pub small_int: &'static str,
    pub integer: &'static str,
    pub big_int: &'static str,
    pub boolean: &'static str,
    /// Double-precision keyword; precision and scale are never emitted.
    pub float: &'static str,
    pub decimal: &'static str,
    pub varchar: &'static str,
    pub char: &'static str,
    /// Length used when a string declaration has none.
    pub default_string_length: Option<u32>,
    pub varbinary: &'static str,
    pub binary: &'static str,
    /// Length used when a binary declaration has none.
    pub default_binary_length: Option<u32>,
    /// Whether binary keywords take a length clause at all.
    pub binary_takes_length: bool,
    pub clob: &'static str,
    pub blob: &'static str,
    /// Native JSON keyword; `None` degrades to [`Self::clob`].
    pub json: Option<&'static str>,
    /// Native UUID keyword; `None` makes GUID declarations unsupported.
    pub guid: Option<&'static str>,
    pub date: &'static str,
    pub datetime: &'static str,
    pub datetimetz: &'static str,
    pub time: &'static str,
    /// Suffix for unsigned integers, where the dialect has them.
    pub unsigned: Option<&'static str>,
}

/// How auto-increment is declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoIncrement {
    /// A keyword appended to the integer type (`AUTO_INCREMENT`, `IDENTITY`).
    Suffix(&'static str),
    /// `INTEGER PRIMARY KEY AUTOINCREMENT` on the column itself; the table
    /// level primary key clause is omitted.
    InlinePrimaryKey,
}

/// How an existing column definition is altered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnAlter {
    /// `ALTER TABLE t CHANGE old new <declaration>` for every change.
    Change,
    /// `ALTER COLUMN c TYPE ...` for type changes and separate light
    /// statements for nullability, default and comment.
    AlterType,
    /// `ALTER COLUMN c <declaration>` plus named default constraints.
    AlterColumn,
    /// Columns cannot be altered in place.
    Unsupported,
}

/// How columns and tables are renamed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rename {
    /// `ALTER TABLE ... RENAME [COLUMN] ... TO ...`.
    AlterTable,
    /// `EXEC sp_rename ...`.
    StoredProcedure,
}

/// How an index is renamed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexRename {
    /// `ALTER INDEX old RENAME TO new`.
    AlterIndex,
    /// `ALTER TABLE t RENAME INDEX old TO new`.
    AlterTable,
    /// Drop the old index and create the new definition.
    DropCreate,
}

/// How an index is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropIndex {
    /// `DROP INDEX name`, schema-qualified like its table.
    Standalone,
    /// `DROP INDEX name ON table`.
    OnTable,
}

/// How column comments are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comments {
    /// `COMMENT '...'` inside the column declaration.
    Inline,
    /// `COMMENT ON COLUMN t.c IS '...'` statements.
    CommentOn,
    /// `sp_addextendedproperty` calls.
    ExtendedProperty,
    /// Comments are dropped.
    Unsupported,
}

/// How a primary key is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropPrimaryKey {
    /// `ALTER TABLE t DROP PRIMARY KEY`.
    DropPrimaryKey,
    /// `ALTER TABLE t DROP CONSTRAINT <table>_pkey`.
    NamedConstraint,
    /// Not supported.
    Unsupported,
}

/// Everything that distinguishes one dialect from another.
#[derive(Debug)]
pub struct DialectSpec {
    pub name: &'static str,
    /// Opening and closing identifier delimiters.
    pub quote: (char, char),
    pub keywords: &'static KeywordList,
    pub types: TypeKeywords,
    /// Database type names seeded into every registry.
    pub type_mappings: &'static [(&'static str, TypeKind)],
    pub autoincrement: AutoIncrement,
    pub supports_partial_indexes: bool,
    pub supports_inline_indexes: bool,
    /// Index flags rendered as keywords after `CREATE [UNIQUE]`.
    pub index_flags: &'static [&'static str],
    /// Foreign keys are declared inside CREATE TABLE.
    pub inline_foreign_keys: bool,
    /// Foreign keys can be added and dropped with ALTER TABLE.
    pub alter_foreign_keys: bool,
    /// Clause dropping a foreign key (`DROP FOREIGN KEY`, `DROP CONSTRAINT`).
    pub drop_foreign_key: &'static str,
    /// Foreign keys accept `DEFERRABLE` and `INITIALLY DEFERRED`.
    pub deferrable_constraints: bool,
    /// Unique constraints added after creation become unique indexes.
    pub unique_constraints_as_indexes: bool,
    /// Unique constraints are dropped like indexes.
    pub drop_unique_as_index: bool,
    /// Column defaults are named constraints (`DF_<table>_<column>`).
    pub named_default_constraints: bool,
    pub column_alter: ColumnAlter,
    pub rename: Rename,
    pub index_rename: IndexRename,
    pub drop_index: DropIndex,
    pub drop_primary_key: DropPrimaryKey,
    pub comments: Comments,
    /// Keyword introducing an added column (`ADD` or `ADD COLUMN`).
    pub add_column: &'static str,
    /// Statement prefix truncating a table.
    pub truncate: &'static str,
    pub supports_truncate_cascade: bool,
    /// MySQL table options (`ENGINE`, `CHARSET`, `COLLATE`).
    pub supports_table_options: bool,
    /// Backslashes are escapes inside string literals.
    pub backslash_escapes: bool,
    pub boolean_literals: (&'static str, &'static str),
    pub current_timestamp: &'static str,
    pub current_date: &'static str,
    pub current_time: &'static str,
    pub datetime_format: &'static str,
    pub date_format: &'static str,
    pub time_format: &'static str,
}
