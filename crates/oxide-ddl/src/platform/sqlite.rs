//! SQLite.
//!
//! SQLite cannot alter column definitions or foreign keys in place; those
//! diffs are rejected instead of being rebuilt.

use super::dialect::{
    AutoIncrement, ColumnAlter, Comments, DialectSpec, DropIndex, DropPrimaryKey, IndexRename,
    Rename, TypeKeywords,
};
use crate::keywords;
use crate::types::TypeKind;

pub(super) static SPEC: DialectSpec = DialectSpec {
    name: "sqlite",
    quote: ('"', '"'),
    keywords: &keywords::SQLITE,
    types: TypeKeywords {
        small_int: "SMALLINT",
        integer: "INTEGER",
        big_int: "BIGINT",
        boolean: "BOOLEAN",
        float: "DOUBLE PRECISION",
        decimal: "NUMERIC",
        varchar: "VARCHAR",
        char: "CHAR",
        default_string_length: None,
        varbinary: "BLOB",
        binary: "BLOB",
        default_binary_length: None,
        binary_takes_length: false,
        clob: "CLOB",
        blob: "BLOB",
        json: None,
        guid: None,
        date: "DATE",
        datetime: "DATETIME",
        datetimetz: "DATETIME",
        time: "TIME",
        unsigned: None,
    },
    type_mappings: &[
        ("int", TypeKind::Integer),
        ("tinyint", TypeKind::Boolean),
        ("mediumint", TypeKind::Integer),
        ("numeric", TypeKind::Decimal),
        ("real", TypeKind::Float),
        ("double", TypeKind::Float),
        ("varchar", TypeKind::String),
        ("char", TypeKind::String),
        ("clob", TypeKind::Text),
        ("timestamp", TypeKind::DateTime),
    ],
    autoincrement: AutoIncrement::InlinePrimaryKey,
    supports_partial_indexes: true,
    supports_inline_indexes: false,
    index_flags: &[],
    inline_foreign_keys: true,
    alter_foreign_keys: false,
    drop_foreign_key: "DROP CONSTRAINT",
    deferrable_constraints: true,
    unique_constraints_as_indexes: true,
    drop_unique_as_index: true,
    named_default_constraints: false,
    column_alter: ColumnAlter::Unsupported,
    rename: Rename::AlterTable,
    index_rename: IndexRename::DropCreate,
    drop_index: DropIndex::Standalone,
    drop_primary_key: DropPrimaryKey::Unsupported,
    comments: Comments::Unsupported,
    add_column: "ADD COLUMN",
    truncate: "DELETE FROM",
    supports_truncate_cascade: false,
    supports_table_options: false,
    backslash_escapes: false,
    boolean_literals: ("1", "0"),
    current_timestamp: "CURRENT_TIMESTAMP",
    current_date: "CURRENT_DATE",
    current_time: "CURRENT_TIME",
    datetime_format: "%Y-%m-%d %H:%M:%S",
    date_format: "%Y-%m-%d",
    time_format: "%H:%M:%S",
};
