//! MySQL.

use super::dialect::{
    AutoIncrement, ColumnAlter, Comments, DialectSpec, DropIndex, DropPrimaryKey, IndexRename,
    Rename, TypeKeywords,
};
use crate::keywords;
use crate::types::TypeKind;

pub(super) static SPEC: DialectSpec = DialectSpec {
    name: "mysql",
    quote: ('`', '`'),
    keywords: &keywords::MYSQL,
    types: TypeKeywords {
        small_int: "SMALLINT",
        integer: "INT",
        big_int: "BIGINT",
        boolean: "TINYINT(1)",
        float: "DOUBLE PRECISION",
        decimal: "NUMERIC",
        varchar: "VARCHAR",
        char: "CHAR",
        default_string_length: Some(255),
        varbinary: "VARBINARY",
        binary: "BINARY",
        default_binary_length: Some(255),
        binary_takes_length: true,
        clob: "LONGTEXT",
        blob: "LONGBLOB",
        json: Some("JSON"),
        guid: None,
        date: "DATE",
        datetime: "DATETIME",
        datetimetz: "DATETIME",
        time: "TIME",
        unsigned: Some(" UNSIGNED"),
    },
    type_mappings: &[
        ("tinyint", TypeKind::Boolean),
        ("smallint", TypeKind::SmallInt),
        ("mediumint", TypeKind::Integer),
        ("int", TypeKind::Integer),
        ("bigint", TypeKind::BigInt),
        ("numeric", TypeKind::Decimal),
        ("double", TypeKind::Float),
        ("real", TypeKind::Float),
        ("varchar", TypeKind::String),
        ("char", TypeKind::String),
        ("tinytext", TypeKind::Text),
        ("mediumtext", TypeKind::Text),
        ("longtext", TypeKind::Text),
        ("varbinary", TypeKind::Binary),
        ("tinyblob", TypeKind::Blob),
        ("mediumblob", TypeKind::Blob),
        ("longblob", TypeKind::Blob),
        ("timestamp", TypeKind::DateTime),
        ("year", TypeKind::Date),
    ],
    autoincrement: AutoIncrement::Suffix(" AUTO_INCREMENT"),
    supports_partial_indexes: false,
    supports_inline_indexes: true,
    index_flags: &["fulltext", "spatial"],
    inline_foreign_keys: false,
    alter_foreign_keys: true,
    drop_foreign_key: "DROP FOREIGN KEY",
    deferrable_constraints: false,
    unique_constraints_as_indexes: false,
    drop_unique_as_index: true,
    named_default_constraints: false,
    column_alter: ColumnAlter::Change,
    rename: Rename::AlterTable,
    index_rename: IndexRename::AlterTable,
    drop_index: DropIndex::OnTable,
    drop_primary_key: DropPrimaryKey::DropPrimaryKey,
    comments: Comments::Inline,
    add_column: "ADD",
    truncate: "TRUNCATE TABLE",
    supports_truncate_cascade: false,
    supports_table_options: true,
    backslash_escapes: true,
    boolean_literals: ("1", "0"),
    current_timestamp: "CURRENT_TIMESTAMP",
    current_date: "CURRENT_DATE",
    current_time: "CURRENT_TIME",
    datetime_format: "%Y-%m-%d %H:%M:%S",
    date_format: "%Y-%m-%d",
    time_format: "%H:%M:%S",
};
