//! Microsoft SQL Server.

use super::dialect::{
    AutoIncrement, ColumnAlter, Comments, DialectSpec, DropIndex, DropPrimaryKey, IndexRename,
    Rename, TypeKeywords,
};
use crate::keywords;
use crate::types::TypeKind;

pub(super) static SPEC: DialectSpec = DialectSpec {
    name: "sqlserver",
    quote: ('[', ']'),
    keywords: &keywords::SQLSERVER,
    types: TypeKeywords {
        small_int: "SMALLINT",
        integer: "INT",
        big_int: "BIGINT",
        boolean: "BIT",
        float: "FLOAT",
        decimal: "NUMERIC",
        varchar: "NVARCHAR",
        char: "NCHAR",
        default_string_length: Some(255),
        varbinary: "VARBINARY",
        binary: "BINARY",
        default_binary_length: Some(255),
        binary_takes_length: true,
        clob: "VARCHAR(MAX)",
        blob: "VARBINARY(MAX)",
        json: None,
        guid: Some("UNIQUEIDENTIFIER"),
        date: "DATE",
        datetime: "DATETIME2(6)",
        datetimetz: "DATETIMEOFFSET(6)",
        time: "TIME(0)",
        unsigned: None,
    },
    type_mappings: &[
        ("int", TypeKind::Integer),
        ("tinyint", TypeKind::SmallInt),
        ("bit", TypeKind::Boolean),
        ("numeric", TypeKind::Decimal),
        ("money", TypeKind::Decimal),
        ("real", TypeKind::Float),
        ("nvarchar", TypeKind::String),
        ("varchar", TypeKind::String),
        ("nchar", TypeKind::String),
        ("char", TypeKind::String),
        ("ntext", TypeKind::Text),
        ("varbinary", TypeKind::Binary),
        ("image", TypeKind::Blob),
        ("uniqueidentifier", TypeKind::Guid),
        ("datetime2", TypeKind::DateTime),
        ("smalldatetime", TypeKind::DateTime),
        ("datetimeoffset", TypeKind::DateTimeTz),
    ],
    autoincrement: AutoIncrement::Suffix(" IDENTITY"),
    supports_partial_indexes: true,
    supports_inline_indexes: false,
    index_flags: &["clustered", "nonclustered"],
    inline_foreign_keys: false,
    alter_foreign_keys: true,
    drop_foreign_key: "DROP CONSTRAINT",
    deferrable_constraints: false,
    unique_constraints_as_indexes: false,
    drop_unique_as_index: false,
    named_default_constraints: true,
    column_alter: ColumnAlter::AlterColumn,
    rename: Rename::StoredProcedure,
    index_rename: IndexRename::DropCreate,
    drop_index: DropIndex::OnTable,
    drop_primary_key: DropPrimaryKey::Unsupported,
    comments: Comments::ExtendedProperty,
    add_column: "ADD",
    truncate: "TRUNCATE TABLE",
    supports_truncate_cascade: false,
    supports_table_options: false,
    backslash_escapes: false,
    boolean_literals: ("1", "0"),
    current_timestamp: "CURRENT_TIMESTAMP",
    current_date: "CAST(CURRENT_TIMESTAMP AS DATE)",
    current_time: "CAST(CURRENT_TIMESTAMP AS TIME)",
    datetime_format: "%Y-%m-%d %H:%M:%S%.6f",
    date_format: "%Y-%m-%d",
    time_format: "%H:%M:%S",
};
