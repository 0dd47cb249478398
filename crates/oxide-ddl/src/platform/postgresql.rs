//! PostgreSQL.

use super::dialect::{
    AutoIncrement, ColumnAlter, Comments, DialectSpec, DropIndex, DropPrimaryKey, IndexRename,
    Rename, TypeKeywords,
};
use crate::keywords;
use crate::types::TypeKind;

pub(super) static SPEC: DialectSpec = DialectSpec {
    name: "postgresql",
    quote: ('"', '"'),
    keywords: &keywords::POSTGRESQL,
    types: TypeKeywords {
        small_int: "SMALLINT",
        integer: "INT",
        big_int: "BIGINT",
        boolean: "BOOLEAN",
        float: "DOUBLE PRECISION",
        decimal: "NUMERIC",
        varchar: "VARCHAR",
        char: "CHAR",
        default_string_length: None,
        varbinary: "BYTEA",
        binary: "BYTEA",
        default_binary_length: None,
        binary_takes_length: false,
        clob: "TEXT",
        blob: "BYTEA",
        json: Some("JSONB"),
        guid: Some("UUID"),
        date: "DATE",
        datetime: "TIMESTAMP(0) WITHOUT TIME ZONE",
        datetimetz: "TIMESTAMP(0) WITH TIME ZONE",
        time: "TIME(0) WITHOUT TIME ZONE",
        unsigned: None,
    },
    type_mappings: &[
        ("int2", TypeKind::SmallInt),
        ("int", TypeKind::Integer),
        ("int4", TypeKind::Integer),
        ("serial", TypeKind::Integer),
        ("int8", TypeKind::BigInt),
        ("bigserial", TypeKind::BigInt),
        ("bool", TypeKind::Boolean),
        ("numeric", TypeKind::Decimal),
        ("money", TypeKind::Decimal),
        ("float8", TypeKind::Float),
        ("double precision", TypeKind::Float),
        ("varchar", TypeKind::String),
        ("character varying", TypeKind::String),
        ("bpchar", TypeKind::String),
        ("bytea", TypeKind::Blob),
        ("uuid", TypeKind::Guid),
        ("jsonb", TypeKind::Json),
        ("timestamp", TypeKind::DateTime),
        ("timestamptz", TypeKind::DateTimeTz),
        ("timetz", TypeKind::Time),
    ],
    autoincrement: AutoIncrement::Suffix(" GENERATED BY DEFAULT AS IDENTITY"),
    supports_partial_indexes: true,
    supports_inline_indexes: false,
    index_flags: &[],
    inline_foreign_keys: false,
    alter_foreign_keys: true,
    drop_foreign_key: "DROP CONSTRAINT",
    deferrable_constraints: true,
    unique_constraints_as_indexes: false,
    drop_unique_as_index: false,
    named_default_constraints: false,
    column_alter: ColumnAlter::AlterType,
    rename: Rename::AlterTable,
    index_rename: IndexRename::AlterIndex,
    drop_index: DropIndex::Standalone,
    drop_primary_key: DropPrimaryKey::NamedConstraint,
    comments: Comments::CommentOn,
    add_column: "ADD",
    truncate: "TRUNCATE",
    supports_truncate_cascade: true,
    supports_table_options: false,
    backslash_escapes: false,
    boolean_literals: ("true", "false"),
    current_timestamp: "CURRENT_TIMESTAMP",
    current_date: "CURRENT_DATE",
    current_time: "CURRENT_TIME",
    datetime_format: "%Y-%m-%d %H:%M:%S",
    date_format: "%Y-%m-%d",
    time_format: "%H:%M:%S",
};
