//! CREATE TABLE generation across dialects.

mod common;

use common::{all_platforms, test_table};
use oxide_ddl::prelude::*;

#[test]
fn test_create_table_on_every_platform() {
    for platform in all_platforms() {
        let sql = platform.create_table_sql(&test_table()).unwrap();
        assert_eq!(sql.len(), 1, "{}: {sql:?}", platform.name());

        let create = &sql[0];
        assert!(create.starts_with("CREATE TABLE test ("), "{create}");
        let declarations = platform
            .column_declaration_list_sql(&test_table().columns)
            .unwrap();
        let test_column = platform
            .column_declaration_sql(&test_table().columns[1])
            .unwrap();
        assert!(create.contains(&test_column), "{create}");
        if platform.kind() == PlatformKind::Sqlite {
            assert!(create.contains("id INTEGER PRIMARY KEY AUTOINCREMENT"), "{create}");
        } else {
            assert!(create.contains(&declarations), "{create}");
            assert!(create.contains("PRIMARY KEY(id)"), "{create}");
        }
    }
}

#[test]
fn test_create_table_exact_text() {
    assert_eq!(
        Platform::mysql().create_table_sql(&test_table()).unwrap(),
        vec![
            "CREATE TABLE test (id INT AUTO_INCREMENT NOT NULL, \
             test VARCHAR(255) DEFAULT NULL, PRIMARY KEY(id))"
        ]
    );
    assert_eq!(
        Platform::postgresql().create_table_sql(&test_table()).unwrap(),
        vec![
            "CREATE TABLE test (id INT GENERATED BY DEFAULT AS IDENTITY NOT NULL, \
             test VARCHAR(255) DEFAULT NULL, PRIMARY KEY(id))"
        ]
    );
}

#[test]
fn test_create_table_without_columns() {
    for platform in all_platforms() {
        assert!(matches!(
            platform.create_table_sql(&Table::new("empty")),
            Err(DdlError::InvalidArgument(_))
        ));
    }
}

#[test]
fn test_reserved_table_name_is_quoted() {
    let table = Table::new("order").column(Column::new("id", TypeKind::Integer));
    assert_eq!(
        Platform::mysql().create_table_sql(&table).unwrap(),
        vec!["CREATE TABLE `order` (id INT NOT NULL)"]
    );
    assert_eq!(
        Platform::sqlserver().create_table_sql(&table).unwrap(),
        vec!["CREATE TABLE [order] (id INT NOT NULL)"]
    );
}

#[test]
fn test_indexes_inline_on_mysql_trailing_elsewhere() {
    let table = Table::new("users")
        .column(Column::new("id", TypeKind::Integer))
        .column(Column::new("email", TypeKind::String).length(100))
        .primary_key(["id"])
        .index(Index::new("idx_email", ["email"]));

    assert_eq!(
        Platform::mysql().create_table_sql(&table).unwrap(),
        vec![
            "CREATE TABLE users (id INT NOT NULL, email VARCHAR(100) NOT NULL, \
             PRIMARY KEY(id), INDEX idx_email (email))"
        ]
    );
    assert_eq!(
        Platform::postgresql().create_table_sql(&table).unwrap(),
        vec![
            "CREATE TABLE users (id INT NOT NULL, email VARCHAR(100) NOT NULL, PRIMARY KEY(id))",
            "CREATE INDEX idx_email ON users (email)",
        ]
    );
}

#[test]
fn test_partial_index_predicate_policy() {
    let index = Index::new("idx_active", ["email"]).where_clause("active = 1");
    let users = Identifier::new("users");
    for platform in all_platforms() {
        let sql = platform.create_index_sql(&index, &users).unwrap();
        assert_eq!(
            sql.contains("WHERE active = 1"),
            platform.supports_partial_indexes(),
            "{}: {sql}",
            platform.name()
        );
    }
}

#[test]
fn test_foreign_keys_inline_on_sqlite() {
    let table = Table::new("posts")
        .column(Column::new("id", TypeKind::Integer))
        .column(Column::new("author_id", TypeKind::Integer))
        .foreign_key(
            ForeignKeyConstraint::new("fk_author", ["author_id"], "users", ["id"])
                .on_delete("CASCADE"),
        );

    let sqlite = Platform::sqlite().create_table_sql(&table).unwrap();
    assert_eq!(sqlite.len(), 1);
    assert!(sqlite[0].contains(
        "CONSTRAINT fk_author FOREIGN KEY (author_id) REFERENCES users (id) ON DELETE CASCADE"
    ));

    let mysql = Platform::mysql().create_table_sql(&table).unwrap();
    assert_eq!(mysql.len(), 2);
    assert!(mysql[1].starts_with("ALTER TABLE posts ADD CONSTRAINT fk_author"));
}

#[test]
fn test_column_comments() {
    let table = Table::new("users").column(
        Column::new("email", TypeKind::String)
            .length(100)
            .comment("login"),
    );

    assert_eq!(
        Platform::mysql().create_table_sql(&table).unwrap(),
        vec!["CREATE TABLE users (email VARCHAR(100) NOT NULL COMMENT 'login')"]
    );
    assert_eq!(
        Platform::postgresql().create_table_sql(&table).unwrap(),
        vec![
            "CREATE TABLE users (email VARCHAR(100) NOT NULL)",
            "COMMENT ON COLUMN users.email IS 'login'",
        ]
    );
}

#[test]
fn test_sqlserver_named_default_constraint() {
    let table = Table::new("tickets")
        .column(Column::new("status", TypeKind::String).length(20).default("open"));
    assert_eq!(
        Platform::sqlserver().create_table_sql(&table).unwrap(),
        vec![
            "CREATE TABLE tickets (status NVARCHAR(20) CONSTRAINT DF_tickets_status \
             DEFAULT 'open' NOT NULL)"
        ]
    );
}

#[test]
fn test_float_ignores_precision_and_scale() {
    let options = TypeOptions::new().precision_scale(8, 2);
    for platform in all_platforms() {
        let plain = platform
            .type_declaration_sql(TypeKind::Float, &TypeOptions::new())
            .unwrap();
        assert_eq!(
            platform.type_declaration_sql(TypeKind::Float, &options).unwrap(),
            plain
        );
        assert!(!plain.contains('('));
    }
}

#[test]
fn test_decimal_defaults() {
    for platform in all_platforms() {
        let sql = platform
            .type_declaration_sql(TypeKind::Decimal, &TypeOptions::new())
            .unwrap();
        assert!(sql.ends_with("(10, 0)"), "{sql}");
    }
}

#[test]
fn test_guid_unsupported_on_sqlite() {
    let table = Table::new("t").column(Column::new("uid", TypeKind::Guid));
    assert!(matches!(
        Platform::sqlite().create_table_sql(&table),
        Err(DdlError::UnsupportedOperation { platform: "sqlite", .. })
    ));
    assert_eq!(
        Platform::postgresql().create_table_sql(&table).unwrap(),
        vec!["CREATE TABLE t (uid UUID NOT NULL)"]
    );
}

#[test]
fn test_sqlite_autoincrement_outside_primary_key() {
    let table = Table::new("t")
        .column(Column::new("seq", TypeKind::Integer).autoincrement())
        .column(Column::new("code", TypeKind::String).length(5))
        .primary_key(["code"]);
    match Platform::sqlite().create_table_sql(&table) {
        Err(DdlError::UnsupportedOperation { operation, platform }) => {
            assert_eq!(platform, "sqlite");
            assert!(operation.contains("AUTOINCREMENT on (seq)"), "{operation}");
            assert!(operation.contains("PRIMARY KEY(code)"), "{operation}");
            assert!(operation.contains("'t'"), "{operation}");
        }
        other => panic!("Expected UnsupportedOperation, got {other:?}"),
    }
    assert_eq!(
        Platform::mysql().create_table_sql(&table).unwrap(),
        vec!["CREATE TABLE t (seq INT AUTO_INCREMENT NOT NULL, code VARCHAR(5) NOT NULL, PRIMARY KEY(code))"]
    );
}

#[test]
fn test_sqlite_autoincrement_in_composite_primary_key() {
    let table = Table::new("accounts")
        .column(Column::new("tenant", TypeKind::Integer))
        .column(Column::new("id", TypeKind::Integer).autoincrement())
        .primary_key(["tenant", "id"]);
    match Platform::sqlite().create_table_sql(&table) {
        Err(DdlError::UnsupportedOperation { operation, platform }) => {
            assert_eq!(platform, "sqlite");
            assert!(operation.contains("PRIMARY KEY(tenant, id)"), "{operation}");
            assert!(operation.contains("'accounts'"), "{operation}");
        }
        other => panic!("Expected UnsupportedOperation, got {other:?}"),
    }
}

#[test]
fn test_sqlite_autoincrement_matching_primary_key_is_inlined() {
    let sql = Platform::sqlite().create_table_sql(&test_table()).unwrap();
    assert_eq!(sql.len(), 1);
    assert!(sql[0].contains("id INTEGER PRIMARY KEY AUTOINCREMENT"), "{}", sql[0]);
    assert!(!sql[0].contains("PRIMARY KEY(id)"), "{}", sql[0]);
}
