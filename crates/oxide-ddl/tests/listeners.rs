//! Listener hooks around CREATE and ALTER generation.

mod common;

use common::{test_table, Recorder};
use oxide_ddl::prelude::*;

#[test]
fn test_create_table_hook_placement() {
    let mut platform = Platform::mysql();
    let (recorder, seen) = Recorder::new();
    platform.add_listener(recorder);

    let sql = platform.create_table_sql(&test_table()).unwrap();
    assert_eq!(
        sql,
        vec![
            "-- Before create_table",
            "-- Before create_table_column",
            "-- Before create_table_column",
            "CREATE TABLE test (id INT AUTO_INCREMENT NOT NULL, \
             test VARCHAR(255) DEFAULT NULL, PRIMARY KEY(id))",
            "-- After create_table_column",
            "-- After create_table_column",
            "-- After create_table",
        ]
    );
    assert_eq!(seen.lock().unwrap().len(), 6);
}

#[test]
fn test_alter_table_hook_placement() {
    let mut platform = Platform::postgresql();
    let (recorder, _) = Recorder::new();
    platform.add_listener(recorder);

    let diff = TableDiff::new("users")
        .remove_column(Column::new("foo", TypeKind::Integer))
        .add_column(Column::new("quota", TypeKind::Integer).nullable());
    assert_eq!(
        platform.alter_table_sql(&diff).unwrap(),
        vec![
            "-- Before alter_table",
            "-- Before alter_table_remove_column",
            "ALTER TABLE users DROP COLUMN foo",
            "-- After alter_table_remove_column",
            "-- Before alter_table_add_column",
            "ALTER TABLE users ADD quota INT DEFAULT NULL",
            "-- After alter_table_add_column",
            "-- After alter_table",
        ]
    );
}

#[test]
fn test_listeners_see_the_schema_objects() {
    let mut platform = Platform::postgresql();
    platform.add_listener(
        |phase: HookPhase, event: &SchemaEvent<'_>, sql: &mut Vec<String>| {
            if let (HookPhase::After, SchemaEvent::AlterTableRenameColumn { old_name, column, .. }) =
                (phase, event)
            {
                sql.push(format!(
                    "UPDATE audit SET field = '{}' WHERE field = '{old_name}'",
                    column.name.name()
                ));
            }
        },
    );

    let diff = TableDiff::new("users")
        .rename_column("mail", Column::new("email", TypeKind::String).length(100));
    assert_eq!(
        platform.alter_table_sql(&diff).unwrap(),
        vec![
            "ALTER TABLE users RENAME COLUMN mail TO email",
            "UPDATE audit SET field = 'email' WHERE field = 'mail'",
        ]
    );
}

#[test]
fn test_failed_generation_returns_no_listener_output() {
    let mut platform = Platform::sqlite();
    let (recorder, _) = Recorder::new();
    platform.add_listener(recorder);

    let from = Column::new("a", TypeKind::Integer);
    let diff = TableDiff::new("t").change_column(ColumnDiff::between(&from, &from.clone().nullable()));
    assert!(platform.alter_table_sql(&diff).is_err());
}

#[test]
fn test_empty_diff_fires_no_hooks() {
    let mut platform = Platform::mysql();
    let (recorder, seen) = Recorder::new();
    platform.add_listener(recorder);

    assert!(platform.alter_table_sql(&TableDiff::new("t")).unwrap().is_empty());
    assert!(seen.lock().unwrap().is_empty());
}
