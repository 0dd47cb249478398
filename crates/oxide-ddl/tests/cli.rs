//! End-to-end runs of the `oxide-ddl` binary.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn oxide_ddl(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_oxide-ddl"))
        .args(args)
        .env_remove("OXIDE_DDL_PLATFORM")
        .env_remove("OXIDE_DDL_CONFIG")
        .output()
        .expect("failed to run oxide-ddl")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn write(dir: &TempDir, name: &str, contents: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path_str(&path)
}

fn path_str(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[test]
fn test_create_table() {
    let dir = TempDir::new().unwrap();
    let file = write(
        &dir,
        "test.json",
        r#"{
            "name": "test",
            "columns": [
                {"name": "id", "type": "int", "autoincrement": true},
                {"name": "test", "type": "varchar", "length": 255, "notnull": false}
            ],
            "primary_key": ["id"]
        }"#,
    );

    let output = oxide_ddl(&["--platform", "mysql", "create-table", &file]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "CREATE TABLE test (id INT AUTO_INCREMENT NOT NULL, \
         test VARCHAR(255) DEFAULT NULL, PRIMARY KEY(id));\n"
    );
}

#[test]
fn test_alter_table() {
    let dir = TempDir::new().unwrap();
    let file = write(
        &dir,
        "diff.json",
        r#"{
            "name": "users",
            "new_name": "userlist",
            "removed_columns": {"foo": {"name": "foo", "type": "integer"}},
            "added_columns": {"quota": {"name": "quota", "type": "integer", "notnull": false}}
        }"#,
    );

    let output = oxide_ddl(&["alter-table", &file]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "ALTER TABLE users DROP COLUMN foo;\n\
         ALTER TABLE users ADD quota INT DEFAULT NULL;\n\
         ALTER TABLE users RENAME TO userlist;\n"
    );
}

#[test]
fn test_config_type_mappings() {
    let dir = TempDir::new().unwrap();
    let config = write(
        &dir,
        "config.json",
        r#"{"platform": "postgresql", "type_mappings": {"citext": "text"}}"#,
    );

    let output = oxide_ddl(&["--config", &config, "type-decl", "citext"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "TEXT\n");
}

#[test]
fn test_unknown_type_fails() {
    let output = oxide_ddl(&["type-decl", "hstore"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("hstore"));
}

#[test]
fn test_quote() {
    let output = oxide_ddl(&["--platform", "sqlserver", "quote", "app.user"]);
    assert_eq!(stdout(&output), "[app].[user]\n");

    let output = oxide_ddl(&["--platform", "postgresql", "quote", "--if-needed", "app.user"]);
    assert_eq!(stdout(&output), "app.\"user\"\n");
}

#[test]
fn test_keyword_check_exit_status() {
    let reserved = oxide_ddl(&["--platform", "postgresql", "keywords", "--check", "user"]);
    assert!(!reserved.status.success());

    let plain = oxide_ddl(&["--platform", "postgresql", "keywords", "--check", "quota"]);
    assert!(plain.status.success());
}

#[test]
fn test_truncate_cascade() {
    let output = oxide_ddl(&["truncate-table", "--cascade", "users"]);
    assert_eq!(stdout(&output), "TRUNCATE users CASCADE;\n");
}

#[test]
fn test_cache_key() {
    let output = oxide_ddl(&[
        "cache-key",
        "SELECT * FROM users WHERE id = ?",
        "--params",
        "[1]",
        "--types",
        r#"["integer"]"#,
        "--connection",
        r#"{"host": "localhost", "password": "secret"}"#,
    ]);
    assert!(output.status.success());

    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].len(), 64);
    assert!(lines[1].starts_with(
        "query=SELECT * FROM users WHERE id = ?&params=[1]&types=[\"integer\"]&connectionParams="
    ));
    assert!(!out.contains("secret"));
}

#[test]
fn test_cache_key_explicit() {
    let output = oxide_ddl(&["cache-key", "SELECT 1", "--key", "my-key"]);
    assert_eq!(stdout(&output).lines().next(), Some("my-key"));
}
