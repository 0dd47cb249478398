//! Engine configuration and JSON input loading.

use std::collections::BTreeMap;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DdlError, Result};
use crate::platform::{Platform, PlatformKind};

/// Settings used to build a [`Platform`].
///
/// ```json
/// {
///     "platform": "postgresql",
///     "type_mappings": { "citext": "text", "ltree": "string" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Target dialect.
    pub platform: PlatformKind,
    /// Extra type aliases, alias to kind name.
    #[serde(default)]
    pub type_mappings: BTreeMap<String, String>,
}

impl EngineConfig {
    /// Creates a configuration without extra type mappings.
    #[must_use]
    pub fn new(platform: PlatformKind) -> Self {
        Self {
            platform,
            type_mappings: BTreeMap::new(),
        }
    }

    /// Adds a type alias.
    #[must_use]
    pub fn type_mapping(mut self, alias: impl Into<String>, kind: impl Into<String>) -> Self {
        self.type_mappings.insert(alias.into(), kind.into());
        self
    }

    /// Reads a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`DdlError::InvalidArgument`] if the file cannot be read and
    /// [`DdlError::Serialization`] if it is not a valid configuration.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|err| {
            DdlError::invalid(format!("Cannot read config '{}': {err}", path.display()))
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Builds the platform and registers every type mapping.
    ///
    /// # Errors
    ///
    /// Returns [`DdlError::UnknownType`] if a mapping names an unknown kind.
    pub fn build(&self) -> Result<Platform> {
        let platform = Platform::new(self.platform);
        for (alias, kind) in &self.type_mappings {
            platform.register_type_mapping(alias, kind)?;
        }
        Ok(platform)
    }
}

/// Parses a schema or diff document, resolving the `"type"` of every column
/// through the platform's type registry first.
///
/// This lets documents use database type names (`varchar`, `int4`, or any
/// registered alias) wherever a column kind is expected. Columns are the
/// entries of a table's `columns`, the values of a diff's `added_columns`,
/// `removed_columns` and `renamed_columns`, and the `column` and
/// `from_column` of each `changed_columns` entry. Other `"type"` keys, such
/// as index options, are left alone.
///
/// # Errors
///
/// Returns [`DdlError::UnknownType`] for unresolvable type names and
/// [`DdlError::Serialization`] for malformed documents.
pub fn parse_document<T: DeserializeOwned>(platform: &Platform, json: &str) -> Result<T> {
    let mut value: Value = serde_json::from_str(json)?;
    resolve_types(platform, &mut value)?;
    Ok(serde_json::from_value(value)?)
}

fn resolve_types(platform: &Platform, document: &mut Value) -> Result<()> {
    let Value::Object(map) = document else {
        return Ok(());
    };
    for (key, value) in map.iter_mut() {
        match (key.as_str(), value) {
            ("columns", Value::Array(columns)) => {
                for column in columns {
                    resolve_column_type(platform, column)?;
                }
            }
            ("added_columns" | "removed_columns" | "renamed_columns", Value::Object(columns)) => {
                for column in columns.values_mut() {
                    resolve_column_type(platform, column)?;
                }
            }
            ("changed_columns", Value::Object(diffs)) => {
                for diff in diffs.values_mut() {
                    for field in ["column", "from_column"] {
                        if let Some(column) = diff.get_mut(field) {
                            resolve_column_type(platform, column)?;
                        }
                    }
                }
            }
            _ => {}
        }
    }
    Ok(())
}

fn resolve_column_type(platform: &Platform, column: &mut Value) -> Result<()> {
    if let Some(Value::String(alias)) = column.get_mut("type") {
        *alias = platform.resolve_type(alias)?.name().to_string();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::TableDiff;
    use crate::schema::Table;
    use crate::types::TypeKind;

    #[test]
    fn test_config_from_json() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"platform": "postgres", "type_mappings": {"citext": "text"}}"#)
                .unwrap();
        assert_eq!(config.platform, PlatformKind::PostgreSql);

        let platform = config.build().unwrap();
        assert_eq!(platform.resolve_type("citext").unwrap(), TypeKind::Text);
    }

    #[test]
    fn test_build_rejects_unknown_kind() {
        let config = EngineConfig::new(PlatformKind::MySql).type_mapping("money", "currency");
        assert!(matches!(
            config.build(),
            Err(DdlError::UnknownType { name }) if name == "currency"
        ));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"platform": "sqlite"}"#).unwrap();

        let config = EngineConfig::from_file(&path).unwrap();
        assert_eq!(config, EngineConfig::new(PlatformKind::Sqlite));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            EngineConfig::from_file("/nonexistent/oxide-ddl.json"),
            Err(DdlError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_parse_document_resolves_aliases() {
        let platform = Platform::postgresql();
        platform.register_type_mapping("citext", "text").unwrap();
        let json = r#"{
            "name": "users",
            "columns": [
                {"name": "id", "type": "int4"},
                {"name": "email", "type": "CITEXT"},
                {"name": "age", "type": "smallint"}
            ]
        }"#;
        let table: Table = parse_document(&platform, json).unwrap();
        let kinds: Vec<TypeKind> = table.columns.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![TypeKind::Integer, TypeKind::Text, TypeKind::SmallInt]
        );
    }

    #[test]
    fn test_parse_document_unknown_type() {
        let json = r#"{"name": "t", "columns": [{"name": "a", "type": "hstore"}]}"#;
        assert!(matches!(
            parse_document::<Table>(&Platform::mysql(), json),
            Err(DdlError::UnknownType { name }) if name == "hstore"
        ));
    }

    #[test]
    fn test_parse_document_keeps_index_option_type() {
        let json = r#"{
            "name": "users",
            "columns": [{"name": "email", "type": "varchar", "length": 100}],
            "indexes": [
                {"name": "idx_email", "columns": ["email"], "options": {"type": "btree"}}
            ]
        }"#;
        let table: Table = parse_document(&Platform::postgresql(), json).unwrap();
        assert_eq!(table.columns[0].kind, TypeKind::String);
        assert_eq!(table.indexes[0].options["type"], "btree");
    }

    #[test]
    fn test_parse_document_resolves_diff_columns() {
        let json = r#"{
            "name": "users",
            "added_columns": {"quota": {"name": "quota", "type": "int4"}},
            "renamed_columns": {"mail": {"name": "email", "type": "varchar"}},
            "changed_columns": {
                "bar": {
                    "old_column_name": "bar",
                    "column": {"name": "bar", "type": "text"},
                    "from_column": {"name": "bar", "type": "int8"},
                    "changed_properties": ["type"]
                }
            },
            "added_indexes": [
                {"name": "idx_bar", "columns": ["bar"], "options": {"type": "hash"}}
            ]
        }"#;
        let diff: TableDiff = parse_document(&Platform::postgresql(), json).unwrap();
        assert_eq!(diff.added_columns["quota"].kind, TypeKind::Integer);
        assert_eq!(diff.renamed_columns["mail"].kind, TypeKind::String);
        let bar = &diff.changed_columns["bar"];
        assert_eq!(bar.column.kind, TypeKind::Text);
        assert_eq!(bar.from_column.as_ref().map(|c| c.kind), Some(TypeKind::BigInt));
        assert_eq!(diff.added_indexes[0].options["type"], "hash");
    }
}
