//! Dialect-neutral schema model.
//!
//! These types describe what a table should look like. Platforms only read
//! them; every builder method consumes and returns the value.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{DdlError, Result};
use crate::identifier::Identifier;
use crate::types::{TypeKind, TypeOptions};

const fn default_true() -> bool {
    true
}

/// Default value of a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultValue {
    /// NULL.
    Null,
    /// Boolean literal, rendered with the platform's boolean syntax.
    Bool(bool),
    /// Integer literal.
    Integer(i64),
    /// Floating point literal.
    Float(f64),
    /// Text; quoted for textual columns, compared against the platform's
    /// current date/time expressions for temporal columns.
    Text(String),
    /// Date and time literal.
    DateTime(NaiveDateTime),
    /// Date literal.
    Date(NaiveDate),
    /// Time literal.
    Time(NaiveTime),
    /// Raw SQL expression, emitted verbatim.
    Expression(String),
}

impl From<bool> for DefaultValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for DefaultValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for DefaultValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for DefaultValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for DefaultValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Schema definition for a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Column name.
    pub name: Identifier,
    /// Semantic type.
    #[serde(rename = "type")]
    pub kind: TypeKind,
    /// Length for string and binary columns.
    #[serde(default)]
    pub length: Option<u32>,
    /// Precision for decimal columns.
    #[serde(default)]
    pub precision: Option<u32>,
    /// Scale for decimal columns.
    #[serde(default)]
    pub scale: Option<u32>,
    /// Fixed-width string or binary.
    #[serde(default)]
    pub fixed: bool,
    /// Whether NULL is rejected.
    #[serde(default = "default_true")]
    pub notnull: bool,
    /// Default value.
    #[serde(default)]
    pub default: Option<DefaultValue>,
    /// Auto-incrementing integer.
    #[serde(default)]
    pub autoincrement: bool,
    /// Unsigned integer.
    #[serde(default)]
    pub unsigned: bool,
    /// Column comment.
    #[serde(default)]
    pub comment: Option<String>,
    /// Platform specific options (`charset`, `collation`).
    #[serde(default)]
    pub platform_options: BTreeMap<String, String>,
    /// Raw declaration used instead of the generated one.
    #[serde(default)]
    pub column_definition: Option<String>,
}

impl Column {
    /// Creates a NOT NULL column of the given kind.
    #[must_use]
    pub fn new(name: impl Into<Identifier>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            length: None,
            precision: None,
            scale: None,
            fixed: false,
            notnull: true,
            default: None,
            autoincrement: false,
            unsigned: false,
            comment: None,
            platform_options: BTreeMap::new(),
            column_definition: None,
        }
    }

    /// Sets the length.
    #[must_use]
    pub fn length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }

    /// Sets the precision.
    #[must_use]
    pub fn precision(mut self, precision: u32) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Sets the scale.
    #[must_use]
    pub fn scale(mut self, scale: u32) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Makes the column fixed-width.
    #[must_use]
    pub fn fixed(mut self) -> Self {
        self.fixed = true;
        self
    }

    /// Allows NULL.
    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.notnull = false;
        self
    }

    /// Rejects NULL.
    #[must_use]
    pub fn not_null(mut self) -> Self {
        self.notnull = true;
        self
    }

    /// Sets the default value.
    #[must_use]
    pub fn default(mut self, value: impl Into<DefaultValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Makes the column auto-increment.
    #[must_use]
    pub fn autoincrement(mut self) -> Self {
        self.autoincrement = true;
        self
    }

    /// Makes the column unsigned.
    #[must_use]
    pub fn unsigned(mut self) -> Self {
        self.unsigned = true;
        self
    }

    /// Sets the comment.
    #[must_use]
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Sets a platform option.
    #[must_use]
    pub fn platform_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.platform_options.insert(key.into(), value.into());
        self
    }

    /// Uses a raw declaration instead of the generated one.
    #[must_use]
    pub fn column_definition(mut self, definition: impl Into<String>) -> Self {
        self.column_definition = Some(definition.into());
        self
    }

    /// Returns a copy with a different name.
    #[must_use]
    pub fn renamed(&self, name: impl Into<Identifier>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    /// Options fed to the type declaration.
    #[must_use]
    pub fn type_options(&self) -> TypeOptions {
        TypeOptions {
            length: self.length,
            precision: self.precision,
            scale: self.scale,
            fixed: self.fixed,
            unsigned: self.unsigned,
            autoincrement: self.autoincrement,
        }
    }

    /// Returns the comment, treating an empty string as no comment.
    #[must_use]
    pub fn comment_text(&self) -> Option<&str> {
        self.comment.as_deref().filter(|c| !c.is_empty())
    }
}

/// Schema definition for an index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Index {
    /// Index name.
    pub name: Identifier,
    /// Indexed columns, in key order.
    pub columns: Vec<Identifier>,
    /// Unique index.
    #[serde(default)]
    pub unique: bool,
    /// Primary key index.
    #[serde(default)]
    pub primary: bool,
    /// Lower-case flags (`fulltext`, `spatial`, `clustered`, `nonclustered`).
    #[serde(default)]
    pub flags: BTreeSet<String>,
    /// Platform options; `where` holds a partial index predicate.
    #[serde(default)]
    pub options: BTreeMap<String, String>,
}

impl Index {
    /// Creates a plain index.
    #[must_use]
    pub fn new<I, C>(name: impl Into<Identifier>, columns: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Identifier>,
    {
        Self {
            name: name.into(),
            columns: columns.into_iter().map(Into::into).collect(),
            unique: false,
            primary: false,
            flags: BTreeSet::new(),
            options: BTreeMap::new(),
        }
    }

    /// Makes the index unique.
    #[must_use]
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Makes the index the primary key.
    #[must_use]
    pub fn primary(mut self) -> Self {
        self.primary = true;
        self.unique = true;
        self
    }

    /// Adds a flag.
    #[must_use]
    pub fn flag(mut self, flag: impl AsRef<str>) -> Self {
        self.flags.insert(flag.as_ref().to_ascii_lowercase());
        self
    }

    /// Sets an option.
    #[must_use]
    pub fn option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Restricts the index to rows matching `predicate`.
    #[must_use]
    pub fn where_clause(self, predicate: impl Into<String>) -> Self {
        self.option("where", predicate)
    }

    /// The partial index predicate, if any.
    #[must_use]
    pub fn predicate(&self) -> Option<&str> {
        self.options.get("where").map(String::as_str)
    }

    /// Returns true if the flag is set, ignoring case.
    #[must_use]
    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags.contains(&flag.to_ascii_lowercase())
    }
}

/// Schema definition for a unique constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniqueConstraint {
    /// Constraint name.
    pub name: Identifier,
    /// Constrained columns, in order.
    pub columns: Vec<Identifier>,
}

impl UniqueConstraint {
    /// Creates a unique constraint.
    #[must_use]
    pub fn new<I, C>(name: impl Into<Identifier>, columns: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Identifier>,
    {
        Self {
            name: name.into(),
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }
}

/// Referential action of a foreign key (ON DELETE, ON UPDATE).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReferentialAction {
    /// Cascade the change to referencing rows.
    Cascade,
    /// Set referencing columns to NULL.
    SetNull,
    /// Deferred check that the reference still holds.
    NoAction,
    /// Immediate check that the reference still holds.
    Restrict,
    /// Set referencing columns to their default.
    SetDefault,
}

impl ReferentialAction {
    /// Returns the SQL keywords for the action.
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Cascade => "CASCADE",
            Self::SetNull => "SET NULL",
            Self::NoAction => "NO ACTION",
            Self::Restrict => "RESTRICT",
            Self::SetDefault => "SET DEFAULT",
        }
    }
}

impl fmt::Display for ReferentialAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

impl FromStr for ReferentialAction {
    type Err = DdlError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CASCADE" => Ok(Self::Cascade),
            "SET NULL" => Ok(Self::SetNull),
            "NO ACTION" => Ok(Self::NoAction),
            "RESTRICT" => Ok(Self::Restrict),
            "SET DEFAULT" => Ok(Self::SetDefault),
            _ => Err(DdlError::invalid(format!(
                "Invalid foreign key referential action '{s}'"
            ))),
        }
    }
}

/// Schema definition for a foreign key constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKeyConstraint {
    /// Constraint name.
    pub name: Identifier,
    /// Referencing columns.
    pub local_columns: Vec<Identifier>,
    /// Referenced table.
    pub foreign_table: Identifier,
    /// Referenced columns.
    pub foreign_columns: Vec<Identifier>,
    /// Options: `onDelete`, `onUpdate` (validated when SQL is generated),
    /// `deferrable` and `deferred` (PostgreSQL).
    #[serde(default)]
    pub options: BTreeMap<String, String>,
}

impl ForeignKeyConstraint {
    /// Creates a foreign key constraint.
    #[must_use]
    pub fn new<L, F, C, D>(
        name: impl Into<Identifier>,
        local_columns: L,
        foreign_table: impl Into<Identifier>,
        foreign_columns: F,
    ) -> Self
    where
        L: IntoIterator<Item = C>,
        C: Into<Identifier>,
        F: IntoIterator<Item = D>,
        D: Into<Identifier>,
    {
        Self {
            name: name.into(),
            local_columns: local_columns.into_iter().map(Into::into).collect(),
            foreign_table: foreign_table.into(),
            foreign_columns: foreign_columns.into_iter().map(Into::into).collect(),
            options: BTreeMap::new(),
        }
    }

    /// Sets the ON DELETE action (any case).
    #[must_use]
    pub fn on_delete(self, action: impl Into<String>) -> Self {
        self.option("onDelete", action)
    }

    /// Sets the ON UPDATE action (any case).
    #[must_use]
    pub fn on_update(self, action: impl Into<String>) -> Self {
        self.option("onUpdate", action)
    }

    /// Sets an option.
    #[must_use]
    pub fn option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// The raw ON DELETE action.
    #[must_use]
    pub fn on_delete_action(&self) -> Option<&str> {
        self.options.get("onDelete").map(String::as_str)
    }

    /// The raw ON UPDATE action.
    #[must_use]
    pub fn on_update_action(&self) -> Option<&str> {
        self.options.get("onUpdate").map(String::as_str)
    }

    /// Returns true if the boolean option is set to a truthy value.
    #[must_use]
    pub fn has_option(&self, key: &str) -> bool {
        self.options
            .get(key)
            .is_some_and(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
    }
}

/// Complete schema definition for a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Table name, optionally schema-qualified.
    pub name: Identifier,
    /// Columns in declaration order; names are unique ignoring case.
    #[serde(default)]
    pub columns: Vec<Column>,
    /// Primary key columns.
    #[serde(default)]
    pub primary_key: Option<Vec<Identifier>>,
    /// Indexes.
    #[serde(default)]
    pub indexes: Vec<Index>,
    /// Unique constraints.
    #[serde(default)]
    pub unique_constraints: Vec<UniqueConstraint>,
    /// Foreign keys.
    #[serde(default)]
    pub foreign_keys: Vec<ForeignKeyConstraint>,
    /// Table options (`engine`, `charset`, `collation` on MySQL).
    #[serde(default)]
    pub options: BTreeMap<String, String>,
}

impl Table {
    /// Creates an empty table.
    #[must_use]
    pub fn new(name: impl Into<Identifier>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            primary_key: None,
            indexes: Vec::new(),
            unique_constraints: Vec::new(),
            foreign_keys: Vec::new(),
            options: BTreeMap::new(),
        }
    }

    /// Adds a column, replacing any column with the same name.
    #[must_use]
    pub fn column(mut self, column: Column) -> Self {
        let key = column.name.full_name();
        match self.columns.iter_mut().find(|c| c.name.matches(&key)) {
            Some(existing) => *existing = column,
            None => self.columns.push(column),
        }
        self
    }

    /// Sets the primary key columns.
    #[must_use]
    pub fn primary_key<I, C>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Identifier>,
    {
        self.primary_key = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    /// Adds an index, replacing any index with the same name.
    #[must_use]
    pub fn index(mut self, index: Index) -> Self {
        self.indexes.retain(|i| !i.name.matches(&index.name.full_name()));
        self.indexes.push(index);
        self
    }

    /// Adds a unique constraint, replacing any with the same name.
    #[must_use]
    pub fn unique_constraint(mut self, constraint: UniqueConstraint) -> Self {
        self.unique_constraints
            .retain(|u| !u.name.matches(&constraint.name.full_name()));
        self.unique_constraints.push(constraint);
        self
    }

    /// Adds a foreign key, replacing any with the same name.
    #[must_use]
    pub fn foreign_key(mut self, fk: ForeignKeyConstraint) -> Self {
        self.foreign_keys
            .retain(|f| !f.name.matches(&fk.name.full_name()));
        self.foreign_keys.push(fk);
        self
    }

    /// Sets a table option.
    #[must_use]
    pub fn option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Looks up a column, ignoring case.
    #[must_use]
    pub fn get_column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name.matches(name))
    }

    /// Returns true if the table declares a non-empty primary key.
    #[must_use]
    pub fn has_primary_key(&self) -> bool {
        self.primary_key.as_ref().is_some_and(|pk| !pk.is_empty())
    }
}
