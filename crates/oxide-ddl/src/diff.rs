//! Precomputed deltas between an existing table and a desired table.
//!
//! A [`TableDiff`] is produced by an external comparator (or by hand) and
//! consumed by [`Platform::alter_table_sql`](crate::platform::Platform::alter_table_sql).

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::{DdlError, Result};
use crate::identifier::Identifier;
use crate::schema::{Column, ForeignKeyConstraint, Index, UniqueConstraint};

/// A column attribute that differs between two definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnProperty {
    /// Semantic type.
    Type,
    /// Nullability.
    NotNull,
    /// Default value.
    Default,
    /// Length.
    Length,
    /// Precision.
    Precision,
    /// Scale.
    Scale,
    /// Fixed width.
    Fixed,
    /// Unsigned.
    Unsigned,
    /// Auto-increment.
    Autoincrement,
    /// Comment.
    Comment,
}

impl ColumnProperty {
    /// Properties that change the type declaration itself.
    #[must_use]
    pub const fn alters_type(self) -> bool {
        matches!(
            self,
            Self::Type
                | Self::Length
                | Self::Precision
                | Self::Scale
                | Self::Fixed
                | Self::Unsigned
                | Self::Autoincrement
        )
    }
}

/// The change of a single column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDiff {
    /// Name of the column before the change.
    pub old_column_name: Identifier,
    /// New definition.
    pub column: Column,
    /// Attributes that changed.
    #[serde(default)]
    pub changed_properties: BTreeSet<ColumnProperty>,
    /// Old definition, when known.
    #[serde(default)]
    pub from_column: Option<Column>,
}

impl ColumnDiff {
    /// Creates a column diff from an explicit set of changed properties.
    #[must_use]
    pub fn new<I>(old_column_name: impl Into<Identifier>, column: Column, changed: I) -> Self
    where
        I: IntoIterator<Item = ColumnProperty>,
    {
        Self {
            old_column_name: old_column_name.into(),
            column,
            changed_properties: changed.into_iter().collect(),
            from_column: None,
        }
    }

    /// Attaches the old definition.
    #[must_use]
    pub fn from_column(mut self, column: Column) -> Self {
        self.from_column = Some(column);
        self
    }

    /// Compares two definitions of the same column.
    #[must_use]
    pub fn between(from: &Column, to: &Column) -> Self {
        let mut changed: BTreeSet<ColumnProperty> = BTreeSet::new();
        let mut mark = |differs: bool, property: ColumnProperty| {
            if differs {
                changed.insert(property);
            }
        };
        mark(from.kind != to.kind, ColumnProperty::Type);
        mark(from.notnull != to.notnull, ColumnProperty::NotNull);
        mark(from.default != to.default, ColumnProperty::Default);
        mark(from.length != to.length, ColumnProperty::Length);
        mark(from.precision != to.precision, ColumnProperty::Precision);
        mark(from.scale != to.scale, ColumnProperty::Scale);
        mark(from.fixed != to.fixed, ColumnProperty::Fixed);
        mark(from.unsigned != to.unsigned, ColumnProperty::Unsigned);
        mark(
            from.autoincrement != to.autoincrement,
            ColumnProperty::Autoincrement,
        );
        mark(
            from.comment_text() != to.comment_text(),
            ColumnProperty::Comment,
        );

        Self {
            old_column_name: from.name.clone(),
            column: to.clone(),
            changed_properties: changed,
            from_column: Some(from.clone()),
        }
    }

    /// Returns true if the property changed.
    #[must_use]
    pub fn has_changed(&self, property: ColumnProperty) -> bool {
        self.changed_properties.contains(&property)
    }

    /// Returns true if the type declaration must be regenerated.
    #[must_use]
    pub fn alters_type(&self) -> bool {
        self.changed_properties.iter().any(|p| p.alters_type())
    }

    /// Returns true if nothing changed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changed_properties.is_empty()
    }
}

/// The complete delta of a table.
///
/// Column maps are keyed by the old column name. A key never appears in more
/// than one column map; see [`TableDiff::validate`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableDiff {
    /// Current table name.
    pub name: Identifier,
    /// New table name, when the table is renamed.
    pub new_name: Option<Identifier>,
    /// Columns to add, keyed by name.
    pub added_columns: BTreeMap<String, Column>,
    /// Columns to drop, keyed by name.
    pub removed_columns: BTreeMap<String, Column>,
    /// Columns to alter, keyed by old name.
    pub changed_columns: BTreeMap<String, ColumnDiff>,
    /// Columns to rename, keyed by old name.
    pub renamed_columns: BTreeMap<String, Column>,
    /// Indexes to create.
    pub added_indexes: Vec<Index>,
    /// Indexes to drop and recreate.
    pub changed_indexes: Vec<Index>,
    /// Indexes to drop.
    pub removed_indexes: Vec<Index>,
    /// Indexes to rename, keyed by old name.
    pub renamed_indexes: BTreeMap<String, Index>,
    /// Unique constraints to add.
    pub added_unique_constraints: Vec<UniqueConstraint>,
    /// Unique constraints to drop and recreate.
    pub changed_unique_constraints: Vec<UniqueConstraint>,
    /// Unique constraints to drop.
    pub removed_unique_constraints: Vec<UniqueConstraint>,
    /// Foreign keys to add.
    pub added_foreign_keys: Vec<ForeignKeyConstraint>,
    /// Foreign keys to drop and recreate.
    pub changed_foreign_keys: Vec<ForeignKeyConstraint>,
    /// Foreign keys to drop.
    pub removed_foreign_keys: Vec<ForeignKeyConstraint>,
}

impl TableDiff {
    /// Creates an empty diff for the table.
    #[must_use]
    pub fn new(name: impl Into<Identifier>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Renames the table.
    #[must_use]
    pub fn rename_to(mut self, new_name: impl Into<Identifier>) -> Self {
        self.new_name = Some(new_name.into());
        self
    }

    /// Adds a column.
    #[must_use]
    pub fn add_column(mut self, column: Column) -> Self {
        self.added_columns.insert(column.name.full_name(), column);
        self
    }

    /// Drops a column.
    #[must_use]
    pub fn remove_column(mut self, column: Column) -> Self {
        self.removed_columns.insert(column.name.full_name(), column);
        self
    }

    /// Alters a column.
    #[must_use]
    pub fn change_column(mut self, diff: ColumnDiff) -> Self {
        self.changed_columns
            .insert(diff.old_column_name.full_name(), diff);
        self
    }

    /// Renames a column; `column` carries the new name.
    #[must_use]
    pub fn rename_column(mut self, old_name: impl Into<String>, column: Column) -> Self {
        self.renamed_columns.insert(old_name.into(), column);
        self
    }

    /// Creates an index.
    #[must_use]
    pub fn add_index(mut self, index: Index) -> Self {
        self.added_indexes.push(index);
        self
    }

    /// Drops and recreates an index.
    #[must_use]
    pub fn change_index(mut self, index: Index) -> Self {
        self.changed_indexes.push(index);
        self
    }

    /// Drops an index.
    #[must_use]
    pub fn remove_index(mut self, index: Index) -> Self {
        self.removed_indexes.push(index);
        self
    }

    /// Renames an index; `index` carries the new name and definition.
    #[must_use]
    pub fn rename_index(mut self, old_name: impl Into<String>, index: Index) -> Self {
        self.renamed_indexes.insert(old_name.into(), index);
        self
    }

    /// Adds a unique constraint.
    #[must_use]
    pub fn add_unique_constraint(mut self, constraint: UniqueConstraint) -> Self {
        self.added_unique_constraints.push(constraint);
        self
    }

    /// Drops and recreates a unique constraint.
    #[must_use]
    pub fn change_unique_constraint(mut self, constraint: UniqueConstraint) -> Self {
        self.changed_unique_constraints.push(constraint);
        self
    }

    /// Drops a unique constraint.
    #[must_use]
    pub fn remove_unique_constraint(mut self, constraint: UniqueConstraint) -> Self {
        self.removed_unique_constraints.push(constraint);
        self
    }

    /// Adds a foreign key.
    #[must_use]
    pub fn add_foreign_key(mut self, fk: ForeignKeyConstraint) -> Self {
        self.added_foreign_keys.push(fk);
        self
    }

    /// Drops and recreates a foreign key.
    #[must_use]
    pub fn change_foreign_key(mut self, fk: ForeignKeyConstraint) -> Self {
        self.changed_foreign_keys.push(fk);
        self
    }

    /// Drops a foreign key.
    #[must_use]
    pub fn remove_foreign_key(mut self, fk: ForeignKeyConstraint) -> Self {
        self.removed_foreign_keys.push(fk);
        self
    }

    /// Returns true if the diff touches nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.new_name.is_none()
            && self.added_columns.is_empty()
            && self.removed_columns.is_empty()
            && self.changed_columns.is_empty()
            && self.renamed_columns.is_empty()
            && self.added_indexes.is_empty()
            && self.changed_indexes.is_empty()
            && self.removed_indexes.is_empty()
            && self.renamed_indexes.is_empty()
            && self.added_unique_constraints.is_empty()
            && self.changed_unique_constraints.is_empty()
            && self.removed_unique_constraints.is_empty()
            && self.added_foreign_keys.is_empty()
            && self.changed_foreign_keys.is_empty()
            && self.removed_foreign_keys.is_empty()
    }

    /// Checks that no column key sits in two column maps and that no index
    /// or constraint name is added, changed or removed twice.
    ///
    /// A removed index may share its name with a renamed index; the rename
    /// takes care of dropping it.
    ///
    /// # Errors
    ///
    /// Returns [`DdlError::InvalidArgument`] naming the conflicting key.
    pub fn validate(&self) -> Result<()> {
        let columns = [
            ("added", self.added_columns.keys().collect::<Vec<_>>()),
            ("removed", self.removed_columns.keys().collect()),
            ("changed", self.changed_columns.keys().collect()),
            ("renamed", self.renamed_columns.keys().collect()),
        ];
        check_disjoint("column", &columns)?;

        let names = |indexes: &[Index]| -> Vec<String> {
            indexes.iter().map(|i| i.name.full_name()).collect()
        };
        let indexes: [(&str, Vec<String>); 3] = [
            ("added", names(&self.added_indexes)),
            ("changed", names(&self.changed_indexes)),
            ("removed", names(&self.removed_indexes)),
        ];
        check_disjoint("index", &indexes)?;

        let names = |constraints: &[UniqueConstraint]| -> Vec<String> {
            constraints.iter().map(|u| u.name.full_name()).collect()
        };
        let uniques: [(&str, Vec<String>); 3] = [
            ("added", names(&self.added_unique_constraints)),
            ("changed", names(&self.changed_unique_constraints)),
            ("removed", names(&self.removed_unique_constraints)),
        ];
        check_disjoint("unique constraint", &uniques)?;

        let names = |fks: &[ForeignKeyConstraint]| -> Vec<String> {
            fks.iter().map(|f| f.name.full_name()).collect()
        };
        let fks: [(&str, Vec<String>); 3] = [
            ("added", names(&self.added_foreign_keys)),
            ("changed", names(&self.changed_foreign_keys)),
            ("removed", names(&self.removed_foreign_keys)),
        ];
        check_disjoint("foreign key", &fks)
    }
}

fn check_disjoint<K: AsRef<str>>(what: &str, categories: &[(&str, Vec<K>)]) -> Result<()> {
    let mut seen: HashMap<String, &str> = HashMap::new();
    for (category, keys) in categories {
        for key in keys {
            let normalized = key.as_ref().to_ascii_lowercase();
            if let Some(previous) = seen.insert(normalized, category) {
                return Err(DdlError::invalid(format!(
                    "{what} '{}' is both {previous} and {category} in the same diff",
                    key.as_ref()
                )));
            }
        }
    }
    Ok(())
}
