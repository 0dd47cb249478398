//! ALTER TABLE generation from a [`TableDiff`].

use tracing::{debug, trace};

use super::dialect::{AutoIncrement, ColumnAlter, Comments};
use super::Platform;
use crate::diff::{ColumnDiff, ColumnProperty, TableDiff};
use crate::error::Result;
use crate::events::SchemaEvent;
use crate::identifier::Identifier;
use crate::schema::{Column, DefaultValue};

impl Platform {
    /// Generates the statements applying `diff`, in this order:
    ///
    /// 1. drop removed and changed foreign keys
    /// 2. drop removed and changed indexes and unique constraints
    /// 3. drop removed columns
    /// 4. rename columns
    /// 5. add columns
    /// 6. alter changed columns
    /// 7. create added and changed indexes and unique constraints
    /// 8. rename indexes
    /// 9. add added and changed foreign keys
    /// 10. rename the table
    ///
    /// An empty diff yields no statements.
    ///
    /// # Errors
    ///
    /// Returns [`DdlError::InvalidArgument`](crate::error::DdlError::InvalidArgument)
    /// for inconsistent diffs and
    /// [`DdlError::UnsupportedOperation`](crate::error::DdlError::UnsupportedOperation)
    /// for changes the dialect cannot apply in place. Nothing is returned
    /// when any step fails.
    pub fn alter_table_sql(&self, diff: &TableDiff) -> Result<Vec<String>> {
        diff.validate()?;
        if diff.is_empty() {
            return Ok(Vec::new());
        }

        let event = SchemaEvent::AlterTable { diff };
        let sql = self.listeners.around(&event, || self.alter_table_statements(diff))?;

        debug!(
            table = %diff.name.full_name(),
            platform = self.name(),
            statements = sql.len(),
            "Generated ALTER TABLE statements"
        );
        for statement in &sql {
            trace!(sql = %statement, "ALTER TABLE statement");
        }
        Ok(sql)
    }

    fn alter_table_statements(&self, diff: &TableDiff) -> Result<Vec<String>> {
        let table = &diff.name;
        let table_name = self.quote_if_needed(table);
        let mut sql = Vec::new();

        for fk in diff
            .removed_foreign_keys
            .iter()
            .chain(&diff.changed_foreign_keys)
        {
            sql.push(self.drop_foreign_key_sql(&fk.name, table)?);
        }

        for index in &diff.removed_indexes {
            if self.is_rename_target(diff, &index.name) {
                continue;
            }
            sql.push(self.drop_index_definition_sql(index, table)?);
        }
        for index in &diff.changed_indexes {
            sql.push(self.drop_index_definition_sql(index, table)?);
        }
        for constraint in diff
            .removed_unique_constraints
            .iter()
            .chain(&diff.changed_unique_constraints)
        {
            sql.push(self.drop_unique_constraint_sql(&constraint.name, table));
        }

        for column in diff.removed_columns.values() {
            let event = SchemaEvent::AlterTableRemoveColumn { diff, column };
            sql.extend(self.listeners.around(&event, || -> Result<Vec<String>> {
                Ok(vec![format!(
                    "ALTER TABLE {table_name} DROP COLUMN {}",
                    self.quote_if_needed(&column.name)
                )])
            })?);
        }

        for (old_name, column) in &diff.renamed_columns {
            let event = SchemaEvent::AlterTableRenameColumn {
                diff,
                old_name,
                column,
            };
            sql.extend(self.listeners.around(&event, || -> Result<Vec<String>> {
                let old_name = Identifier::new(old_name);
                let mut sql = vec![self.rename_column_sql(table, &old_name, &column.name)];
                if self.spec.named_default_constraints && has_default(column) {
                    sql.extend(self.recreate_default_constraint_sql(table, &old_name, column, true));
                }
                Ok(sql)
            })?);
        }

        for column in diff.added_columns.values() {
            let event = SchemaEvent::AlterTableAddColumn { diff, column };
            sql.extend(
                self.listeners
                    .around(&event, || self.add_column_sql(table, column))?,
            );
        }

        for column_diff in diff.changed_columns.values() {
            let event = SchemaEvent::AlterTableChangeColumn { diff, column_diff };
            sql.extend(
                self.listeners
                    .around(&event, || self.change_column_sql(table, column_diff))?,
            );
        }

        for index in diff.added_indexes.iter().chain(&diff.changed_indexes) {
            sql.push(self.create_index_sql(index, table)?);
        }
        for constraint in diff
            .added_unique_constraints
            .iter()
            .chain(&diff.changed_unique_constraints)
        {
            sql.push(self.create_unique_constraint_sql(constraint, table)?);
        }

        for (old_name, index) in &diff.renamed_indexes {
            sql.extend(self.rename_index_sql(&Identifier::new(old_name), index, table)?);
        }

        for fk in diff.added_foreign_keys.iter().chain(&diff.changed_foreign_keys) {
            sql.push(self.create_foreign_key_sql(fk, table)?);
        }

        if let Some(new_name) = &diff.new_name {
            sql.push(self.rename_table_sql(table, new_name));
            if self.spec.named_default_constraints {
                sql.push(self.rename_default_constraints_sql(table, new_name));
            }
        }

        Ok(sql)
    }

    /// A removed index whose name a rename already covers is not dropped
    /// twice.
    fn is_rename_target(&self, diff: &TableDiff, name: &Identifier) -> bool {
        diff.renamed_indexes
            .iter()
            .any(|(old, index)| name.matches(old) || name.matches(&index.name.full_name()))
    }

    fn add_column_sql(&self, table: &Identifier, column: &Column) -> Result<Vec<String>> {
        let mut sql = vec![format!(
            "ALTER TABLE {} {} {}",
            self.quote_if_needed(table),
            self.spec.add_column,
            self.column_declaration(Some(table), column, true)?
        )];
        if let Some(comment) = column.comment_text() {
            if self.stores_comments_separately() {
                sql.push(self.comment_on_column_sql(table, &column.name, Some(comment))?);
            }
        }
        Ok(sql)
    }

    pub(super) fn stores_comments_separately(&self) -> bool {
        matches!(
            self.spec.comments,
            Comments::CommentOn | Comments::ExtendedProperty
        )
    }

    fn change_column_sql(&self, table: &Identifier, column_diff: &ColumnDiff) -> Result<Vec<String>> {
        let column = &column_diff.column;
        let old_name = &column_diff.old_column_name;
        let table_name = self.quote_if_needed(table);

        if self.spec.column_alter == ColumnAlter::Change {
            return Ok(vec![format!(
                "ALTER TABLE {table_name} CHANGE {} {}",
                self.quote_if_needed(old_name),
                self.column_declaration(Some(table), column, true)?
            )]);
        }
        if self.spec.column_alter == ColumnAlter::Unsupported {
            return Err(self.unsupported(format!(
                "ALTER TABLE {} ALTER COLUMN '{}'",
                table.full_name(),
                old_name.full_name()
            )));
        }

        let mut sql = Vec::new();
        let renamed = !old_name.matches(&column.name.full_name());
        if renamed {
            sql.push(self.rename_column_sql(table, old_name, &column.name));
        }
        let name = self.quote_if_needed(&column.name);

        match self.spec.column_alter {
            ColumnAlter::AlterType => {
                if column_diff.alters_type() || column.column_definition.is_some() {
                    let mut options = column.type_options();
                    options.autoincrement = false;
                    let type_sql = match &column.column_definition {
                        Some(definition) => definition.clone(),
                        None => self.type_declaration_sql(column.kind, &options)?,
                    };
                    sql.push(format!(
                        "ALTER TABLE {table_name} ALTER COLUMN {name} TYPE {type_sql}"
                    ));
                }
                if column_diff.has_changed(ColumnProperty::Autoincrement) {
                    if let AutoIncrement::Suffix(suffix) = self.spec.autoincrement {
                        let identity = if column.autoincrement {
                            format!("ADD{suffix}")
                        } else {
                            "DROP IDENTITY IF EXISTS".to_string()
                        };
                        sql.push(format!(
                            "ALTER TABLE {table_name} ALTER COLUMN {name} {identity}"
                        ));
                    }
                }
                if column_diff.has_changed(ColumnProperty::Default) {
                    let action = match self.default_literal_sql(column) {
                        Some(literal) => format!("SET DEFAULT {literal}"),
                        None => "DROP DEFAULT".to_string(),
                    };
                    sql.push(format!("ALTER TABLE {table_name} ALTER COLUMN {name} {action}"));
                }
                if column_diff.has_changed(ColumnProperty::NotNull) {
                    let action = if column.notnull { "SET" } else { "DROP" };
                    sql.push(format!(
                        "ALTER TABLE {table_name} ALTER COLUMN {name} {action} NOT NULL"
                    ));
                }
            }
            ColumnAlter::AlterColumn => {
                if column_diff.alters_type()
                    || column_diff.has_changed(ColumnProperty::NotNull)
                    || column.column_definition.is_some()
                {
                    sql.push(format!(
                        "ALTER TABLE {table_name} ALTER COLUMN {}",
                        self.column_declaration(Some(table), column, false)?
                    ));
                }
                let default_changed = column_diff.has_changed(ColumnProperty::Default);
                let had_default = match &column_diff.from_column {
                    Some(from) => has_default(from),
                    None => default_changed || has_default(column),
                };
                if default_changed || (renamed && had_default) {
                    sql.extend(self.recreate_default_constraint_sql(table, old_name, column, had_default));
                }
            }
            ColumnAlter::Change | ColumnAlter::Unsupported => {}
        }

        if column_diff.has_changed(ColumnProperty::Comment) {
            sql.push(self.change_comment_sql(table, column_diff)?);
        }
        Ok(sql)
    }

    /// Drops the default constraint named after `old` and adds the one
    /// named after `column`, which carries its current default.
    fn recreate_default_constraint_sql(
        &self,
        table: &Identifier,
        old: &Identifier,
        column: &Column,
        had_default: bool,
    ) -> Vec<String> {
        let table_name = self.quote_if_needed(table);
        let mut sql = Vec::new();
        if had_default {
            sql.push(format!(
                "ALTER TABLE {table_name} DROP CONSTRAINT {}",
                self.default_constraint_name(table, old)
            ));
        }
        if let Some(literal) = self.default_literal_sql(column).filter(|_| has_default(column)) {
            sql.push(format!(
                "ALTER TABLE {table_name} ADD CONSTRAINT {} DEFAULT {literal} FOR {}",
                self.default_constraint_name(table, &column.name),
                self.quote_if_needed(&column.name)
            ));
        }
        sql
    }

    /// Default constraint names embed the table name, so a table rename
    /// renames every constraint carrying the old prefix. The column set is
    /// unknown to a diff, hence the batch over the catalog.
    fn rename_default_constraints_sql(&self, table: &Identifier, new_name: &Identifier) -> String {
        let old_prefix = format!("DF_{}_", table.name());
        let new_prefix = format!("DF_{}_", new_name.name());
        format!(
            "DECLARE @sql NVARCHAR(MAX) = N''; \
             SELECT @sql += N'EXEC sp_rename N''' + SCHEMA_NAME(tbl.schema_id) + N'.' + dc.name \
             + N''', N''' + REPLACE(dc.name, {old}, {new}) + N''', ''OBJECT'';' \
             FROM sys.default_constraints dc \
             JOIN sys.tables tbl ON dc.parent_object_id = tbl.object_id \
             WHERE tbl.name = {table} AND LEFT(dc.name, {len}) = {old}; \
             EXEC sp_executesql @sql",
            old = self.quote_string_literal(&old_prefix),
            new = self.quote_string_literal(&new_prefix),
            table = self.quote_string_literal(new_name.name()),
            len = old_prefix.chars().count(),
        )
    }

    fn change_comment_sql(&self, table: &Identifier, column_diff: &ColumnDiff) -> Result<String> {
        let column = &column_diff.column;
        if self.spec.comments != Comments::ExtendedProperty {
            return self.comment_on_column_sql(table, &column.name, column.comment_text());
        }
        let had_comment = column_diff
            .from_column
            .as_ref()
            .is_some_and(|from| from.comment_text().is_some());
        let procedure = match (had_comment, column.comment_text()) {
            (true, Some(_)) => "sp_updateextendedproperty",
            (false, Some(_)) => "sp_addextendedproperty",
            (_, None) => "sp_dropextendedproperty",
        };
        Ok(self.extended_property_sql(procedure, table, &column.name, column.comment_text()))
    }
}

fn has_default(column: &Column) -> bool {
    column.default.as_ref().is_some_and(|d| *d != DefaultValue::Null)
}
