//! CREATE, DROP, TRUNCATE and RENAME statements.

use std::collections::HashSet;

use tracing::{debug, warn};

use super::dialect::{AutoIncrement, DropIndex, DropPrimaryKey, IndexRename, Rename};
use super::Platform;
use crate::error::{DdlError, Result};
use crate::events::{HookPhase, SchemaEvent};
use crate::identifier::Identifier;
use crate::schema::{Column, ForeignKeyConstraint, Index, Table, UniqueConstraint};

impl Platform {
    /// Generates the statements creating `table`: the CREATE TABLE itself,
    /// then indexes, foreign keys and comments that cannot be inlined.
    ///
    /// Listener statements for the table wrap everything; statements from
    /// column hooks wrap the generated statements inside them.
    ///
    /// # Errors
    ///
    /// Returns [`DdlError::InvalidArgument`] if the table has no columns or
    /// declares a column twice. Returns [`DdlError::UnsupportedOperation`]
    /// on SQLite when an autoincrement column is not the whole primary key.
    /// Propagates declaration errors.
    pub fn create_table_sql(&self, table: &Table) -> Result<Vec<String>> {
        if table.columns.is_empty() {
            return Err(DdlError::invalid(format!(
                "Table '{}' has no columns",
                table.name.full_name()
            )));
        }

        let event = SchemaEvent::CreateTable { table };
        let sql = self.listeners.around(&event, || -> Result<Vec<String>> {
            let mut sql: Vec<String> = table
                .columns
                .iter()
                .flat_map(|column| {
                    self.listeners
                        .dispatch(HookPhase::Before, &SchemaEvent::CreateTableColumn { table, column })
                })
                .collect();
            sql.extend(self.create_table_statements(table)?);
            for column in &table.columns {
                sql.extend(
                    self.listeners
                        .dispatch(HookPhase::After, &SchemaEvent::CreateTableColumn { table, column }),
                );
            }
            Ok(sql)
        })?;

        debug!(
            table = %table.name.full_name(),
            platform = self.name(),
            statements = sql.len(),
            "Generated CREATE TABLE statements"
        );
        Ok(sql)
    }

    fn create_table_statements(&self, table: &Table) -> Result<Vec<String>> {
        let mut seen = HashSet::new();
        for column in &table.columns {
            if !seen.insert(column.name.full_name().to_ascii_lowercase()) {
                return Err(DdlError::invalid(format!(
                    "Column '{}' is declared twice in table '{}'",
                    column.name.full_name(),
                    table.name.full_name()
                )));
            }
        }

        let primary_key = table
            .primary_key
            .clone()
            .filter(|pk| !pk.is_empty())
            .or_else(|| {
                table
                    .indexes
                    .iter()
                    .find(|index| index.primary)
                    .map(|index| index.columns.clone())
            });
        let inline_autoincrement = self.check_inline_autoincrement(table, primary_key.as_deref())?;

        let table_name = self.quote_if_needed(&table.name);
        let mut body = table
            .columns
            .iter()
            .map(|column| self.column_declaration(Some(&table.name), column, true))
            .collect::<Result<Vec<_>>>()?;

        for constraint in &table.unique_constraints {
            body.push(self.unique_constraint_declaration_sql(constraint)?);
        }

        if let Some(columns) = &primary_key {
            if !inline_autoincrement {
                body.push(format!("PRIMARY KEY({})", self.column_list(columns)));
            }
        }

        let secondary = table.indexes.iter().filter(|index| !index.primary);
        let mut trailing = Vec::new();
        for index in secondary {
            if self.spec.supports_inline_indexes {
                body.push(self.index_declaration_sql(index)?);
            } else {
                trailing.push(self.create_index_sql(index, &table.name)?);
            }
        }

        for fk in &table.foreign_keys {
            if self.spec.inline_foreign_keys {
                body.push(self.foreign_key_declaration_sql(fk)?);
            } else {
                trailing.push(self.create_foreign_key_sql(fk, &table.name)?);
            }
        }

        let mut create = format!("CREATE TABLE {table_name} ({})", body.join(", "));
        if self.spec.supports_table_options {
            create.push_str(&self.table_options_sql(table));
        }

        let mut sql = vec![create];
        sql.extend(trailing);
        if self.stores_comments_separately() {
            for column in &table.columns {
                if let Some(comment) = column.comment_text() {
                    sql.push(self.comment_on_column_sql(&table.name, &column.name, Some(comment))?);
                }
            }
        }
        Ok(sql)
    }

    /// Dialects declaring autoincrement as `INTEGER PRIMARY KEY` can only
    /// do so when that column is the whole primary key. Returns true when
    /// the column declaration carries the key.
    fn check_inline_autoincrement(
        &self,
        table: &Table,
        primary_key: Option<&[Identifier]>,
    ) -> Result<bool> {
        if self.spec.autoincrement != AutoIncrement::InlinePrimaryKey {
            return Ok(false);
        }
        let autoincrement: Vec<&Column> =
            table.columns.iter().filter(|c| c.autoincrement).collect();
        let inlined = match (autoincrement.as_slice(), primary_key) {
            ([], _) => return Ok(false),
            ([_], None) => true,
            ([column], Some([key])) => key.matches(&column.name.full_name()),
            _ => false,
        };
        if inlined {
            return Ok(true);
        }

        let names = |ids: Vec<String>| ids.join(", ");
        Err(self.unsupported(format!(
            "AUTOINCREMENT on ({}) with PRIMARY KEY({}) in table '{}'",
            names(autoincrement.iter().map(|c| c.name.full_name()).collect()),
            names(
                primary_key
                    .unwrap_or_default()
                    .iter()
                    .map(Identifier::full_name)
                    .collect()
            ),
            table.name.full_name()
        )))
    }

    fn table_options_sql(&self, table: &Table) -> String {
        let mut sql = String::new();
        if let Some(charset) = table.options.get("charset") {
            sql.push_str(&format!(" DEFAULT CHARACTER SET {charset}"));
        }
        if let Some(collation) = table.options.get("collation") {
            sql.push_str(&format!(" COLLATE {collation}"));
        }
        if let Some(engine) = table.options.get("engine") {
            sql.push_str(&format!(" ENGINE = {engine}"));
        }
        sql
    }

    /// `CREATE [UNIQUE] INDEX name ON table (columns)`.
    ///
    /// The `where` option becomes a `WHERE` clause only on dialects with
    /// partial indexes; elsewhere it is dropped. Primary indexes become
    /// `ALTER TABLE ... ADD PRIMARY KEY`.
    ///
    /// # Errors
    ///
    /// Returns [`DdlError::InvalidArgument`] if the index has no columns.
    pub fn create_index_sql(&self, index: &Index, table: &Identifier) -> Result<String> {
        check_columns("Index", &index.name, &index.columns)?;
        let table_name = self.quote_if_needed(table);
        let columns = self.column_list(&index.columns);

        if index.primary {
            return Ok(format!("ALTER TABLE {table_name} ADD PRIMARY KEY ({columns})"));
        }

        let mut sql = String::from("CREATE ");
        if index.unique {
            sql.push_str("UNIQUE ");
        }
        for flag in self.spec.index_flags {
            if index.has_flag(flag) {
                sql.push_str(&flag.to_ascii_uppercase());
                sql.push(' ');
            }
        }
        sql.push_str(&format!(
            "INDEX {} ON {table_name} ({columns})",
            self.quote_if_needed(&index.name)
        ));
        sql.push_str(&self.partial_index_sql(index));
        Ok(sql)
    }

    fn partial_index_sql(&self, index: &Index) -> String {
        match index.predicate() {
            Some(predicate) if self.spec.supports_partial_indexes => format!(" WHERE {predicate}"),
            Some(predicate) => {
                warn!(
                    index = %index.name.full_name(),
                    platform = self.name(),
                    predicate,
                    "Dropping partial index predicate, platform has no partial indexes"
                );
                String::new()
            }
            None => String::new(),
        }
    }

    /// Inline `INDEX name (columns)` clause for CREATE TABLE.
    ///
    /// # Errors
    ///
    /// Returns [`DdlError::UnsupportedOperation`] on dialects without inline
    /// index declarations.
    pub fn index_declaration_sql(&self, index: &Index) -> Result<String> {
        if !self.spec.supports_inline_indexes {
            return Err(self.unsupported(format!(
                "inline index declaration '{}'",
                index.name.full_name()
            )));
        }
        check_columns("Index", &index.name, &index.columns)?;

        let mut sql = String::new();
        if index.unique {
            sql.push_str("UNIQUE ");
        }
        for flag in self.spec.index_flags {
            if index.has_flag(flag) {
                sql.push_str(&flag.to_ascii_uppercase());
                sql.push(' ');
            }
        }
        sql.push_str(&format!(
            "INDEX {} ({})",
            self.quote_if_needed(&index.name),
            self.column_list(&index.columns)
        ));
        sql.push_str(&self.partial_index_sql(index));
        Ok(sql)
    }

    /// `CONSTRAINT name UNIQUE (columns)` clause.
    ///
    /// # Errors
    ///
    /// Returns [`DdlError::InvalidArgument`] if the constraint has no columns.
    pub fn unique_constraint_declaration_sql(&self, constraint: &UniqueConstraint) -> Result<String> {
        check_columns("Unique constraint", &constraint.name, &constraint.columns)?;
        Ok(format!(
            "{}UNIQUE ({})",
            self.constraint_prefix(&constraint.name),
            self.column_list(&constraint.columns)
        ))
    }

    /// Adds a unique constraint to an existing table.
    ///
    /// # Errors
    ///
    /// Returns [`DdlError::InvalidArgument`] if the constraint has no columns.
    pub fn create_unique_constraint_sql(
        &self,
        constraint: &UniqueConstraint,
        table: &Identifier,
    ) -> Result<String> {
        if self.spec.unique_constraints_as_indexes {
            let index = Index::new(constraint.name.clone(), constraint.columns.clone()).unique();
            return self.create_index_sql(&index, table);
        }
        Ok(format!(
            "ALTER TABLE {} ADD {}",
            self.quote_if_needed(table),
            self.unique_constraint_declaration_sql(constraint)?
        ))
    }

    /// Inline `CONSTRAINT name FOREIGN KEY (...) REFERENCES ...` clause.
    ///
    /// # Errors
    ///
    /// Returns [`DdlError::InvalidArgument`] for missing columns or an
    /// unknown referential action.
    pub fn foreign_key_declaration_sql(&self, fk: &ForeignKeyConstraint) -> Result<String> {
        check_columns("Foreign key", &fk.name, &fk.local_columns)?;
        check_columns("Foreign key", &fk.name, &fk.foreign_columns)?;
        if fk.foreign_table.is_empty() {
            return Err(DdlError::invalid(format!(
                "Foreign key '{}' has no referenced table",
                fk.name.full_name()
            )));
        }

        let mut sql = format!(
            "{}FOREIGN KEY ({}) REFERENCES {} ({})",
            self.constraint_prefix(&fk.name),
            self.column_list(&fk.local_columns),
            self.quote_if_needed(&fk.foreign_table),
            self.column_list(&fk.foreign_columns)
        );
        if let Some(action) = fk.on_update_action() {
            sql.push_str(" ON UPDATE ");
            sql.push_str(self.foreign_key_referential_action_sql(action)?);
        }
        if let Some(action) = fk.on_delete_action() {
            sql.push_str(" ON DELETE ");
            sql.push_str(self.foreign_key_referential_action_sql(action)?);
        }
        if self.spec.deferrable_constraints {
            if fk.has_option("deferrable") {
                sql.push_str(" DEFERRABLE");
            } else {
                sql.push_str(" NOT DEFERRABLE");
            }
            if fk.has_option("deferred") {
                sql.push_str(" INITIALLY DEFERRED");
            } else {
                sql.push_str(" INITIALLY IMMEDIATE");
            }
        }
        Ok(sql)
    }

    /// `ALTER TABLE table ADD CONSTRAINT ... FOREIGN KEY ...`.
    ///
    /// # Errors
    ///
    /// Returns [`DdlError::UnsupportedOperation`] where foreign keys cannot
    /// be added to existing tables, and the declaration errors.
    pub fn create_foreign_key_sql(&self, fk: &ForeignKeyConstraint, table: &Identifier) -> Result<String> {
        if !self.spec.alter_foreign_keys {
            return Err(self.unsupported(format!(
                "ALTER TABLE {} ADD FOREIGN KEY '{}'",
                table.full_name(),
                fk.name.full_name()
            )));
        }
        Ok(format!(
            "ALTER TABLE {} ADD {}",
            self.quote_if_needed(table),
            self.foreign_key_declaration_sql(fk)?
        ))
    }

    fn constraint_prefix(&self, name: &Identifier) -> String {
        if name.is_empty() {
            String::new()
        } else {
            format!("CONSTRAINT {} ", self.quote_if_needed(name))
        }
    }

    /// `DROP TABLE name`.
    #[must_use]
    pub fn drop_table_sql(&self, table: &Identifier) -> String {
        format!("DROP TABLE {}", self.quote_if_needed(table))
    }

    /// Empties a table. `cascade` is honored where the dialect supports it.
    #[must_use]
    pub fn truncate_table_sql(&self, table: &Identifier, cascade: bool) -> String {
        let mut sql = format!("{} {}", self.spec.truncate, self.quote_if_needed(table));
        if cascade && self.spec.supports_truncate_cascade {
            sql.push_str(" CASCADE");
        }
        sql
    }

    /// Drops an index of `table`.
    #[must_use]
    pub fn drop_index_sql(&self, index: &Identifier, table: &Identifier) -> String {
        match self.spec.drop_index {
            DropIndex::OnTable => format!(
                "DROP INDEX {} ON {}",
                self.quote_if_needed(index),
                self.quote_if_needed(table)
            ),
            DropIndex::Standalone => format!("DROP INDEX {}", self.qualified_index(index, table)),
        }
    }

    /// Index name qualified with the table's schema, where it has one.
    fn qualified_index(&self, index: &Identifier, table: &Identifier) -> String {
        match (index.namespace(), table.namespace()) {
            (None, Some(schema)) => format!(
                "{}.{}",
                self.quote_part_if_needed(schema, table.is_quoted()),
                self.quote_if_needed(index)
            ),
            _ => self.quote_if_needed(index),
        }
    }

    /// Drops the primary key of `table`.
    ///
    /// # Errors
    ///
    /// Returns [`DdlError::UnsupportedOperation`] where primary keys cannot
    /// be dropped in place.
    pub fn drop_primary_key_sql(&self, table: &Identifier) -> Result<String> {
        let table_name = self.quote_if_needed(table);
        match self.spec.drop_primary_key {
            DropPrimaryKey::DropPrimaryKey => Ok(format!("ALTER TABLE {table_name} DROP PRIMARY KEY")),
            DropPrimaryKey::NamedConstraint => Ok(format!(
                "ALTER TABLE {table_name} DROP CONSTRAINT {}",
                self.quote_part_if_needed(&format!("{}_pkey", table.name()), false)
            )),
            DropPrimaryKey::Unsupported => Err(self.unsupported(format!(
                "DROP PRIMARY KEY on table '{}'",
                table.full_name()
            ))),
        }
    }

    /// Drops `index`, going through the primary key for primary indexes.
    pub(crate) fn drop_index_definition_sql(&self, index: &Index, table: &Identifier) -> Result<String> {
        if index.primary {
            self.drop_primary_key_sql(table)
        } else {
            Ok(self.drop_index_sql(&index.name, table))
        }
    }

    /// Drops a foreign key of `table`.
    ///
    /// # Errors
    ///
    /// Returns [`DdlError::UnsupportedOperation`] where foreign keys cannot
    /// be dropped from existing tables.
    pub fn drop_foreign_key_sql(&self, fk: &Identifier, table: &Identifier) -> Result<String> {
        if !self.spec.alter_foreign_keys {
            return Err(self.unsupported(format!(
                "ALTER TABLE {} DROP FOREIGN KEY '{}'",
                table.full_name(),
                fk.full_name()
            )));
        }
        Ok(format!(
            "ALTER TABLE {} {} {}",
            self.quote_if_needed(table),
            self.spec.drop_foreign_key,
            self.quote_if_needed(fk)
        ))
    }

    /// Drops a unique constraint of `table`.
    #[must_use]
    pub fn drop_unique_constraint_sql(&self, constraint: &Identifier, table: &Identifier) -> String {
        if self.spec.drop_unique_as_index {
            return self.drop_index_sql(constraint, table);
        }
        format!(
            "ALTER TABLE {} DROP CONSTRAINT {}",
            self.quote_if_needed(table),
            self.quote_if_needed(constraint)
        )
    }

    /// Renames a table.
    #[must_use]
    pub fn rename_table_sql(&self, table: &Identifier, new_name: &Identifier) -> String {
        match self.spec.rename {
            Rename::AlterTable => format!(
                "ALTER TABLE {} RENAME TO {}",
                self.quote_if_needed(table),
                self.quote_if_needed(new_name)
            ),
            Rename::StoredProcedure => format!(
                "EXEC sp_rename {}, {}",
                self.quote_string_literal(&table.full_name()),
                self.quote_string_literal(new_name.name())
            ),
        }
    }

    /// Renames a column of `table`.
    #[must_use]
    pub fn rename_column_sql(&self, table: &Identifier, old: &Identifier, new: &Identifier) -> String {
        match self.spec.rename {
            Rename::AlterTable => format!(
                "ALTER TABLE {} RENAME COLUMN {} TO {}",
                self.quote_if_needed(table),
                self.quote_if_needed(old),
                self.quote_if_needed(new)
            ),
            Rename::StoredProcedure => format!(
                "EXEC sp_rename {}, {}, 'COLUMN'",
                self.quote_string_literal(&format!("{}.{}", table.full_name(), old.name())),
                self.quote_string_literal(new.name())
            ),
        }
    }

    /// Renames index `old` of `table` to `index`. Dialects without a native
    /// rename drop the old index and create the new definition.
    ///
    /// # Errors
    ///
    /// Propagates errors from the new index definition.
    pub fn rename_index_sql(&self, old: &Identifier, index: &Index, table: &Identifier) -> Result<Vec<String>> {
        match self.spec.index_rename {
            IndexRename::AlterIndex => Ok(vec![format!(
                "ALTER INDEX {} RENAME TO {}",
                self.qualified_index(old, table),
                self.quote_part_if_needed(index.name.name(), index.name.is_quoted())
            )]),
            IndexRename::AlterTable => Ok(vec![format!(
                "ALTER TABLE {} RENAME INDEX {} TO {}",
                self.quote_if_needed(table),
                self.quote_if_needed(old),
                self.quote_if_needed(&index.name)
            )]),
            IndexRename::DropCreate => Ok(vec![
                self.drop_index_sql(old, table),
                self.create_index_sql(index, table)?,
            ]),
        }
    }
}

fn check_columns(what: &str, name: &Identifier, columns: &[Identifier]) -> Result<()> {
    if columns.is_empty() {
        return Err(DdlError::invalid(format!(
            "{what} '{}' has no columns",
            name.full_name()
        )));
    }
    Ok(())
}
