//! Type, column, default and comment declarations.

use super::dialect::{AutoIncrement, Comments};
use super::Platform;
use crate::error::{DdlError, Result};
use crate::identifier::Identifier;
use crate::schema::{Column, DefaultValue};
use crate::types::{TypeKind, TypeOptions};

impl Platform {
    /// Declares `kind` with the given options.
    ///
    /// Decimals always carry `(precision, scale)`, defaulting to `(10, 0)`.
    /// Floats always use the double-precision keyword and ignore precision
    /// and scale. Strings and binaries carry a length only when one is given
    /// or the dialect has a default length.
    ///
    /// # Errors
    ///
    /// Returns [`DdlError::UnsupportedOperation`] for GUID columns on
    /// dialects without a native UUID type.
    pub fn type_declaration_sql(&self, kind: TypeKind, options: &TypeOptions) -> Result<String> {
        let types = &self.spec.types;
        let sql = match kind {
            TypeKind::SmallInt => self.integer_declaration(types.small_int, options),
            TypeKind::Integer => self.integer_declaration(types.integer, options),
            TypeKind::BigInt => self.integer_declaration(types.big_int, options),
            TypeKind::Boolean => types.boolean.to_string(),
            TypeKind::Decimal => format!(
                "{}({}, {})",
                types.decimal,
                options.precision.unwrap_or(10),
                options.scale.unwrap_or(0)
            ),
            TypeKind::Float => types.float.to_string(),
            TypeKind::String => {
                let keyword = if options.fixed { types.char } else { types.varchar };
                sized(keyword, options.length.or(types.default_string_length))
            }
            TypeKind::Binary => {
                let keyword = if options.fixed {
                    types.binary
                } else {
                    types.varbinary
                };
                if types.binary_takes_length {
                    sized(keyword, options.length.or(types.default_binary_length))
                } else {
                    keyword.to_string()
                }
            }
            TypeKind::Text => types.clob.to_string(),
            TypeKind::Blob => types.blob.to_string(),
            TypeKind::Json => types.json.unwrap_or(types.clob).to_string(),
            TypeKind::Guid => types
                .guid
                .ok_or_else(|| self.unsupported("GUID type declaration"))?
                .to_string(),
            TypeKind::Date => types.date.to_string(),
            TypeKind::DateTime => types.datetime.to_string(),
            TypeKind::DateTimeTz => types.datetimetz.to_string(),
            TypeKind::Time => types.time.to_string(),
        };
        Ok(sql)
    }

    fn integer_declaration(&self, keyword: &str, options: &TypeOptions) -> String {
        let types = &self.spec.types;
        if options.autoincrement && self.spec.autoincrement == AutoIncrement::InlinePrimaryKey {
            return format!("{} PRIMARY KEY AUTOINCREMENT", types.integer);
        }
        let mut sql = keyword.to_string();
        if options.unsigned {
            if let Some(suffix) = types.unsigned {
                sql.push_str(suffix);
            }
        }
        if options.autoincrement {
            if let AutoIncrement::Suffix(suffix) = self.spec.autoincrement {
                sql.push_str(suffix);
            }
        }
        sql
    }

    /// Declares a column as it appears inside CREATE TABLE.
    ///
    /// # Errors
    ///
    /// Fails when the column's type cannot be declared on this dialect.
    pub fn column_declaration_sql(&self, column: &Column) -> Result<String> {
        self.column_declaration(None, column, true)
    }

    /// Declares every column, comma-separated.
    ///
    /// # Errors
    ///
    /// Fails when any column's type cannot be declared on this dialect.
    pub fn column_declaration_list_sql(&self, columns: &[Column]) -> Result<String> {
        let declarations = columns
            .iter()
            .map(|column| self.column_declaration_sql(column))
            .collect::<Result<Vec<_>>>()?;
        Ok(declarations.join(", "))
    }

    /// Declares a column. With a table, SQL Server defaults become named
    /// constraints so they can be dropped later.
    pub(crate) fn column_declaration(
        &self,
        table: Option<&Identifier>,
        column: &Column,
        with_default: bool,
    ) -> Result<String> {
        let name = self.quote_if_needed(&column.name);
        if let Some(definition) = &column.column_definition {
            return Ok(format!("{name} {definition}"));
        }

        let type_sql = self
            .type_declaration_sql(column.kind, &column.type_options())
            .map_err(|err| match err {
                DdlError::UnsupportedOperation {
                    operation,
                    platform,
                } => DdlError::UnsupportedOperation {
                    operation: format!("{operation} for column '{}'", column.name.full_name()),
                    platform,
                },
                other => other,
            })?;

        let mut sql = format!("{name} {type_sql}");
        if self.spec.supports_table_options {
            if let Some(charset) = column.platform_options.get("charset") {
                sql.push_str(&format!(" CHARACTER SET {charset}"));
            }
        }
        if with_default {
            match table {
                Some(table) if self.spec.named_default_constraints => {
                    sql.push_str(&self.default_constraint_declaration_sql(table, column));
                }
                _ => sql.push_str(&self.default_value_declaration_sql(column)),
            }
        }
        if column.notnull {
            sql.push_str(" NOT NULL");
        }
        if let Some(collation) = column.platform_options.get("collation") {
            sql.push_str(&format!(" COLLATE {collation}"));
        }
        if self.spec.comments == Comments::Inline {
            if let Some(comment) = column.comment_text() {
                sql.push(' ');
                sql.push_str(&self.inline_column_comment_sql(comment)?);
            }
        }
        Ok(sql)
    }

    /// The ` DEFAULT ...` clause of a column, or an empty string.
    ///
    /// Nullable columns without a default get ` DEFAULT NULL`. Text defaults
    /// are quoted for textual kinds; temporal kinds emit the dialect's
    /// current date/time expression raw when the default names it.
    #[must_use]
    pub fn default_value_declaration_sql(&self, column: &Column) -> String {
        match self.default_literal_sql(column) {
            Some(literal) => format!(" DEFAULT {literal}"),
            None if !column.notnull => " DEFAULT NULL".to_string(),
            None => String::new(),
        }
    }

    fn default_constraint_declaration_sql(&self, table: &Identifier, column: &Column) -> String {
        match (&column.default, self.default_literal_sql(column)) {
            (Some(value), Some(literal)) if *value != DefaultValue::Null => format!(
                " CONSTRAINT {} DEFAULT {literal}",
                self.default_constraint_name(table, &column.name)
            ),
            _ => self.default_value_declaration_sql(column),
        }
    }

    /// Name of the constraint holding a SQL Server column default.
    pub(crate) fn default_constraint_name(&self, table: &Identifier, column: &Identifier) -> String {
        self.quote_part_if_needed(&format!("DF_{}_{}", table.name(), column.name()), false)
    }

    /// The literal of a column's default, if it has one.
    pub(crate) fn default_literal_sql(&self, column: &Column) -> Option<String> {
        let value = column.default.as_ref()?;
        let spec = self.spec;
        let literal = match value {
            DefaultValue::Null => "NULL".to_string(),
            DefaultValue::Expression(expr) => expr.clone(),
            DefaultValue::Bool(b) => self.boolean_literal_sql(*b).to_string(),
            DefaultValue::Integer(i) if column.kind.is_textual() => {
                self.quote_string_literal(&i.to_string())
            }
            DefaultValue::Integer(i) if column.kind == TypeKind::Boolean => {
                self.boolean_literal_sql(*i != 0).to_string()
            }
            DefaultValue::Integer(i) => i.to_string(),
            DefaultValue::Float(f) if column.kind.is_textual() => {
                self.quote_string_literal(&f.to_string())
            }
            DefaultValue::Float(f) => f.to_string(),
            DefaultValue::DateTime(dt) => {
                self.quote_string_literal(&dt.format(spec.datetime_format).to_string())
            }
            DefaultValue::Date(d) => {
                self.quote_string_literal(&d.format(spec.date_format).to_string())
            }
            DefaultValue::Time(t) => {
                self.quote_string_literal(&t.format(spec.time_format).to_string())
            }
            DefaultValue::Text(text) => self.text_default_literal(column.kind, text),
        };
        Some(literal)
    }

    fn text_default_literal(&self, kind: TypeKind, text: &str) -> String {
        let current = match kind {
            TypeKind::DateTime | TypeKind::DateTimeTz => Some(self.current_timestamp_sql()),
            TypeKind::Date => Some(self.current_date_sql()),
            TypeKind::Time => Some(self.current_time_sql()),
            _ => None,
        };
        if let Some(expression) = current {
            if text.eq_ignore_ascii_case(expression) {
                return expression.to_string();
            }
            return self.quote_string_literal(text);
        }

        match kind {
            TypeKind::Boolean => match text.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => self.boolean_literal_sql(true).to_string(),
                "0" | "false" | "no" | "off" => self.boolean_literal_sql(false).to_string(),
                _ => self.quote_string_literal(text),
            },
            TypeKind::SmallInt
            | TypeKind::Integer
            | TypeKind::BigInt
            | TypeKind::Decimal
            | TypeKind::Float => text.to_string(),
            _ => self.quote_string_literal(text),
        }
    }

    /// The inline `COMMENT '...'` clause.
    ///
    /// # Errors
    ///
    /// Returns [`DdlError::UnsupportedOperation`] on dialects that store
    /// comments outside the column declaration.
    pub fn inline_column_comment_sql(&self, comment: &str) -> Result<String> {
        if self.spec.comments != Comments::Inline {
            return Err(self.unsupported(format!("inline column comment '{comment}'")));
        }
        Ok(format!("COMMENT {}", self.quote_string_literal(comment)))
    }

    /// Sets (or with `None`, removes) a column comment.
    ///
    /// # Errors
    ///
    /// Returns [`DdlError::UnsupportedOperation`] on dialects with inline
    /// comments or no comments at all.
    pub fn comment_on_column_sql(
        &self,
        table: &Identifier,
        column: &Identifier,
        comment: Option<&str>,
    ) -> Result<String> {
        match self.spec.comments {
            Comments::CommentOn => {
                let value = comment
                    .filter(|c| !c.is_empty())
                    .map_or_else(|| "NULL".to_string(), |c| self.quote_string_literal(c));
                Ok(format!(
                    "COMMENT ON COLUMN {}.{} IS {value}",
                    self.quote_if_needed(table),
                    self.quote_if_needed(column)
                ))
            }
            Comments::ExtendedProperty => Ok(match comment.filter(|c| !c.is_empty()) {
                Some(text) => {
                    self.extended_property_sql("sp_addextendedproperty", table, column, Some(text))
                }
                None => self.extended_property_sql("sp_dropextendedproperty", table, column, None),
            }),
            Comments::Inline | Comments::Unsupported => Err(self.unsupported(format!(
                "COMMENT ON COLUMN {}.{}",
                table.full_name(),
                column.full_name()
            ))),
        }
    }

    /// `EXEC sp_*extendedproperty` call for a column description.
    pub(crate) fn extended_property_sql(
        &self,
        procedure: &str,
        table: &Identifier,
        column: &Identifier,
        comment: Option<&str>,
    ) -> String {
        let value = comment
            .map(|c| format!("N{}, ", self.quote_string_literal(c)))
            .unwrap_or_default();
        format!(
            "EXEC {procedure} N'MS_Description', {value}N'SCHEMA', N{}, N'TABLE', N{}, N'COLUMN', N{}",
            self.quote_string_literal(table.namespace().unwrap_or("dbo")),
            self.quote_string_literal(table.name()),
            self.quote_string_literal(column.name()),
        )
    }
}

fn sized(keyword: &str, length: Option<u32>) -> String {
    match length {
        Some(length) => format!("{keyword}({length})"),
        None => keyword.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn test_decimal_defaults() {
        let platform = Platform::postgresql();
        assert_eq!(
            platform
                .type_declaration_sql(TypeKind::Decimal, &TypeOptions::new())
                .unwrap(),
            "NUMERIC(10, 0)"
        );
        assert_eq!(
            platform
                .type_declaration_sql(TypeKind::Decimal, &TypeOptions::new().precision_scale(12, 4))
                .unwrap(),
            "NUMERIC(12, 4)"
        );
    }

    #[test]
    fn test_float_ignores_precision_and_scale() {
        let options = TypeOptions::new().precision_scale(8, 2);
        assert_eq!(
            Platform::mysql()
                .type_declaration_sql(TypeKind::Float, &options)
                .unwrap(),
            "DOUBLE PRECISION"
        );
        assert_eq!(
            Platform::sqlserver()
                .type_declaration_sql(TypeKind::Float, &options)
                .unwrap(),
            "FLOAT"
        );
    }

    #[test]
    fn test_string_lengths() {
        let pg = Platform::postgresql();
        let mysql = Platform::mysql();
        assert_eq!(
            pg.type_declaration_sql(TypeKind::String, &TypeOptions::new())
                .unwrap(),
            "VARCHAR"
        );
        assert_eq!(
            mysql
                .type_declaration_sql(TypeKind::String, &TypeOptions::new())
                .unwrap(),
            "VARCHAR(255)"
        );
        assert_eq!(
            mysql
                .type_declaration_sql(TypeKind::String, &TypeOptions::new().length(2).fixed())
                .unwrap(),
            "CHAR(2)"
        );
        assert_eq!(
            Platform::sqlserver()
                .type_declaration_sql(TypeKind::String, &TypeOptions::new().length(50))
                .unwrap(),
            "NVARCHAR(50)"
        );
    }

    #[test]
    fn test_binary_declarations() {
        assert_eq!(
            Platform::mysql()
                .type_declaration_sql(TypeKind::Binary, &TypeOptions::new().length(16).fixed())
                .unwrap(),
            "BINARY(16)"
        );
        assert_eq!(
            Platform::postgresql()
                .type_declaration_sql(TypeKind::Binary, &TypeOptions::new().length(16))
                .unwrap(),
            "BYTEA"
        );
    }

    #[test]
    fn test_json_falls_back_to_clob() {
        let options = TypeOptions::new();
        assert_eq!(
            Platform::sqlite()
                .type_declaration_sql(TypeKind::Json, &options)
                .unwrap(),
            "CLOB"
        );
        assert_eq!(
            Platform::postgresql()
                .type_declaration_sql(TypeKind::Json, &options)
                .unwrap(),
            "JSONB"
        );
    }

    #[test]
    fn test_guid_unsupported_on_mysql() {
        let err = Platform::mysql()
            .column_declaration_sql(&Column::new("id", TypeKind::Guid))
            .unwrap_err();
        match err {
            DdlError::UnsupportedOperation {
                operation,
                platform,
            } => {
                assert_eq!(platform, "mysql");
                assert!(operation.contains("GUID"));
                assert!(operation.contains("'id'"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_integer_suffixes() {
        let options = TypeOptions::new().unsigned().autoincrement();
        assert_eq!(
            Platform::mysql()
                .type_declaration_sql(TypeKind::BigInt, &options)
                .unwrap(),
            "BIGINT UNSIGNED AUTO_INCREMENT"
        );
        assert_eq!(
            Platform::postgresql()
                .type_declaration_sql(TypeKind::Integer, &options)
                .unwrap(),
            "INT GENERATED BY DEFAULT AS IDENTITY"
        );
        assert_eq!(
            Platform::sqlite()
                .type_declaration_sql(TypeKind::BigInt, &options)
                .unwrap(),
            "INTEGER PRIMARY KEY AUTOINCREMENT"
        );
    }

    #[test]
    fn test_column_declaration() {
        let platform = Platform::mysql();
        let column = Column::new("name", TypeKind::String)
            .length(100)
            .platform_option("charset", "utf8mb4")
            .platform_option("collation", "utf8mb4_bin")
            .comment("display name");
        assert_eq!(
            platform.column_declaration_sql(&column).unwrap(),
            "name VARCHAR(100) CHARACTER SET utf8mb4 NOT NULL COLLATE utf8mb4_bin \
             COMMENT 'display name'"
        );
    }

    #[test]
    fn test_column_definition_override() {
        let column = Column::new("geom", TypeKind::Blob).column_definition("POINT NOT NULL");
        assert_eq!(
            Platform::mysql().column_declaration_sql(&column).unwrap(),
            "geom POINT NOT NULL"
        );
    }

    #[test]
    fn test_reserved_column_name_is_quoted() {
        let column = Column::new("order", TypeKind::Integer);
        assert_eq!(
            Platform::postgresql().column_declaration_sql(&column).unwrap(),
            "\"order\" INT NOT NULL"
        );
    }

    #[test]
    fn test_default_values() {
        let platform = Platform::postgresql();
        let text = Column::new("status", TypeKind::String).default("it's");
        assert_eq!(
            platform.default_value_declaration_sql(&text),
            " DEFAULT 'it''s'"
        );

        let nullable = Column::new("bio", TypeKind::Text).nullable();
        assert_eq!(
            platform.default_value_declaration_sql(&nullable),
            " DEFAULT NULL"
        );

        let required = Column::new("bio", TypeKind::Text);
        assert_eq!(platform.default_value_declaration_sql(&required), "");

        let flag = Column::new("active", TypeKind::Boolean).default(true);
        assert_eq!(platform.default_value_declaration_sql(&flag), " DEFAULT true");

        let count = Column::new("count", TypeKind::Integer).default(0_i64);
        assert_eq!(platform.default_value_declaration_sql(&count), " DEFAULT 0");
    }

    #[test]
    fn test_integer_default_on_boolean_column() {
        let enabled = Column::new("enabled", TypeKind::Boolean).default(1_i64);
        let hidden = Column::new("hidden", TypeKind::Boolean).default(0_i64);
        let postgresql = Platform::postgresql();
        assert_eq!(postgresql.default_value_declaration_sql(&enabled), " DEFAULT true");
        assert_eq!(postgresql.default_value_declaration_sql(&hidden), " DEFAULT false");

        let many = Column::new("many", TypeKind::Boolean).default(7_i64);
        assert_eq!(postgresql.default_value_declaration_sql(&many), " DEFAULT true");
        assert_eq!(
            Platform::sqlserver().default_value_declaration_sql(&many),
            " DEFAULT 1"
        );
    }

    #[test]
    fn test_temporal_defaults() {
        let platform = Platform::mysql();
        let now = Column::new("created_at", TypeKind::DateTime).default("current_timestamp");
        assert_eq!(
            platform.default_value_declaration_sql(&now),
            " DEFAULT CURRENT_TIMESTAMP"
        );

        let fixed = Column::new("created_at", TypeKind::DateTime).default(DefaultValue::DateTime(
            NaiveDate::from_ymd_opt(2024, 1, 2)
                .unwrap()
                .and_hms_opt(3, 4, 5)
                .unwrap(),
        ));
        assert_eq!(
            platform.default_value_declaration_sql(&fixed),
            " DEFAULT '2024-01-02 03:04:05'"
        );

        let day = Column::new("day", TypeKind::Date).default("CURRENT_DATE");
        assert_eq!(
            platform.default_value_declaration_sql(&day),
            " DEFAULT CURRENT_DATE"
        );
    }

    #[test]
    fn test_expression_default_is_raw() {
        let column = Column::new("id", TypeKind::Guid)
            .default(DefaultValue::Expression("gen_random_uuid()".to_string()));
        assert_eq!(
            Platform::postgresql().default_value_declaration_sql(&column),
            " DEFAULT gen_random_uuid()"
        );
    }

    #[test]
    fn test_inline_comments_only_on_mysql() {
        assert_eq!(
            Platform::mysql().inline_column_comment_sql("x").unwrap(),
            "COMMENT 'x'"
        );
        assert!(matches!(
            Platform::postgresql().inline_column_comment_sql("x"),
            Err(DdlError::UnsupportedOperation { platform: "postgresql", .. })
        ));
    }

    #[test]
    fn test_comment_on_column() {
        let table = Identifier::new("users");
        let column = Identifier::new("email");
        assert_eq!(
            Platform::postgresql()
                .comment_on_column_sql(&table, &column, Some("primary contact"))
                .unwrap(),
            "COMMENT ON COLUMN users.email IS 'primary contact'"
        );
        assert_eq!(
            Platform::postgresql()
                .comment_on_column_sql(&table, &column, None)
                .unwrap(),
            "COMMENT ON COLUMN users.email IS NULL"
        );
        assert_eq!(
            Platform::sqlserver()
                .comment_on_column_sql(&table, &column, Some("x"))
                .unwrap(),
            "EXEC sp_addextendedproperty N'MS_Description', N'x', N'SCHEMA', N'dbo', \
             N'TABLE', N'users', N'COLUMN', N'email'"
        );
        assert!(Platform::sqlite()
            .comment_on_column_sql(&table, &column, Some("x"))
            .is_err());
    }
}
