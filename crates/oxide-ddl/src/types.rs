//! Semantic column types and the per-platform type alias registry.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::{DdlError, Result};

/// The fixed set of dialect-neutral column types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    /// 16-bit integer.
    SmallInt,
    /// 32-bit integer.
    Integer,
    /// 64-bit integer.
    BigInt,
    /// Boolean.
    Boolean,
    /// Exact numeric with precision and scale.
    Decimal,
    /// Double-precision floating point.
    Float,
    /// Character string, fixed or variable width.
    String,
    /// Large text (CLOB).
    Text,
    /// Binary string, fixed or variable width.
    Binary,
    /// Large binary object.
    Blob,
    /// Universally unique identifier.
    Guid,
    /// JSON document.
    Json,
    /// Calendar date.
    Date,
    /// Date and time without time zone.
    DateTime,
    /// Date and time with time zone.
    DateTimeTz,
    /// Time of day.
    Time,
}

impl TypeKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 16] = [
        Self::SmallInt,
        Self::Integer,
        Self::BigInt,
        Self::Boolean,
        Self::Decimal,
        Self::Float,
        Self::String,
        Self::Text,
        Self::Binary,
        Self::Blob,
        Self::Guid,
        Self::Json,
        Self::Date,
        Self::DateTime,
        Self::DateTimeTz,
        Self::Time,
    ];

    /// The canonical lower-case name of the kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SmallInt => "smallint",
            Self::Integer => "integer",
            Self::BigInt => "bigint",
            Self::Boolean => "boolean",
            Self::Decimal => "decimal",
            Self::Float => "float",
            Self::String => "string",
            Self::Text => "text",
            Self::Binary => "binary",
            Self::Blob => "blob",
            Self::Guid => "guid",
            Self::Json => "json",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::DateTimeTz => "datetimetz",
            Self::Time => "time",
        }
    }

    /// Integer kinds (the only ones that can auto-increment).
    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(self, Self::SmallInt | Self::Integer | Self::BigInt)
    }

    /// Kinds whose default values are rendered as quoted string literals.
    #[must_use]
    pub const fn is_textual(self) -> bool {
        matches!(
            self,
            Self::String | Self::Text | Self::Binary | Self::Blob | Self::Guid | Self::Json
        )
    }

    /// Date and time kinds.
    #[must_use]
    pub const fn is_temporal(self) -> bool {
        matches!(
            self,
            Self::Date | Self::DateTime | Self::DateTimeTz | Self::Time
        )
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TypeKind {
    type Err = DdlError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| DdlError::unknown_type(s))
    }
}

/// Options that influence a type declaration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypeOptions {
    /// Maximum length for string and binary kinds.
    pub length: Option<u32>,
    /// Precision for decimals (defaults to 10).
    pub precision: Option<u32>,
    /// Scale for decimals (defaults to 0).
    pub scale: Option<u32>,
    /// Fixed-width (CHAR/BINARY) instead of variable width.
    pub fixed: bool,
    /// Unsigned integer, where the platform has one.
    pub unsigned: bool,
    /// Auto-incrementing integer.
    pub autoincrement: bool,
}

impl TypeOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the length.
    #[must_use]
    pub const fn length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }

    /// Sets precision and scale.
    #[must_use]
    pub const fn precision_scale(mut self, precision: u32, scale: u32) -> Self {
        self.precision = Some(precision);
        self.scale = Some(scale);
        self
    }

    /// Marks the declaration as fixed-width.
    #[must_use]
    pub const fn fixed(mut self) -> Self {
        self.fixed = true;
        self
    }

    /// Marks the declaration as unsigned.
    #[must_use]
    pub const fn unsigned(mut self) -> Self {
        self.unsigned = true;
        self
    }

    /// Marks the declaration as auto-incrementing.
    #[must_use]
    pub const fn autoincrement(mut self) -> Self {
        self.autoincrement = true;
        self
    }
}

/// Maps database type aliases (`varchar`, `int4`, `citext`, ...) to kinds.
///
/// Each platform owns one registry, seeded from its built-in table. Lookups
/// take a shared lock; registration takes the exclusive lock.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    mappings: RwLock<HashMap<String, TypeKind>>,
}

impl TypeRegistry {
    /// Creates a registry holding the canonical kind names and the given
    /// aliases.
    #[must_use]
    pub fn with_builtins(aliases: &[(&str, TypeKind)]) -> Self {
        let mut mappings: HashMap<String, TypeKind> = TypeKind::ALL
            .into_iter()
            .map(|kind| (kind.name().to_string(), kind))
            .collect();
        for (alias, kind) in aliases {
            mappings.insert(alias.to_ascii_lowercase(), *kind);
        }
        Self {
            mappings: RwLock::new(mappings),
        }
    }

    /// Registers `alias` as a name for the kind called `kind_name`.
    ///
    /// # Errors
    ///
    /// Returns [`DdlError::UnknownType`] if `kind_name` is not a known kind.
    pub fn register(&self, alias: &str, kind_name: &str) -> Result<TypeKind> {
        let kind: TypeKind = kind_name.parse()?;
        self.mappings
            .write()
            .insert(alias.to_ascii_lowercase(), kind);
        Ok(kind)
    }

    /// Resolves an alias, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`DdlError::UnknownType`] if the alias was never registered.
    pub fn lookup(&self, alias: &str) -> Result<TypeKind> {
        self.mappings
            .read()
            .get(&alias.to_ascii_lowercase())
            .copied()
            .ok_or_else(|| DdlError::unknown_type(alias))
    }

    /// Returns true if the alias is registered.
    #[must_use]
    pub fn contains(&self, alias: &str) -> bool {
        self.mappings
            .read()
            .contains_key(&alias.to_ascii_lowercase())
    }

    /// Number of registered aliases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.mappings.read().len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mappings.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_str() {
        assert_eq!("DateTimeTz".parse::<TypeKind>().unwrap(), TypeKind::DateTimeTz);
        assert_eq!("string".parse::<TypeKind>().unwrap(), TypeKind::String);
        assert!(matches!(
            "varchar".parse::<TypeKind>(),
            Err(DdlError::UnknownType { name }) if name == "varchar"
        ));
    }

    #[test]
    fn test_kind_names_round_trip() {
        for kind in TypeKind::ALL {
            assert_eq!(kind.name().parse::<TypeKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_registry_builtins() {
        let registry = TypeRegistry::with_builtins(&[("varchar", TypeKind::String)]);
        assert_eq!(registry.lookup("VARCHAR").unwrap(), TypeKind::String);
        assert_eq!(registry.lookup("decimal").unwrap(), TypeKind::Decimal);
        assert!(registry.contains("json"));
    }

    #[test]
    fn test_registry_unknown_alias() {
        let registry = TypeRegistry::with_builtins(&[]);
        assert!(matches!(
            registry.lookup("citext"),
            Err(DdlError::UnknownType { .. })
        ));
    }

    #[test]
    fn test_register_alias() {
        let registry = TypeRegistry::with_builtins(&[]);
        let kind = registry.register("CIText", "text").unwrap();
        assert_eq!(kind, TypeKind::Text);
        assert_eq!(registry.lookup("citext").unwrap(), TypeKind::Text);
    }

    #[test]
    fn test_register_to_unknown_kind_fails() {
        let registry = TypeRegistry::with_builtins(&[]);
        let before = registry.len();
        assert!(matches!(
            registry.register("money", "currency"),
            Err(DdlError::UnknownType { name }) if name == "currency"
        ));
        assert_eq!(registry.len(), before);
    }

    #[test]
    fn test_registries_are_independent() {
        let a = TypeRegistry::with_builtins(&[]);
        let b = TypeRegistry::with_builtins(&[]);
        a.register("citext", "text").unwrap();
        assert!(a.contains("citext"));
        assert!(!b.contains("citext"));
    }
}
