//! Identifier parsing and quoting primitives.
//!
//! An [`Identifier`] is the name of a schema asset (table, column, index,
//! constraint) as the caller wrote it. It remembers the optional schema
//! namespace (`schema.table`) and whether the caller explicitly delimited it
//! (`` `select` ``, `"select"` or `[select]`), which forces quoting on every
//! platform.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Names matching this pattern never need quoting unless they are reserved.
static PLAIN_IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_$]*$").expect("identifier pattern is valid")
});

/// Separator between a namespace and a name.
pub const SEPARATOR: char = '.';

/// A possibly schema-qualified, possibly delimited identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Identifier {
    namespace: Option<String>,
    name: String,
    quoted: bool,
}

impl Identifier {
    /// Parses an identifier, splitting off the namespace and stripping
    /// explicit delimiters.
    #[must_use]
    pub fn new(raw: impl AsRef<str>) -> Self {
        let mut parts = split_parts(raw.as_ref());
        let mut quoted = false;
        let mut stripped: Vec<String> = parts
            .drain(..)
            .map(|part| match strip_delimiters(&part) {
                Some(inner) => {
                    quoted = true;
                    inner
                }
                None => part,
            })
            .collect();

        let name = stripped.pop().unwrap_or_default();
        let namespace = if stripped.is_empty() {
            None
        } else {
            Some(stripped.join(&SEPARATOR.to_string()))
        };

        Self {
            namespace,
            name,
            quoted,
        }
    }

    /// The unqualified name, without delimiters.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The schema namespace, if the identifier was qualified.
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Whether the caller explicitly delimited the identifier.
    #[must_use]
    pub const fn is_quoted(&self) -> bool {
        self.quoted
    }

    /// `namespace.name` without any delimiters.
    #[must_use]
    pub fn full_name(&self) -> String {
        match &self.namespace {
            Some(ns) => format!("{ns}{SEPARATOR}{}", self.name),
            None => self.name.clone(),
        }
    }

    /// The namespace (if any) followed by the name.
    pub fn parts(&self) -> impl Iterator<Item = &str> {
        self.namespace
            .as_deref()
            .into_iter()
            .chain(std::iter::once(self.name.as_str()))
    }

    /// Returns true if the identifier has no name.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }

    /// Case-insensitive comparison of the unquoted full names.
    #[must_use]
    pub fn matches(&self, other: &str) -> bool {
        self.full_name().eq_ignore_ascii_case(&Self::new(other).full_name())
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let render = |part: &str| {
            if self.quoted {
                quote_with(part, '`', '`')
            } else {
                part.to_string()
            }
        };
        let rendered: Vec<String> = self.parts().map(render).collect();
        f.write_str(&rendered.join(&SEPARATOR.to_string()))
    }
}

impl From<&str> for Identifier {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Identifier {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<Identifier> for String {
    fn from(ident: Identifier) -> Self {
        ident.to_string()
    }
}

/// Wraps `part` in the given delimiters, doubling every embedded closing
/// delimiter.
#[must_use]
pub fn quote_with(part: &str, open: char, close: char) -> String {
    let doubled: String = [close, close].iter().collect();
    format!("{open}{}{close}", part.replace(close, &doubled))
}

/// Reverses quoting: strips delimiters from every part and collapses doubled
/// closing delimiters. Undelimited parts are returned unchanged.
#[must_use]
pub fn unquote_identifier(quoted: &str) -> String {
    split_parts(quoted)
        .into_iter()
        .map(|part| strip_delimiters(&part).unwrap_or(part))
        .collect::<Vec<_>>()
        .join(&SEPARATOR.to_string())
}

/// Returns true if `part` contains characters that force quoting.
#[must_use]
pub fn requires_quoting(part: &str) -> bool {
    !PLAIN_IDENTIFIER.is_match(part)
}

const fn closing_delimiter(open: char) -> Option<char> {
    match open {
        '`' => Some('`'),
        '"' => Some('"'),
        '[' => Some(']'),
        _ => None,
    }
}

/// Splits on the separator, ignoring separators inside delimited parts.
fn split_parts(raw: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut closer: Option<char> = None;
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        match closer {
            Some(close) if c == close => {
                current.push(c);
                if chars.peek() == Some(&close) {
                    current.push(close);
                    chars.next();
                } else {
                    closer = None;
                }
            }
            Some(_) => current.push(c),
            None if c == SEPARATOR => parts.push(std::mem::take(&mut current)),
            None => {
                if current.is_empty() {
                    closer = closing_delimiter(c);
                }
                current.push(c);
            }
        }
    }
    parts.push(current);
    parts
}

fn strip_delimiters(part: &str) -> Option<String> {
    let open = part.chars().next()?;
    let close = closing_delimiter(open)?;
    if part.len() < 2 || !part.ends_with(close) {
        return None;
    }
    let inner = &part[open.len_utf8()..part.len() - close.len_utf8()];
    let doubled: String = [close, close].iter().collect();
    Some(inner.replace(&doubled, &close.to_string()))
}
