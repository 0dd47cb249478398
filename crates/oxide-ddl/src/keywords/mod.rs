//! Reserved keyword lists.
//!
//! Each platform owns a fixed list of words that cannot be used as bare
//! identifiers. Lists are stored upper-case and indexed lazily on first
//! lookup; lookups are case-insensitive.

mod mysql;
mod postgresql;
mod sqlite;
mod sqlserver;

use std::collections::HashSet;
use std::sync::OnceLock;

/// A platform's reserved word list.
#[derive(Debug)]
pub struct KeywordList {
    name: &'static str,
    words: &'static [&'static str],
    index: OnceLock<HashSet<&'static str>>,
}

impl KeywordList {
    const fn new(name: &'static str, words: &'static [&'static str]) -> Self {
        Self {
            name,
            words,
            index: OnceLock::new(),
        }
    }

    /// Name of the platform the list belongs to.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns true if `word` is reserved, ignoring case.
    #[must_use]
    pub fn is_keyword(&self, word: &str) -> bool {
        let index = self
            .index
            .get_or_init(|| self.words.iter().copied().collect());
        index.contains(word.to_ascii_uppercase().as_str())
    }

    /// Number of reserved words in the list.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the list holds no words.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// MySQL 8 reserved words.
pub static MYSQL: KeywordList = KeywordList::new("mysql", mysql::KEYWORDS);
/// PostgreSQL reserved words.
pub static POSTGRESQL: KeywordList = KeywordList::new("postgresql", postgresql::KEYWORDS);
/// SQLite keywords.
pub static SQLITE: KeywordList = KeywordList::new("sqlite", sqlite::KEYWORDS);
/// SQL Server (T-SQL and ODBC) reserved words.
pub static SQLSERVER: KeywordList = KeywordList::new("sqlserver", sqlserver::KEYWORDS);
