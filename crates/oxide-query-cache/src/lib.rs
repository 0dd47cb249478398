//! Deterministic cache keys for query results.
//!
//! A [`QueryCacheProfile`] describes how long a query result may be cached
//! and under which key. [`QueryCacheProfile::generate_cache_keys`] derives a
//! stable identity from the query text, its parameters and types, and the
//! connection settings:
//!
//! ```rust
//! use std::collections::BTreeMap;
//!
//! use oxide_query_cache::{ParamTypes, QueryCacheProfile, QueryParams};
//! use serde_json::json;
//!
//! let profile = QueryCacheProfile::new().with_lifetime(60);
//! let params = QueryParams::from(vec![json!(42)]);
//! let types = ParamTypes::from(vec!["integer".to_string()]);
//!
//! let (short_key, long_key) = profile
//!     .generate_cache_keys("SELECT * FROM users WHERE id = ?", &params, &types, &BTreeMap::new())
//!     .unwrap();
//! assert!(long_key.starts_with("query=SELECT * FROM users WHERE id = ?&params=[42]"));
//! assert_eq!(short_key.len(), 64);
//! ```

pub mod cache;
pub mod error;
pub mod params;
pub mod profile;

pub use cache::{MemoryResultCache, ResultCache};
pub use error::{CacheError, Result};
pub use params::{ParamTypes, QueryParams};
pub use profile::QueryCacheProfile;
