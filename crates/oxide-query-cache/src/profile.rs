//! Cache profiles and key generation.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::cache::ResultCache;
use crate::error::{CacheError, Result};
use crate::params::{ParamTypes, QueryParams};

/// Connection parameter left out of the connection digest.
const PASSWORD_PARAM: &str = "password";

/// How a query result may be cached.
///
/// Profiles are immutable: every `with_*` method returns a new profile and
/// leaves the receiver untouched.
#[derive(Clone, Default)]
pub struct QueryCacheProfile {
    lifetime: u64,
    cache_key: Option<String>,
    result_cache: Option<Arc<dyn ResultCache>>,
}

impl QueryCacheProfile {
    /// Creates a profile with no expiry, no explicit key and no backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lifetime in seconds; `0` means no expiry.
    #[must_use]
    pub const fn lifetime(&self) -> u64 {
        self.lifetime
    }

    /// Lifetime as a duration, `None` when entries never expire.
    #[must_use]
    pub const fn lifetime_duration(&self) -> Option<Duration> {
        if self.lifetime == 0 {
            None
        } else {
            Some(Duration::from_secs(self.lifetime))
        }
    }

    /// Returns the explicit cache key.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::NoCacheKey`] if none was configured.
    pub fn cache_key(&self) -> Result<&str> {
        self.cache_key.as_deref().ok_or(CacheError::NoCacheKey)
    }

    /// The cache backend, if any.
    #[must_use]
    pub fn result_cache(&self) -> Option<&Arc<dyn ResultCache>> {
        self.result_cache.as_ref()
    }

    /// Returns a copy with the given lifetime in seconds.
    #[must_use]
    pub fn with_lifetime(&self, lifetime: u64) -> Self {
        Self {
            lifetime,
            ..self.clone()
        }
    }

    /// Returns a copy with an explicit cache key.
    #[must_use]
    pub fn with_cache_key(&self, cache_key: impl Into<String>) -> Self {
        Self {
            cache_key: Some(cache_key.into()),
            ..self.clone()
        }
    }

    /// Returns a copy using the given cache backend.
    #[must_use]
    pub fn with_result_cache(&self, result_cache: Arc<dyn ResultCache>) -> Self {
        Self {
            result_cache: Some(result_cache),
            ..self.clone()
        }
    }

    /// Derives `(short_key, long_key)` for a query.
    ///
    /// The long key encodes the SQL text, the parameters, their types and a
    /// SHA-256 digest of the connection parameters with `password` removed.
    /// The short key is the explicit cache key if one is set, otherwise the
    /// SHA-256 hex digest of the long key. Both are deterministic.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Serialization`] if a value cannot be encoded.
    pub fn generate_cache_keys(
        &self,
        sql: &str,
        params: &QueryParams,
        types: &ParamTypes,
        connection_params: &BTreeMap<String, Value>,
    ) -> Result<(String, String)> {
        let connection: BTreeMap<&str, &Value> = connection_params
            .iter()
            .filter(|(name, _)| name.as_str() != PASSWORD_PARAM)
            .map(|(name, value)| (name.as_str(), value))
            .collect();

        let long_key = format!(
            "query={sql}&params={}&types={}&connectionParams={}",
            serde_json::to_string(params)?,
            serde_json::to_string(types)?,
            sha256_hex(&serde_json::to_string(&connection)?),
        );

        let short_key = match &self.cache_key {
            Some(key) => key.clone(),
            None => sha256_hex(&long_key),
        };
        tracing::trace!(short_key = %short_key, "Generated cache keys");

        Ok((short_key, long_key))
    }
}

impl fmt::Debug for QueryCacheProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryCacheProfile")
            .field("lifetime", &self.lifetime)
            .field("cache_key", &self.cache_key)
            .field("result_cache", &self.result_cache.is_some())
            .finish()
    }
}

fn sha256_hex(data: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::cache::MemoryResultCache;

    fn keys(profile: &QueryCacheProfile, sql: &str) -> (String, String) {
        profile
            .generate_cache_keys(
                sql,
                &QueryParams::default(),
                &ParamTypes::default(),
                &BTreeMap::new(),
            )
            .unwrap()
    }

    #[test]
    fn test_long_key_layout() {
        let (_, long_key) = keys(&QueryCacheProfile::new(), "SELECT 1");
        let empty_digest = sha256_hex("{}");
        assert_eq!(
            long_key,
            format!("query=SELECT 1&params=[]&types=[]&connectionParams={empty_digest}")
        );
    }

    #[test]
    fn test_short_key_is_digest_of_long_key() {
        let (short_key, long_key) = keys(&QueryCacheProfile::new(), "SELECT 1");
        assert_eq!(short_key, sha256_hex(&long_key));
        assert_eq!(short_key.len(), 64);
    }

    #[test]
    fn test_explicit_key() {
        let profile = QueryCacheProfile::new().with_cache_key("users");
        let (short_key, _) = keys(&profile, "SELECT 1");
        assert_eq!(short_key, "users");
        assert_eq!(profile.cache_key().unwrap(), "users");
    }

    #[test]
    fn test_missing_key() {
        assert!(matches!(
            QueryCacheProfile::new().cache_key(),
            Err(CacheError::NoCacheKey)
        ));
    }

    #[test]
    fn test_with_methods_leave_receiver_untouched() {
        let base = QueryCacheProfile::new();
        let cache: Arc<dyn ResultCache> = Arc::new(MemoryResultCache::new());
        let derived = base
            .with_lifetime(30)
            .with_cache_key("k")
            .with_result_cache(cache);

        assert_eq!(base.lifetime(), 0);
        assert!(base.cache_key().is_err());
        assert!(base.result_cache().is_none());

        assert_eq!(derived.lifetime(), 30);
        assert_eq!(derived.cache_key().unwrap(), "k");
        assert!(derived.result_cache().is_some());
    }

    #[test]
    fn test_lifetime_duration() {
        assert_eq!(QueryCacheProfile::new().lifetime_duration(), None);
        assert_eq!(
            QueryCacheProfile::new().with_lifetime(5).lifetime_duration(),
            Some(Duration::from_secs(5))
        );
    }

    #[test]
    fn test_password_is_excluded() {
        let profile = QueryCacheProfile::new();
        let mut connection = BTreeMap::new();
        connection.insert("host".to_string(), json!("localhost"));
        connection.insert("password".to_string(), json!("secret"));

        let mut other = connection.clone();
        other.insert("password".to_string(), json!("different"));

        let params = QueryParams::default();
        let types = ParamTypes::default();
        let first = profile
            .generate_cache_keys("SELECT 1", &params, &types, &connection)
            .unwrap();
        let second = profile
            .generate_cache_keys("SELECT 1", &params, &types, &other)
            .unwrap();
        assert_eq!(first, second);
        assert!(!first.1.contains("secret"));
    }
}
