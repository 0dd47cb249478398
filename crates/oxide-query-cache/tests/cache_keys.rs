//! Cache key derivation through the public API.

use std::collections::BTreeMap;
use std::sync::Arc;

use oxide_query_cache::{
    MemoryResultCache, ParamTypes, QueryCacheProfile, QueryParams, ResultCache,
};
use serde_json::{json, Value};

fn connection(host: &str) -> BTreeMap<String, Value> {
    let mut params = BTreeMap::new();
    params.insert("host".to_string(), json!(host));
    params.insert("dbname".to_string(), json!("app"));
    params.insert("password".to_string(), json!("hunter2"));
    params
}

fn keys(sql: &str, params: &QueryParams, types: &ParamTypes, host: &str) -> (String, String) {
    QueryCacheProfile::new()
        .generate_cache_keys(sql, params, types, &connection(host))
        .unwrap()
}

#[test]
fn test_keys_are_deterministic() {
    let params = QueryParams::from(vec![json!(1), json!("a")]);
    let types = ParamTypes::from(vec!["integer".to_string(), "string".to_string()]);
    assert_eq!(
        keys("SELECT ?", &params, &types, "db1"),
        keys("SELECT ?", &params, &types, "db1")
    );
}

#[test]
fn test_every_input_changes_long_key() {
    let params = QueryParams::from(vec![json!(1)]);
    let types = ParamTypes::from(vec!["integer".to_string()]);
    let (_, base) = keys("SELECT ?", &params, &types, "db1");

    let (_, other_sql) = keys("SELECT ? + 1", &params, &types, "db1");
    let (_, other_params) = keys("SELECT ?", &QueryParams::from(vec![json!(2)]), &types, "db1");
    let (_, other_types) = keys(
        "SELECT ?",
        &params,
        &ParamTypes::from(vec!["string".to_string()]),
        "db1",
    );
    let (_, other_connection) = keys("SELECT ?", &params, &types, "db2");

    for changed in [other_sql, other_params, other_types, other_connection] {
        assert_ne!(changed, base);
    }
}

#[test]
fn test_named_params_from_json() {
    let params: QueryParams = serde_json::from_str(r#"{"name": "x", "id": 3}"#).unwrap();
    let types: ParamTypes = serde_json::from_str(r#"{"id": "integer"}"#).unwrap();
    let (_, long_key) = keys("SELECT :id, :name", &params, &types, "db1");
    assert!(long_key.contains(r#"&params={"id":3,"name":"x"}&types={"id":"integer"}"#));
}

#[test]
fn test_profile_with_backend() {
    let cache = Arc::new(MemoryResultCache::new());
    let profile = QueryCacheProfile::new()
        .with_lifetime(60)
        .with_cache_key("user-list")
        .with_result_cache(cache.clone());

    let (short_key, long_key) = profile
        .generate_cache_keys(
            "SELECT * FROM users",
            &QueryParams::default(),
            &ParamTypes::default(),
            &connection("db1"),
        )
        .unwrap();
    assert_eq!(short_key, "user-list");

    let backend = profile.result_cache().unwrap();
    let mut rows = serde_json::Map::new();
    rows.insert(long_key.clone(), json!([{"id": 1}]));
    backend.put(&short_key, Value::Object(rows), profile.lifetime_duration());
    assert_eq!(cache.get("user-list").unwrap()[&long_key], json!([{"id": 1}]));
}
