//! Response cache expiry and key normalization.

use std::time::Duration;

use recipe_finder::cache::{CACHE_TTL_SECONDS, CacheKey, ResponseCache};

#[test]
fn entries_expire_after_the_window() {
    let mut cache: ResponseCache<Vec<u64>> =
        ResponseCache::new(Duration::from_secs(CACHE_TTL_SECONDS), 4);
    let key = CacheKey::ingredients(&["chicken"]);
    cache.set_at(key.clone(), vec![1, 2], 1_000);

    assert_eq!(cache.get_at(&key, 1_000), Some(vec![1, 2]));
    assert_eq!(cache.get_at(&key, 1_000 + 3_599_999), Some(vec![1, 2]));
    assert_eq!(cache.get_at(&key, 1_000 + 3_600_000), None);
    assert!(!cache.contains(&key));
}

#[test]
fn set_then_get_with_wall_clock() {
    let mut cache = ResponseCache::new(Duration::from_secs(60), 4);
    let key = CacheKey::details(42);
    cache.set(key.clone(), "soup".to_string());
    assert_eq!(cache.get(&key).as_deref(), Some("soup"));
}

#[test]
fn equivalent_queries_share_a_key() {
    assert_eq!(
        CacheKey::ingredients(&["Rice", " chicken "]),
        CacheKey::ingredients(&["chicken", "rice", "rice"])
    );
    assert_eq!(
        CacheKey::cuisine("Thai", Some("")),
        CacheKey::cuisine("thai", None)
    );
    assert_ne!(
        CacheKey::cuisine("thai", None),
        CacheKey::ingredients(&["thai"])
    );
}

#[test]
fn capacity_evicts_least_recently_used() {
    let mut cache = ResponseCache::new(Duration::from_secs(60), 2);
    cache.set_at(CacheKey::details(1), 1, 0);
    cache.set_at(CacheKey::details(2), 2, 0);
    assert_eq!(cache.get_at(&CacheKey::details(1), 1), Some(1));
    cache.set_at(CacheKey::details(3), 3, 1);
    assert_eq!(cache.len(), 2);
    assert!(cache.contains(&CacheKey::details(1)));
    assert!(!cache.contains(&CacheKey::details(2)));
}
