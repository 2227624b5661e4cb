//! Integration Tests for the Cache
//!
//! Exercises the public cache API on a real clock and a multi-threaded runtime.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use pokecache::error::CacheError;
use pokecache::Cache;

const INTERVAL: Duration = Duration::from_millis(5);

// == Expiry ==

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_reap_loop() {
    let cache = Cache::new(INTERVAL).unwrap();
    cache.add("test.com", b"data".to_vec()).await;

    assert!(cache.get("test.com").await.is_some(), "no key found");

    // Two intervals is the worst case; the rest is scheduling slack
    tokio::time::sleep(INTERVAL * 2 + Duration::from_millis(15)).await;

    assert!(cache.get("test.com").await.is_none(), "key not reaped");
    assert!(cache.is_empty().await);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_add_get_cases() {
    let cases: [(&str, &[u8]); 3] = [
        ("test1.com", b"datafortest1"),
        ("", b"datafortest2"),
        ("test2.com", b""),
    ];

    for (key, value) in cases {
        let cache = Cache::new(INTERVAL).unwrap();
        cache.add(key, value.to_vec()).await;

        let stored = cache.get(key).await;
        assert_eq!(stored.as_deref(), Some(value), "key {key:?}");
    }
}

#[tokio::test]
async fn test_zero_interval_rejected() {
    let result = Cache::new(Duration::ZERO);
    assert!(matches!(result, Err(CacheError::InvalidInterval(d)) if d.is_zero()));
}

#[tokio::test]
async fn test_shutdown_then_drop() {
    let cache = Cache::new(INTERVAL).unwrap();
    assert!(cache.is_running().await);

    cache.shutdown().await;

    assert!(!cache.is_running().await);
    drop(cache);
}

// == Concurrency ==

const WRITERS: usize = 8;
const READERS: usize = 8;
const KEYS_PER_WRITER: usize = 500;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_add_get_stress() {
    // Long interval so nothing is reaped mid-test
    let cache = Arc::new(Cache::new(Duration::from_secs(60)).unwrap());
    let mut handles = Vec::new();

    for writer in 0..WRITERS {
        let cache = cache.clone();
        handles.push(tokio::spawn(async move {
            for i in 0..KEYS_PER_WRITER {
                cache
                    .add(format!("w{writer}-{i}"), format!("v{writer}-{i}").into_bytes())
                    .await;
                cache.add("shared", format!("w{writer}").into_bytes()).await;
            }
        }));
    }

    for reader in 0..READERS {
        let cache = cache.clone();
        handles.push(tokio::spawn(async move {
            for i in 0..KEYS_PER_WRITER {
                let key = format!("w{}-{i}", (reader + i) % WRITERS);
                if let Some(value) = cache.get(&key).await {
                    // A visible value is always the complete one written for that key
                    assert_eq!(value, Bytes::from(key.replacen('w', "v", 1)));
                }
                let _ = cache.get("shared").await;
            }
        }));
    }

    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(cache.len().await, WRITERS * KEYS_PER_WRITER + 1);
    for writer in 0..WRITERS {
        for i in 0..KEYS_PER_WRITER {
            let stored = cache.get(&format!("w{writer}-{i}")).await;
            assert_eq!(stored, Some(Bytes::from(format!("v{writer}-{i}"))));
        }
    }

    let shared = cache.get("shared").await.unwrap();
    let shared = std::str::from_utf8(&shared).unwrap();
    assert!((0..WRITERS).any(|w| shared == format!("w{w}")));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_access_while_reaping() {
    let cache = Arc::new(Cache::new(Duration::from_millis(2)).unwrap());
    let mut handles = Vec::new();

    for task in 0..4 {
        let cache = cache.clone();
        handles.push(tokio::spawn(async move {
            for i in 0..200 {
                let key = format!("k{}", i % 16);
                cache.add(key.clone(), format!("t{task}").into_bytes()).await;
                let _ = cache.get(&key).await;
                if i % 50 == 0 {
                    tokio::time::sleep(Duration::from_millis(1)).await;
                }
            }
        }));
    }

    for handle in handles {
        handle.await.unwrap();
    }

    assert!(cache.len().await <= 16);
    cache.shutdown().await;
}
