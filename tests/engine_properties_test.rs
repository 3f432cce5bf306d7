use localstore_engine::{
    EngineOptions, FileHost, HostStore, LocalStorageEngine, MemoryHost, StorageEngine, StoreError,
};
use serde_json::json;
use std::sync::Arc;
use tempfile::TempDir;

fn memory_engine() -> LocalStorageEngine<Arc<MemoryHost>> {
    LocalStorageEngine::new(Arc::new(MemoryHost::new()), EngineOptions::default())
}

#[tokio::test]
async fn test_array_round_trip() {
    let engine = memory_engine();
    let values = [
        json!([]),
        json!([1, 2, 3]),
        json!(["a", 1.5, true, null]),
        json!([[1, [2]], {"nested": "object"}]),
    ];

    for (i, value) in values.iter().enumerate() {
        let key = format!("list-{}", i);
        engine.set(&key, value).await.unwrap();
        assert_eq!(engine.get(&key).await.unwrap().as_ref(), Some(value));
    }
}

#[tokio::test]
async fn test_plain_string_round_trip() {
    let engine = memory_engine();
    for text in ["hello", "", "two words", "[unterminated", "True", "{not json}"] {
        engine.set("text", &json!(text)).await.unwrap();
        assert_eq!(engine.get("text").await.unwrap(), Some(json!(text)));
    }
}

#[tokio::test]
async fn test_array_stored_as_json_text() {
    let engine = memory_engine();
    engine.set("ids", &json!([1, 2, 3])).await.unwrap();

    assert_eq!(engine.host().get_item("ids").unwrap().as_deref(), Some("[1,2,3]"));
}

#[tokio::test]
async fn test_remove_then_get_is_missing() {
    let engine = memory_engine();
    engine.set("token", &json!("abc")).await.unwrap();
    engine.remove("token").await.unwrap();

    assert_eq!(engine.get("token").await.unwrap(), None);
    engine.remove("token").await.unwrap();
}

#[tokio::test]
async fn test_clear_removes_everything() {
    let engine = memory_engine();
    engine.set("a", &json!("1x")).await.unwrap();
    engine.set("b", &json!([2])).await.unwrap();
    engine.clear().await.unwrap();

    assert_eq!(engine.get("a").await.unwrap(), None);
    assert_eq!(engine.get("b").await.unwrap(), None);
    assert!(engine.host().is_empty().unwrap());
}

#[tokio::test]
async fn test_literal_strings_decode_on_read() {
    let engine = memory_engine();

    engine.set("k", &json!("true")).await.unwrap();
    assert_eq!(engine.get("k").await.unwrap(), Some(json!(true)));

    engine.set("k", &json!("123")).await.unwrap();
    assert_eq!(engine.get("k").await.unwrap(), Some(json!(123)));

    engine.set("k", &json!("null")).await.unwrap();
    assert_eq!(engine.get("k").await.unwrap(), Some(serde_json::Value::Null));
}

#[tokio::test]
async fn test_count_scenario() {
    let engine = memory_engine();
    engine.set("count", &json!(42)).await.unwrap();

    let value = engine.get("count").await.unwrap().unwrap();
    assert!(value.is_number());
    assert_eq!(value, json!(42));
}

#[tokio::test]
async fn test_quota_exceeded_keeps_previous_value() {
    let host = Arc::new(MemoryHost::with_quota(16));
    let engine = LocalStorageEngine::new(host.clone(), EngineOptions::default());

    engine.set("draft", &json!("short")).await.unwrap();
    let err = engine
        .set("draft", &json!("this value is far too long"))
        .await
        .unwrap_err();

    assert!(matches!(err, StoreError::QuotaExceeded { .. }));
    assert_eq!(engine.get("draft").await.unwrap(), Some(json!("short")));
    assert_eq!(host.get_item("draft").unwrap().as_deref(), Some("short"));
}

#[tokio::test]
async fn test_host_errors_forwarded() {
    struct BrokenHost;

    impl HostStore for BrokenHost {
        fn get_item(&self, _key: &str) -> localstore_engine::Result<Option<String>> {
            Err(StoreError::Host {
                message: "read failed".to_string(),
            })
        }
        fn set_item(&self, _key: &str, _value: &str) -> localstore_engine::Result<()> {
            Err(StoreError::Host {
                message: "write failed".to_string(),
            })
        }
        fn remove_item(&self, _key: &str) -> localstore_engine::Result<()> {
            Err(StoreError::Host {
                message: "remove failed".to_string(),
            })
        }
        fn clear(&self) -> localstore_engine::Result<()> {
            Err(StoreError::Host {
                message: "clear failed".to_string(),
            })
        }
    }

    let engine = LocalStorageEngine::new(BrokenHost, EngineOptions::default());

    let messages = [
        engine.get("k").await.unwrap_err().to_string(),
        engine.set("k", &json!("v")).await.unwrap_err().to_string(),
        engine.remove("k").await.unwrap_err().to_string(),
        engine.clear().await.unwrap_err().to_string(),
    ];
    assert!(messages[0].contains("read failed"));
    assert!(messages[1].contains("write failed"));
    assert!(messages[2].contains("remove failed"));
    assert!(messages[3].contains("clear failed"));
}

#[tokio::test]
async fn test_file_engine_persists_across_reopen() {
    let temp_dir = TempDir::new().unwrap();

    {
        let host = FileHost::open(temp_dir.path(), None).unwrap();
        let engine = LocalStorageEngine::new(host, EngineOptions::default());
        engine.set("ids", &json!([1, 2, 3])).await.unwrap();
        engine.set("name", &json!("plain text")).await.unwrap();
    }

    let host = FileHost::open(temp_dir.path(), None).unwrap();
    let engine = LocalStorageEngine::new(host, EngineOptions::default());
    assert_eq!(engine.get("ids").await.unwrap(), Some(json!([1, 2, 3])));
    assert_eq!(engine.get("name").await.unwrap(), Some(json!("plain text")));

    engine.clear().await.unwrap();
    assert_eq!(engine.get("ids").await.unwrap(), None);
}

#[test]
fn test_unopenable_store_is_host_unavailable() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("file");
    std::fs::write(&blocker, "x").unwrap();

    let err = FileHost::open(blocker.join("store"), None).unwrap_err();
    assert!(matches!(err, StoreError::HostUnavailable { .. }));
}

#[tokio::test]
async fn test_deep_arrays_round_trip_or_are_rejected() {
    let engine = memory_engine();
    let nested = |depth: usize| {
        let mut value = json!([]);
        for _ in 1..depth {
            value = serde_json::Value::Array(vec![value]);
        }
        value
    };

    let accepted = nested(localstore_engine::core::normalizer::MAX_NESTING_DEPTH);
    engine.set("deep", &accepted).await.unwrap();
    assert_eq!(engine.get("deep").await.unwrap(), Some(accepted.clone()));

    let err = engine.set("deep", &nested(200)).await.unwrap_err();
    assert!(matches!(err, StoreError::UnsupportedValue { .. }));
    assert_eq!(engine.get("deep").await.unwrap(), Some(accepted));
}
