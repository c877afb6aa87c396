use fluesterpost::domain::CacheKey;
use fluesterpost::infrastructure::store::{AudioCache, AudioCacheError, BLOB_EXTENSION};

fn create_test_cache() -> (tempfile::TempDir, AudioCache) {
    let dir = tempfile::TempDir::new().unwrap();
    let cache = AudioCache::new(dir.path()).unwrap();
    (dir, cache)
}

fn blob_count(dir: &tempfile::TempDir) -> usize {
    std::fs::read_dir(dir.path()).unwrap().count()
}

#[tokio::test]
async fn given_audio_bytes_when_put_then_resolve_round_trips_content() {
    let (_dir, cache) = create_test_cache();
    let data = b"fake audio bytes";

    let (key, path) = cache.put(data).await.unwrap();

    let resolved = cache.resolve(&key).await.unwrap();
    assert_eq!(resolved, path);
    assert_eq!(std::fs::read(&resolved).unwrap(), data);
}

#[tokio::test]
async fn given_same_bytes_when_put_twice_then_exactly_one_blob_exists() {
    let (dir, cache) = create_test_cache();
    let data = b"duplicate upload";

    let (first_key, first_path) = cache.put(data).await.unwrap();
    let (second_key, second_path) = cache.put(data).await.unwrap();

    assert_eq!(first_key, second_key);
    assert_eq!(first_path, second_path);
    assert_eq!(blob_count(&dir), 1);
}

#[tokio::test]
async fn given_put_blob_when_inspecting_then_filename_is_hex_digest_with_extension() {
    let (_dir, cache) = create_test_cache();
    let data = b"named by digest";

    let (key, path) = cache.put(data).await.unwrap();

    let file_name = path.file_name().unwrap().to_str().unwrap();
    assert_eq!(file_name, format!("{}.{}", key.to_hex(), BLOB_EXTENSION));
    assert_eq!(key.to_hex().len(), 64);
}

#[tokio::test]
async fn given_unknown_key_when_resolving_then_returns_not_found() {
    let (_dir, cache) = create_test_cache();
    let key = CacheKey::of(b"never stored");

    let result = cache.resolve(&key).await;

    assert!(matches!(result, Err(AudioCacheError::NotFound(_))));
}

#[tokio::test]
async fn given_distinct_bytes_when_put_then_each_gets_its_own_blob() {
    let (dir, cache) = create_test_cache();

    let (key_a, _) = cache.put(b"first upload").await.unwrap();
    let (key_b, _) = cache.put(b"second upload").await.unwrap();

    assert_ne!(key_a, key_b);
    assert_eq!(blob_count(&dir), 2);
}

#[tokio::test]
async fn given_put_when_complete_then_no_staging_files_remain() {
    let (dir, cache) = create_test_cache();

    cache.put(b"atomic write").await.unwrap();

    let leftovers: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "tmp"))
        .collect();
    assert!(leftovers.is_empty());
}
