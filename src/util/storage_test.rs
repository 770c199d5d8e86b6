use super::*;

impl FallbackStorage {
    fn is_degraded(&self) -> bool {
        self.degraded.get()
    }
}

/// Store whose every operation fails, like `localStorage` in a locked-down
/// private window.
struct BrokenStorage;

impl KeyValueStore for BrokenStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Operation { op: "read", key: key.to_owned() })
    }

    fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Operation { op: "write", key: key.to_owned() })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Err(StorageError::Operation { op: "remove", key: key.to_owned() })
    }
}

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_storage_clones_share_entries() {
    let a = MemoryStorage::default();
    let b = a.clone();
    a.insert("theme", "dark");
    assert_eq!(b.value("theme").as_deref(), Some("dark"));
    b.delete("theme");
    assert_eq!(a.value("theme"), None);
}

#[test]
fn memory_storage_trait_roundtrip() {
    let store = MemoryStorage::default();
    assert_eq!(store.get("token"), Ok(None));
    assert_eq!(store.set("token", "abc"), Ok(()));
    assert_eq!(store.get("token"), Ok(Some("abc".to_owned())));
    assert_eq!(store.remove("token"), Ok(()));
    assert_eq!(store.get("token"), Ok(None));
}

// =============================================================
// BrowserStorage outside the browser
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn browser_storage_is_unavailable_in_native_tests() {
    assert_eq!(BrowserStorage.get("token"), Err(StorageError::Unavailable));
    assert_eq!(BrowserStorage.set("token", "x"), Err(StorageError::Unavailable));
    assert_eq!(BrowserStorage.remove("token"), Err(StorageError::Unavailable));
}

// =============================================================
// FallbackStorage
// =============================================================

#[test]
fn fallback_reads_through_to_primary() {
    let primary = MemoryStorage::default();
    primary.insert("theme", "dark");
    let storage = FallbackStorage::new(primary.clone());
    assert_eq!(storage.read("theme").as_deref(), Some("dark"));
    storage.write("theme", "light");
    assert_eq!(primary.value("theme").as_deref(), Some("light"));
    assert!(!storage.is_degraded());
}

#[test]
fn fallback_degrades_to_memory_when_primary_fails() {
    let storage = FallbackStorage::new(BrokenStorage);
    assert_eq!(storage.read("token"), None);
    assert!(storage.is_degraded());

    storage.write("token", "abc123");
    assert_eq!(storage.read("token").as_deref(), Some("abc123"));

    storage.delete("token");
    assert_eq!(storage.read("token"), None);
}

#[test]
fn fallback_keeps_values_read_before_degrading() {
    let primary = MemoryStorage::default();
    primary.insert("theme", "dark");
    let storage = FallbackStorage::new(primary);
    assert_eq!(storage.read("theme").as_deref(), Some("dark"));

    storage.degrade(&StorageError::Unavailable);
    assert_eq!(storage.read("theme").as_deref(), Some("dark"));
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_fallback_works_without_a_browser() {
    let storage = FallbackStorage::browser();
    storage.write("theme", "dark");
    assert!(storage.is_degraded());
    assert_eq!(storage.read("theme").as_deref(), Some("dark"));
}
