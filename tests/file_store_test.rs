use chrono::{Duration, Utc};
use sprout::model::PlantId;
use sprout::persistence::{KvPersistence, Persistence};
use sprout::registry::Registry;
use sprout::status::{status_at, Status};
use sprout::store::fs::FileStore;
use sprout::store::KeyValueStore;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FileStore) {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join("data"));
    (dir, store)
}

#[test]
fn test_file_store_get_set() {
    let (_dir, store) = setup();

    // Missing key, and no directory yet
    assert_eq!(store.get("plants").unwrap(), None);

    store.set("plants", "[]").unwrap();
    assert_eq!(store.get("plants").unwrap().as_deref(), Some("[]"));

    store.set("plants", "[1]").unwrap();
    assert_eq!(store.get("plants").unwrap().as_deref(), Some("[1]"));
}

#[test]
fn test_file_store_atomic_write_artifacts() {
    let (_dir, store) = setup();
    store.set("plants", "[]").unwrap();

    assert!(store.key_path("plants").exists());

    let entries = fs::read_dir(store.root()).unwrap();
    for entry in entries {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_registry_survives_restart() {
    let (_dir, store) = setup();
    let root = store.root().to_path_buf();

    let (fern, basil) = {
        let mut registry = Registry::open(KvPersistence::new(store));
        let fern = registry.create("Fern", 7).unwrap();
        let basil = registry.create("  Basil ", 2).unwrap();
        registry.mark_watered(fern);
        (fern, basil)
    };

    let registry = Registry::open(KvPersistence::new(FileStore::new(root)));
    let ids: Vec<PlantId> = registry.list().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![basil, fern]);
    assert_eq!(registry.get(basil).unwrap().name, "Basil");
    assert_eq!(registry.get(fern).unwrap().frequency, 7);
}

#[test]
fn test_record_layout_on_disk() {
    let (_dir, store) = setup();
    let path = store.key_path("plants");

    let mut registry = Registry::open(KvPersistence::new(store));
    let id = registry.create("Basil", 2).unwrap();

    let raw = fs::read_to_string(path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let record = &json.as_array().unwrap()[0];
    assert_eq!(record["id"], id.0);
    assert_eq!(record["name"], "Basil");
    assert_eq!(record["frequency"], 2);
    assert!(record["lastWatered"].as_str().unwrap().ends_with('Z'));
}

#[test]
fn test_corrupt_file_opens_empty_and_is_replaced_on_next_save() {
    let (_dir, store) = setup();
    store.set("plants", "{{{ definitely not json").unwrap();
    let path = store.key_path("plants");

    let mut registry = Registry::open(KvPersistence::new(store));
    assert!(registry.is_empty());

    registry.create("Fern", 3).unwrap();
    let raw = fs::read_to_string(path).unwrap();
    assert!(raw.contains("Fern"));
}

#[test]
fn test_stored_collection_reclassified_on_load() {
    let (_dir, store) = setup();
    let now = Utc::now();
    let raw = format!(
        r#"[
            {{"id": 3, "name": "Mint", "frequency": 3, "lastWatered": "{}"}},
            {{"id": 2, "name": "Basil", "frequency": 3, "lastWatered": "{}"}},
            {{"id": 1, "name": "Fern", "frequency": 3, "lastWatered": "{}"}}
        ]"#,
        (now - Duration::days(2)).to_rfc3339(),
        (now - Duration::days(3)).to_rfc3339(),
        (now - Duration::days(4)).to_rfc3339(),
    );
    store.set("plants", &raw).unwrap();

    let registry = Registry::open(KvPersistence::new(store));
    let statuses: Vec<Status> = registry
        .list()
        .iter()
        .map(|p| status_at(p, &now))
        .collect();
    assert_eq!(statuses, vec![Status::Upcoming, Status::Today, Status::Due]);
}

#[test]
fn test_unwritable_root_drops_save_silently() {
    let dir = TempDir::new().unwrap();
    // A file where the data directory should be
    let blocker = dir.path().join("data");
    fs::write(&blocker, "").unwrap();

    let persistence = KvPersistence::new(FileStore::new(blocker));
    let mut registry = Registry::open(persistence);
    let id = registry.create("Fern", 3).unwrap();

    assert!(registry.get(id).is_some());
    assert_eq!(registry.persistence().load(), None);
}
