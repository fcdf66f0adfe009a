use super::*;

#[test]
fn memory_store_round_trips_values() {
    let mut store = MemoryStore::new();
    assert_eq!(store.get("theme"), Ok(None));
    store.set("theme", "light").unwrap();
    assert_eq!(store.get("theme"), Ok(Some("light".to_owned())));
    store.set("theme", "dark").unwrap();
    assert_eq!(store.get("theme"), Ok(Some("dark".to_owned())));
}

#[test]
fn with_seeds_one_entry() {
    let store = MemoryStore::with("theme", "light");
    assert_eq!(store.get("theme"), Ok(Some("light".to_owned())));
    assert_eq!(store.get("other"), Ok(None));
}
