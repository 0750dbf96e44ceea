use simplenotes_core::{
    DraftPatch, KeyValueStore, ManualClock, MemoryStore, NotesStore, NOTES_KEY, SELECTED_KEY,
};
use uuid::Uuid;

fn store_over(
    backing: MemoryStore,
    start_ms: i64,
) -> (NotesStore<MemoryStore, ManualClock>, ManualClock) {
    let clock = ManualClock::new(start_ms);
    let store = NotesStore::new(backing, clock.clone());
    (store, clock)
}

#[test]
fn persist_then_load_round_trips_the_collection() {
    let (mut store, clock) = store_over(MemoryStore::new(), 1_000);
    let a = store.create_note();
    clock.advance(10);
    let b = store.create_note();
    store.update_draft(DraftPatch::title("Groceries"));
    assert!(store.save_note());

    let backing = store.into_storage();
    let (mut reloaded, _clock) = store_over(backing, 2_000);
    reloaded.load_from_storage();

    assert_eq!(reloaded.notes().len(), 2);
    let ids: Vec<_> = reloaded.notes().iter().map(|n| n.id).collect();
    assert!(ids.contains(&a));
    assert!(ids.contains(&b));
    let saved = reloaded.notes().iter().find(|n| n.id == b).unwrap();
    assert_eq!(saved.title, "Groceries");
    // b was selected when the first store went away.
    assert_eq!(reloaded.selected_id(), Some(b));
    assert_eq!(reloaded.draft().title, "Groceries");
    assert!(!reloaded.is_dirty());
}

#[test]
fn unknown_persisted_selection_falls_back_to_first_note() {
    let (mut store, _clock) = store_over(MemoryStore::new(), 0);
    store.create_note();
    let front = store.create_note();

    let mut backing = store.into_storage();
    backing.set(SELECTED_KEY, &Uuid::new_v4().to_string()).unwrap();

    let (mut reloaded, _clock) = store_over(backing, 0);
    reloaded.load_from_storage();

    // Fallback is storage order, where the most recent create sits first.
    assert_eq!(reloaded.selected_id(), Some(front));
}

#[test]
fn empty_store_loads_to_empty_state() {
    let (mut store, _clock) = store_over(MemoryStore::new(), 0);
    store.load_from_storage();

    assert!(store.notes().is_empty());
    assert_eq!(store.selected_id(), None);
    assert_eq!(store.draft().title, "");
    assert_eq!(store.draft().content, "");
    assert!(!store.is_dirty());
}

#[test]
fn corrupt_payload_degrades_to_empty_collection() {
    let mut backing = MemoryStore::new();
    backing.set(NOTES_KEY, "definitely not json").unwrap();

    let (mut store, _clock) = store_over(backing, 0);
    store.load_from_storage();
    assert!(store.notes().is_empty());
    assert_eq!(store.selected_id(), None);
}

#[test]
fn non_array_payload_degrades_to_empty_collection() {
    let mut backing = MemoryStore::new();
    backing.set(NOTES_KEY, r#"{"not":"an array"}"#).unwrap();

    let (mut store, _clock) = store_over(backing, 0);
    store.load_from_storage();
    assert!(store.notes().is_empty());
}

#[test]
fn cleared_selection_is_stored_as_empty_string_sentinel() {
    let (mut store, _clock) = store_over(MemoryStore::new(), 0);
    store.create_note();
    store.select_note(None);

    let backing = store.into_storage();
    assert_eq!(backing.get(SELECTED_KEY).unwrap().as_deref(), Some(""));
}

#[test]
fn persist_failure_is_swallowed_and_state_survives() {
    let mut backing = MemoryStore::new();
    backing.set_fail_writes(true);

    let (mut store, _clock) = store_over(backing, 0);
    let id = store.create_note();

    // The write failed silently; in-memory state is still authoritative.
    assert_eq!(store.notes().len(), 1);
    assert_eq!(store.selected_id(), Some(id));

    store.update_draft(DraftPatch::title("still works"));
    assert!(store.save_note());
    assert_eq!(store.notes()[0].title, "still works");
}
