use simplenotes_core::{DraftPatch, ManualClock, MemoryStore, NotesStore};

fn store_at(start_ms: i64) -> (NotesStore<MemoryStore, ManualClock>, ManualClock) {
    let clock = ManualClock::new(start_ms);
    let store = NotesStore::new(MemoryStore::new(), clock.clone());
    (store, clock)
}

#[test]
fn autosave_fires_after_the_debounce_window() {
    let (mut store, clock) = store_at(1_000);
    let id = store.create_note();

    store.update_draft(DraftPatch::title("typing"));
    clock.advance(799);
    assert!(!store.poll_autosave());

    clock.advance(1);
    assert!(store.poll_autosave());

    let note = store.notes().iter().find(|n| n.id == id).unwrap();
    assert_eq!(note.title, "typing");
    assert_eq!(note.updated_at, Some(1_800));
    assert!(!store.is_dirty());
}

#[test]
fn each_edit_restarts_the_debounce_window() {
    let (mut store, clock) = store_at(0);
    store.create_note();

    store.update_draft(DraftPatch::title("a"));
    clock.advance(400);
    store.update_draft(DraftPatch::title("ab"));

    // First edit's deadline has passed, but the second edit replaced it.
    clock.advance(500);
    assert!(!store.poll_autosave());

    clock.advance(300);
    assert!(store.poll_autosave());
    assert_eq!(store.notes()[0].title, "ab");
}

#[test]
fn fired_timer_stays_idle_until_rescheduled() {
    let (mut store, clock) = store_at(0);
    store.create_note();
    store.update_draft(DraftPatch::title("once"));
    clock.advance(800);
    assert!(store.poll_autosave());

    clock.advance(10_000);
    assert!(!store.poll_autosave());
}

#[test]
fn autosave_skips_when_selection_was_cleared() {
    let (mut store, clock) = store_at(0);
    store.create_note();
    store.update_draft(DraftPatch::title("doomed"));
    store.select_note(None);

    clock.advance(800);
    assert!(!store.poll_autosave());
    assert_eq!(store.notes()[0].title, "Untitled");
}

#[test]
fn autosave_skips_when_draft_was_reset() {
    let (mut store, clock) = store_at(0);
    let id = store.create_note();
    store.update_draft(DraftPatch::title("discarded"));
    // Reselecting resets the draft, so the pending autosave finds a clean
    // draft and does nothing.
    store.select_note(Some(id));

    clock.advance(800);
    assert!(!store.poll_autosave());
    assert_eq!(store.notes()[0].title, "Untitled");
    assert_eq!(store.notes()[0].updated_at, Some(0));
}

#[test]
fn custom_autosave_delay_is_honored() {
    let clock = ManualClock::new(0);
    let mut store = NotesStore::with_autosave_delay(MemoryStore::new(), clock.clone(), 100);
    store.create_note();
    store.update_draft(DraftPatch::content("quick"));

    clock.advance(99);
    assert!(!store.poll_autosave());
    clock.advance(1);
    assert!(store.poll_autosave());
}
