//! Persistence lifecycle tests across record kinds.

use lectio::vmark::{TagRegistry, TagStyle};
use lectio::{
    load_tag_styles, save_tag_styles, History, HistoryEntry, MemoryStore, Plans, ReadingPlan,
    Settings, Storage,
};
use lectio::storage::keys;

#[test]
fn fresh_store_yields_all_defaults() {
    let store = MemoryStore::new();
    assert_eq!(Settings::load(&store), Settings::default());
    assert!(History::load(&store).is_empty());
    assert!(Plans::load(&store).plans().is_empty());
    assert_eq!(
        load_tag_styles(&store).styles(),
        TagRegistry::default_styles()
    );
}

#[test]
fn corrupted_records_fall_back_independently() {
    let mut store = MemoryStore::new();
    store.put(keys::SETTINGS, "not-json".to_string());
    store.put(keys::HISTORY, "[{broken".to_string());
    store.put(keys::PLANS, "42".to_string());
    store.put(keys::TAG_STYLES, "{\"not\":\"an array\"}".to_string());

    assert_eq!(Settings::load(&store), Settings::default());
    assert!(History::load(&store).is_empty());
    assert!(Plans::load(&store).plans().is_empty());
    assert_eq!(
        load_tag_styles(&store).styles(),
        TagRegistry::default_styles()
    );
}

#[test]
fn records_round_trip_together() {
    let mut store = MemoryStore::new();

    let mut settings = Settings::default();
    settings.version_id = "web".to_string();
    settings.save(&mut store).unwrap();

    let mut history = History::new();
    history.record(HistoryEntry {
        version_id: "web".to_string(),
        book: 43,
        chapter: 3,
        verse: 16,
        snippet: "For God so loved the world".to_string(),
        visited_at: 1_700_000_000_000,
    });
    history.save(&mut store).unwrap();

    let mut plans = Plans::new();
    plans.upsert(ReadingPlan::through_book(43).unwrap());
    plans.save(&mut store).unwrap();

    let registry = TagRegistry::from_styles(vec![
        TagStyle::new("V", "<V>", "</V>").with_class("verse"),
        TagStyle::new("wj", "<wj>", "</wj>").with_class("text-danger"),
    ]);
    save_tag_styles(&mut store, &registry).unwrap();

    assert_eq!(Settings::load(&store).version_id, "web");
    let history = History::load(&store);
    assert_eq!(history.entries()[0].book, 43);
    assert_eq!(history.entries()[0].visited_at, 1_700_000_000_000);
    let plans = Plans::load(&store);
    assert_eq!(plans.get("book-43").unwrap().len(), 21);
    assert_eq!(load_tag_styles(&store), registry);
}

#[test]
fn tag_style_override_changes_tagging() {
    let mut store = MemoryStore::new();
    // Persisted override in the stored JSON shape, words-of-Christ tag added.
    store.put(
        keys::TAG_STYLES,
        r#"[
            {"name":"V","openTag":"<V>","closeTag":"</V>","cssClass":"verse-num"},
            {"name":"wj","openTag":"<wj>","closeTag":"</wj>","cssClass":"text-danger"}
        ]"#
        .to_string(),
    );

    let registry = load_tag_styles(&store);
    let line = lectio::vmark::tag_line(
        "<V>7</V>Jesus said, <wj>Follow me</wj>",
        &registry,
        &lectio::vmark::LineContext {
            chapter: 1,
            fallback_verse: 1,
        },
    );
    assert_eq!(line.verse(), 7);
    assert_eq!(line.plain_text(), "Jesus said, Follow me");
}
