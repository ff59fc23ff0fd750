use super::*;
use crate::util::broadcast::LocalChannels;
use crate::util::storage::MemoryStorage;
use std::cell::RefCell;
use std::collections::HashMap;

/// Style target that remembers current values and counts writes.
#[derive(Default)]
struct RecordingStyle {
    values: RefCell<HashMap<String, String>>,
    writes: RefCell<usize>,
}

impl RecordingStyle {
    fn value(&self, name: &str) -> Option<String> {
        self.values.borrow().get(name).cloned()
    }

    fn writes(&self) -> usize {
        *self.writes.borrow()
    }
}

impl StyleTarget for RecordingStyle {
    fn set_property(&self, name: &str, value: &str) {
        self.values.borrow_mut().insert(name.to_owned(), value.to_owned());
        *self.writes.borrow_mut() += 1;
    }
}

fn store() -> (BrandStore<MemoryStorage>, MemoryStorage) {
    let storage = MemoryStorage::new();
    (BrandStore::new(storage.clone()), storage)
}

// =============================================================
// BrandRecord
// =============================================================

#[test]
fn record_serializes_as_flat_object() {
    let record = BrandRecord::new().with("pageBg", "#111").with("textColor", "#eee");
    assert_eq!(
        serde_json::to_value(&record).unwrap(),
        serde_json::json!({ "pageBg": "#111", "textColor": "#eee" })
    );
}

#[test]
fn record_deserialize_drops_non_string_values() {
    let record: BrandRecord =
        serde_json::from_str(r##"{"pageBg":"#111","accent":7,"primary":null}"##).unwrap();
    assert_eq!(record.len(), 1);
    assert_eq!(record.get("pageBg"), Some("#111"));
}

#[test]
fn record_set_and_remove() {
    let mut record = BrandRecord::new();
    record.set("accent", "red");
    record.set("accent", "blue");
    assert_eq!(record.get("accent"), Some("blue"));
    assert_eq!(record.remove("accent"), Some("blue".to_owned()));
    assert_eq!(record.remove("accent"), None);
    assert!(record.is_empty());
    assert_eq!(BrandRecord::new(), BrandRecord::default());
}

#[test]
fn known_keys_map_to_custom_properties() {
    assert_eq!(css_property_for("pageBg"), Some("--page-bg"));
    assert_eq!(css_property_for("textColor"), Some("--text-color"));
    assert_eq!(css_property_for("fontFamily"), None);
}

// =============================================================
// BrandStore
// =============================================================

#[test]
fn save_then_load_returns_record() {
    let (store, _) = store();
    store.save(&BrandRecord::new().with("pageBg", "#111"));
    let loaded = store.load().unwrap();
    assert_eq!(loaded.get("pageBg"), Some("#111"));
}

#[test]
fn save_uses_brand_key() {
    let (store, storage) = store();
    store.save(&BrandRecord::new().with("pageBg", "#111"));
    assert_eq!(
        storage.get_item("houser.brand").unwrap(),
        Some(r##"{"pageBg":"#111"}"##.to_owned())
    );
}

#[test]
fn load_with_nothing_saved_is_none() {
    let (store, _) = store();
    assert_eq!(store.load(), None);
}

#[test]
fn load_malformed_json_is_none() {
    let (store, storage) = store();
    storage.set_item("houser.brand", "{not json").unwrap();
    assert_eq!(store.load(), None);
    storage.set_item("houser.brand", "[1,2,3]").unwrap();
    assert_eq!(store.load(), None);
}

#[test]
fn load_and_save_survive_unavailable_storage() {
    let (store, storage) = store();
    storage.set_unavailable(true);
    store.save(&BrandRecord::new().with("pageBg", "#111"));
    assert_eq!(store.load(), None);
}

// =============================================================
// apply
// =============================================================

#[test]
fn partial_apply_leaves_other_properties_untouched() {
    let target = RecordingStyle::default();
    target.set_property("--text-color", "#000");

    apply(&BrandRecord::new().with("pageBg", "#111"), &target);

    assert_eq!(target.value("--page-bg"), Some("#111".to_owned()));
    assert_eq!(target.value("--text-color"), Some("#000".to_owned()));
}

#[test]
fn apply_ignores_unknown_keys() {
    let target = RecordingStyle::default();
    apply(&BrandRecord::new().with("fontFamily", "serif"), &target);
    assert_eq!(target.writes(), 0);
}

#[test]
fn apply_writes_values_verbatim() {
    let target = RecordingStyle::default();
    apply(&BrandRecord::new().with("accent", "not-a-color;"), &target);
    assert_eq!(target.value("--brand-accent"), Some("not-a-color;".to_owned()));
}

// =============================================================
// BrandingSync
// =============================================================

#[test]
fn mount_applies_persisted_record_immediately() {
    let (store, _) = store();
    store.save(&BrandRecord::new().with("pageBg", "#111"));
    let target = Rc::new(RecordingStyle::default());

    let _mount = BrandingSync::mount(store, &LocalChannels::new(), Rc::clone(&target));

    assert_eq!(target.value("--page-bg"), Some("#111".to_owned()));
}

#[test]
fn mount_with_no_record_applies_nothing() {
    let (store, _) = store();
    let target = Rc::new(RecordingStyle::default());
    let _mount = BrandingSync::mount(store, &LocalChannels::new(), Rc::clone(&target));
    assert_eq!(target.writes(), 0);
}

#[test]
fn storage_event_for_brand_key_reapplies() {
    let (store, storage) = store();
    let channels = LocalChannels::new();
    let target = Rc::new(RecordingStyle::default());
    let _mount = BrandingSync::mount(store.clone(), &channels, Rc::clone(&target));

    // Another tab writes the record, then the browser fires `storage` here.
    storage.set_item("houser.brand", r##"{"pageBg":"#222"}"##).unwrap();
    channels.emit_storage_changed(Some("houser.brand"));

    assert_eq!(target.value("--page-bg"), Some("#222".to_owned()));
}

#[test]
fn storage_event_for_unrelated_key_is_ignored() {
    let (store, _) = store();
    store.save(&BrandRecord::new().with("pageBg", "#111"));
    let channels = LocalChannels::new();
    let target = Rc::new(RecordingStyle::default());
    let _mount = BrandingSync::mount(store, &channels, Rc::clone(&target));
    let after_mount = target.writes();

    channels.emit_storage_changed(Some("nextAfterLogin"));
    channels.emit_storage_changed(None);

    assert_eq!(target.writes(), after_mount);
}

#[test]
fn in_page_signal_reapplies_in_every_mount() {
    let (store, _) = store();
    let channels = LocalChannels::new();
    let first = Rc::new(RecordingStyle::default());
    let second = Rc::new(RecordingStyle::default());
    let _a = BrandingSync::mount(store.clone(), &channels, Rc::clone(&first));
    let _b = BrandingSync::mount(store.clone(), &channels, Rc::clone(&second));

    store.save(&BrandRecord::new().with("headerBg", "navy"));
    channels.notify_brand_updated();

    assert_eq!(first.value("--header-bg"), Some("navy".to_owned()));
    assert_eq!(second.value("--header-bg"), Some("navy".to_owned()));
}

#[test]
fn unmounted_sync_ignores_both_channels() {
    let (store, _) = store();
    store.save(&BrandRecord::new().with("pageBg", "#111"));
    let channels = LocalChannels::new();
    let target = Rc::new(RecordingStyle::default());
    let mount = BrandingSync::mount(store, &channels, Rc::clone(&target));
    let after_mount = target.writes();

    mount.unmount();
    channels.notify_brand_updated();
    channels.emit_storage_changed(Some("houser.brand"));

    assert_eq!(target.writes(), after_mount);
    assert_eq!(channels.listener_count(), 0);
}

// =============================================================
// publish_brand
// =============================================================

#[test]
fn publish_applies_locally_and_notifies_after_save() {
    let (store, _) = store();
    let channels = LocalChannels::new();
    let observer = Rc::new(RecordingStyle::default());
    let _mount = BrandingSync::mount(store.clone(), &channels, Rc::clone(&observer));
    let editor = RecordingStyle::default();

    publish_brand(&store, &channels, &editor, &BrandRecord::new().with("primary", "teal"));

    assert_eq!(editor.value("--brand-primary"), Some("teal".to_owned()));
    // The observer reloads on notify and must see the saved value.
    assert_eq!(observer.value("--brand-primary"), Some("teal".to_owned()));
}

#[test]
fn publish_applies_locally_even_when_storage_fails() {
    let (store, storage) = store();
    storage.set_unavailable(true);
    let editor = RecordingStyle::default();

    publish_brand(&store, &LocalChannels::new(), &editor, &BrandRecord::new().with("pageBg", "#333"));

    assert_eq!(editor.value("--page-bg"), Some("#333".to_owned()));
}
