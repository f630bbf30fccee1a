use std::fs;

use palmix::palettes::palette::{Color, StoreError};
use palmix::palettes::store::PaletteStore;
use palmix::palettes::{PALETTE_CAPACITY, PALETTE_COUNT};

use tempfile::tempdir;

fn all_empty(store: &PaletteStore) -> bool {
	store.palettes().iter().all(|p| p.is_empty())
}

#[test]
fn loading_missing_file_yields_empty_store() {
	let dir = tempdir().unwrap();
	let store = PaletteStore::load(dir.path().join("nonexistent.json"));

	assert_eq!(store.palettes().len(), PALETTE_COUNT);
	assert!(all_empty(&store));
}

#[test]
fn loading_corrupt_file_yields_empty_store() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("palettes.json");

	let corrupt_contents = [
		"not json at all",
		"{\"palettes\": []}",
		"[[[0,0]]]",
		"[]",
		// nine palettes instead of ten
		"[[],[],[],[],[],[],[],[],[]]",
		// one palette over capacity
		"[[[1,1,1],[2,2,2],[3,3,3],[4,4,4],[5,5,5],[6,6,6]],[],[],[],[],[],[],[],[],[]]",
		// channel value out of range
		"[[[300,0,0]],[],[],[],[],[],[],[],[],[]]",
	];

	for contents in corrupt_contents {
		fs::write(&path, contents).unwrap();
		let store = PaletteStore::load(&path);

		assert_eq!(store.palettes().len(), PALETTE_COUNT, "fallback failed for {contents:?}");
		assert!(all_empty(&store), "fallback failed for {contents:?}");
	}
}

#[test]
fn save_load_round_trip() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("palettes.json");

	let mut store = PaletteStore::load(&path);
	store.append_color(0, Color { r: 255, g: 0, b: 0 }).unwrap();
	store.append_color(0, Color { r: 0, g: 255, b: 0 }).unwrap();
	store.append_color(3, Color { r: 10, g: 20, b: 30 }).unwrap();
	store.append_color(9, Color { r: 1, g: 1, b: 1 }).unwrap();

	let reloaded = PaletteStore::load(&path);
	assert_eq!(reloaded, store);
	assert_eq!(reloaded.get(0).colors(), &[Color { r: 255, g: 0, b: 0 }, Color { r: 0, g: 255, b: 0 }]);
	assert_eq!(reloaded.get(3).len(), 1);
	assert_eq!(reloaded.get(9).len(), 1);
	assert!(reloaded.get(5).is_empty());
}

#[test]
fn persisted_format_is_plain_triples() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("palettes.json");

	let mut store = PaletteStore::load(&path);
	store.append_color(0, Color { r: 255, g: 0, b: 0 }).unwrap();

	let raw = fs::read_to_string(&path).unwrap();
	let parsed: Vec<Vec<[u8; 3]>> = serde_json::from_str(&raw).unwrap();

	assert_eq!(parsed.len(), PALETTE_COUNT);
	assert_eq!(parsed[0], vec![[255, 0, 0]]);
	assert!(parsed[1..].iter().all(|p| p.is_empty()));
}

#[test]
fn appending_to_full_palette_fails_without_side_effects() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("palettes.json");

	let mut store = PaletteStore::load(&path);
	for i in 0..PALETTE_CAPACITY {
		let i = i as u8;
		store.append_color(2, Color { r: i, g: i, b: i }).unwrap();
	}

	let before = store.get(2).colors().to_vec();
	let on_disk_before = fs::read_to_string(&path).unwrap();

	let result = store.append_color(2, Color { r: 99, g: 99, b: 99 });
	assert!(matches!(result, Err(StoreError::PaletteFull { .. })));

	// neither the palette nor the file may have changed
	assert_eq!(store.get(2).colors(), before.as_slice());
	assert_eq!(fs::read_to_string(&path).unwrap(), on_disk_before);
}

#[test]
fn setting_a_slot_overwrites_in_place() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("palettes.json");

	let mut store = PaletteStore::load(&path);
	store.append_color(4, Color { r: 1, g: 1, b: 1 }).unwrap();
	store.append_color(4, Color { r: 2, g: 2, b: 2 }).unwrap();
	store.append_color(4, Color { r: 3, g: 3, b: 3 }).unwrap();

	store.set_color(4, 2, Color { r: 10, g: 20, b: 30 }).unwrap();

	let expected = [
		Color { r: 1, g: 1, b: 1 },
		Color { r: 2, g: 2, b: 2 },
		Color { r: 10, g: 20, b: 30 },
	];
	assert_eq!(store.get(4).colors(), &expected);
	assert_eq!(PaletteStore::load(&path).get(4).colors(), &expected);
}

#[test]
fn setting_a_slot_past_the_end_fails() {
	let dir = tempdir().unwrap();
	let mut store = PaletteStore::load(dir.path().join("palettes.json"));
	store.append_color(0, Color { r: 1, g: 1, b: 1 }).unwrap();

	let result = store.set_color(0, 1, Color { r: 2, g: 2, b: 2 });
	assert!(matches!(result, Err(StoreError::NoSuchSlot { slot: 1, len: 1 })));
	assert_eq!(store.get(0).len(), 1);
}

#[test]
fn clearing_a_palette_empties_it() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("palettes.json");

	let mut store = PaletteStore::load(&path);
	for _ in 0..3 {
		store.append_color(7, Color { r: 50, g: 60, b: 70 }).unwrap();
	}
	assert_eq!(store.get(7).len(), 3);

	store.clear_palette(7).unwrap();

	assert!(store.get(7).is_empty());
	assert!(PaletteStore::load(&path).get(7).is_empty());
}

#[test]
fn clearing_an_empty_palette_is_fine() {
	let dir = tempdir().unwrap();
	let mut store = PaletteStore::load(dir.path().join("palettes.json"));

	store.clear_palette(0).unwrap();
	assert!(store.get(0).is_empty());
}
