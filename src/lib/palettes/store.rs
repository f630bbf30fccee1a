use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::palettes::palette::{Color, Palette, StoreError};
use crate::palettes::{PALETTE_CAPACITY, PALETTE_COUNT};

/// The persisted wire shape: ten arrays of up to five `[r, g, b]` triples.
type StoredPalettes = Vec<Vec<Color>>;

/// All ten palettes plus the file they mirror to. Owned by the application
/// root and handed into every operation; mutations rewrite the whole file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteStore {
	palettes: Vec<Palette>,
	path: PathBuf,
}

impl PaletteStore {
	fn empty<P: AsRef<Path>>(path: P) -> Self {
		Self {
			palettes: vec![Palette::default(); PALETTE_COUNT],
			path: path.as_ref().to_path_buf(),
		}
	}

	/// Loads the store from `path`. A missing file, unparseable JSON, or
	/// content that breaks the 10×5 shape all yield ten empty palettes;
	/// there is no other recovery path and no error to report.
	pub fn load<P: AsRef<Path>>(path: P) -> Self {
		let Ok(f) = File::open(&path) else {
			return Self::empty(path);
		};

		let parsed: StoredPalettes = match serde_json::from_reader(BufReader::new(f)) {
			Ok(p) => p,
			Err(_) => return Self::empty(path),
		};

		if parsed.len() != PALETTE_COUNT || parsed.iter().any(|p| p.len() > PALETTE_CAPACITY) {
			return Self::empty(path);
		}

		let palettes = parsed.into_iter().map(Palette::from).collect();

		Self {
			palettes,
			path: path.as_ref().to_path_buf(),
		}
	}

	/// Serializes all ten palettes and rewrites the backing file in full.
	pub fn save(&self) -> Result<(), StoreError> {
		let stored: StoredPalettes = self.palettes.iter().map(|p| p.colors().to_vec()).collect();

		let f = File::create(&self.path)?;
		let mut writer = BufWriter::new(f);
		serde_json::to_writer(&mut writer, &stored)
			.map_err(|e| StoreError::IoErr(e.into()))?;
		writer.flush()?;

		Ok(())
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Panics if `index` isn't in 0..10; callers validate indices before
	/// they get here.
	pub fn get(&self, index: usize) -> &Palette {
		&self.palettes[index]
	}

	pub fn palettes(&self) -> &[Palette] {
		&self.palettes
	}

	/// Appends `color` to the palette at `index` and persists. A full
	/// palette rejects the append and nothing is written.
	pub fn append_color(&mut self, index: usize, color: Color) -> Result<(), StoreError> {
		self.palettes[index].push(color)?;
		self.save()
	}

	/// Overwrites the entry at `slot` in the palette at `index` and persists.
	pub fn set_color(&mut self, index: usize, slot: usize, color: Color) -> Result<(), StoreError> {
		self.palettes[index].set(slot, color)?;
		self.save()
	}

	/// Empties the palette at `index` and persists.
	pub fn clear_palette(&mut self, index: usize) -> Result<(), StoreError> {
		self.palettes[index].clear();
		self.save()
	}
}
