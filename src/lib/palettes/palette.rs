use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::palettes::PALETTE_CAPACITY;

/// Persists as a plain `[r, g, b]` array.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "[u8; 3]", from = "[u8; 3]")]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl From<[u8; 3]> for Color {
	fn from(v: [u8; 3]) -> Self {
		Self {
			r: v[0],
			g: v[1],
			b: v[2],
		}
	}
}

impl From<Color> for [u8; 3] {
	fn from(c: Color) -> Self {
		[c.r, c.g, c.b]
	}
}

impl From<u32> for Color {
	fn from(v: u32) -> Self {
		Self {
			r: ((v >> 16) & 0xFF) as u8,
			g: ((v >> 8) & 0xFF) as u8,
			b: (v & 0xFF) as u8,
		}
	}
}

impl Display for Color {
	/// Formats the color as lowercase hex, the way it appears in exports.
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let mut rgb = self.r as u32;
		rgb = (rgb << 8) | self.g as u32;
		rgb = (rgb << 8) | self.b as u32;
		write!(f, "#{rgb:06x}")
	}
}

impl FromStr for Color {
	type Err = StoreError;

	/// Accepts `#rrggbb`, `0xrrggbb`, bare `rrggbb`, and decimal `r,g,b`.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let trimmed = s.trim();

		if trimmed.contains(',') {
			let channels = trimmed
				.split(',')
				.map(|c| c.trim().parse::<u8>())
				.collect::<Result<Vec<u8>, _>>()
				.map_err(|_| StoreError::InvalidColor(trimmed.to_string()))?;

			let [r, g, b] = channels.as_slice() else {
				return Err(StoreError::InvalidColor(trimmed.to_string()));
			};

			return Ok(Color { r: *r, g: *g, b: *b });
		}

		// remove common hexadecimal prefixes from the string prior to parsing
		let stripped = trimmed.strip_prefix("0x").unwrap_or(trimmed);
		let stripped = stripped.strip_prefix("#").unwrap_or(stripped);

		if stripped.len() != 6 {
			return Err(StoreError::InvalidColor(trimmed.to_string()));
		}

		let parsed_int = u32::from_str_radix(stripped, 16)
			.map_err(|_| StoreError::InvalidColor(trimmed.to_string()))?;

		Ok(Color::from(parsed_int))
	}
}

#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct Palette {
	colors: Vec<Color>,
}

impl Palette {
	/// Appends a color, rejecting the push once the palette is full.
	pub fn push(&mut self, c: Color) -> Result<(), StoreError> {
		if self.colors.len() >= PALETTE_CAPACITY {
			return Err(StoreError::PaletteFull { len: self.colors.len() });
		}

		self.colors.push(c);
		Ok(())
	}

	/// Overwrites the color at `slot`. Slots past the current length
	/// don't exist; there are no gaps to fill.
	pub fn set(&mut self, slot: usize, c: Color) -> Result<(), StoreError> {
		match self.colors.get_mut(slot) {
			Some(entry) => {
				*entry = c;
				Ok(())
			}
			None => Err(StoreError::NoSuchSlot { slot, len: self.colors.len() }),
		}
	}

	pub fn clear(&mut self) {
		self.colors.clear();
	}

	pub fn colors(&self) -> &[Color] {
		&self.colors
	}

	pub fn len(&self) -> usize {
		self.colors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.colors.is_empty()
	}

	pub fn free_slots(&self) -> usize {
		PALETTE_CAPACITY - self.colors.len()
	}
}

impl From<Vec<Color>> for Palette {
	/// Builds a palette from at most [PALETTE_CAPACITY] colors;
	/// anything past that is dropped.
	fn from(v: Vec<Color>) -> Self {
		let mut pal = Palette::default();
		for c in v.into_iter().take(PALETTE_CAPACITY) {
			pal.colors.push(c);
		}
		pal
	}
}

#[derive(Debug)]
pub enum StoreError {
	PaletteFull { len: usize },
	NoSuchSlot { slot: usize, len: usize },
	InvalidColor(String),
	IoErr(std::io::Error),
}

impl Display for StoreError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			StoreError::PaletteFull { len } => write!(f, "The palette already holds {len} colors, which is the maximum"),
			StoreError::NoSuchSlot { slot, len } => write!(f, "No slot {slot} in a palette with {len} colors"),
			StoreError::InvalidColor(s) => write!(f, "\"{s}\" is not a valid color (expected #rrggbb or r,g,b)"),
			StoreError::IoErr(e) => write!(f, "io error: {e}"),
		}
	}
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
	fn from(e: std::io::Error) -> Self {
		StoreError::IoErr(e)
	}
}
