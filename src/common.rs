use colored::Colorize;

use palmix::palettes::palette::Color;
use palmix::palettes::store::PaletteStore;

use crate::commands::Cli;

/// Loads the store named on the command line. Loading never fails; a
/// missing or corrupt file silently becomes ten empty palettes.
pub(crate) fn open_store(cli: &Cli) -> PaletteStore {
	let store = PaletteStore::load(&cli.file);

	if cli.debug {
		let filled: usize = store.palettes().iter().map(|p| p.len()).sum();
		eprintln!("store: {}, {filled} colors total", store.path().display());
	}

	store
}

/// A two-cell colored block, the terminal stand-in for a preview square.
pub(crate) fn swatch(c: Color) -> String {
	"  ".on_truecolor(c.r, c.g, c.b).to_string()
}

/// The white square marking unused slots.
pub(crate) fn empty_swatch() -> String {
	"  ".on_truecolor(255, 255, 255).to_string()
}
