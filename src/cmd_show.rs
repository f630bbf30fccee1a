use anyhow::Result;

use palmix::palettes::PALETTE_CAPACITY;
use palmix::palettes::palette::Palette;

use crate::commands::{Cli, ShowArgs, palette_index};
use crate::common::{empty_swatch, open_store, swatch};

pub(crate) fn show_palettes(cli: &Cli, args: &ShowArgs) -> Result<()> {
	let store = open_store(cli);

	match args.palette {
		Some(palette) => show_one(store.get(palette_index(palette)), palette),
		None => {
			for (i, palette) in store.palettes().iter().enumerate() {
				show_summary_line(palette, i + 1);
			}
		}
	}

	Ok(())
}

fn show_one(palette: &Palette, number: u8) {
	println!("Palette {number}:");

	for (slot, color) in palette.colors().iter().enumerate() {
		println!("  [{}] {} {} RGB({}, {}, {})", slot + 1, swatch(*color), color, color.r, color.g, color.b);
	}

	match palette.free_slots() {
		0 => {}
		free => println!("  {} {free} free", empty_swatch()),
	}
}

fn show_summary_line(palette: &Palette, number: usize) {
	if palette.is_empty() {
		println!("Palette {number:>2}: (empty)");
		return;
	}

	let swatches = palette.colors().iter().map(|c| swatch(*c)).collect::<Vec<String>>().join("");
	println!("Palette {number:>2}: {swatches} {}/{PALETTE_CAPACITY}", palette.len());
}
