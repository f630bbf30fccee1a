use anyhow::Result;

use crate::commands::{Cli, SetArgs, palette_index, slot_index};
use crate::common::{open_store, swatch};

pub(crate) fn set_color(cli: &Cli, args: &SetArgs) -> Result<()> {
	let mut store = open_store(cli);
	let index = palette_index(args.palette);
	let slot = slot_index(args.slot);

	let previous = store.get(index).colors().get(slot).copied();
	store.set_color(index, slot, args.color)?;

	// set_color has already bounds-checked the slot, so previous is Some here
	if let Some(previous) = previous {
		println!("{} {} -> {} {} in palette {}, slot {}", swatch(previous), previous, swatch(args.color), args.color, args.palette, args.slot);
	}

	Ok(())
}
