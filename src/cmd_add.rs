use anyhow::Result;

use palmix::palettes::PALETTE_CAPACITY;

use crate::commands::{AddArgs, Cli, palette_index};
use crate::common::{open_store, swatch};

pub(crate) fn add_color(cli: &Cli, args: &AddArgs) -> Result<()> {
	let mut store = open_store(cli);
	let index = palette_index(args.palette);

	store.append_color(index, args.color)?;

	let len = store.get(index).len();
	println!("{} {} appended to palette {} ({len}/{PALETTE_CAPACITY})", swatch(args.color), args.color, args.palette);
	Ok(())
}
