use anyhow::Result;

use crate::commands::{Cli, ClearArgs, palette_index};
use crate::common::open_store;

pub(crate) fn clear_palette(cli: &Cli, args: &ClearArgs) -> Result<()> {
	let mut store = open_store(cli);
	let index = palette_index(args.palette);

	let had = store.get(index).len();
	store.clear_palette(index)?;

	println!("Cleared palette {} ({had} colors removed)", args.palette);
	Ok(())
}
