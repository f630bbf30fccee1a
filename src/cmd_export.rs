use std::fs;

use anyhow::Result;

use palmix::palettes::export::{format_palette, format_palette_hex};

use crate::commands::{Cli, ExportArgs, palette_index};
use crate::common::open_store;

pub(crate) fn export_palette(cli: &Cli, args: &ExportArgs) -> Result<()> {
	let store = open_store(cli);
	let index = palette_index(args.palette);
	let palette = store.get(index);

	let content = if args.hex {
		format_palette_hex(palette, index)
	} else {
		format_palette(palette, index)
	};

	fs::write(&args.output, content)?;

	println!("Exported palette {} ({} colors)", args.palette, palette.len());
	Ok(())
}
