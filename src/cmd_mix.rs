use anyhow::Result;

use crate::commands::MixArgs;
use crate::common::swatch;

pub(crate) fn mix_color(args: &MixArgs) -> Result<()> {
	let c = args.color;
	println!("{}{} {c} RGB({}, {}, {})", swatch(c), swatch(c), c.r, c.g, c.b);
	Ok(())
}
