use clap::Parser;
use clap::Subcommand;
use clap::value_parser;
use const_format::formatcp;
use std::path::PathBuf;

use palmix::palettes::DEFAULT_STORE_FILE;
use palmix::palettes::palette::Color;

const GIT_HASH: &str = env!("GIT_HASH");
const GIT_BRANCH: &str = env!("GIT_BRANCH");
const GIT_VERSION: &str = env!("GIT_VERSION");
const BUILD_DATE: &str = env!("BUILD_DATE");

const CLAP_VERSION: &str = formatcp!("{GIT_VERSION} [{GIT_BRANCH}, {GIT_HASH}, {BUILD_DATE}]");

#[derive(Parser, Debug, Clone)]
#[command(version = CLAP_VERSION, about = "Composes RGB colors into a set of persistent palettes")]
pub(crate) struct Cli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	#[arg(short, long, global = true, default_value = DEFAULT_STORE_FILE, help = "The palette store file.")]
	pub file: PathBuf,

	#[arg(long, global = true)]
	pub debug: bool,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct MixArgs {
	#[arg(help = "The color to preview, as #rrggbb or r,g,b.")]
	pub color: Color,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct AddArgs {
	#[arg(value_parser = value_parser!(u8).range(1..=10), help = "The palette to append to, 1-10.")]
	pub palette: u8,

	#[arg(help = "The color to append, as #rrggbb or r,g,b.")]
	pub color: Color,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct SetArgs {
	#[arg(value_parser = value_parser!(u8).range(1..=10), help = "The palette to edit, 1-10.")]
	pub palette: u8,

	#[arg(value_parser = value_parser!(u8).range(1..=5), help = "The slot to overwrite, 1-5.")]
	pub slot: u8,

	#[arg(help = "The new color, as #rrggbb or r,g,b.")]
	pub color: Color,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct ClearArgs {
	#[arg(value_parser = value_parser!(u8).range(1..=10), help = "The palette to empty, 1-10.")]
	pub palette: u8,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct ShowArgs {
	#[arg(value_parser = value_parser!(u8).range(1..=10), help = "The palette to show, 1-10. Omit to list all palettes.")]
	pub palette: Option<u8>,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct ExportArgs {
	#[arg(value_parser = value_parser!(u8).range(1..=10), help = "The palette to export, 1-10.")]
	pub palette: u8,

	#[arg(help = "The output file.")]
	pub output: PathBuf,

	#[arg(long, help = "Writes hex values instead of RGB triples.")]
	pub hex: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Commands {
	#[command(about = "Previews a color without storing it")]
	Mix(MixArgs),

	#[command(about = "Appends a color to a palette")]
	Add(AddArgs),

	#[command(about = "Overwrites one slot of a palette")]
	Set(SetArgs),

	#[command(about = "Empties a palette")]
	Clear(ClearArgs),

	#[command(about = "Displays one palette or a summary of all of them")]
	Show(ShowArgs),

	#[command(about = "Exports a palette as a text file")]
	Export(ExportArgs),
}

/// Converts the 1-based palette number users type into the 0-based index
/// the store uses. clap has already range-checked the input.
pub(crate) fn palette_index(palette: u8) -> usize {
	(palette - 1) as usize
}

/// Same conversion for slot numbers.
pub(crate) fn slot_index(slot: u8) -> usize {
	(slot - 1) as usize
}
