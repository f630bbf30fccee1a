use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use humansize::DECIMAL;

use crate::cmd_add::add_color;
use crate::cmd_clear::clear_palette;
use crate::cmd_export::export_palette;
use crate::cmd_mix::mix_color;
use crate::cmd_set::set_color;
use crate::cmd_show::show_palettes;
use crate::commands::{Cli, Commands};

mod cmd_add;
mod cmd_clear;
mod cmd_export;
mod cmd_mix;
mod cmd_set;
mod cmd_show;
mod commands;
mod common;

fn finish(result: anyhow::Result<()>) -> ExitCode {
	match result {
		Ok(_) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("execution failed: {e}");
			ExitCode::FAILURE
		}
	}
}

fn main() -> ExitCode {
	let cli = Cli::parse();
	let output: &PathBuf;

	let result = match &cli.command {
		Some(Commands::Export(args)) => {
			output = &args.output;
			export_palette(&cli, args)
		}
		Some(Commands::Mix(args)) => return finish(mix_color(args)),
		Some(Commands::Add(args)) => return finish(add_color(&cli, args)),
		Some(Commands::Set(args)) => return finish(set_color(&cli, args)),
		Some(Commands::Clear(args)) => return finish(clear_palette(&cli, args)),
		Some(Commands::Show(args)) => return finish(show_palettes(&cli, args)),
		None => {
			return ExitCode::FAILURE;
		}
	};

	match result {
		Ok(_) => {
			match fs::metadata(output) {
				Ok(m) => {
					let size = humansize::format_size(m.len(), DECIMAL);
					println!("Output file size: {size}");
				}
				Err(err) => {
					eprintln!("Can't determine output file size: {err}");
				}
			}
			ExitCode::SUCCESS
		}
		Err(e) => {
			eprintln!("execution failed: {e}");
			ExitCode::FAILURE
		}
	}
}
