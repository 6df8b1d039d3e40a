use std::path::PathBuf;

use palc::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "snek", after_long_help = "An interactive interpreter for a small Python-flavored expression language.")]
pub struct Cli {
	#[command(subcommand)]
	pub mode: Mode,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
	/// Evaluate a script file
	File { path: PathBuf },
	/// Start the interactive prompt
	Repl,
}
