use palc::Parser;
use snek::cli::*;

fn main() {
	let mut snek = snek::Snek::new();

	match Cli::parse().mode {
		Mode::File { path } => {
			if let Err(e) = snek.run_file(&path) {
				eprintln!("Failed run file: {e}");
			}
		}
		Mode::Repl => {
			if let Err(e) = snek.run_prompt() {
				eprintln!("Failed run prompt: {e}");
			}
		}
	}
}
