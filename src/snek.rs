//! The interactive host around the analysis pipeline.
//!
//! Everything here is glue: reading lines, dispatching the handful of meta
//! commands, and rendering values and diagnostics in color. The pipeline
//! itself neither prints nor prompts.

use std::{fs::read_to_string, path::Path};

use anyhow::Context;
use colored::Colorize;
use rustyline::{error::ReadlineError, DefaultEditor};

use crate::{
	compilation::Compilation,
	diagnostics::Diagnostic,
	error::SnekError,
	evaluator::Variables,
	syntax::SyntaxTree,
	text::{SourceText, TextLine, TextSpan},
};

enum Control {
	Continue,
	Exit,
}

/// Snek is the interpreter host: it owns the variable table and the scope
/// chain and feeds them one line at a time.
pub struct Snek {
	compilation: Compilation,
	variables:   Variables,
	show_tree:   bool,
}

impl Default for Snek {
	fn default() -> Self { Self::new() }
}

impl Snek {
	pub fn new() -> Self { Self { compilation: Compilation::new(), variables: Variables::new(), show_tree: false } }

	/// Evaluate a script line by line with persistent state, printing each
	/// value. Stops at the first line with diagnostics.
	pub fn run_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), SnekError> {
		let source = read_to_string(path).context("Failed open source file")?;
		for line in source.lines() {
			if line.trim().is_empty() {
				continue;
			}
			if !self.run_line(line.trim())? {
				break;
			}
		}
		Ok(())
	}

	/// Run the REPL prompt.
	pub fn run_prompt(&mut self) -> Result<(), SnekError> {
		self.welcome();
		let mut editor = DefaultEditor::new()?;
		loop {
			match editor.readline(">>> ") {
				Ok(line) => {
					let line = line.trim();
					if line.is_empty() {
						continue;
					}
					let _ = editor.add_history_entry(line);
					match self.handle_command(line) {
						Some(Control::Exit) => break,
						Some(Control::Continue) => continue,
						None => {}
					}
					if let Err(e) = self.run_line(line) {
						eprintln!("{}", e.to_string().red());
					}
				}
				Err(ReadlineError::Interrupted) => continue,
				Err(ReadlineError::Eof) => break,
				Err(e) => return Err(e.into()),
			}
		}
		println!("Exited snek repl");
		Ok(())
	}

	/// Analyze and evaluate one line. Returns whether it produced a value.
	fn run_line(&mut self, line: &str) -> Result<bool, SnekError> {
		let tree = SyntaxTree::parse(line);
		if self.show_tree {
			println!("{}", tree.root().to_string().bright_black());
		}
		let result = self.compilation.evaluate(&tree, &mut self.variables)?;
		match result.value {
			Some(value) => {
				println!("{}", value.to_string().bright_black());
				Ok(true)
			}
			None => {
				self.print_diagnostics(&tree, &result.diagnostics);
				Ok(false)
			}
		}
	}

	/// REPL meta commands. Returns `None` when the line is ordinary input.
	fn handle_command(&mut self, line: &str) -> Option<Control> {
		match line {
			"showTree()" => {
				self.show_tree = true;
				println!("{}", "Showing parse trees.".green());
			}
			"hideTree()" => {
				self.show_tree = false;
				println!("{}", "Hiding parse trees.".green());
			}
			"cls" | "clear()" => {
				self.restart();
				print!("\x1B[2J\x1B[1;1H");
				self.welcome();
			}
			"run()" => {
				self.restart();
				println!("{}", "Restarting interpreter.".bright_black());
			}
			"exit()" => return Some(Control::Exit),
			_ => return None,
		}
		Some(Control::Continue)
	}

	/// Drop all variable state and the scope chain.
	fn restart(&mut self) {
		self.compilation.reset();
		self.variables.clear();
	}

	fn welcome(&self) {
		println!("{}", "Welcome to snek! Type expressions, or exit() to leave.".green());
	}

	/// One block per diagnostic: a `Line N, Char M:` header, the message,
	/// and the offending line with the bad fragment highlighted and
	/// underlined.
	fn print_diagnostics(&self, tree: &SyntaxTree<'_>, diagnostics: &[Diagnostic]) {
		let text = tree.text();
		for diagnostic in diagnostics {
			let line_index = text.line_index(diagnostic.span.start);
			let line = text.lines()[line_index];
			let line_number = line_index + 1;
			let character = diagnostic.span.start - line.start + 1;

			println!();
			print!("{}", format!("Line {line_number}, Char {character}: ").red());
			println!("{}", diagnostic.message.bright_black());
			highlight_error_in_line(text, line, diagnostic.span);
		}
		println!();
	}
}

fn highlight_error_in_line(text: &SourceText<'_>, line: TextLine, span: TextSpan) {
	let source = text.as_str();
	let end = span.end().min(line.end());
	let prefix = &source[line.start..span.start];
	let error = &source[span.start..end];
	let suffix = &source[end..line.end()];

	println!("    {prefix}{}{suffix}", error.red());
	// Fabricated tokens have zero-length spans; still point at something.
	let caret_count = span.length.max(1);
	println!("{}{}", " ".repeat(4 + span.start - line.start), "^".repeat(caret_count).red());
}
