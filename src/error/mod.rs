pub mod runtime;

pub use runtime::RuntimeError;

/// SnekError is the top-level error type for the interpreter.
///
/// Note that lexical, syntax and binding problems are *not* errors: they
/// are diagnostics, accumulated per line and rendered by the host. Only
/// runtime failures and should-never-happen internals surface here.
#[derive(thiserror::Error, Debug)]
pub enum SnekError {
	/// Internal interpreter error, should never happen
	#[error("InternalError: {0}")]
	Internal(#[from] anyhow::Error),
	/// Runtime errors encountered while evaluating a bound tree
	#[error("Runtime error: {0}")]
	Runtime(#[from] RuntimeError),
	/// Line editing failure in the REPL
	#[error("Readline error: {0}")]
	Readline(#[from] rustyline::error::ReadlineError),
}
