/// Errors that can occur while evaluating a bound tree.
///
/// These are the only failures the binder cannot rule out statically.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum RuntimeError {
	/// Integer division by zero
	#[error("division by zero")]
	DivisionByZero,
	/// Arithmetic outside the Int range
	#[error("integer overflow")]
	IntegerOverflow,
}
