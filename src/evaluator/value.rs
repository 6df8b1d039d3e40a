use anyhow::anyhow;

use crate::{binding::Type, error::SnekError};

/// A runtime value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
	Int(i64),
	Bool(bool),
}

impl Value {
	pub fn ty(&self) -> Type {
		match self {
			Value::Int(_) => Type::Int,
			Value::Bool(_) => Type::Bool,
		}
	}

	/// The binder guarantees operand types, so a mismatch here is an
	/// internal error, not a user-facing one.
	pub(crate) fn as_int(&self) -> Result<i64, SnekError> {
		match self {
			Value::Int(n) => Ok(*n),
			other => Err(anyhow!("expected Int, found {other}").into()),
		}
	}

	pub(crate) fn as_bool(&self) -> Result<bool, SnekError> {
		match self {
			Value::Bool(b) => Ok(*b),
			other => Err(anyhow!("expected Bool, found {other}").into()),
		}
	}
}

impl std::fmt::Display for Value {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Int(n) => write!(f, "{n}"),
			// Booleans print the way the language spells them.
			Value::Bool(true) => write!(f, "True"),
			Value::Bool(false) => write!(f, "False"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn display_matches_the_language_keywords() {
		assert_eq!(Value::Int(42).to_string(), "42");
		assert_eq!(Value::Int(-7).to_string(), "-7");
		assert_eq!(Value::Bool(true).to_string(), "True");
		assert_eq!(Value::Bool(false).to_string(), "False");
	}

	#[test]
	fn type_tags() {
		assert_eq!(Value::Int(0).ty(), Type::Int);
		assert_eq!(Value::Bool(false).ty(), Type::Bool);
	}
}
