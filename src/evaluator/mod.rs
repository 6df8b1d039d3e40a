//! Bound-tree evaluation.
//!
//! The evaluator runs only when the line produced no diagnostics, so it
//! never re-checks types: every operator was resolved by the binder and the
//! walk just applies the resolved operation. The variable table is the one
//! piece of state shared across lines; assignments write through it and
//! yield the written value.

mod value;

use std::collections::HashMap;

use anyhow::anyhow;

use crate::{
	binding::{BoundBinaryOperatorKind::*, BoundExpression, BoundUnaryOperatorKind::*, VariableSymbol},
	error::{RuntimeError, SnekError},
};
pub use value::Value;

/// The runtime variable table, keyed by symbol identity (name and type).
pub type Variables = HashMap<VariableSymbol, Value>;

pub(crate) struct Evaluator<'a> {
	variables: &'a mut Variables,
}

impl<'a> Evaluator<'a> {
	pub fn new(variables: &'a mut Variables) -> Self { Self { variables } }

	pub fn evaluate(&mut self, expression: &BoundExpression) -> Result<Value, SnekError> {
		Ok(match expression {
			BoundExpression::Literal(value) => value.clone(),
			BoundExpression::Variable(variable) => self
				.variables
				.get(variable)
				.cloned()
				.ok_or_else(|| anyhow!("variable '{}' missing from the table", variable.name))?,
			BoundExpression::Unary { operator, operand } => {
				let operand = self.evaluate(operand)?;
				match operator.kind {
					Negation => {
						let n = operand.as_int()?;
						Value::Int(n.checked_neg().ok_or(RuntimeError::IntegerOverflow)?)
					}
					LogicalNot => Value::Bool(!operand.as_bool()?),
				}
			}
			BoundExpression::Binary { operator, left, right } => {
				let left = self.evaluate(left)?;
				let right = self.evaluate(right)?;
				match operator.kind {
					Addition => checked_arithmetic(&left, &right, i64::checked_add)?,
					Subtraction => checked_arithmetic(&left, &right, i64::checked_sub)?,
					Multiplication => checked_arithmetic(&left, &right, i64::checked_mul)?,
					Division => {
						if right.as_int()? == 0 {
							return Err(RuntimeError::DivisionByZero.into());
						}
						checked_arithmetic(&left, &right, i64::checked_div)?
					}
					LogicalAnd => Value::Bool(left.as_bool()? && right.as_bool()?),
					LogicalOr => Value::Bool(left.as_bool()? || right.as_bool()?),
					Equality => Value::Bool(left == right),
					Inequality => Value::Bool(left != right),
				}
			}
			BoundExpression::Assignment { variable, expression } => {
				let value = self.evaluate(expression)?;
				self.variables.insert(variable.clone(), value.clone());
				value
			}
			BoundExpression::Error => {
				return Err(anyhow!("evaluated an error node; diagnostics should have blocked this").into());
			}
		})
	}
}

/// Truncating integer arithmetic via the checked ops, so overflow is a
/// runtime error instead of a debug panic or a release wrap.
fn checked_arithmetic(
	left: &Value,
	right: &Value,
	op: fn(i64, i64) -> Option<i64>,
) -> Result<Value, SnekError> {
	let result = op(left.as_int()?, right.as_int()?).ok_or(RuntimeError::IntegerOverflow)?;
	Ok(Value::Int(result))
}
