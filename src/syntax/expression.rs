//! Expression AST nodes.
//!
//! The tree is immutable after construction and keeps the tokens it was
//! built from, so every node can derive its span and the binder can point
//! diagnostics at the exact source fragment.

use Expression::*;

use crate::{evaluator::Value, syntax::Token, text::TextSpan};

/// Expression AST nodes
#[derive(Debug)]
pub enum Expression<'a> {
	/// A literal value: a number, `True` or `False`.
	Literal { token: Token<'a>, value: Value },
	/// A reference to a variable by name.
	Name { identifier: Token<'a> },
	/// A prefix operator applied to an operand.
	Unary { operator: Token<'a>, operand: Box<Expression<'a>> },
	/// Two operands joined by an infix operator.
	Binary { left: Box<Expression<'a>>, operator: Token<'a>, right: Box<Expression<'a>> },
	/// An expression wrapped in parentheses.
	Parenthesized { open: Token<'a>, expression: Box<Expression<'a>>, close: Token<'a> },
	/// `identifier = expression`; assignments are themselves expressions.
	Assignment { identifier: Token<'a>, equals: Token<'a>, expression: Box<Expression<'a>> },
}

impl<'a> Expression<'a> {
	pub fn literal(token: Token<'a>, value: Value) -> Box<Self> { Box::new(Literal { token, value }) }

	pub fn name(identifier: Token<'a>) -> Box<Self> { Box::new(Name { identifier }) }

	pub fn unary(operator: Token<'a>, operand: Box<Self>) -> Box<Self> {
		Box::new(Unary { operator, operand })
	}

	pub fn binary(left: Box<Self>, operator: Token<'a>, right: Box<Self>) -> Box<Self> {
		Box::new(Binary { left, operator, right })
	}

	pub fn parenthesized(open: Token<'a>, expression: Box<Self>, close: Token<'a>) -> Box<Self> {
		Box::new(Parenthesized { open, expression, close })
	}

	pub fn assignment(identifier: Token<'a>, equals: Token<'a>, expression: Box<Self>) -> Box<Self> {
		Box::new(Assignment { identifier, equals, expression })
	}

	/// The span of the whole expression, derived from its child tokens.
	pub fn span(&self) -> TextSpan {
		match self {
			Literal { token, .. } => token.span(),
			Name { identifier } => identifier.span(),
			Unary { operator, operand } => TextSpan::from_bounds(operator.span().start, operand.span().end()),
			Binary { left, right, .. } => TextSpan::from_bounds(left.span().start, right.span().end()),
			Parenthesized { open, close, .. } => TextSpan::from_bounds(open.span().start, close.span().end()),
			Assignment { identifier, expression, .. } => {
				TextSpan::from_bounds(identifier.span().start, expression.span().end())
			}
		}
	}
}

impl std::fmt::Display for Expression<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Literal { value, .. } => write!(f, "{value}"),
			Name { identifier } => write!(f, "{}", identifier.text),
			Unary { operator, operand } => write!(f, "({} {operand})", operator.text),
			Binary { left, operator, right } => write!(f, "({} {left} {right})", operator.text),
			Parenthesized { expression, .. } => write!(f, "(group {expression})"),
			Assignment { identifier, expression, .. } => write!(f, "(= {} {expression})", identifier.text),
		}
	}
}
