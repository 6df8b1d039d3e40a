//! The bound tree and the operator tables.
//!
//! Bound nodes are decoupled from tokens: after binding, nobody re-inspects
//! raw source text. Operator resolution happens here, once, against fixed
//! tables keyed by (token kind, operand type(s)); the evaluator dispatches
//! on the resolved kind without re-checking types at runtime.

use crate::{binding::{Type, VariableSymbol}, evaluator::Value, syntax::TokenKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BoundUnaryOperatorKind {
	Negation,
	LogicalNot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BoundBinaryOperatorKind {
	Addition,
	Subtraction,
	Multiplication,
	Division,
	LogicalAnd,
	LogicalOr,
	Equality,
	Inequality,
}

/// One row of the unary operator table.
#[derive(Debug)]
pub(crate) struct BoundUnaryOperator {
	pub token:   TokenKind,
	pub kind:    BoundUnaryOperatorKind,
	pub operand: Type,
	pub result:  Type,
}

const UNARY_OPERATORS: &[BoundUnaryOperator] = &[
	BoundUnaryOperator {
		token:   TokenKind::Minus,
		kind:    BoundUnaryOperatorKind::Negation,
		operand: Type::Int,
		result:  Type::Int,
	},
	BoundUnaryOperator {
		token:   TokenKind::NotKeyword,
		kind:    BoundUnaryOperatorKind::LogicalNot,
		operand: Type::Bool,
		result:  Type::Bool,
	},
];

impl BoundUnaryOperator {
	pub fn bind(token: TokenKind, operand: Type) -> Option<&'static Self> {
		UNARY_OPERATORS.iter().find(|op| op.token == token && op.operand == operand)
	}
}

/// One row of the binary operator table.
#[derive(Debug)]
pub(crate) struct BoundBinaryOperator {
	pub token:  TokenKind,
	pub kind:   BoundBinaryOperatorKind,
	pub left:   Type,
	pub right:  Type,
	pub result: Type,
}

const fn arithmetic(token: TokenKind, kind: BoundBinaryOperatorKind) -> BoundBinaryOperator {
	BoundBinaryOperator { token, kind, left: Type::Int, right: Type::Int, result: Type::Int }
}

const fn equality(token: TokenKind, kind: BoundBinaryOperatorKind, ty: Type) -> BoundBinaryOperator {
	BoundBinaryOperator { token, kind, left: ty, right: ty, result: Type::Bool }
}

const fn logical(token: TokenKind, kind: BoundBinaryOperatorKind) -> BoundBinaryOperator {
	BoundBinaryOperator { token, kind, left: Type::Bool, right: Type::Bool, result: Type::Bool }
}

const BINARY_OPERATORS: &[BoundBinaryOperator] = &[
	arithmetic(TokenKind::Plus, BoundBinaryOperatorKind::Addition),
	arithmetic(TokenKind::Minus, BoundBinaryOperatorKind::Subtraction),
	arithmetic(TokenKind::Star, BoundBinaryOperatorKind::Multiplication),
	arithmetic(TokenKind::Slash, BoundBinaryOperatorKind::Division),
	equality(TokenKind::EqualsEquals, BoundBinaryOperatorKind::Equality, Type::Int),
	equality(TokenKind::EqualsEquals, BoundBinaryOperatorKind::Equality, Type::Bool),
	// `is` compares identity; for values, that is equality of identical types.
	equality(TokenKind::IsKeyword, BoundBinaryOperatorKind::Equality, Type::Int),
	equality(TokenKind::IsKeyword, BoundBinaryOperatorKind::Equality, Type::Bool),
	equality(TokenKind::BangEquals, BoundBinaryOperatorKind::Inequality, Type::Int),
	equality(TokenKind::BangEquals, BoundBinaryOperatorKind::Inequality, Type::Bool),
	logical(TokenKind::AndKeyword, BoundBinaryOperatorKind::LogicalAnd),
	logical(TokenKind::OrKeyword, BoundBinaryOperatorKind::LogicalOr),
];

impl BoundBinaryOperator {
	pub fn bind(token: TokenKind, left: Type, right: Type) -> Option<&'static Self> {
		BINARY_OPERATORS.iter().find(|op| op.token == token && op.left == left && op.right == right)
	}
}

/// A semantically validated expression.
#[derive(Debug)]
pub(crate) enum BoundExpression {
	Literal(Value),
	Variable(VariableSymbol),
	Unary { operator: &'static BoundUnaryOperator, operand: Box<BoundExpression> },
	Binary { operator: &'static BoundBinaryOperator, left: Box<BoundExpression>, right: Box<BoundExpression> },
	Assignment { variable: VariableSymbol, expression: Box<BoundExpression> },
	/// A node the binder already reported. Consuming it must not produce
	/// further diagnostics, and evaluation of the line is skipped entirely.
	Error,
}

impl BoundExpression {
	/// `None` marks an error-typed node; binder rules short-circuit on it
	/// without emitting a second diagnostic.
	pub fn ty(&self) -> Option<Type> {
		match self {
			BoundExpression::Literal(value) => Some(value.ty()),
			BoundExpression::Variable(variable) => Some(variable.ty),
			BoundExpression::Unary { operator, .. } => Some(operator.result),
			BoundExpression::Binary { operator, .. } => Some(operator.result),
			BoundExpression::Assignment { expression, .. } => expression.ty(),
			BoundExpression::Error => None,
		}
	}
}
