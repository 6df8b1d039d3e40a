//! Semantic analysis.
//!
//! The binder walks the syntax tree against the scope chain and produces a
//! bound tree: names resolved to symbols, operators resolved against the
//! type tables, every mismatch reported as a diagnostic. Errors are
//! contained, not propagated — a node that already produced a diagnostic
//! binds to [`BoundExpression::Error`], and nothing that consumes an
//! error-typed operand reports again.

mod bound;
mod scope;
mod types;

pub(crate) use bound::{
	BoundBinaryOperator, BoundBinaryOperatorKind, BoundExpression, BoundUnaryOperator, BoundUnaryOperatorKind,
};
pub(crate) use scope::{ScopeArena, ScopeId};
pub use scope::VariableSymbol;
pub use types::Type;

use crate::{diagnostics::{Diagnostic, DiagnosticBag}, syntax::Expression, text::TextSpan};

/// The result of binding one line: the scope it declared into, everything
/// it reported, and the bound expression to evaluate.
pub(crate) struct BoundGlobalScope {
	pub previous:    Option<ScopeId>,
	pub scope:       ScopeId,
	pub diagnostics: Vec<Diagnostic>,
	pub variables:   Vec<VariableSymbol>,
	pub expression:  BoundExpression,
}

pub(crate) struct Binder<'s> {
	arena:       &'s mut ScopeArena,
	scope:       ScopeId,
	diagnostics: DiagnosticBag,
}

impl<'s> Binder<'s> {
	/// Bind `root` inside a fresh scope chained to `previous`.
	pub fn bind_global_scope(
		arena: &'s mut ScopeArena,
		previous: Option<ScopeId>,
		root: &Expression<'_>,
	) -> BoundGlobalScope {
		let scope = arena.push(previous);
		let mut binder = Binder { arena, scope, diagnostics: DiagnosticBag::new() };
		let expression = binder.bind_expression(root);
		let variables = binder.arena.declared(scope).to_vec();
		BoundGlobalScope { previous, scope, diagnostics: binder.diagnostics.into_vec(), variables, expression }
	}

	fn bind_expression(&mut self, expression: &Expression<'_>) -> BoundExpression {
		match expression {
			Expression::Literal { value, .. } => BoundExpression::Literal(value.clone()),
			Expression::Parenthesized { expression, .. } => self.bind_expression(expression),
			Expression::Name { identifier } => self.bind_name(identifier.span(), identifier.text),
			Expression::Unary { operator, operand } => {
				let operand = self.bind_expression(operand);
				// An error-typed operand was already reported; stay silent.
				let Some(operand_type) = operand.ty() else {
					return BoundExpression::Error;
				};
				match BoundUnaryOperator::bind(operator.kind, operand_type) {
					Some(resolved) => BoundExpression::Unary { operator: resolved, operand: Box::new(operand) },
					None => {
						self.diagnostics.report_undefined_unary_operator(
							operator.span(),
							operator.text,
							operand_type,
						);
						BoundExpression::Error
					}
				}
			}
			Expression::Binary { left, operator, right } => {
				let left = self.bind_expression(left);
				let right = self.bind_expression(right);
				let (Some(left_type), Some(right_type)) = (left.ty(), right.ty()) else {
					return BoundExpression::Error;
				};
				match BoundBinaryOperator::bind(operator.kind, left_type, right_type) {
					Some(resolved) => BoundExpression::Binary {
						operator: resolved,
						left: Box::new(left),
						right: Box::new(right),
					},
					None => {
						self.diagnostics.report_undefined_binary_operator(
							operator.span(),
							operator.text,
							left_type,
							right_type,
						);
						BoundExpression::Error
					}
				}
			}
			Expression::Assignment { identifier, expression, .. } => {
				let bound = self.bind_expression(expression);
				let Some(value_type) = bound.ty() else {
					return BoundExpression::Error;
				};
				// A fabricated identifier has already been reported by the
				// parser.
				if identifier.text.is_empty() {
					return BoundExpression::Error;
				}
				let variable = match self.arena.lookup(self.scope, identifier.text) {
					Some(existing) if existing.ty != value_type => {
						self.diagnostics.report_incompatible_redeclaration(
							expression.span(),
							identifier.text,
							existing.ty,
							value_type,
						);
						return BoundExpression::Error;
					}
					Some(existing) => existing.clone(),
					None => {
						let symbol = VariableSymbol::new(identifier.text, value_type);
						self.arena.declare(self.scope, symbol.clone());
						symbol
					}
				};
				BoundExpression::Assignment { variable, expression: Box::new(bound) }
			}
		}
	}

	fn bind_name(&mut self, span: TextSpan, name: &str) -> BoundExpression {
		// Fabricated name tokens carry empty text; the parser already
		// reported them.
		if name.is_empty() {
			return BoundExpression::Error;
		}
		match self.arena.lookup(self.scope, name) {
			Some(symbol) => BoundExpression::Variable(symbol.clone()),
			None => {
				self.diagnostics.report_undefined_name(span, name);
				BoundExpression::Error
			}
		}
	}
}
