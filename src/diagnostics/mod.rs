//! Diagnostic accumulation.
//!
//! Lexing, parsing and binding never abort: each stage appends `(span,
//! message)` pairs to a [`DiagnosticBag`] and keeps producing a best-effort
//! result. Evaluation only runs when the bag stayed empty, so any diagnostic
//! blocks the value for that line.

use crate::{
	binding::Type,
	syntax::TokenKind,
	text::TextSpan,
};

/// A reported problem, anchored to a span of the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
	pub span:    TextSpan,
	pub message: String,
}

impl std::fmt::Display for Diagnostic {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.message) }
}

/// An ordered, append-only collection of diagnostics. Ordering is emission
/// order.
#[derive(Debug, Default)]
pub struct DiagnosticBag {
	diagnostics: Vec<Diagnostic>,
}

impl DiagnosticBag {
	pub fn new() -> Self { Self::default() }

	pub fn is_empty(&self) -> bool { self.diagnostics.is_empty() }

	pub fn into_vec(self) -> Vec<Diagnostic> { self.diagnostics }

	fn report(&mut self, span: TextSpan, message: String) {
		self.diagnostics.push(Diagnostic { span, message });
	}

	pub fn report_bad_character(&mut self, position: usize, character: char) {
		let span = TextSpan::new(position, character.len_utf8());
		self.report(span, format!("Bad character input: '{character}'."));
	}

	pub fn report_invalid_number(&mut self, span: TextSpan, text: &str) {
		self.report(span, format!("The number {text} isn't a valid Int."));
	}

	pub fn report_unexpected_token(&mut self, span: TextSpan, actual: TokenKind, expected: TokenKind) {
		self.report(span, format!("Unexpected token <{actual}>, expected <{expected}>."));
	}

	pub fn report_undefined_name(&mut self, span: TextSpan, name: &str) {
		self.report(span, format!("Variable '{name}' doesn't exist."));
	}

	pub fn report_undefined_unary_operator(&mut self, span: TextSpan, operator: &str, operand: Type) {
		self.report(span, format!("Unary operator '{operator}' is not defined for type {operand}."));
	}

	pub fn report_undefined_binary_operator(&mut self, span: TextSpan, operator: &str, left: Type, right: Type) {
		self.report(span, format!("Binary operator '{operator}' is not defined for types {left} and {right}."));
	}

	pub fn report_incompatible_redeclaration(&mut self, span: TextSpan, name: &str, declared: Type, new: Type) {
		self.report(span, format!("Cannot convert type {new}, variable '{name}' is already declared as {declared}."));
	}
}

impl IntoIterator for DiagnosticBag {
	type Item = Diagnostic;
	type IntoIter = std::vec::IntoIter<Diagnostic>;

	fn into_iter(self) -> Self::IntoIter { self.diagnostics.into_iter() }
}
