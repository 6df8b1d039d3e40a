//! Per-line orchestration of binding and evaluation.
//!
//! A [`Compilation`] owns the scope arena and remembers the scope of the
//! last successful line, so each new line binds against everything declared
//! before it without re-binding earlier expressions. The variable table is
//! the caller's: it is passed in by mutable reference on every call, which
//! keeps the pipeline itself stateless and testable.

use crate::{
	binding::{Binder, ScopeArena, ScopeId},
	diagnostics::Diagnostic,
	error::SnekError,
	evaluator::{Evaluator, Value, Variables},
	syntax::SyntaxTree,
};

/// The outcome of one line: either a value, or the diagnostics that blocked
/// it. `value` is `Some` exactly when `diagnostics` is empty.
#[derive(Debug)]
pub struct EvaluationResult {
	pub diagnostics: Vec<Diagnostic>,
	pub value:       Option<Value>,
}

/// REPL-persistent compilation state: the scope chain across lines.
#[derive(Debug, Default)]
pub struct Compilation {
	arena:    ScopeArena,
	previous: Option<ScopeId>,
}

impl Compilation {
	pub fn new() -> Self { Self::default() }

	/// Bind and evaluate one parsed line against the chain so far.
	///
	/// Any diagnostic — from the tree or from binding — withholds evaluation
	/// entirely and leaves the chain untouched. The chain grows by one scope
	/// per diagnostic-free call.
	pub fn evaluate(
		&mut self,
		tree: &SyntaxTree<'_>,
		variables: &mut Variables,
	) -> Result<EvaluationResult, SnekError> {
		let mark = self.arena.len();
		let scope = Binder::bind_global_scope(&mut self.arena, self.previous, tree.root());

		let mut diagnostics = tree.diagnostics().to_vec();
		diagnostics.extend(scope.diagnostics);
		if !diagnostics.is_empty() {
			self.arena.truncate(mark);
			return Ok(EvaluationResult { diagnostics, value: None });
		}

		let value = match Evaluator::new(variables).evaluate(&scope.expression) {
			Ok(value) => value,
			Err(e) => {
				self.arena.truncate(mark);
				return Err(e);
			}
		};
		self.previous = Some(scope.scope);
		Ok(EvaluationResult { diagnostics, value: Some(value) })
	}

	/// Forget every declared variable, restarting the chain from scratch.
	pub fn reset(&mut self) {
		self.arena = ScopeArena::new();
		self.previous = None;
	}
}
