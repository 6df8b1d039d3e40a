//! REPL-semantics tests over the public API: one `Compilation` and one
//! variable table shared across a sequence of lines, the way the host
//! drives the pipeline.

use snek::{Compilation, SyntaxTree, Type, Value, VariableSymbol, Variables};

struct Session {
	compilation: Compilation,
	variables:   Variables,
}

impl Session {
	fn new() -> Self { Self { compilation: Compilation::new(), variables: Variables::new() } }

	fn value(&mut self, line: &str) -> Value {
		let tree = SyntaxTree::parse(line);
		let result = self.compilation.evaluate(&tree, &mut self.variables).unwrap();
		assert!(result.diagnostics.is_empty(), "diagnostics for {line:?}: {:?}", result.diagnostics);
		result.value.unwrap()
	}

	fn diagnostics(&mut self, line: &str) -> Vec<String> {
		let tree = SyntaxTree::parse(line);
		let result = self.compilation.evaluate(&tree, &mut self.variables).unwrap();
		assert!(result.value.is_none(), "expected diagnostics for {line:?}");
		result.diagnostics.into_iter().map(|d| d.message).collect()
	}
}

#[test]
fn a_realistic_session() {
	let mut session = Session::new();

	assert_eq!(session.value("1 + 2 * 3"), Value::Int(7));
	assert_eq!(session.value("x = 5"), Value::Int(5));
	assert_eq!(session.value("x + 1"), Value::Int(6));
	assert_eq!(session.value("y = x * 2"), Value::Int(10));
	assert_eq!(session.value("x + y == 15"), Value::Bool(true));
	assert_eq!(session.value("flag = x != y"), Value::Bool(true));
}

#[test]
fn diagnostics_leave_state_untouched() {
	let mut session = Session::new();

	assert_eq!(session.value("x = 1"), Value::Int(1));
	let errors = session.diagnostics("x = True");
	assert_eq!(errors, vec!["Cannot convert type Bool, variable 'x' is already declared as Int."]);

	// The table still holds the old value under the old symbol.
	let symbol = VariableSymbol::new("x", Type::Int);
	assert_eq!(session.variables.get(&symbol), Some(&Value::Int(1)));
	assert_eq!(session.value("x"), Value::Int(1));
}

#[test]
fn undefined_names_stay_undefined_after_failed_lines() {
	let mut session = Session::new();

	let errors = session.diagnostics("undefined + 1");
	assert_eq!(errors, vec!["Variable 'undefined' doesn't exist."]);
	let errors = session.diagnostics("undefined");
	assert_eq!(errors, vec!["Variable 'undefined' doesn't exist."]);
}

#[test]
fn every_stage_reports_into_one_bag() {
	let mut session = Session::new();

	// Lexical and syntactic problems from the same line, in emission order.
	let errors = session.diagnostics("1 + $");
	assert_eq!(
		errors,
		vec!["Bad character input: '$'.", "Unexpected token <Eof>, expected <Identifier>."]
	);

	// Binding problems block evaluation just the same.
	let errors = session.diagnostics("True + 1");
	assert_eq!(errors, vec!["Binary operator '+' is not defined for types Bool and Int."]);
}

#[test]
fn booleans_and_keywords() {
	let mut session = Session::new();

	assert_eq!(session.value("a = True"), Value::Bool(true));
	assert_eq!(session.value("b = not a"), Value::Bool(false));
	assert_eq!(session.value("a and b"), Value::Bool(false));
	assert_eq!(session.value("a or b"), Value::Bool(true));
	assert_eq!(session.value("a is True"), Value::Bool(true));
	assert_eq!(session.value("a != b"), Value::Bool(true));
}
