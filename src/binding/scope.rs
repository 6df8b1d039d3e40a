//! Variable scopes.
//!
//! Each evaluated line binds inside a fresh scope chained to the previous
//! line's, so earlier declarations stay visible without re-binding earlier
//! expressions. The chain is stored arena-style: an append-only vector of
//! records with integer indices for `previous`, which keeps ownership flat
//! and makes snapshots of earlier states cheap.

use crate::binding::Type;

/// A named, typed variable identity. Equality and hashing cover both
/// fields; this is the key into the runtime variable table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VariableSymbol {
	pub name: String,
	pub ty:   Type,
}

impl VariableSymbol {
	pub fn new(name: impl Into<String>, ty: Type) -> Self { Self { name: name.into(), ty } }
}

/// Index of a scope record inside its [`ScopeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeId(usize);

#[derive(Debug, Default)]
struct ScopeRecord {
	previous:  Option<ScopeId>,
	variables: Vec<VariableSymbol>,
}

/// Append-only storage for the scope chain.
#[derive(Debug, Default)]
pub(crate) struct ScopeArena {
	records: Vec<ScopeRecord>,
}

impl ScopeArena {
	pub fn new() -> Self { Self::default() }

	pub fn len(&self) -> usize { self.records.len() }

	/// Drop every record appended at or after `len`. Used to abandon the
	/// scope of a line that produced diagnostics.
	pub fn truncate(&mut self, len: usize) { self.records.truncate(len) }

	/// Append a fresh, empty scope chained to `previous`.
	pub fn push(&mut self, previous: Option<ScopeId>) -> ScopeId {
		self.records.push(ScopeRecord { previous, variables: Vec::new() });
		ScopeId(self.records.len() - 1)
	}

	/// Declare `symbol` in `scope`. Fails when the name already exists in
	/// that same record; shadowing checks across the chain are the binder's
	/// job, via [`ScopeArena::lookup`].
	pub fn declare(&mut self, scope: ScopeId, symbol: VariableSymbol) -> bool {
		let record = &mut self.records[scope.0];
		if record.variables.iter().any(|v| v.name == symbol.name) {
			return false;
		}
		record.variables.push(symbol);
		true
	}

	/// Resolve `name`, walking outward from `scope` through its ancestors
	/// until found or the chain is exhausted.
	pub fn lookup(&self, scope: ScopeId, name: &str) -> Option<&VariableSymbol> {
		let mut current = Some(scope);
		while let Some(id) = current {
			let record = &self.records[id.0];
			if let Some(symbol) = record.variables.iter().find(|v| v.name == name) {
				return Some(symbol);
			}
			current = record.previous;
		}
		None
	}

	/// The variables declared directly in `scope`.
	pub fn declared(&self, scope: ScopeId) -> &[VariableSymbol] { &self.records[scope.0].variables }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn symbol_equality_covers_name_and_type() {
		assert_eq!(VariableSymbol::new("x", Type::Int), VariableSymbol::new("x", Type::Int));
		assert_ne!(VariableSymbol::new("x", Type::Int), VariableSymbol::new("x", Type::Bool));
		assert_ne!(VariableSymbol::new("x", Type::Int), VariableSymbol::new("y", Type::Int));
	}

	#[test]
	fn lookup_walks_the_chain() {
		let mut arena = ScopeArena::new();
		let first = arena.push(None);
		arena.declare(first, VariableSymbol::new("x", Type::Int));
		let second = arena.push(Some(first));
		arena.declare(second, VariableSymbol::new("y", Type::Bool));

		assert_eq!(arena.lookup(second, "x"), Some(&VariableSymbol::new("x", Type::Int)));
		assert_eq!(arena.lookup(second, "y"), Some(&VariableSymbol::new("y", Type::Bool)));
		assert_eq!(arena.lookup(first, "y"), None);
		assert_eq!(arena.lookup(second, "z"), None);
	}

	#[test]
	fn redeclaration_in_the_same_record_fails() {
		let mut arena = ScopeArena::new();
		let scope = arena.push(None);
		assert!(arena.declare(scope, VariableSymbol::new("x", Type::Int)));
		assert!(!arena.declare(scope, VariableSymbol::new("x", Type::Bool)));
		assert_eq!(arena.declared(scope).len(), 1);
	}

	#[test]
	fn truncate_abandons_later_scopes() {
		let mut arena = ScopeArena::new();
		let first = arena.push(None);
		let mark = arena.len();
		arena.push(Some(first));
		arena.truncate(mark);
		assert_eq!(arena.len(), 1);
	}
}
