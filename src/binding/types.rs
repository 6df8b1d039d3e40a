/// The language's type tags. Every well-typed expression is one of these;
/// an expression the binder already reported carries no type at all
/// (`Option<Type>` with `None`), which suppresses cascading diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
	Int,
	Bool,
}

impl std::fmt::Display for Type {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Type::Int => write!(f, "Int"),
			Type::Bool => write!(f, "Bool"),
		}
	}
}
