//! An interactive interpreter for a small Python-flavored expression
//! language: arithmetic, boolean logic, comparisons and variable
//! assignment, with variable state kept across lines.
//!
//! One line of input flows through four stages:
//!
//! ``` markdown
//! raw text --lex--> tokens --parse--> syntax tree --bind--> bound tree --evaluate--> value
//! ```
//!
//! ## Lexing and parsing
//!
//! The lexer classifies the text into tokens (trivia included) and the
//! parser builds an immutable expression tree by recursive descent with
//! precedence climbing. Neither stage ever aborts: problems become
//! diagnostics and the output is always a complete, best-effort tree.
//!
//! ## Binding
//!
//! The binder walks the syntax tree against a chain of variable scopes,
//! resolving names to typed symbols and operators against fixed
//! (operator, operand types) tables. Its output is a bound tree that later
//! stages can evaluate without ever looking at source text again. One scope
//! is added to the chain per evaluated line, which is what makes variables
//! persist in the REPL without re-binding earlier lines.
//!
//! ## Evaluation
//!
//! A pure recursive walk of the bound tree, run only when the line produced
//! no diagnostics at all. Assignments write through the caller-owned
//! variable table; everything else is stateless.

pub mod cli;

mod binding;
mod compilation;
mod diagnostics;
mod error;
mod evaluator;
mod snek;
mod syntax;
mod text;

pub use binding::{Type, VariableSymbol};
pub use compilation::{Compilation, EvaluationResult};
pub use diagnostics::Diagnostic;
pub use error::{RuntimeError, SnekError};
pub use evaluator::{Value, Variables};
pub use snek::Snek;
pub use syntax::{Expression, SyntaxTree, Token, TokenKind};
pub use text::{SourceText, TextSpan};
