use crate::{evaluator::Value, text::TextSpan};

/// The different kinds of tokens in the language.
///
/// The kind is a closed, payload-free enumeration so later stages can key
/// lookup tables on it; literal payloads live on [`Token::value`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
	/// An unrecognized character, length 1. Lexing continues past it.
	Bad,
	/// End of input. Emitted exactly once.
	Eof,
	/// One maximal run of spaces, tabs and line breaks.
	Whitespace,
	/// Integer literal, e.g. `123`.
	Number,
	/// Identifier, e.g. a variable name.
	Identifier,
	/// Plus `+`.
	Plus,
	/// Minus `-`.
	Minus,
	/// Asterisk `*`.
	Star,
	/// Slash `/`.
	Slash,
	/// Equals `=`.
	Equals,
	/// Equals equals `==`.
	EqualsEquals,
	/// Bang equals `!=`.
	BangEquals,
	/// Left parenthesis `(`.
	OpenParenthesis,
	/// Right parenthesis `)`.
	CloseParenthesis,
	/// Boolean literal `True`.
	TrueKeyword,
	/// Boolean literal `False`.
	FalseKeyword,
	/// Logical NOT keyword `not`.
	NotKeyword,
	/// Identity comparison keyword `is`.
	IsKeyword,
	/// Logical AND keyword `and`.
	AndKeyword,
	/// Logical OR keyword `or`.
	OrKeyword,
}

impl TokenKind {
	/// Classify a maximal identifier run against the keyword table.
	pub fn keyword_or_identifier(text: &str) -> Self {
		match text {
			"True" => TokenKind::TrueKeyword,
			"False" => TokenKind::FalseKeyword,
			"not" => TokenKind::NotKeyword,
			"is" => TokenKind::IsKeyword,
			"and" => TokenKind::AndKeyword,
			"or" => TokenKind::OrKeyword,
			_ => TokenKind::Identifier,
		}
	}
}

impl std::fmt::Display for TokenKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{self:?}") }
}

/// A token produced by the lexer. `text` borrows from the source line;
/// placeholder tokens fabricated by the parser carry empty text.
#[derive(Debug, Clone)]
pub struct Token<'a> {
	pub kind:     TokenKind,
	pub position: usize,
	pub text:     &'a str,
	pub value:    Option<Value>,
}

impl<'a> Token<'a> {
	pub fn new(kind: TokenKind, position: usize, text: &'a str, value: Option<Value>) -> Self {
		Self { kind, position, text, value }
	}

	pub fn span(&self) -> TextSpan { TextSpan::new(self.position, self.text.len()) }
}
