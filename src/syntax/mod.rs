//! Lexical and syntactic analysis.
//!
//! [`SyntaxTree::parse`] runs the lexer and parser over one line of input
//! and returns the root expression together with everything either stage
//! reported. [`SyntaxTree::parse_tokens`] exposes the raw token stream for
//! callers that only care about classification.

mod expression;
mod lexer;
mod parser;
mod token;

pub use expression::Expression;
pub(crate) use lexer::Lexer;
use parser::Parser;
pub use token::{Token, TokenKind};

use crate::{diagnostics::Diagnostic, text::SourceText};

/// The parser's output: the root expression, the accumulated diagnostics
/// and the source text the spans point into.
#[derive(Debug)]
pub struct SyntaxTree<'a> {
	text:        SourceText<'a>,
	root:        Box<Expression<'a>>,
	diagnostics: Vec<Diagnostic>,
}

impl<'a> SyntaxTree<'a> {
	/// Parse one line of source text. Never fails; syntax problems surface
	/// through [`SyntaxTree::diagnostics`].
	pub fn parse(text: &'a str) -> Self {
		let text = SourceText::new(text);
		let (root, diagnostics) = Parser::new(&text).parse();
		Self { text, root, diagnostics: diagnostics.into_vec() }
	}

	/// Lex `text` into its full token sequence, trivia included, without
	/// parsing. The trailing EOF token is omitted.
	pub fn parse_tokens(text: &'a str) -> Vec<Token<'a>> {
		let text = SourceText::new(text);
		let (tokens, _) = Lexer::new(&text).lex_tokens();
		tokens.into_iter().filter(|t| t.kind != TokenKind::Eof).collect()
	}

	pub fn text(&self) -> &SourceText<'a> { &self.text }

	pub fn root(&self) -> &Expression<'a> { &self.root }

	pub fn diagnostics(&self) -> &[Diagnostic] { &self.diagnostics }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parse_tokens_keeps_trivia_and_drops_eof() {
		let tokens = SyntaxTree::parse_tokens("1 + 2");
		let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
		assert_eq!(
			kinds,
			vec![TokenKind::Number, TokenKind::Whitespace, TokenKind::Plus, TokenKind::Whitespace, TokenKind::Number]
		);
	}

	#[test]
	fn tree_collects_lexer_and_parser_diagnostics() {
		let tree = SyntaxTree::parse("1 + @");
		let messages: Vec<_> = tree.diagnostics().iter().map(|d| d.message.clone()).collect();
		assert_eq!(
			messages,
			vec!["Bad character input: '@'.", "Unexpected token <Eof>, expected <Identifier>."]
		);
	}

	#[test]
	fn root_span_covers_the_expression() {
		let tree = SyntaxTree::parse(" 1 + 2 ");
		let span = tree.root().span();
		assert_eq!(tree.text().slice(span), "1 + 2");
	}
}
