//! The lexer walks the source text once, left to right, and classifies it
//! into tokens. It never fails: a malformed number or an unrecognized
//! character becomes a diagnostic plus a recoverable token, and scanning
//! continues with the next character.

use std::{iter::Peekable, str::CharIndices};

use TokenKind::*;

use crate::{diagnostics::DiagnosticBag, evaluator::Value, syntax::{Token, TokenKind}, text::{SourceText, TextSpan}};

pub(crate) struct Lexer<'a> {
	/// User input source code
	source:      &'a str,
	/// User input source code iterator
	source_iter: Peekable<CharIndices<'a>>,
	/// Points at the beginning of the current lexeme
	start:       usize,
	/// Points at the character currently being considered
	cursor:      usize,
	/// Lexical errors reported so far
	diagnostics: DiagnosticBag,
}

impl<'a> Lexer<'a> {
	pub fn new(text: &SourceText<'a>) -> Self {
		let source = text.as_str();
		Self { source, source_iter: source.char_indices().peekable(), start: 0, cursor: 0, diagnostics: DiagnosticBag::new() }
	}

	/// Lex the whole input. The returned sequence always ends with exactly
	/// one [`TokenKind::Eof`] token.
	pub fn lex_tokens(mut self) -> (Vec<Token<'a>>, DiagnosticBag) {
		let mut tokens = Vec::new();
		while let Some(&(index, _)) = self.source_iter.peek() {
			// We are at the beginning of the next lexeme.
			self.start = index;
			self.cursor = index;
			tokens.push(self.lex_token());
		}
		tokens.push(Token::new(Eof, self.source.len(), "", None));
		(tokens, self.diagnostics)
	}

	/// Lex a single token starting at `self.start`.
	fn lex_token(&mut self) -> Token<'a> {
		let next_char = match self.advance() {
			Some(c) => c,
			None => return Token::new(Eof, self.source.len(), "", None),
		};
		let (kind, value) = match next_char {
			'+' => (Plus, None),
			'-' => (Minus, None),
			'*' => (Star, None),
			'/' => (Slash, None),
			'(' => (OpenParenthesis, None),
			')' => (CloseParenthesis, None),
			'=' => {
				if self.match_next('=') {
					(EqualsEquals, None)
				} else {
					(Equals, None)
				}
			}
			'!' if self.match_next('=') => (BangEquals, None),
			c if c.is_whitespace() => self.whitespace(),
			c if c.is_ascii_digit() => self.number(),
			c if c.is_ascii_alphabetic() || c == '_' => self.identifier(),
			c => {
				self.diagnostics.report_bad_character(self.start, c);
				(Bad, None)
			}
		};

		Token::new(kind, self.start, &self.source[self.start..self.cursor], value)
	}

	/// Match the next character if it is the expected one
	fn match_next(&mut self, expected: char) -> bool {
		matches!(self.peek(), Some(c) if c == expected && { self.advance(); true })
	}

	/// Advance to the next character
	fn advance(&mut self) -> Option<char> {
		let (i, c) = self.source_iter.next()?;
		self.cursor = i + c.len_utf8();
		Some(c)
	}

	/// Peek the current character
	fn peek(&mut self) -> Option<char> { self.source_iter.peek().map(|&(_, c)| c) }

	/// Collapse a maximal run of whitespace into one token.
	fn whitespace(&mut self) -> (TokenKind, Option<Value>) {
		while self.peek().is_some_and(|c| c.is_whitespace()) {
			self.advance();
		}
		(Whitespace, None)
	}

	/// Lex a maximal run of digits. Overflow is recoverable: the token keeps
	/// value 0 and a diagnostic covers its span.
	fn number(&mut self) -> (TokenKind, Option<Value>) {
		while self.peek().is_some_and(|c| c.is_ascii_digit()) {
			self.advance();
		}
		let text = &self.source[self.start..self.cursor];
		let value = match text.parse::<i64>() {
			Ok(n) => n,
			Err(_) => {
				let span = TextSpan::from_bounds(self.start, self.cursor);
				self.diagnostics.report_invalid_number(span, text);
				0
			}
		};
		(Number, Some(Value::Int(value)))
	}

	/// Lex a maximal identifier run and classify it against the keyword
	/// table.
	fn identifier(&mut self) -> (TokenKind, Option<Value>) {
		while self.peek().is_some_and(|c| c.is_ascii_alphanumeric() || c == '_') {
			self.advance();
		}
		let text = &self.source[self.start..self.cursor];
		(TokenKind::keyword_or_identifier(text), None)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn lex(input: &str) -> (Vec<Token<'_>>, DiagnosticBag) {
		let text = SourceText::new(input);
		let lexer = Lexer::new(&text);
		let (tokens, diagnostics) = lexer.lex_tokens();
		(tokens, diagnostics)
	}

	/// Every supported token kind with a canonical single-token sample.
	fn single_token_samples() -> Vec<(TokenKind, &'static str)> {
		vec![
			(Number, "123"),
			(Number, "1"),
			(Identifier, "a"),
			(Identifier, "reday"),
			(Identifier, "snake_case"),
			(Plus, "+"),
			(Minus, "-"),
			(Star, "*"),
			(Slash, "/"),
			(Equals, "="),
			(EqualsEquals, "=="),
			(BangEquals, "!="),
			(OpenParenthesis, "("),
			(CloseParenthesis, ")"),
			(TrueKeyword, "True"),
			(FalseKeyword, "False"),
			(NotKeyword, "not"),
			(IsKeyword, "is"),
			(AndKeyword, "and"),
			(OrKeyword, "or"),
			(Whitespace, " "),
			(Whitespace, "   "),
			(Whitespace, "\t"),
			(Whitespace, "\n"),
			(Whitespace, "\r"),
			(Whitespace, "\r\n"),
			(Whitespace, " \t\r\n "),
		]
	}

	#[test]
	fn lexes_single_tokens_round_trip() {
		for (kind, text) in single_token_samples() {
			let (tokens, diagnostics) = lex(text);
			assert!(diagnostics.is_empty(), "unexpected diagnostics for {text:?}");
			assert_eq!(tokens.len(), 2, "expected single token plus eof for {text:?}");
			assert_eq!(tokens[0].kind, kind, "wrong kind for {text:?}");
			assert_eq!(tokens[0].text, text, "text not preserved for {text:?}");
			assert_eq!(tokens[1].kind, Eof);
		}
	}

	#[test]
	fn lexes_token_sequences() {
		let (tokens, diagnostics) = lex("x = 1 + 2");
		assert!(diagnostics.is_empty());
		let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
		assert_eq!(kinds, vec![Identifier, Whitespace, Equals, Whitespace, Number, Whitespace, Plus, Whitespace, Number, Eof]);
	}

	#[test]
	fn number_token_carries_its_value() {
		let (tokens, _) = lex("42");
		assert_eq!(tokens[0].value, Some(Value::Int(42)));
	}

	#[test]
	fn number_overflow_recovers_with_zero() {
		let (tokens, diagnostics) = lex("99999999999999999999");
		let diagnostics = diagnostics.into_vec();
		assert_eq!(diagnostics.len(), 1);
		assert_eq!(diagnostics[0].message, "The number 99999999999999999999 isn't a valid Int.");
		assert_eq!(tokens[0].kind, Number);
		assert_eq!(tokens[0].value, Some(Value::Int(0)));
	}

	#[test]
	fn bad_character_is_reported_and_skipped() {
		let (tokens, diagnostics) = lex("1 @ 2");
		let diagnostics = diagnostics.into_vec();
		assert_eq!(diagnostics.len(), 1);
		assert_eq!(diagnostics[0].message, "Bad character input: '@'.");
		// Lexing continued past the bad character.
		let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
		assert_eq!(kinds, vec![Number, Whitespace, Bad, Whitespace, Number, Eof]);
	}

	#[test]
	fn bare_bang_is_a_bad_character() {
		let (tokens, diagnostics) = lex("!");
		assert_eq!(diagnostics.into_vec().len(), 1);
		assert_eq!(tokens[0].kind, Bad);
		assert_eq!(tokens[0].text, "!");
	}

	#[test]
	fn positions_track_byte_offsets() {
		let (tokens, _) = lex("10 + 200");
		assert_eq!(tokens[0].span(), TextSpan::new(0, 2));
		assert_eq!(tokens[2].span(), TextSpan::new(3, 1));
		assert_eq!(tokens[4].span(), TextSpan::new(5, 3));
	}

	#[test]
	fn empty_input_yields_only_eof() {
		let (tokens, diagnostics) = lex("");
		assert!(diagnostics.is_empty());
		assert_eq!(tokens.len(), 1);
		assert_eq!(tokens[0].kind, Eof);
	}

	#[test]
	fn keywords_are_maximal_munch() {
		let (tokens, _) = lex("nottrue");
		assert_eq!(tokens[0].kind, Identifier);
		assert_eq!(tokens[0].text, "nottrue");
	}
}
