//! Recursive-descent parser with precedence climbing.
//!
//! Operator levels, lowest binding power first, all left-associative:
//!
//! |Level|Operators|
//! --|--
//! 1|`or`
//! 2|`and`
//! 3|`==` `!=` `is`
//! 4|`+` `-`
//! 5|`*` `/`
//! 6|unary `-` `not`
//!
//! Assignment (`identifier = expression`) sits above all of these and is
//! recognized by two tokens of lookahead, so a plain `=` anywhere else is
//! still a syntax error.
//!
//! The parser never aborts: a mismatched token is reported, consumed, and
//! replaced with a fabricated placeholder of the expected kind. Consuming
//! exactly one token per match guarantees forward progress.

use TokenKind::*;

use crate::{diagnostics::DiagnosticBag, evaluator::Value, syntax::{Expression, Lexer, Token, TokenKind}, text::SourceText};

pub(crate) struct Parser<'a> {
	/// The tokens to parse, with whitespace and bad tokens filtered out.
	tokens:      Vec<Token<'a>>,
	position:    usize,
	diagnostics: DiagnosticBag,
}

impl<'a> Parser<'a> {
	pub fn new(text: &SourceText<'a>) -> Self {
		let (tokens, diagnostics) = Lexer::new(text).lex_tokens();
		let tokens = tokens.into_iter().filter(|t| !matches!(t.kind, Whitespace | Bad)).collect();
		Self { tokens, position: 0, diagnostics }
	}

	pub fn parse(mut self) -> (Box<Expression<'a>>, DiagnosticBag) {
		let expression = self.parse_expression();
		self.match_token(Eof);
		(expression, self.diagnostics)
	}

	fn parse_expression(&mut self) -> Box<Expression<'a>> {
		// `identifier = ...` is an assignment, anything else falls through to
		// the operator levels.
		if self.peek(0).kind == Identifier && self.peek(1).kind == Equals {
			let identifier = self.next_token();
			let equals = self.next_token();
			let expression = self.parse_expression();
			return Expression::assignment(identifier, equals, expression);
		}
		self.parse_binary_expression(0)
	}

	fn parse_binary_expression(&mut self, parent_precedence: usize) -> Box<Expression<'a>> {
		let unary_precedence = unary_operator_precedence(self.current().kind);
		let mut left = if unary_precedence != 0 && unary_precedence >= parent_precedence {
			let operator = self.next_token();
			let operand = self.parse_binary_expression(unary_precedence);
			Expression::unary(operator, operand)
		} else {
			self.parse_primary_expression()
		};

		loop {
			let precedence = binary_operator_precedence(self.current().kind);
			if precedence == 0 || precedence <= parent_precedence {
				break;
			}
			let operator = self.next_token();
			let right = self.parse_binary_expression(precedence);
			left = Expression::binary(left, operator, right);
		}
		left
	}

	fn parse_primary_expression(&mut self) -> Box<Expression<'a>> {
		match self.current().kind {
			OpenParenthesis => {
				let open = self.next_token();
				let expression = self.parse_expression();
				let close = self.match_token(CloseParenthesis);
				Expression::parenthesized(open, expression, close)
			}
			TrueKeyword | FalseKeyword => {
				let token = self.next_token();
				let value = Value::Bool(token.kind == TrueKeyword);
				Expression::literal(token, value)
			}
			Number => {
				let token = self.match_token(Number);
				let value = token.value.clone().unwrap_or(Value::Int(0));
				Expression::literal(token, value)
			}
			_ => {
				let identifier = self.match_token(Identifier);
				Expression::name(identifier)
			}
		}
	}

	/// Peek `offset` tokens ahead, clamped to the trailing EOF token.
	fn peek(&self, offset: usize) -> &Token<'a> {
		let index = self.position + offset;
		self.tokens.get(index).unwrap_or_else(|| &self.tokens[self.tokens.len() - 1])
	}

	fn current(&self) -> &Token<'a> { self.peek(0) }

	/// Return the current token and advance past it. At EOF the cursor stays
	/// put, so the parser can never run off the end.
	fn next_token(&mut self) -> Token<'a> {
		let token = self.current().clone();
		if self.position < self.tokens.len() - 1 {
			self.position += 1;
		}
		token
	}

	/// Consume the current token. If it isn't of the expected kind, report
	/// it and fabricate a placeholder so parsing can continue.
	fn match_token(&mut self, kind: TokenKind) -> Token<'a> {
		if self.current().kind == kind {
			return self.next_token();
		}
		let actual = self.next_token();
		self.diagnostics.report_unexpected_token(actual.span(), actual.kind, kind);
		Token::new(kind, actual.position, "", None)
	}
}

fn unary_operator_precedence(kind: TokenKind) -> usize {
	match kind {
		Minus | NotKeyword => 6,
		_ => 0,
	}
}

fn binary_operator_precedence(kind: TokenKind) -> usize {
	match kind {
		Star | Slash => 5,
		Plus | Minus => 4,
		EqualsEquals | BangEquals | IsKeyword => 3,
		AndKeyword => 2,
		OrKeyword => 1,
		_ => 0,
	}
}
