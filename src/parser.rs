use crate::argument::{Argument, ArgumentBuilder};
use crate::error::{Error, Result};
use crate::lexer::{Lexeme, Line};
use crate::token::Token;
use crate::wff::Wff;

/// A read position in the tokens of one line.
pub struct TokenCursor<'l> {
	line: &'l Line,
	index: usize,
}

impl<'l> TokenCursor<'l> {
	pub fn new(line: &'l Line) -> TokenCursor<'l> {
		TokenCursor { line, index: 0 }
	}

	pub fn peek(&self) -> Option<&'l Lexeme> {
		self.line.lexemes.get(self.index)
	}

	pub fn next(&mut self) -> Option<&'l Lexeme> {
		let lexeme = self.line.lexemes.get(self.index);
		if lexeme.is_some() {
			self.index += 1;
		}
		lexeme
	}

	pub fn is_exhausted(&self) -> bool {
		self.index >= self.line.lexemes.len()
	}

	pub fn unexpected(&self, lexeme: &Lexeme) -> Error {
		Error::UnexpectedSymbol {
			symbol: lexeme.text.clone(),
			position: lexeme.position,
			line: self.line.text.clone(),
		}
	}

	/// The line ran out where a symbol was required.
	fn unexpected_end(&self) -> Error {
		Error::UnexpectedSymbol {
			symbol: String::new(),
			position: self.line.text.chars().count(),
			line: self.line.text.clone(),
		}
	}

	fn failure(&self) -> Error {
		Error::ParseFailure {
			line: self.line.text.clone(),
		}
	}

	/// Takes the next token, failing if the line has run out.
	pub fn expect_any(&mut self) -> Result<&'l Lexeme> {
		match self.next() {
			Some(lexeme) => Ok(lexeme),
			None => Err(self.failure()),
		}
	}

	pub fn expect(&mut self, token: &Token) -> Result<&'l Lexeme> {
		let lexeme = self.expect_any()?;
		if lexeme.token == *token {
			Ok(lexeme)
		} else {
			Err(self.unexpected(lexeme))
		}
	}

	pub fn expect_end(&self) -> Result<()> {
		match self.peek() {
			Some(lexeme) => Err(self.unexpected(lexeme)),
			None => Ok(()),
		}
	}
}

/// Parses a formula from the front of `cursor`.
///
/// Gives `None`, consuming nothing, when the tokens are exhausted or the next
/// one is a boundary (`,`, `)` or `∴`).
pub fn parse_formula(cursor: &mut TokenCursor) -> Result<Option<Wff>> {
	match cursor.peek() {
		None => return Ok(None),
		Some(lexeme) if lexeme.token.is_boundary() => return Ok(None),
		_ => {}
	}
	let lexeme = cursor.expect_any()?;
	Ok(Some(match &lexeme.token {
		Token::Atom(name) => Wff::Atom(name.clone()),
		Token::Not => Wff::not(require_formula(cursor)?),
		Token::LeftParenthesis => parse_binary(cursor)?,
		_ => return Err(cursor.unexpected(lexeme)),
	}))
}

// a formula must follow here
fn require_formula(cursor: &mut TokenCursor) -> Result<Wff> {
	match parse_formula(cursor)? {
		Some(wff) => Ok(wff),
		None => Err(match cursor.peek() {
			Some(lexeme) => cursor.unexpected(lexeme),
			None => cursor.unexpected_end(),
		}),
	}
}

// after the opening bracket
fn parse_binary(cursor: &mut TokenCursor) -> Result<Wff> {
	let left = require_formula(cursor)?;
	let operator = cursor.expect_any()?;
	let right = require_formula(cursor)?;
	cursor.expect(&Token::RightParenthesis)?;
	Ok(match operator.token {
		Token::And => Wff::and(left, right),
		Token::Or => Wff::or(left, right),
		_ => Wff::implies(left, right),
	})
}

/// Parses the premises and conclusion making up the rest of the line.
pub fn parse_argument(cursor: &mut TokenCursor) -> Result<Argument> {
	let mut builder = ArgumentBuilder::new();
	while let Some(lexeme) = cursor.peek() {
		if !lexeme.token.is_boundary() {
			if builder.has_conclusion() {
				return Err(cursor.unexpected(lexeme));
			}
			builder.add_premise(require_formula(cursor)?);
			continue;
		}

		let boundary = cursor.expect_any()?;
		match (&boundary.token, builder.has_conclusion()) {
			(Token::Comma, false) => {}
			(Token::Therefore, false) => {
				let conclusion = require_formula(cursor)?;
				builder.set_conclusion(conclusion);
			}
			(Token::RightParenthesis, true) => {
				cursor.expect_end()?;
				break;
			}
			_ => return Err(cursor.unexpected(boundary)),
		}
	}
	Ok(builder.finish())
}

/// One line of a program.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Statement {
	Assign { name: String, value: bool },
	Describe { name: String, text: String },
	Declare { id: String, argument: Argument },
	Assert { id: String },
	Validate { id: String },
	Valuate { id: String },
	Print { text: String },
}

fn expect_identifier(cursor: &mut TokenCursor) -> Result<String> {
	let lexeme = cursor.expect_any()?;
	match &lexeme.token {
		Token::Identifier(id) => Ok(id.clone()),
		_ => Err(cursor.unexpected(lexeme)),
	}
}

/// Parses a whole line; `None` for a line with no tokens.
pub fn parse_statement(line: &Line) -> Result<Option<Statement>> {
	let mut cursor = TokenCursor::new(line);
	let head = match cursor.next() {
		Some(lexeme) => lexeme,
		None => return Ok(None),
	};

	let statement = match &head.token {
		Token::Print => {
			let text = match cursor.next() {
				Some(Lexeme {
					token: Token::Text(text),
					..
				}) => text.clone(),
				Some(lexeme) => return Err(cursor.unexpected(lexeme)),
				None => String::new(),
			};
			Statement::Print { text }
		}
		Token::Atom(name) => {
			let verb = cursor.expect_any()?;
			let object = cursor.expect_any()?;
			match (&verb.token, &object.token) {
				(Token::Assign, Token::True) | (Token::Assign, Token::False) => Statement::Assign {
					name: name.clone(),
					value: object.token == Token::True,
				},
				(Token::Is, Token::Text(text)) => Statement::Describe {
					name: name.clone(),
					text: text.clone(),
				},
				(Token::Assign, _) | (Token::Is, _) => return Err(cursor.unexpected(object)),
				_ => return Err(cursor.unexpected(verb)),
			}
		}
		Token::Argument => {
			let id = expect_identifier(&mut cursor)?;
			cursor.expect(&Token::Assign)?;
			let argument = parse_argument(&mut cursor)?;
			Statement::Declare { id, argument }
		}
		Token::Assert => Statement::Assert {
			id: expect_identifier(&mut cursor)?,
		},
		Token::Validate => Statement::Validate {
			id: expect_identifier(&mut cursor)?,
		},
		Token::Valuate => Statement::Valuate {
			id: expect_identifier(&mut cursor)?,
		},
		_ => return Err(cursor.unexpected(head)),
	};
	cursor.expect_end()?;
	Ok(Some(statement))
}
