use crate::error::{Error, Result};
use crate::token::{Token, TokenKind, STATEMENT_START};
use log::trace;
use plex::lexer;

#[derive(Debug)]
enum Scan {
	Whitespace,
	Token(Token),
	// ':' or '-' without the character that completes it
	Incomplete,
	// a string literal missing its closing quote
	Unterminated,
	Unknown,
}

lexer! {
	fn next_scan(text: 'a) -> Scan;

	r#"[ \t\r]+"# => Scan::Whitespace,
	r#"[A-Z][0-9]*"# => Scan::Token(Token::Atom(text.to_owned())),
	r#"[a-z][a-z0-9_]*"# => Scan::Token(
		Token::keyword(text).unwrap_or_else(|| Token::Identifier(text.to_owned()))
	),
	r#""[^"]*""# => Scan::Token(Token::Text(text[1..text.len() - 1].to_owned())),
	r#""[^"]*"# => Scan::Unterminated,
	r#":="# => Scan::Token(Token::Assign),
	r#"->"# => Scan::Token(Token::Implies),
	r#"[:\-]"# => Scan::Incomplete,
	r#"¬|!"# => Scan::Token(Token::Not),
	r#"∧|\&"# => Scan::Token(Token::And),
	r#"∨|\|"# => Scan::Token(Token::Or),
	r#"→"# => Scan::Token(Token::Implies),
	r#"∴"# => Scan::Token(Token::Therefore),
	r#"\("# => Scan::Token(Token::LeftParenthesis),
	r#"\)"# => Scan::Token(Token::RightParenthesis),
	r#","# => Scan::Token(Token::Comma),
	r#"."# => Scan::Unknown,
}

/// A token together with its spelling in the line and the character offset
/// it starts at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lexeme {
	pub token: Token,
	pub text: String,
	pub position: usize,
}

/// One tokenized program line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
	pub text: String,
	pub lexemes: Vec<Lexeme>,
}

impl Line {
	pub fn new(text: &str) -> Result<Line> {
		Ok(Line {
			text: text.to_owned(),
			lexemes: tokenize(text)?,
		})
	}

	pub fn is_empty(&self) -> bool {
		self.lexemes.is_empty()
	}

	pub fn tokens(&self) -> impl Iterator<Item = &Token> {
		self.lexemes.iter().map(|lexeme| &lexeme.token)
	}
}

/// Scans a single token from the front of `input`, skipping leading whitespace.
/// No grammar is checked.
pub fn next_token(input: &str) -> Option<(Token, &str)> {
	let mut remaining = input;
	while let Some((scan, rest)) = next_scan(remaining) {
		match scan {
			Scan::Whitespace => remaining = rest,
			Scan::Token(token) => return Some((token, rest)),
			_ => return None,
		}
	}
	None
}

fn unexpected_character(line: &str, character: char, position: usize) -> Error {
	Error::UnexpectedCharacter {
		character,
		position,
		line: line.to_owned(),
	}
}

// whether a line may not stop after the last of `lexemes`
fn needs_continuation(lexemes: &[Lexeme]) -> bool {
	let last = match lexemes.last() {
		Some(lexeme) => lexeme.token.kind(),
		None => return false,
	};
	match last {
		TokenKind::Assign
		| TokenKind::Is
		| TokenKind::Not
		| TokenKind::And
		| TokenKind::Or
		| TokenKind::Implies
		| TokenKind::Therefore
		| TokenKind::Comma
		| TokenKind::LeftParenthesis
		| TokenKind::Argument
		| TokenKind::Assert
		| TokenKind::Validate
		| TokenKind::Valuate => true,
		// a statement-leading atom awaits `:=` or `is`
		TokenKind::Atom => lexemes.len() == 1,
		TokenKind::Identifier => {
			lexemes.len() >= 2 && lexemes[lexemes.len() - 2].token == Token::Argument
		}
		_ => false,
	}
}

// Splits a line into lexemes, reporting characters that cannot start or
// continue a token.
fn scan_line(line: &str) -> Result<Vec<Lexeme>> {
	let mut scanned = Vec::new();
	let mut remaining = line;
	let mut position = 0;
	// the previous token was a word and nothing separates it from the next
	let mut touching = false;

	while let Some((scan, rest)) = next_scan(remaining) {
		let text = &remaining[..remaining.len() - rest.len()];
		let width = text.chars().count();
		match scan {
			Scan::Whitespace => touching = false,
			Scan::Unknown => {
				let character = text.chars().next().unwrap_or_default();
				return Err(unexpected_character(line, character, position));
			}
			Scan::Incomplete => {
				return Err(match rest.chars().next() {
					Some(character) => unexpected_character(line, character, position + width),
					None => {
						let character = text.chars().last().unwrap_or_default();
						unexpected_character(line, character, position + width - 1)
					}
				});
			}
			Scan::Unterminated => {
				let character = text.chars().last().unwrap_or_default();
				return Err(unexpected_character(line, character, position + width - 1));
			}
			Scan::Token(token) => {
				// spelled with letters, so `therefore` counts as well as atoms
				let word = text.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
				if touching && word {
					let character = text.chars().next().unwrap_or_default();
					return Err(unexpected_character(line, character, position));
				}
				touching = word;
				scanned.push(Lexeme {
					token,
					text: text.to_owned(),
					position,
				});
			}
		}
		position += width;
		remaining = rest;
	}
	Ok(scanned)
}

/// Turns one line into tokens, checking each token against the successors
/// allowed by the one before it.
///
/// Every character of the line is checked before any token is. Blank lines
/// and `//` comments give no tokens.
pub fn tokenize(line: &str) -> Result<Vec<Lexeme>> {
	let head = line.trim_start();
	if head.is_empty() || head.starts_with("//") {
		return Ok(Vec::new());
	}

	let scanned = scan_line(line)?;
	let mut lexemes: Vec<Lexeme> = Vec::with_capacity(scanned.len());
	// offset just past the last accepted token
	let mut accepted_end: Option<usize> = None;
	let mut depth = 0usize;
	let mut concluded = false;

	for lexeme in scanned {
		let kind = lexeme.token.kind();
		let end = lexeme.position + lexeme.text.chars().count();
		let allowed = match lexemes.last() {
			Some(previous) => previous.token.kind().allows(kind),
			None => STATEMENT_START.contains(&kind),
		};
		if !allowed {
			return Err(Error::UnexpectedSymbol {
				symbol: lexeme.text,
				position: accepted_end.unwrap_or(end),
				line: line.to_owned(),
			});
		}

		// well placed, but an argument has one conclusion and balanced brackets
		let misplaced = match kind {
			TokenKind::Therefore => std::mem::replace(&mut concluded, true),
			TokenKind::LeftParenthesis => {
				depth += 1;
				false
			}
			TokenKind::RightParenthesis if depth == 0 => true,
			TokenKind::RightParenthesis => {
				depth -= 1;
				false
			}
			_ => false,
		};
		if misplaced {
			return Err(Error::UnexpectedSymbol {
				symbol: lexeme.text,
				position: lexeme.position,
				line: line.to_owned(),
			});
		}
		accepted_end = Some(end);
		lexemes.push(lexeme);
	}

	if depth > 0 || needs_continuation(&lexemes) {
		return Err(Error::UnexpectedEndOfLine {
			line: line.to_owned(),
		});
	}
	trace!("{} tokens in '{}'", lexemes.len(), line);
	Ok(lexemes)
}

/// Tokenizes every line of `source`, dropping blank and comment lines.
pub fn tokenize_program(source: &str) -> Result<Vec<Line>> {
	let mut lines = Vec::new();
	for text in source.lines() {
		let line = Line::new(text)?;
		if !line.is_empty() {
			lines.push(line);
		}
	}
	Ok(lines)
}

#[cfg(test)]
mod test {
	use super::*;

	fn tokens(line: &str) -> Vec<Token> {
		tokenize(line)
			.unwrap()
			.into_iter()
			.map(|lexeme| lexeme.token)
			.collect()
	}

	fn message(line: &str) -> String {
		tokenize(line).unwrap_err().to_string()
	}

	fn atom(name: &str) -> Token {
		Token::Atom(name.to_string())
	}

	#[test]
	fn test_assignment() {
		assert_eq!(tokens("P1 := true"), vec![atom("P1"), Token::Assign, Token::True]);
		assert_eq!(
			tokens(" Q :=\t  false"),
			vec![atom("Q"), Token::Assign, Token::False]
		);
	}

	#[test]
	fn test_comments_and_blank_lines() {
		assert!(tokens("").is_empty());
		assert!(tokens("   ").is_empty());
		assert!(tokens("// here we go!").is_empty());
	}

	#[test]
	fn test_print() {
		assert_eq!(
			tokens("print \"Hello, Aris!\""),
			vec![Token::Print, Token::Text("Hello, Aris!".to_string())]
		);
		assert_eq!(tokens("print"), vec![Token::Print]);
	}

	#[test]
	fn test_argument() {
		use Token::*;
		assert_eq!(
			tokens("argument arg2 := P, ¬(P ∧ ¬Q) ∴ Q"),
			vec![
				Argument,
				Identifier("arg2".to_string()),
				Assign,
				atom("P"),
				Comma,
				Not,
				LeftParenthesis,
				atom("P"),
				And,
				Not,
				atom("Q"),
				RightParenthesis,
				Therefore,
				atom("Q"),
			]
		);
		// ascii spellings
		assert_eq!(
			tokens("argument arg1 := (P & Q) therefore R"),
			tokens("argument arg1 := (P ∧ Q) ∴ R")
		);
		assert_eq!(
			tokens("argument a := (!P | (Q -> R))"),
			tokens("argument a := (¬P ∨ (Q → R))")
		);
	}

	#[test]
	fn test_positions() {
		let lexemes = tokenize("argument a := ¬P").unwrap();
		let positions: Vec<usize> = lexemes.iter().map(|lexeme| lexeme.position).collect();
		assert_eq!(positions, vec![0, 9, 11, 14, 15]);
	}

	#[test]
	fn test_unexpected_character() {
		assert_eq!(
			message("P* := true"),
			"Unexpected character '*' at position 1 of line 'P* := true'"
		);
		assert_eq!(
			message("argument arg' !P therefore Q"),
			"Unexpected character ''' at position 12 of line 'argument arg' !P therefore Q'"
		);
		assert_eq!(
			message("(P >Q)"),
			"Unexpected character '>' at position 3 of line '(P >Q)'"
		);
		assert_eq!(
			message("P thereforeQ"),
			"Unexpected character 'Q' at position 11 of line 'P thereforeQ'"
		);
		assert_eq!(
			message("Ptherefore Q"),
			"Unexpected character 't' at position 1 of line 'Ptherefore Q'"
		);
		assert_eq!(
			message("P is \"All men are mortal"),
			"Unexpected character 'l' at position 23 of line 'P is \"All men are mortal'"
		);
		assert_eq!(
			message("P :- true"),
			"Unexpected character '-' at position 3 of line 'P :- true'"
		);
		assert_eq!(
			message("P :"),
			"Unexpected character ':' at position 2 of line 'P :'"
		);
	}

	#[test]
	fn test_unexpected_symbol() {
		assert_eq!(
			tokenize("P Q"),
			Err(Error::UnexpectedSymbol {
				symbol: "Q".to_string(),
				position: 1,
				line: "P Q".to_string(),
			})
		);
		assert_eq!(
			message("(P & Q)"),
			"Unexpected symbol '(' at position 1 of line '(P & Q)'"
		);
		assert_eq!(
			message("!P therefore Q therefore R"),
			"Unexpected symbol 'therefore' at position 15 of line '!P therefore Q therefore R'"
		);
		assert!(matches!(
			tokenize("argument a := P)"),
			Err(Error::UnexpectedSymbol { position: 15, .. })
		));
	}

	#[test]
	fn test_negation_opens_a_line() {
		assert_eq!(tokens("!P"), vec![Token::Not, atom("P")]);
	}

	#[test]
	fn test_single_conclusion() {
		assert_eq!(
			tokenize("argument a := P ∴ Q ∴ R"),
			Err(Error::UnexpectedSymbol {
				symbol: "∴".to_string(),
				position: 20,
				line: "argument a := P ∴ Q ∴ R".to_string(),
			})
		);
	}

	#[test]
	fn test_symbol_keeps_its_spelling() {
		assert!(matches!(
			tokenize("argument a := P -> Q Q"),
			Err(Error::UnexpectedSymbol { ref symbol, .. }) if symbol == "Q"
		));
		assert!(matches!(
			tokenize("P := true &"),
			Err(Error::UnexpectedSymbol { ref symbol, position: 9, .. }) if symbol == "&"
		));
	}

	#[test]
	fn test_unexpected_end_of_line() {
		assert_eq!(message("P"), "Unexpected end of line at line 'P'");
		for line in &[
			"P :=",
			"argument a",
			"argument a := (P ∧ Q",
			"argument a := P ∴",
			"assert",
			"R is",
		] {
			assert!(matches!(
				tokenize(line),
				Err(Error::UnexpectedEndOfLine { .. })
			));
		}
	}

	#[test]
	fn test_round_trip() {
		let program = "argument arg3 := (¬(¬(P ∧ Q) ∧ ¬(P1 ∧ R)) ∨ ¬(P → (Q ∨ R))) ∴ S\nP is \"a fact\"\nvaluate arg3";
		for line in tokenize_program(program).unwrap() {
			for token in line.tokens() {
				let text = token.to_string();
				let (again, rest) = next_token(&text).unwrap();
				assert_eq!(again.kind(), token.kind());
				assert!(rest.is_empty());
			}
		}
	}

	#[test]
	fn test_tokenize_program() {
		let lines = tokenize_program("print\n\n// comment\nP := true\n").unwrap();
		assert_eq!(lines.len(), 2);
		assert_eq!(lines[1].text, "P := true");
	}
}
