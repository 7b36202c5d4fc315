use std::fmt;

/// A single token of the language.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Token {
	Atom(String),
	Identifier(String),
	Text(String),
	True,
	False,
	Argument,
	Assert,
	Validate,
	Valuate,
	Is,
	Print,
	Assign,
	Not,
	And,
	Or,
	Implies,
	Therefore,
	LeftParenthesis,
	RightParenthesis,
	Comma,
}

/// The payload-free tag of a `Token`, used by the successor table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
	Atom,
	Identifier,
	Text,
	True,
	False,
	Argument,
	Assert,
	Validate,
	Valuate,
	Is,
	Print,
	Assign,
	Not,
	And,
	Or,
	Implies,
	Therefore,
	LeftParenthesis,
	RightParenthesis,
	Comma,
}

use self::TokenKind as K;

const FORMULA_START: &[TokenKind] = &[K::Atom, K::LeftParenthesis, K::Not];

/// Kinds that may open a line.
pub const STATEMENT_START: &[TokenKind] = &[
	K::Atom,
	K::Not,
	K::Argument,
	K::Assert,
	K::Validate,
	K::Valuate,
	K::Print,
];

impl TokenKind {
	/// Kinds allowed to directly follow a token of this kind.
	pub fn successors(self) -> &'static [TokenKind] {
		match self {
			K::Atom => &[
				K::And,
				K::Assign,
				K::Comma,
				K::Implies,
				K::Is,
				K::Or,
				K::RightParenthesis,
				K::Therefore,
			],
			K::Identifier => &[K::Assign],
			K::Argument | K::Assert | K::Validate | K::Valuate => &[K::Identifier],
			K::Is => &[K::Text],
			K::Print => &[K::Text],
			K::Assign => &[K::True, K::False, K::Atom, K::LeftParenthesis, K::Not],
			K::Not | K::And | K::Or | K::Implies | K::Therefore | K::Comma => FORMULA_START,
			K::LeftParenthesis => FORMULA_START,
			K::RightParenthesis => &[
				K::And,
				K::Implies,
				K::Comma,
				K::Or,
				K::RightParenthesis,
				K::Therefore,
			],
			K::Text | K::True | K::False => &[],
		}
	}

	pub fn allows(self, next: TokenKind) -> bool {
		self.successors().contains(&next)
	}
}

impl Token {
	pub fn kind(&self) -> TokenKind {
		match self {
			Token::Atom(_) => K::Atom,
			Token::Identifier(_) => K::Identifier,
			Token::Text(_) => K::Text,
			Token::True => K::True,
			Token::False => K::False,
			Token::Argument => K::Argument,
			Token::Assert => K::Assert,
			Token::Validate => K::Validate,
			Token::Valuate => K::Valuate,
			Token::Is => K::Is,
			Token::Print => K::Print,
			Token::Assign => K::Assign,
			Token::Not => K::Not,
			Token::And => K::And,
			Token::Or => K::Or,
			Token::Implies => K::Implies,
			Token::Therefore => K::Therefore,
			Token::LeftParenthesis => K::LeftParenthesis,
			Token::RightParenthesis => K::RightParenthesis,
			Token::Comma => K::Comma,
		}
	}

	// lowercase words that are not identifiers
	pub fn keyword(word: &str) -> Option<Token> {
		Some(match word {
			"argument" => Token::Argument,
			"assert" => Token::Assert,
			"validate" => Token::Validate,
			"valuate" => Token::Valuate,
			"is" => Token::Is,
			"print" => Token::Print,
			"true" => Token::True,
			"false" => Token::False,
			"therefore" => Token::Therefore,
			_ => return None,
		})
	}

	/// Formula boundaries: the formula parser stops in front of these.
	pub fn is_boundary(&self) -> bool {
		matches!(
			self,
			Token::Comma | Token::RightParenthesis | Token::Therefore
		)
	}
}

impl fmt::Display for Token {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Token::Atom(name) | Token::Identifier(name) => write!(f, "{}", name),
			Token::Text(text) => write!(f, "\"{}\"", text),
			Token::True => write!(f, "true"),
			Token::False => write!(f, "false"),
			Token::Argument => write!(f, "argument"),
			Token::Assert => write!(f, "assert"),
			Token::Validate => write!(f, "validate"),
			Token::Valuate => write!(f, "valuate"),
			Token::Is => write!(f, "is"),
			Token::Print => write!(f, "print"),
			Token::Assign => write!(f, ":="),
			Token::Not => write!(f, "¬"),
			Token::And => write!(f, "∧"),
			Token::Or => write!(f, "∨"),
			Token::Implies => write!(f, "→"),
			Token::Therefore => write!(f, "∴"),
			Token::LeftParenthesis => write!(f, "("),
			Token::RightParenthesis => write!(f, ")"),
			Token::Comma => write!(f, ","),
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_identifier_only_precedes_assign() {
		assert_eq!(TokenKind::Identifier.successors(), &[TokenKind::Assign]);
	}

	#[test]
	fn test_closing_bracket_successors() {
		let after = TokenKind::RightParenthesis;
		for kind in &[K::And, K::Implies, K::Comma, K::Or, K::RightParenthesis, K::Therefore] {
			assert!(after.allows(*kind));
		}
		assert!(!after.allows(K::Atom));
		assert!(!after.allows(K::LeftParenthesis));
	}

	#[test]
	fn test_terminal_literals() {
		assert!(TokenKind::True.successors().is_empty());
		assert!(TokenKind::False.successors().is_empty());
		assert!(TokenKind::Text.successors().is_empty());
	}

	#[test]
	fn test_statement_start() {
		assert!(STATEMENT_START.contains(&K::Not));
		assert!(!STATEMENT_START.contains(&K::LeftParenthesis));
	}

	#[test]
	fn test_keyword() {
		assert_eq!(Token::keyword("therefore"), Some(Token::Therefore));
		assert_eq!(Token::keyword("arg1"), None);
	}
}
