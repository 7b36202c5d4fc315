use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
	/// A character that cannot start or continue any token.
	#[error("Unexpected character '{character}' at position {position} of line '{line}'")]
	UnexpectedCharacter {
		character: char,
		position: usize,
		line: String,
	},

	/// A token in a place the grammar does not allow.
	#[error("Unexpected symbol '{symbol}' at position {position} of line '{line}'")]
	UnexpectedSymbol {
		symbol: String,
		position: usize,
		line: String,
	},

	#[error("Unexpected end of line at line '{line}'")]
	UnexpectedEndOfLine { line: String },

	/// A variable referenced by a formula has no value.
	#[error("Missing symbol '{name}'")]
	MissingSymbol { name: String },

	#[error("Failed to parse line '{line}'")]
	ParseFailure { line: String },

	#[error("Unknown argument '{name}'")]
	UnknownArgument { name: String },

	#[error("Unsupported operation: {operation}")]
	Unsupported { operation: &'static str },

	#[error("Too many variables to enumerate: {count} (limit {limit})")]
	TooManyVariables { count: usize, limit: usize },
}
