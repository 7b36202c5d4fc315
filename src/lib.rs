//! An interpreter for a small language of propositional arguments.
//!
//! Lines are tokenized against a successor grammar, parsed into formulae and
//! arguments, and checked for tautology and validity by truth table.

pub mod argument;
pub mod config;
pub mod error;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod token;
pub mod truth_table;
pub mod wff;

pub use argument::{Argument, ArgumentBuilder};
pub use config::Config;
pub use error::{Error, Result};
pub use interpreter::{Interpreter, Outcome};
pub use wff::{Condition, Wff};
