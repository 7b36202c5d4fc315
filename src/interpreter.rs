use crate::argument::Argument;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::lexer::{tokenize_program, Line};
use crate::parser::{parse_statement, Statement};
use crate::wff::Wff;
use log::debug;
use std::collections::{BTreeSet, HashMap};

/// What executing a statement produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
	Printed(String),
	Assigned { name: String, value: bool },
	Described { name: String, text: String },
	Declared { id: String },
	Asserted { id: String, premise: Wff, tautology: bool },
	Validated { id: String, argument: Argument, valid: bool },
	Valuated { id: String, argument: Argument, value: bool },
}

impl Outcome {
	/// The line to show the user, if any.
	pub fn report(&self) -> Option<String> {
		match self {
			Outcome::Printed(text) => Some(text.clone()),
			Outcome::Asserted {
				premise, tautology, ..
			} => Some(if *tautology {
				format!("argument \"{}\" is a tautology", premise)
			} else {
				format!("argument \"{}\" is not a tautology", premise)
			}),
			Outcome::Validated {
				argument, valid, ..
			} => Some(if *valid {
				format!("argument \"{}\" is valid", argument)
			} else {
				format!("argument \"{}\" is invalid", argument)
			}),
			Outcome::Valuated {
				argument, value, ..
			} => Some(format!("argument \"{}\" is {}", argument, value)),
			_ => None,
		}
	}
}

/// Executes statements against the symbol tables of one program.
#[derive(Debug, Default)]
pub struct Interpreter {
	config: Config,
	values: HashMap<String, bool>,
	descriptions: HashMap<String, String>,
	arguments: HashMap<String, Argument>,
	assertions: HashMap<String, bool>,
	validations: HashMap<String, bool>,
	valuations: HashMap<String, bool>,
}

impl Interpreter {
	pub fn new(config: Config) -> Interpreter {
		Interpreter {
			config,
			..Interpreter::default()
		}
	}

	pub fn config(&self) -> &Config {
		&self.config
	}

	pub fn values(&self) -> &HashMap<String, bool> {
		&self.values
	}

	pub fn descriptions(&self) -> &HashMap<String, String> {
		&self.descriptions
	}

	pub fn arguments(&self) -> &HashMap<String, Argument> {
		&self.arguments
	}

	pub fn assertions(&self) -> &HashMap<String, bool> {
		&self.assertions
	}

	pub fn validations(&self) -> &HashMap<String, bool> {
		&self.validations
	}

	pub fn valuations(&self) -> &HashMap<String, bool> {
		&self.valuations
	}

	fn argument(&self, id: &str) -> Result<&Argument> {
		self.arguments.get(id).ok_or_else(|| Error::UnknownArgument {
			name: id.to_owned(),
		})
	}

	fn check_variable_limit<'a, I>(&self, formulae: I) -> Result<()>
	where
		I: IntoIterator<Item = &'a Wff>,
	{
		let limit = match self.config.variable_limit {
			Some(limit) => limit,
			None => return Ok(()),
		};
		let mut variables = BTreeSet::new();
		for wff in formulae {
			variables.extend(wff.atom_names());
		}
		if variables.len() > limit {
			return Err(Error::TooManyVariables {
				count: variables.len(),
				limit,
			});
		}
		Ok(())
	}

	pub fn execute(&mut self, statement: Statement) -> Result<Outcome> {
		debug!("executing {:?}", statement);
		Ok(match statement {
			Statement::Print { text } => Outcome::Printed(text),
			Statement::Assign { name, value } => {
				self.values.insert(name.clone(), value);
				Outcome::Assigned { name, value }
			}
			Statement::Describe { name, text } => {
				self.descriptions.insert(name.clone(), text.clone());
				Outcome::Described { name, text }
			}
			Statement::Declare { id, argument } => {
				self.arguments.insert(id.clone(), argument);
				Outcome::Declared { id }
			}
			Statement::Assert { id } => {
				let argument = self.argument(&id)?;
				self.check_variable_limit(argument.premises())?;
				let tautology = argument.is_tautology()?;
				let premise = argument.premises()[0].clone();
				self.assertions.insert(id.clone(), tautology);
				Outcome::Asserted {
					id,
					premise,
					tautology,
				}
			}
			Statement::Validate { id } => {
				let argument = self.argument(&id)?;
				self.check_variable_limit(argument.premises().iter().chain(argument.conclusion()))?;
				let valid = argument.is_valid()?;
				let argument = argument.clone();
				self.validations.insert(id.clone(), valid);
				Outcome::Validated {
					id,
					argument,
					valid,
				}
			}
			Statement::Valuate { id } => {
				let argument = self.argument(&id)?;
				let value = argument.valuate(&self.values)?;
				let argument = argument.clone();
				self.valuations.insert(id.clone(), value);
				Outcome::Valuated {
					id,
					argument,
					value,
				}
			}
		})
	}

	pub fn execute_tokens(&mut self, line: &Line) -> Result<Option<Outcome>> {
		match parse_statement(line)? {
			Some(statement) => self.execute(statement).map(Some),
			None => Ok(None),
		}
	}

	/// Tokenizes, parses and executes a single line.
	pub fn execute_line(&mut self, text: &str) -> Result<Option<Outcome>> {
		self.execute_tokens(&Line::new(text)?)
	}

	/// Runs a whole program, stopping at the first failure.
	///
	/// Every line is tokenized before any statement is executed.
	pub fn run(&mut self, source: &str) -> Result<Vec<Outcome>> {
		let lines = tokenize_program(source)?;
		let mut outcomes = Vec::with_capacity(lines.len());
		for line in &lines {
			if let Some(outcome) = self.execute_tokens(line)? {
				outcomes.push(outcome);
			}
		}
		Ok(outcomes)
	}
}
