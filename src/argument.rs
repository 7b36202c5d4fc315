use crate::error::{Error, Result};
use crate::truth_table::TruthTable;
use crate::wff::Wff;
use log::debug;
use std::collections::HashMap;
use std::fmt;

/// Premises and an optional conclusion.
///
/// Without a conclusion and with a single premise the argument stands for
/// that premise alone, which is what `is_tautology` tests.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Argument {
	premises: Vec<Wff>,
	conclusion: Option<Wff>,
}

/// Collects premises and the conclusion while an `argument` statement is parsed.
#[derive(Debug, Default)]
pub struct ArgumentBuilder {
	argument: Argument,
}

impl ArgumentBuilder {
	pub fn new() -> ArgumentBuilder {
		ArgumentBuilder::default()
	}

	pub fn add_premise(&mut self, premise: Wff) -> &mut Self {
		self.argument.premises.push(premise);
		self
	}

	pub fn set_conclusion(&mut self, conclusion: Wff) -> &mut Self {
		self.argument.conclusion = Some(conclusion);
		self
	}

	pub fn has_conclusion(&self) -> bool {
		self.argument.conclusion.is_some()
	}

	pub fn finish(self) -> Argument {
		self.argument
	}
}

// the table rows assign every variable, so a missing one means the table is wrong
fn valuate_row(wff: &Wff, row: &HashMap<String, bool>) -> bool {
	match wff.valuate(row) {
		Ok(value) => value,
		Err(e) => unreachable!("incomplete truth table row: {}", e),
	}
}

impl Argument {
	pub fn new(premises: Vec<Wff>, conclusion: Wff) -> Argument {
		Argument {
			premises,
			conclusion: Some(conclusion),
		}
	}

	/// An argument holding a single formula, as checked by `is_tautology`.
	pub fn formula(wff: Wff) -> Argument {
		Argument {
			premises: vec![wff],
			conclusion: None,
		}
	}

	pub fn premises(&self) -> &[Wff] {
		&self.premises
	}

	pub fn conclusion(&self) -> Option<&Wff> {
		self.conclusion.as_ref()
	}

	fn require_conclusion(&self, operation: &'static str) -> Result<&Wff> {
		self.conclusion
			.as_ref()
			.ok_or(Error::Unsupported { operation })
	}

	/// True when every premise and the conclusion are true.
	///
	/// Premises are valuated in order up to the first false one; the
	/// conclusion is always valuated.
	pub fn valuate(&self, values: &HashMap<String, bool>) -> Result<bool> {
		let conclusion = self.require_conclusion("valuate an argument without conclusion")?;
		let mut premises = true;
		for premise in &self.premises {
			if !premise.valuate(values)? {
				premises = false;
				break;
			}
		}
		Ok(conclusion.valuate(values)? && premises)
	}

	pub fn is_tautology(&self) -> Result<bool> {
		if self.conclusion.is_some() || self.premises.len() != 1 {
			return Err(Error::Unsupported {
				operation: "tautology check needs exactly one premise and no conclusion",
			});
		}
		let wff = &self.premises[0];
		for row in TruthTable::over(Some(wff))? {
			if !valuate_row(wff, &row) {
				debug!("{} is false under {:?}", wff, row);
				return Ok(false);
			}
		}
		Ok(true)
	}

	/// Valid unless some assignment makes every premise true and the
	/// conclusion false.
	pub fn is_valid(&self) -> Result<bool> {
		let conclusion = self.require_conclusion("validate an argument without conclusion")?;
		let mut formulae = Vec::with_capacity(self.premises.len() + 1);
		formulae.push(Wff::not(conclusion.clone()));
		formulae.extend(self.premises.iter().cloned());

		for row in TruthTable::over(&formulae)? {
			if formulae.iter().all(|wff| valuate_row(wff, &row)) {
				debug!("counterexample to {}: {:?}", self, row);
				return Ok(false);
			}
		}
		Ok(true)
	}
}

impl fmt::Display for Argument {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		let premises: Vec<String> = self.premises.iter().map(|p| p.to_string()).collect();
		write!(f, "{}", premises.join(", "))?;
		if let Some(conclusion) = &self.conclusion {
			write!(f, " ∴ {}", conclusion)?;
		}
		Ok(())
	}
}
