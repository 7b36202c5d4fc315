use crate::error::{Error, Result};
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// A well-formed formula.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Wff {
	Atom(String),
	Not(Box<Wff>),
	And(Box<Wff>, Box<Wff>),
	Or(Box<Wff>, Box<Wff>),
	Implies(Box<Wff>, Box<Wff>),
}

/// A variable assignment, or the conjunction of two of them, under which a
/// formula takes a given truth-value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Condition {
	Atomic { name: String, value: bool },
	Binary(Box<Condition>, Box<Condition>),
}

impl Condition {
	pub fn atomic(name: &str, value: bool) -> Condition {
		Condition::Atomic {
			name: name.to_owned(),
			value,
		}
	}

	pub fn binary(c1: Condition, c2: Condition) -> Condition {
		Condition::Binary(Box::new(c1), Box::new(c2))
	}

	/// Flattens to the atomic leaves, left to right.
	pub fn atoms(&self) -> Vec<(&str, bool)> {
		let mut result = Vec::new();
		self.atoms_recurse(&mut result);
		result
	}

	fn atoms_recurse<'a>(&'a self, result: &mut Vec<(&'a str, bool)>) {
		match self {
			Condition::Atomic { name, value } => result.push((name.as_str(), *value)),
			Condition::Binary(c1, c2) => {
				c1.atoms_recurse(result);
				c2.atoms_recurse(result);
			}
		}
	}
}

impl fmt::Display for Condition {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Condition::Atomic { name, value } => write!(f, "{}={}", name, value),
			Condition::Binary(c1, c2) => write!(f, "({}, {})", c1, c2),
		}
	}
}

// every pairing of a left condition with a right one, left major
fn combine(left: &[Condition], right: &[Condition]) -> Vec<Condition> {
	let mut result = Vec::with_capacity(left.len() * right.len());
	for c1 in left {
		for c2 in right {
			result.push(Condition::binary(c1.clone(), c2.clone()));
		}
	}
	result
}

impl Wff {
	pub fn atom(name: &str) -> Wff {
		Wff::Atom(name.to_owned())
	}

	pub fn not(inner: Wff) -> Wff {
		Wff::Not(Box::new(inner))
	}

	pub fn and(left: Wff, right: Wff) -> Wff {
		Wff::And(Box::new(left), Box::new(right))
	}

	pub fn or(left: Wff, right: Wff) -> Wff {
		Wff::Or(Box::new(left), Box::new(right))
	}

	pub fn implies(left: Wff, right: Wff) -> Wff {
		Wff::Implies(Box::new(left), Box::new(right))
	}

	pub fn valuate(&self, values: &HashMap<String, bool>) -> Result<bool> {
		Ok(match self {
			Wff::Atom(name) => match values.get(name) {
				Some(value) => *value,
				None => return Err(Error::MissingSymbol { name: name.clone() }),
			},
			Wff::Not(a) => !a.valuate(values)?,
			Wff::And(a, b) => {
				let a = a.valuate(values)?;
				let b = b.valuate(values)?;
				a && b
			}
			Wff::Or(a, b) => {
				let a = a.valuate(values)?;
				let b = b.valuate(values)?;
				a || b
			}
			Wff::Implies(a, b) => {
				let a = a.valuate(values)?;
				let b = b.valuate(values)?;
				!a || b
			}
		})
	}

	/// The assignments, one per entry, under which this formula is true.
	pub fn truthness_conditions(&self) -> Vec<Condition> {
		match self {
			Wff::Atom(name) => vec![Condition::atomic(name, true)],
			Wff::Not(a) => a.falsehood_conditions(),
			Wff::And(a, b) => combine(&a.truthness_conditions(), &b.truthness_conditions()),
			Wff::Or(a, b) => {
				let (at, af) = (a.truthness_conditions(), a.falsehood_conditions());
				let (bt, bf) = (b.truthness_conditions(), b.falsehood_conditions());
				let mut result = combine(&at, &bf);
				result.extend(combine(&af, &bt));
				result.extend(combine(&at, &bt));
				result
			}
			Wff::Implies(a, b) => {
				let (at, af) = (a.truthness_conditions(), a.falsehood_conditions());
				let (bt, bf) = (b.truthness_conditions(), b.falsehood_conditions());
				let mut result = combine(&af, &bf);
				result.extend(combine(&af, &bt));
				result.extend(combine(&at, &bt));
				result
			}
		}
	}

	/// The assignments, one per entry, under which this formula is false.
	pub fn falsehood_conditions(&self) -> Vec<Condition> {
		match self {
			Wff::Atom(name) => vec![Condition::atomic(name, false)],
			Wff::Not(a) => a.truthness_conditions(),
			Wff::And(a, b) => {
				let (at, af) = (a.truthness_conditions(), a.falsehood_conditions());
				let (bt, bf) = (b.truthness_conditions(), b.falsehood_conditions());
				let mut result = combine(&af, &bf);
				result.extend(combine(&af, &bt));
				result.extend(combine(&at, &bf));
				result
			}
			Wff::Or(a, b) => combine(&a.falsehood_conditions(), &b.falsehood_conditions()),
			Wff::Implies(a, b) => combine(&a.truthness_conditions(), &b.falsehood_conditions()),
		}
	}

	/// Names of the variables the formula mentions.
	pub fn free_variables(&self) -> BTreeSet<String> {
		let mut result = BTreeSet::new();
		for condition in self.truthness_conditions() {
			for (name, _) in condition.atoms() {
				result.insert(name.to_owned());
			}
		}
		result
	}

	/// Names of the atoms in the tree, found by walking it once.
	///
	/// Same set as `free_variables`, without deriving any conditions.
	pub fn atom_names(&self) -> BTreeSet<&str> {
		let mut result = BTreeSet::new();
		self.atom_names_recurse(&mut result);
		result
	}

	fn atom_names_recurse<'a>(&'a self, result: &mut BTreeSet<&'a str>) {
		match self {
			Wff::Atom(name) => {
				result.insert(name.as_str());
			}
			Wff::Not(a) => a.atom_names_recurse(result),
			Wff::And(a, b) | Wff::Or(a, b) | Wff::Implies(a, b) => {
				a.atom_names_recurse(result);
				b.atom_names_recurse(result);
			}
		}
	}
}

impl fmt::Display for Wff {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Wff::Atom(name) => write!(f, "{}", name),
			Wff::Not(a) => write!(f, "¬{}", a),
			Wff::And(a, b) => write!(f, "({} ∧ {})", a, b),
			Wff::Or(a, b) => write!(f, "({} ∨ {})", a, b),
			Wff::Implies(a, b) => write!(f, "({} → {})", a, b),
		}
	}
}
