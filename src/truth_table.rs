use crate::error::{Error, Result};
use crate::wff::Wff;
use log::debug;
use std::collections::{BTreeSet, HashMap};
use std::convert::TryFrom;

/// Widest table the row counter can index.
pub const MAX_VARIABLES: usize = 63;

/// Every assignment of truth-values to a set of variables.
///
/// Row `i` reads the binary digits of `i`, most significant first, as the
/// values of the variables in name order; a `1` is true. With no variables
/// there are no rows.
#[derive(Clone, Debug)]
pub struct TruthTable {
	variables: Vec<String>,
	row: u64,
	rows: u64,
}

impl TruthTable {
	pub fn new(variables: BTreeSet<String>) -> Result<TruthTable> {
		let count = variables.len();
		if count > MAX_VARIABLES {
			return Err(Error::TooManyVariables {
				count,
				limit: MAX_VARIABLES,
			});
		}
		let rows = if count == 0 { 0 } else { 1u64 << count };
		debug!("truth table over {} variables, {} rows", count, rows);
		Ok(TruthTable {
			variables: variables.into_iter().collect(),
			row: 0,
			rows,
		})
	}

	/// A table over every variable free in any of `formulae`.
	pub fn over<'a, I>(formulae: I) -> Result<TruthTable>
	where
		I: IntoIterator<Item = &'a Wff>,
	{
		let mut variables = BTreeSet::new();
		for wff in formulae {
			variables.extend(wff.free_variables());
		}
		TruthTable::new(variables)
	}

	pub fn variables(&self) -> &[String] {
		&self.variables
	}
}

impl Iterator for TruthTable {
	type Item = HashMap<String, bool>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.row == self.rows {
			return None;
		}
		let width = self.variables.len();
		let assignment = self
			.variables
			.iter()
			.enumerate()
			.map(|(j, name)| (name.clone(), (self.row >> (width - 1 - j)) & 1 == 1))
			.collect();
		self.row += 1;
		Some(assignment)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let left = usize::try_from(self.rows - self.row).unwrap_or(usize::MAX);
		(left, Some(left))
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use std::collections::HashSet;

	fn names(list: &[&str]) -> BTreeSet<String> {
		list.iter().map(|name| name.to_string()).collect()
	}

	#[test]
	fn test_row_count() {
		for n in 1usize..6 {
			let variables: Vec<String> = (0..n).map(|i| format!("P{}", i)).collect();
			let rows: Vec<_> = TruthTable::new(variables.into_iter().collect())
				.unwrap()
				.collect();
			assert_eq!(rows.len(), 1 << n);
			let distinct: HashSet<Vec<(String, bool)>> = rows
				.into_iter()
				.map(|row| {
					let mut row: Vec<_> = row.into_iter().collect();
					row.sort();
					row
				})
				.collect();
			assert_eq!(distinct.len(), 1 << n);
		}
	}

	#[test]
	fn test_no_variables() {
		assert_eq!(TruthTable::new(BTreeSet::new()).unwrap().count(), 0);
	}

	#[test]
	fn test_canonical_order() {
		let rows: Vec<_> = TruthTable::new(names(&["Q", "P"])).unwrap().collect();
		let expected = [(false, false), (false, true), (true, false), (true, true)];
		for (row, (p, q)) in rows.iter().zip(expected.iter()) {
			assert_eq!(row["P"], *p);
			assert_eq!(row["Q"], *q);
		}
	}

	#[test]
	fn test_over_formulae() {
		let formulae = vec![
			Wff::and(Wff::atom("P"), Wff::atom("Q")),
			Wff::not(Wff::atom("R")),
		];
		let table = TruthTable::over(&formulae).unwrap();
		assert_eq!(table.variables(), &["P", "Q", "R"]);
		assert_eq!(table.count(), 8);
	}

	#[test]
	fn test_size_hint() {
		let mut table = TruthTable::new(names(&["P", "Q"])).unwrap();
		assert_eq!(table.size_hint(), (4, Some(4)));
		table.next();
		assert_eq!(table.size_hint(), (3, Some(3)));
		let wide = (0..40).map(|i| format!("P{}", i)).collect();
		let (low, high) = TruthTable::new(wide).unwrap().size_hint();
		assert_eq!(high, Some(low));
		assert!(low >= (1 << 31) - 1);
	}

	#[test]
	fn test_too_many_variables() {
		let variables = (0..64).map(|i| format!("P{}", i)).collect();
		assert!(matches!(
			TruthTable::new(variables),
			Err(Error::TooManyVariables { count: 64, .. })
		));
	}
}
