/// How the interpreter treats a program.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
	/// Report a failing line and carry on with the next one, instead of stopping.
	pub keep_going: bool,
	/// Refuse tautology and validity checks over more distinct variables than this.
	pub variable_limit: Option<usize>,
}

impl Config {
	pub fn keep_going(mut self, keep_going: bool) -> Self {
		self.keep_going = keep_going;
		self
	}

	pub fn variable_limit(mut self, limit: Option<usize>) -> Self {
		self.variable_limit = limit;
		self
	}
}
