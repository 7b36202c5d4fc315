use aris::{Config, Error, Interpreter, Outcome};

fn reports(source: &str) -> Vec<String> {
	let mut interpreter = Interpreter::default();
	interpreter
		.run(source)
		.unwrap()
		.iter()
		.filter_map(Outcome::report)
		.collect()
}

#[test]
fn test_hello() {
	assert_eq!(
		reports(include_str!("../demos/hello.aris")),
		vec![
			"Hello, Aris!",
			"",
			"argument \"(P ∧ Q) ∴ R\" is true",
			"argument \"P, ¬(P ∧ ¬Q) ∴ Q\" is valid",
			"argument \"(¬(¬(P ∧ Q) ∧ ¬(P ∧ R)) ∨ ¬(P ∧ (Q ∨ R)))\" is a tautology",
		]
	);
}

#[test]
fn test_syllogisms() {
	assert_eq!(
		reports(include_str!("../demos/syllogisms.aris")),
		vec![
			"argument \"(P → Q), (Q → R) ∴ (P → R)\" is valid",
			"argument \"(P → Q), Q ∴ P\" is invalid",
			"argument \"((P → Q) → (¬Q → ¬P))\" is a tautology",
			"argument \"(P → Q), Q ∴ P\" is true",
		]
	);
}

#[test]
fn test_keep_going_line_by_line() {
	let mut interpreter = Interpreter::new(Config::default().keep_going(true));
	let source = "P := true\nP Q\nassert missing\nargument a := P ∴ P\nvaluate a";
	let results: Vec<_> = source
		.lines()
		.map(|line| interpreter.execute_line(line))
		.collect();
	assert!(matches!(results[1], Err(Error::UnexpectedSymbol { position: 1, .. })));
	assert!(matches!(results[2], Err(Error::UnknownArgument { .. })));
	assert_eq!(interpreter.valuations()["a"], true);
}

#[test]
fn test_error_messages() {
	let mut interpreter = Interpreter::default();
	let message = |source: &str, interpreter: &mut Interpreter| {
		interpreter.run(source).unwrap_err().to_string()
	};
	assert_eq!(
		message("P* := true", &mut interpreter),
		"Unexpected character '*' at position 1 of line 'P* := true'"
	);
	assert_eq!(
		message("P Q", &mut interpreter),
		"Unexpected symbol 'Q' at position 1 of line 'P Q'"
	);
	assert_eq!(
		message("print\nP", &mut interpreter),
		"Unexpected end of line at line 'P'"
	);
}
