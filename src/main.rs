use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{value_parser, Arg, ArgAction, Command};
use log::{info, warn};

use aris::{Config, Interpreter};

fn cli() -> Command {
	Command::new("aris")
		.about("Checks propositional arguments for tautology and validity")
		.arg(Arg::new("paths")
			.required(false)
			.num_args(0..)
			.value_parser(value_parser!(PathBuf))
			.help("Programs to run, in order. Reads standard input when none are given or for '-'."))
		.arg(Arg::new("keep_going")
			.short('k')
			.long("keep-going")
			.action(ArgAction::SetTrue)
			.help("Report a failing line and continue with the next one."))
		.arg(Arg::new("variable_limit")
			.long("variable-limit")
			.value_parser(value_parser!(usize))
			.num_args(1)
			.help("Refuse tautology and validity checks over more distinct variables than this."))
}

fn read_source(path: &PathBuf) -> std::io::Result<String> {
	if path.as_os_str() == "-" {
		let mut source = String::new();
		std::io::stdin().read_to_string(&mut source)?;
		Ok(source)
	} else {
		std::fs::read_to_string(path)
	}
}

// false if some line failed
fn run(interpreter: &mut Interpreter, source: &str) -> bool {
	if !interpreter.config().keep_going {
		return match interpreter.run(source) {
			Ok(outcomes) => {
				for report in outcomes.iter().filter_map(|outcome| outcome.report()) {
					println!("{}", report);
				}
				true
			}
			Err(e) => {
				eprintln!("{}", e);
				false
			}
		};
	}

	let mut clean = true;
	for (number, line) in source.lines().enumerate() {
		match interpreter.execute_line(line) {
			Ok(outcome) => {
				if let Some(report) = outcome.and_then(|outcome| outcome.report()) {
					println!("{}", report);
				}
			}
			Err(e) => {
				warn!("skipping line {}", number + 1);
				eprintln!("{}", e);
				clean = false;
			}
		}
	}
	clean
}

fn main() -> ExitCode {
	env_logger::init();

	let matches = cli().get_matches();
	let config = Config::default()
		.keep_going(matches.get_flag("keep_going"))
		.variable_limit(matches.get_one::<usize>("variable_limit").copied());

	let paths: Vec<PathBuf> = match matches.get_many::<PathBuf>("paths") {
		Some(paths) => paths.cloned().collect(),
		None => vec![PathBuf::from("-")],
	};

	let mut clean = true;
	for path in &paths {
		info!("running {}", path.display());
		let source = match read_source(path) {
			Ok(source) => source,
			Err(e) => {
				eprintln!("{}: {}", path.display(), e);
				return ExitCode::FAILURE;
			}
		};
		let mut interpreter = Interpreter::new(config.clone());
		if !run(&mut interpreter, &source) {
			clean = false;
			if !config.keep_going {
				break;
			}
		}
	}

	if clean {
		ExitCode::SUCCESS
	} else {
		ExitCode::FAILURE
	}
}
