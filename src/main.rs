use clap::Parser;
use colored::Colorize;
use logic_theorist::config::{Config, ConfigError, Source};
use logic_theorist::executive::Verdict;
use logic_theorist::load_store;
use logic_theorist::parsing::{parse_expression, strip_comment};
use logic_theorist::session::{render_verdict, Command, Session, HELP};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use thiserror::Error;

#[derive(Debug, Error)]
enum AppError {
	#[error("{0}")]
	Config(#[from] ConfigError),
	#[error("terminal: {0}")]
	Readline(#[from] ReadlineError),
}

/// Proves every line of the batch file. Exit code is 1 if some line is not proved.
fn run_batch(session: &mut Session, source: &Source) -> i32 {
	let mut failed = 0;
	for line in source.text.lines() {
		let content = strip_comment(line);
		if content.trim().is_empty() {
			continue;
		}

		println!("> {}", content.trim());
		match parse_expression(content) {
			Ok(expr) => {
				let verdict = session.prove(&expr);
				if let Verdict::Unproved { .. } = verdict {
					failed += 1;
				}
				println!("{}", render_verdict(&verdict));
			},
			Err(err) => {
				err.print_error_snippet(content);
				failed += 1;
			},
		}
	}

	if failed == 0 {
		0
	} else {
		eprintln!("{}", format!("{} line(s) of `{}` were not proved", failed, source.name).red());
		1
	}
}

fn run_loop(session: &mut Session) -> Result<i32, AppError> {
	let mut editor = DefaultEditor::new()?;
	println!("{}\n", HELP);
	loop {
		let line = match editor.readline("> ") {
			Ok(line) => line,
			Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
			Err(err) => return Err(err.into()),
		};
		if line.trim().is_empty() {
			continue;
		}
		editor.add_history_entry(line.as_str())?;

		match Command::parse(&line) {
			Ok(command) => match session.execute(command) {
				Some(output) => println!("{}", output),
				None => break,
			},
			Err(err) => err.print_error_snippet(&line),
		}
	}
	Ok(0)
}

fn run(config: &Config) -> Result<i32, AppError> {
	let axioms = config.axioms_source()?;
	let mut session = Session::new(load_store(&axioms)?);
	tracing::info!(axioms = session.store().len(), source = %axioms.name, "theorem store loaded");

	match config.batch_source()? {
		Some(batch) => Ok(run_batch(&mut session, &batch)),
		None => run_loop(&mut session),
	}
}

fn main() {
	let config = Config::parse();
	if config.no_color {
		colored::control::set_override(false);
	}
	tracing_subscriber::fmt()
		.with_max_level(config.log_level())
		.with_target(false)
		.with_writer(std::io::stderr)
		.init();

	let code = run(&config).unwrap_or_else(|err| {
		eprintln!("{} {}", "error:".red().bold(), err);
		2
	});
	std::process::exit(code);
}
