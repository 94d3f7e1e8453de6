use crate::executive::{executive_routine, Verdict};
use crate::expr::Expression;
use crate::parsing::{parse_expression, ParseError};
use crate::store::{Origin, TheoremStore};
use crate::utils::span::{GlobalSpan, Spanned};
use colored::Colorize;
use std::fmt::Write;

pub const HELP: &str = "\
Enter an expression to be proved, tokens separated by spaces.
Enter the central connective as ':>:'.
Units can be defined by using '.>.' or '.v.' connectives.
Commands:
  theorems       list the theorems in memory
  premises <n>   theorems that theorem <n> was derived from
  help           show this message
  quit           close the program";

/// One line of input in the command loop.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
	Quit,
	Help,
	Theorems,
	Premises(usize),
	Prove(Expression),
}

impl Command {
	pub fn parse(line: &str) -> Result<Command, Spanned<ParseError>> {
		let trimmed = line.trim();
		match trimmed {
			"quit" => return Ok(Command::Quit),
			"help" => return Ok(Command::Help),
			"theorems" => return Ok(Command::Theorems),
			_ => {},
		}

		if let Some(argument) = trimmed.strip_prefix("premises ") {
			let argument = argument.trim();
			return argument.parse().map(Command::Premises).map_err(|_| {
				let start = line.len() - line.trim_start().len() + trimmed.len() - argument.len();
				Spanned::new(
					ParseError { expected: "theorem number".to_string() },
					GlobalSpan(start..start + argument.len()),
				)
			});
		}

		parse_expression(line).map(Command::Prove)
	}
}

pub fn render_verdict(verdict: &Verdict) -> String {
	match verdict {
		Verdict::Proved { method, key, theorem } => format!(
			"{}\n{}: {}",
			format!("Expression has been proved using the method of {}.", method).green(),
			key,
			theorem,
		),
		Verdict::Unproved { attempts } => {
			let mut result = String::new();
			for (method, err) in attempts {
				let _ = writeln!(result, "Expression could not be proved using the method of {}: {}.", method, err);
			}
			result.push_str(&"Expression could not be proved using the methods of LT.".red().to_string());
			result
		},
	}
}

/// Theorem store of one run of the program together with the commands that operate on it.
#[derive(Debug)]
pub struct Session {
	store: TheoremStore,
}

impl Session {
	pub fn new(store: TheoremStore) -> Self {
		Session { store }
	}

	pub fn store(&self) -> &TheoremStore {
		&self.store
	}

	pub fn prove(&mut self, expr: &Expression) -> Verdict {
		executive_routine(&mut self.store, expr)
	}

	/// Output of the command, `None` for `quit`.
	pub fn execute(&mut self, command: Command) -> Option<String> {
		Some(match command {
			Command::Quit => return None,
			Command::Help => HELP.to_string(),
			Command::Theorems => self.render_theorems(),
			Command::Premises(key) => self.render_premises(key),
			Command::Prove(expr) => render_verdict(&self.prove(&expr)),
		})
	}

	fn render_theorems(&self) -> String {
		let mut result = String::new();
		for (key, theorem) in self.store.iter() {
			let origin = self.store.origin(key).map(Origin::to_string).unwrap_or_default();
			let _ = writeln!(result, "{}: {}  {}", key, theorem, format!("({})", origin).dimmed());
		}
		result.trim_end().to_string()
	}

	fn render_premises(&self, key: usize) -> String {
		match (self.store.premises(key), self.store.origin(key)) {
			(Some(_), Some(Origin::Axiom)) => format!("Theorem {} is an axiom.", key),
			(Some(premises), _) => {
				let mut result = format!("Theorem {} depends on:", key);
				for premise in premises {
					if let Some(theorem) = self.store.get(premise) {
						let _ = write!(result, "\n  {}: {}", premise, theorem);
					}
				}
				result
			},
			_ => format!("{}", format!("There is no theorem {}.", key).red()),
		}
	}
}
