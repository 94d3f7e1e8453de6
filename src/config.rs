use crate::store::PRINCIPIA;
use clap::{ArgAction, Parser};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::Level;

/// Propositional theorem prover after the Logic Theorist.
#[derive(Clone, Debug, Parser)]
#[command(name = "logic-theorist", version)]
pub struct Config {
	/// Axiom file, one expression per line. Principia axioms *1.2 - *1.6 when omitted.
	#[arg(short, long, value_name = "FILE")]
	pub axioms: Option<PathBuf>,

	/// Prove every line of the file in order instead of starting the command loop.
	#[arg(short, long, value_name = "FILE")]
	pub batch: Option<PathBuf>,

	/// Print method diagnostics to stderr. Repeat for more detail.
	#[arg(short, long, action = ArgAction::Count)]
	pub verbose: u8,

	/// Disable colored output.
	#[arg(long)]
	pub no_color: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("can't read `{}`: {}", .path.display(), .source)]
	Read {
		path: PathBuf,
		source: io::Error,
	},
	#[error("{count} invalid line(s) in `{name}`")]
	InvalidTheorems {
		name: String,
		count: usize,
	},
}

/// Text of a theorem file and the name to show in messages.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Source {
	pub name: String,
	pub text: String,
}

impl Source {
	pub fn read(path: &Path) -> Result<Self, ConfigError> {
		let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
		Ok(Source { name: path.display().to_string(), text })
	}
}

impl Config {
	pub fn log_level(&self) -> Level {
		match self.verbose {
			0 => Level::WARN,
			1 => Level::INFO,
			2 => Level::DEBUG,
			_ => Level::TRACE,
		}
	}

	pub fn axioms_source(&self) -> Result<Source, ConfigError> {
		match &self.axioms {
			Some(path) => Source::read(path),
			None => Ok(Source { name: "axioms/principia.lt".to_string(), text: PRINCIPIA.to_string() }),
		}
	}

	pub fn batch_source(&self) -> Result<Option<Source>, ConfigError> {
		self.batch.as_deref().map(Source::read).transpose()
	}
}
