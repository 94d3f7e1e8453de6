use crate::config::{ConfigError, Source};
use crate::parsing::read_theorems;
use crate::store::TheoremStore;

pub mod config;
pub mod contraction;
pub mod executive;
pub mod expr;
pub mod matching;
pub mod methods;
pub mod parsing;
pub mod session;
pub mod similarity;
pub mod store;
pub mod token;
pub mod utils;

/// Reads the axioms of `source` into a fresh store. Every invalid line is printed as a snippet.
pub fn load_store(source: &Source) -> Result<TheoremStore, ConfigError> {
	let axioms = read_theorems(&source.text).map_err(|errs| {
		for err in &errs {
			err.print_error_snippet(&source.text);
		}
		ConfigError::InvalidTheorems { name: source.name.clone(), count: errs.len() }
	})?;
	Ok(TheoremStore::with_axioms(axioms))
}
