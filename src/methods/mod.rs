use crate::expr::{Expression, StructureError};
use crate::store::TheoremStore;
use std::fmt;
use thiserror::Error;

pub mod chaining;
pub mod detachment;
pub mod substitution;

pub use chaining::prove_by_chaining;
pub use detachment::prove_by_detachment;
pub use substitution::prove_by_substitution;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Method {
	Substitution,
	Detachment,
	Chaining,
}

impl Method {
	/// Order in which the executive routine tries the methods.
	pub const ORDER: [Method; 3] = [Method::Substitution, Method::Detachment, Method::Chaining];

	pub fn prove(self, expr: &Expression, store: &TheoremStore) -> Result<Proof, ProofError> {
		match self {
			Method::Substitution => prove_by_substitution(expr, store),
			Method::Detachment => prove_by_detachment(expr, store),
			Method::Chaining => prove_by_chaining(expr, store),
		}
	}
}

impl fmt::Display for Method {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Method::Substitution => "substitution",
			Method::Detachment => "detachment",
			Method::Chaining => "chaining",
		})
	}
}

/// Derived expression together with the stored theorems it was derived from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proof {
	pub method: Method,
	pub theorem: Expression,
	pub premises: Vec<usize>,
}

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ProofError {
	#[error("no similar axioms found")]
	NoSimilarAxiom,
	#[error("expression could not be matched, theorems {premises:?} give `{actual}`")]
	MatchMismatch {
		premises: Vec<usize>,
		actual: Expression,
	},
	#[error("{0}")]
	Structure(#[from] StructureError),
}
