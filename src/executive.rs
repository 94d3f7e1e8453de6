use crate::expr::Expression;
use crate::methods::{Method, Proof, ProofError};
use crate::store::TheoremStore;
use tracing::{debug, info};

/// Why every method failed, in the order they were tried.
pub type Attempts = Vec<(Method, ProofError)>;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Verdict {
	Proved {
		method: Method,
		key: usize,
		theorem: Expression,
	},
	Unproved {
		attempts: Attempts,
	},
}

/// Tries substitution, detachment and chaining in this order and stops at the first success.
pub fn attempt(expr: &Expression, store: &TheoremStore) -> Result<Proof, Attempts> {
	let mut attempts = Vec::new();
	for method in Method::ORDER.iter().copied() {
		match method.prove(expr, store) {
			Ok(proof) => return Ok(proof),
			Err(err) => {
				debug!(%method, %err, "expression could not be proved");
				attempts.push((method, err));
			},
		}
	}
	Err(attempts)
}

/// Proves `expr` and stores it under the next key on success.
pub fn executive_routine(store: &mut TheoremStore, expr: &Expression) -> Verdict {
	match attempt(expr, store) {
		Ok(proof) => {
			let method = proof.method;
			let theorem = proof.theorem.clone();
			match store.record(proof) {
				Ok(key) => Verdict::Proved { method, key, theorem },
				Err(err) => Verdict::Unproved { attempts: vec![(method, err.into())] },
			}
		},
		Err(attempts) => {
			info!(expression = %expr, "expression could not be proved using the methods of LT");
			Verdict::Unproved { attempts }
		},
	}
}
