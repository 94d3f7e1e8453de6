use super::{Method, Proof, ProofError};
use crate::expr::Expression;
use crate::matching::matching;
use crate::similarity::test_similarity;
use crate::store::TheoremStore;
use tracing::debug;

/// Method of substitution: the expression is an instance of a stored theorem.
///
/// Similar theorems are tried from the smallest key, the first one that matches proves the expression.
pub fn prove_by_substitution(expr: &Expression, store: &TheoremStore) -> Result<Proof, ProofError> {
	let candidates = test_similarity(store, expr)?;

	let mut first_failure = None;
	for key in candidates {
		let axiom = match store.get(key) {
			Some(axiom) => axiom,
			None => continue,
		};
		debug!(key, axiom = %axiom, expression = %expr, "matching");

		match matching(expr, axiom.expression()) {
			Ok(matched) if matched == *expr => {
				debug!(key, "expression has been matched");
				return Ok(Proof {
					method: Method::Substitution,
					theorem: matched,
					premises: vec![key],
				});
			},
			Ok(matched) => {
				debug!(key, matched = %matched, "matched axiom differs from expression");
				first_failure.get_or_insert(ProofError::MatchMismatch { premises: vec![key], actual: matched });
			},
			Err(err) => {
				debug!(key, %err, "cannot match");
				first_failure.get_or_insert(ProofError::Structure(err));
			},
		}
	}

	Err(first_failure.unwrap_or(ProofError::NoSimilarAxiom))
}
