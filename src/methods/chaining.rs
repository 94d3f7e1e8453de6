use super::{Method, Proof, ProofError};
use crate::expr::{description, split_on_main, Expression};
use crate::similarity::{find_by_description, Side};
use crate::store::TheoremStore;
use tracing::debug;

/// Method of chaining: `A :>: C` follows from `A :>: B` and `B :>: C`.
///
/// For `A :>: B` the most recently added similar theorem is used, for `B :>: C` the earliest one.
pub fn prove_by_chaining(expr: &Expression, store: &TheoremStore) -> Result<Proof, ProofError> {
	let (a, c) = split_on_main(expr)?;

	let first_key = find_by_description(store, description(a), Side::Left)
		.iter()
		.next_back()
		.copied()
		.ok_or(ProofError::NoSimilarAxiom)?;
	let a_b = store.get(first_key).ok_or(ProofError::NoSimilarAxiom)?;
	let b = a_b.right();
	debug!(key = first_key, theorem = %a_b, "A :>: B");

	let second_key = find_by_description(store, description(b), Side::Left)
		.intersection(&find_by_description(store, description(c), Side::Right))
		.next()
		.copied()
		.ok_or(ProofError::NoSimilarAxiom)?;
	let b_c = store.get(second_key).ok_or(ProofError::NoSimilarAxiom)?;
	debug!(key = second_key, theorem = %b_c, "B :>: C");

	let proof = Expression::implication(a_b.left(), b_c.right());
	if proof != *expr {
		debug!(proof = %proof, "constructed expression differs");
		return Err(ProofError::MatchMismatch { premises: vec![first_key, second_key], actual: proof });
	}

	Ok(Proof {
		method: Method::Chaining,
		theorem: proof,
		premises: vec![first_key, second_key],
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::expr::StructureError;
	use crate::parsing::parse_expression;
	use crate::store::Theorem;

	fn expr(input: &str) -> Expression {
		parse_expression(input).unwrap()
	}

	fn store(axioms: &[&str]) -> TheoremStore {
		TheoremStore::with_axioms(axioms.iter().map(|a| Theorem::new(expr(a)).unwrap()))
	}

	fn chain() -> TheoremStore {
		store(&["p :>: q .v. p", "q .v. p :>: r .v. q v p"])
	}

	#[test]
	fn chains() {
		let proof = prove_by_chaining(&expr("p :>: r .v. q v p"), &chain()).unwrap();
		assert_eq!(proof.theorem, expr("p :>: r .v. q v p"));
		assert_eq!(proof.premises, vec![1, 2]);
	}

	#[test]
	fn transposition_fails() {
		assert_eq!(
			prove_by_chaining(&expr("p :>: r .v. p v q"), &chain()),
			Err(ProofError::MatchMismatch { premises: vec![1, 2], actual: expr("p :>: r .v. q v p") })
		);
		assert!(prove_by_chaining(&expr("x :>: r .v. q v p"), &chain()).is_err());
		assert!(prove_by_chaining(&expr("p :>: r .v. q v p v s"), &chain()).is_err());
	}

	#[test]
	fn newest_first_link() {
		// `p :>: -p .v. p` shadows `p :>: q .v. p`, and nothing continues from `-p .v. p`
		let store = store(&["p :>: q .v. p", "q .v. p :>: r .v. q v p", "p :>: -p .v. p"]);
		assert_eq!(prove_by_chaining(&expr("p :>: r .v. q v p"), &store), Err(ProofError::NoSimilarAxiom));
	}

	#[test]
	fn missing_link() {
		assert_eq!(prove_by_chaining(&expr("p .v. q :>: r"), &chain()), Err(ProofError::NoSimilarAxiom));
		assert_eq!(prove_by_chaining(&expr("p :>: r"), &chain()), Err(ProofError::NoSimilarAxiom));
	}

	#[test]
	fn needs_main_connective() {
		assert_eq!(
			prove_by_chaining(&expr("p .v. q"), &chain()),
			Err(ProofError::Structure(StructureError::MissingMainConnective))
		);
	}
}
