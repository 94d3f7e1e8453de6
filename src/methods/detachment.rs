//! Method of detachment.
//!
//! To prove `B`, find a stored theorem `A :>: B'` where `B'` has the shape of `B`, instantiate it so that its right
//! side becomes `B`, and establish the instantiated `A` by substitution. Stored theorems keep `B'` as a unit
//! implication (`x .>. y`), so the expression is contracted to units first to compare shapes on the same level.

use super::{prove_by_substitution, Method, Proof, ProofError};
use crate::contraction::{contraction, expand_to_main, separate_units, standardise_expression, standardise_subexpression};
use crate::expr::{description, description_left, description_right, split_on_main, Description, Expression};
use crate::matching::Renaming;
use crate::store::{Theorem, TheoremStore};
use crate::token::{Level, Token};
use tracing::debug;

/// Descriptions of both sides of a theorem's right side, when that side is a unit implication.
fn inner_descriptions(theorem: &Theorem) -> Option<(Description, Description)> {
	let right = theorem.right();
	let compound = right.iter()
		.filter_map(Token::connective_kind)
		.any(|kind| kind.level() == Level::Unit);
	if !compound {
		return None;
	}

	let inner = standardise_subexpression(right);
	let (left, right) = split_on_main(&inner).ok()?;
	Some((description(left), description(right)))
}

pub fn prove_by_detachment(expr: &Expression, store: &TheoremStore) -> Result<Proof, ProofError> {
	let (contracted, key) = contraction(&separate_units(expr))?;
	let standard = standardise_expression(&contracted);
	let target = (description_left(&standard)?, description_right(&standard)?);
	debug!(contracted = %contracted, left = %target.0, right = %target.1, "contracted expression");

	let axiom_key = store.iter()
		.filter(|(_, theorem)| inner_descriptions(theorem) == Some(target))
		.map(|(key, _)| key)
		.last()
		.ok_or_else(|| {
			debug!("no similar axioms could be found");
			ProofError::NoSimilarAxiom
		})?;
	let axiom = store.get(axiom_key).ok_or(ProofError::NoSimilarAxiom)?;
	debug!(key = axiom_key, axiom = %axiom, "similar axiom");

	// variables of the axiom's consequent are renamed to placeholders, and placeholders are expanded to units
	let renaming = Renaming::between(&standard, &standardise_subexpression(axiom.right()))?;
	let instance: Expression = axiom.expression()
		.iter()
		.flat_map(|token| match renaming.get(token).and_then(|placeholder| key.unit(placeholder)) {
			Some(unit) => unit.to_vec(),
			None => vec![token.clone()],
		})
		.collect();
	let instance = Theorem::new(instance)?;

	let consequent = standardise_subexpression(instance.right());
	if consequent != *expr {
		debug!(instance = %instance, "instantiated axiom does not give the expression");
		return Err(ProofError::MatchMismatch { premises: vec![axiom_key], actual: consequent });
	}

	// a bare proposition as antecedent is not a theorem that substitution could establish
	let antecedent = match expand_to_main(instance.left()) {
		Ok(antecedent) => antecedent,
		Err(err) => {
			debug!(instance = %instance, %err, "antecedent is not an implication");
			return Err(ProofError::NoSimilarAxiom);
		},
	};
	debug!(antecedent = %antecedent, instance = %instance, "establishing antecedent");
	let established = prove_by_substitution(&antecedent, store)?;

	let mut premises = vec![axiom_key];
	premises.extend(established.premises);
	Ok(Proof {
		method: Method::Detachment,
		theorem: expr.clone(),
		premises,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::expr::StructureError;
	use crate::parsing::parse_expression;

	fn expr(input: &str) -> Expression {
		parse_expression(input).unwrap()
	}

	fn store(axioms: &[&str]) -> TheoremStore {
		TheoremStore::with_axioms(axioms.iter().map(|a| Theorem::new(expr(a)).unwrap()))
	}

	#[test]
	fn inner() {
		let t = Theorem::new(expr("q .>. r :>: p .v. q .>. p .v. r")).unwrap();
		assert_eq!(
			inner_descriptions(&t),
			Some((Description::new(2, 2, 2), Description::new(2, 2, 2)))
		);
		assert_eq!(inner_descriptions(&Theorem::new(expr("q :>: p .v. q")).unwrap()), None);
		assert_eq!(inner_descriptions(&Theorem::new(expr("p :>: q")).unwrap()), None);
	}

	#[test]
	fn detaches_through_principia_1_6() {
		let store = TheoremStore::principia().unwrap();
		let e = expr("r .v. p v q :>: r .v. q v p");
		let proof = prove_by_detachment(&e, &store).unwrap();
		assert_eq!(proof.theorem, e);
		assert_eq!(proof.premises, vec![5, 3]);
	}

	#[test]
	fn antecedent_must_be_known() {
		let store = store(&["q .>. r :>: p .v. q .>. p .v. r"]);
		assert_eq!(
			prove_by_detachment(&expr("r .v. p v q :>: r .v. q v p"), &store),
			Err(ProofError::NoSimilarAxiom)
		);
	}

	#[test]
	fn antecedent_must_be_implication() {
		// `y :>: x .>. y` detaches `x :>: y` only if `y` alone is known
		let store = store(&["p :>: q .>. p"]);
		assert_eq!(prove_by_detachment(&expr("x :>: y"), &store), Err(ProofError::NoSimilarAxiom));
	}

	#[test]
	fn consequent_must_match() {
		let store = TheoremStore::principia().unwrap();
		assert_eq!(
			prove_by_detachment(&expr("p .v. q :>: r .v. s"), &store),
			Err(ProofError::MatchMismatch { premises: vec![5], actual: expr("p .v. q :>: p .v. s") })
		);
	}

	#[test]
	fn no_compound_consequent() {
		let store = store(&["p .v. q :>: q .v. p"]);
		assert_eq!(prove_by_detachment(&expr("a .v. b :>: b .v. a"), &store), Err(ProofError::NoSimilarAxiom));
	}

	#[test]
	fn malformed() {
		let store = TheoremStore::principia().unwrap();
		assert_eq!(
			prove_by_detachment(&expr("p .v. q"), &store),
			Err(ProofError::Structure(StructureError::MissingMainConnective))
		);
	}
}
