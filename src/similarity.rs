use crate::expr::{description, description_left, description_right, Description};
use crate::methods::ProofError;
use crate::store::{Theorem, TheoremStore};
use crate::token::Token;
use std::collections::BTreeSet;
use tracing::debug;

/// Which part of a stored theorem is described.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Side {
	Whole,
	Left,
	Right,
}

impl Side {
	pub fn describe(self, theorem: &Theorem) -> Description {
		match self {
			Side::Whole => description(theorem.expression()),
			Side::Left => description(theorem.left()),
			Side::Right => description(theorem.right()),
		}
	}
}

/// Keys of all theorems whose `side` has description `target`.
pub fn find_by_description(store: &TheoremStore, target: Description, side: Side) -> BTreeSet<usize> {
	store.iter()
		.filter(|(_, theorem)| side.describe(theorem) == target)
		.map(|(key, _)| key)
		.collect()
}

/// Keys of theorems similar to `expr` on both sides, ascending.
pub fn test_similarity(store: &TheoremStore, expr: &[Token]) -> Result<Vec<usize>, ProofError> {
	let left = find_by_description(store, description_left(expr)?, Side::Left);
	let right = find_by_description(store, description_right(expr)?, Side::Right);
	let matches: Vec<usize> = left.intersection(&right).copied().collect();
	if matches.is_empty() {
		debug!("there are no axioms with identical left and right descriptions");
		Err(ProofError::NoSimilarAxiom)
	} else {
		debug!(?matches, "axioms with identical left and right descriptions");
		Ok(matches)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::parsing::parse_expression;

	fn store() -> TheoremStore {
		TheoremStore::principia().unwrap()
	}

	#[test]
	fn by_side() {
		let store = store();
		assert_eq!(
			find_by_description(&store, Description::new(2, 2, 2), Side::Left),
			vec![3, 5].into_iter().collect()
		);
		assert_eq!(
			find_by_description(&store, Description::new(1, 1, 1), Side::Right),
			vec![1].into_iter().collect()
		);
		assert_eq!(
			find_by_description(&store, Description::new(4, 2, 4), Side::Whole),
			vec![3].into_iter().collect()
		);
	}

	#[test]
	fn similarity() {
		let store = store();
		let e = parse_expression("p .>. -p :>: -p").unwrap();
		assert_eq!(test_similarity(&store, &e), Ok(vec![1]));

		let e = parse_expression("x .v. y :>: y .v. x").unwrap();
		assert_eq!(test_similarity(&store, &e), Ok(vec![3]));

		let e = parse_expression("x .v. y .v. z :>: x").unwrap();
		assert_eq!(test_similarity(&store, &e), Err(ProofError::NoSimilarAxiom));
	}
}
