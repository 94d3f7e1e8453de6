use crate::token::{Connective, Token};
use itertools::Itertools;
use std::fmt;
use std::iter::FromIterator;
use std::ops::Deref;
use thiserror::Error;

/// Expression as an ordered sequence of tokens: `p .v. q :>: q .v. p`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Expression(pub Vec<Token>);

impl Expression {
	pub fn new(tokens: Vec<Token>) -> Self {
		Expression(tokens)
	}

	/// `left :>: right`
	pub fn implication(left: &[Token], right: &[Token]) -> Self {
		left.iter()
			.cloned()
			.chain(std::iter::once(Token::connective(Connective::Main)))
			.chain(right.iter().cloned())
			.collect()
	}

	pub fn tokens(&self) -> &[Token] {
		&self.0
	}

	pub fn into_tokens(self) -> Vec<Token> {
		self.0
	}
}

impl Deref for Expression {
	type Target = [Token];

	fn deref(&self) -> &[Token] {
		&self.0
	}
}

impl From<Vec<Token>> for Expression {
	fn from(tokens: Vec<Token>) -> Self {
		Expression(tokens)
	}
}

impl FromIterator<Token> for Expression {
	fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
		Expression(iter.into_iter().collect())
	}
}

impl fmt::Display for Expression {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0.iter().join(" "))
	}
}

/// Malformed input or exhausted capacity. Never a mere failure to find a proof.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum StructureError {
	#[error("expression has no main connective `:>:`")]
	MissingMainConnective,
	#[error("expression has {count} main connectives `:>:`, expected exactly one")]
	DuplicateMainConnective {
		count: usize,
	},
	#[error("cannot match, expression has {expr} tokens and axiom has {axiom}")]
	LengthMismatch {
		expr: usize,
		axiom: usize,
	},
	#[error("expression has more than {capacity} distinct units to contract")]
	PlaceholderExhausted {
		capacity: usize,
	},
}

/// Structural fingerprint `(levels, distinct, count)`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Description {
	/// Number of maximal variable runs between connectives.
	pub levels: usize,
	/// Number of variable names, negation ignored.
	pub distinct: usize,
	/// Number of variable occurrences.
	pub count: usize,
}

impl Description {
	pub fn new(levels: usize, distinct: usize, count: usize) -> Self {
		Description { levels, distinct, count }
	}
}

impl fmt::Display for Description {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({}, {}, {})", self.levels, self.distinct, self.count)
	}
}

fn count_levels(tokens: &[Token]) -> usize {
	let groups = tokens.iter().group_by(|token| token.is_connective());
	let levels = groups
		.into_iter()
		.filter(|(is_connective, _)| !*is_connective)
		.count();
	levels
}

fn count_distinct(tokens: &[Token]) -> usize {
	tokens.iter()
		.filter_map(Token::variable_name)
		.unique()
		.count()
}

fn count_variables(tokens: &[Token]) -> usize {
	tokens.iter().filter(|token| token.is_variable()).count()
}

pub fn description(tokens: &[Token]) -> Description {
	Description {
		levels: count_levels(tokens),
		distinct: count_distinct(tokens),
		count: count_variables(tokens),
	}
}

/// Splits around the only main connective, which belongs to neither side.
pub fn split_on_main(tokens: &[Token]) -> Result<(&[Token], &[Token]), StructureError> {
	let mains: Vec<usize> = tokens.iter().positions(Token::is_main).collect();
	match mains.as_slice() {
		[index] => Ok((&tokens[..*index], &tokens[*index + 1..])),
		[] => Err(StructureError::MissingMainConnective),
		_ => Err(StructureError::DuplicateMainConnective { count: mains.len() }),
	}
}

pub fn left_side(tokens: &[Token]) -> Result<&[Token], StructureError> {
	split_on_main(tokens).map(|(left, _)| left)
}

pub fn right_side(tokens: &[Token]) -> Result<&[Token], StructureError> {
	split_on_main(tokens).map(|(_, right)| right)
}

pub fn description_left(tokens: &[Token]) -> Result<Description, StructureError> {
	left_side(tokens).map(description)
}

pub fn description_right(tokens: &[Token]) -> Result<Description, StructureError> {
	right_side(tokens).map(description)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::parsing::parse_expression;

	fn expr(input: &str) -> Expression {
		parse_expression(input).unwrap()
	}

	#[test]
	fn counts() {
		assert_eq!(description(&expr("p .v. q v -p")), Description::new(3, 2, 3));
		assert_eq!(description(&expr("-p")), Description::new(1, 1, 1));
		assert_eq!(description(&expr("p .>. -p :>: -p")), Description::new(3, 1, 3));
	}

	#[test]
	fn renaming_keeps_description() {
		assert_eq!(description(&expr("p :>: q")), description(&expr("x :>: y")));
		assert_eq!(
			description(&expr("p .v. q :>: q .v. p")),
			description(&expr("a .v. -b :>: b .v. a"))
		);
		assert_ne!(description(&expr("p .v. p")), description(&expr("p .v. q")));
	}

	#[test]
	fn sides() {
		let e = expr("p .v. p :>: p");
		assert_eq!(description_left(&e), Ok(Description::new(2, 1, 2)));
		assert_eq!(description_right(&e), Ok(Description::new(1, 1, 1)));

		let (left, right) = split_on_main(&e).unwrap();
		assert_eq!(Expression::implication(left, right), e);
	}

	#[test]
	fn malformed_split() {
		assert_eq!(split_on_main(&expr("p .v. q")), Err(StructureError::MissingMainConnective));
		assert_eq!(
			description_left(&expr("p :>: q :>: r")),
			Err(StructureError::DuplicateMainConnective { count: 2 })
		);
	}
}
