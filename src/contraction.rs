//! Collapsing units of an expression into single placeholder variables and back.
//!
//! A unit is a maximal run of tokens between unit (`.v.`, `.>.`) or main (`:>:`) connectives. Standard connectives
//! stay inside units, so `p v q .>. r :>: -s` has three units: `p v q`, `r` and `-s`, and contracts to `a .>. b :>: c`.

use crate::expr::{split_on_main, Expression, StructureError};
use crate::token::{Connective, Level, Token};
use itertools::Itertools;

/// Placeholder alphabet, used in this order.
pub const PLACEHOLDERS: [&str; 12] = ["a", "b", "c", "p", "q", "r", "A", "B", "C", "P", "Q", "R"];

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Unit {
	Run(Vec<Token>),
	Connective(Connective),
}

fn separates_units(token: &Token) -> bool {
	token.connective_kind().map_or(false, |kind| kind.level() != Level::Standard)
}

/// `[unit, connective, unit, ..., unit]` for a well-formed expression.
pub fn separate_units(tokens: &[Token]) -> Vec<Unit> {
	let mut units = Vec::new();
	let groups = tokens.iter().group_by(|token| separates_units(token));
	for (is_separator, group) in &groups {
		if is_separator {
			units.extend(group.filter_map(Token::connective_kind).map(Unit::Connective));
		} else {
			units.push(Unit::Run(group.cloned().collect()));
		}
	}
	units
}

/// Placeholder -> unit it stands for. Placeholder `PLACEHOLDERS[i]` stands for `units[i]`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ContractionKey {
	units: Vec<Vec<Token>>,
}

impl ContractionKey {
	pub fn len(&self) -> usize {
		self.units.len()
	}

	pub fn is_empty(&self) -> bool {
		self.units.is_empty()
	}

	fn placeholder(index: usize) -> Token {
		Token::variable(PLACEHOLDERS[index])
	}

	/// Unit for a non-negated placeholder variable of this key.
	pub fn unit(&self, token: &Token) -> Option<&[Token]> {
		match token {
			Token::Variable { name, negated: false } => PLACEHOLDERS
				.iter()
				.position(|placeholder| placeholder == name)
				.and_then(|index| self.units.get(index))
				.map(Vec::as_slice),
			_ => None,
		}
	}

	pub fn iter(&self) -> impl Iterator<Item = (Token, &[Token])> + '_ {
		self.units
			.iter()
			.enumerate()
			.map(|(index, unit)| (Self::placeholder(index), unit.as_slice()))
	}

	/// Reverse contraction: every placeholder is replaced by its unit.
	pub fn expand(&self, tokens: &[Token]) -> Expression {
		tokens.iter()
			.flat_map(|token| match self.unit(token) {
				Some(unit) => unit.to_vec(),
				None => vec![token.clone()],
			})
			.collect()
	}
}

/// Replaces every unit by a placeholder. Equal units share a placeholder.
pub fn contraction(units: &[Unit]) -> Result<(Expression, ContractionKey), StructureError> {
	let mut key = ContractionKey::default();
	let mut contracted = Vec::with_capacity(units.len());
	for unit in units {
		match unit {
			Unit::Connective(kind) => contracted.push(Token::connective(*kind)),
			Unit::Run(run) => {
				let index = match key.units.iter().position(|known| known == run) {
					Some(index) => index,
					None => {
						if key.units.len() == PLACEHOLDERS.len() {
							return Err(StructureError::PlaceholderExhausted { capacity: PLACEHOLDERS.len() });
						}
						key.units.push(run.clone());
						key.units.len() - 1
					},
				};
				contracted.push(ContractionKey::placeholder(index));
			},
		}
	}
	Ok((Expression(contracted), key))
}

/// `.>.` -> `>`, `.v.` -> `v`, so that descriptions see every level.
pub fn standardise_expression(tokens: &[Token]) -> Expression {
	tokens.iter()
		.map(|token| match token.connective_kind() {
			Some(kind) => Token::connective(kind.standardised()),
			None => token.clone(),
		})
		.collect()
}

/// `.>.` -> `:>:`, reveals the main connective of a sub-expression.
pub fn standardise_subexpression(tokens: &[Token]) -> Expression {
	tokens.iter()
		.map(|token| match token.connective_kind() {
			Some(Connective::UnitImplies) => Token::connective(Connective::Main),
			_ => token.clone(),
		})
		.collect()
}

fn promote_side(side: &[Token]) -> Vec<Token> {
	let has_units = side.iter()
		.filter_map(Token::connective_kind)
		.any(|kind| kind.level() == Level::Unit);
	if has_units {
		side.to_vec()
	} else {
		side.iter()
			.map(|token| match token.connective_kind() {
				Some(kind) => Token::connective(kind.promoted()),
				None => token.clone(),
			})
			.collect()
	}
}

/// Turns a unit implication into a standalone expression: `p v q .>. q v p` becomes `p .v. q :>: q .v. p`.
pub fn expand_to_main(tokens: &[Token]) -> Result<Expression, StructureError> {
	let revealed = standardise_subexpression(tokens);
	let (left, right) = split_on_main(&revealed)?;
	Ok(Expression::implication(&promote_side(left), &promote_side(right)))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::parsing::parse_expression;

	fn expr(input: &str) -> Expression {
		parse_expression(input).unwrap()
	}

	fn run(input: &str) -> Unit {
		Unit::Run(expr(input).into_tokens())
	}

	#[test]
	fn units() {
		assert_eq!(separate_units(&expr("p v q .>. r :>: -s")), vec![
			run("p v q"),
			Unit::Connective(Connective::UnitImplies),
			run("r"),
			Unit::Connective(Connective::Main),
			run("-s"),
		]);
	}

	#[test]
	fn contract() {
		let (contracted, key) = contraction(&separate_units(&expr("p v q .>. r :>: -s"))).unwrap();
		assert_eq!(contracted, expr("a .>. b :>: c"));
		assert_eq!(key.len(), 3);
		assert_eq!(key.unit(&Token::variable("a")), Some(expr("p v q").tokens()));
		assert_eq!(key.unit(&Token::variable("c")), Some(expr("-s").tokens()));
		assert_eq!(key.unit(&Token::variable("p")), None);
		assert_eq!(key.unit(&Token::negated("a")), None);
	}

	#[test]
	fn equal_units_share_placeholder() {
		let (contracted, key) = contraction(&separate_units(&expr("r .v. p v q :>: r .v. q v p"))).unwrap();
		assert_eq!(contracted, expr("a .v. b :>: a .v. c"));
		assert_eq!(key.iter().map(|(placeholder, _)| placeholder.to_string()).collect::<Vec<_>>(), vec!["a", "b", "c"]);
	}

	#[test]
	fn round_trip() {
		let inputs = [
			"p v q .>. r :>: -s",
			"r .v. p v q :>: r .v. q v p",
			"p .v. p :>: p",
			"a .v. b :>: b",
			"x1 .v. x2 .v. x3 .v. x4 .v. x5 .v. x6 :>: x7 .v. x8 .v. x9 .v. x10 .v. x11 .v. x12",
		];
		for input in inputs.iter() {
			let original = expr(input);
			let units = separate_units(&original);
			let (contracted, key) = contraction(&units).unwrap();
			let expanded = key.expand(&contracted);
			assert_eq!(expanded, original);
			assert_eq!(separate_units(&expanded), units);
		}
	}

	#[test]
	fn placeholders_run_out() {
		let input = (1..=13).map(|i| format!("x{}", i)).collect::<Vec<_>>().join(" .v. ");
		assert_eq!(
			contraction(&separate_units(&expr(&input))),
			Err(StructureError::PlaceholderExhausted { capacity: 12 })
		);
	}

	#[test]
	fn standardise() {
		assert_eq!(standardise_expression(&expr("a .v. b :>: a .>. c")), expr("a v b :>: a > c"));
		assert_eq!(standardise_subexpression(&expr("p .v. q .>. p .v. r")), expr("p .v. q :>: p .v. r"));
	}

	#[test]
	fn expansion_to_main() {
		assert_eq!(expand_to_main(&expr("p v q .>. q v p")), Ok(expr("p .v. q :>: q .v. p")));
		assert_eq!(expand_to_main(&expr("r .v. p .>. r .v. q")), Ok(expr("r .v. p :>: r .v. q")));
		assert_eq!(expand_to_main(&expr("p v q")), Err(StructureError::MissingMainConnective));
	}
}
