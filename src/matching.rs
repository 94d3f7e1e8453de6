use crate::expr::{Expression, StructureError};
use crate::token::{Connective, Level, Token};
use std::collections::BTreeMap;

/// `axiom token -> expression token`. The first occurrence of an axiom token fixes its replacement.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Renaming(BTreeMap<Token, Token>);

impl Renaming {
	/// Pairs tokens of `axiom` with tokens of `expr` at the same positions.
	pub fn between(expr: &[Token], axiom: &[Token]) -> Result<Self, StructureError> {
		if expr.len() != axiom.len() {
			return Err(StructureError::LengthMismatch { expr: expr.len(), axiom: axiom.len() });
		}

		let mut map = BTreeMap::new();
		for (axiom_token, expr_token) in axiom.iter().zip(expr.iter()) {
			if axiom_token.is_variable() {
				map.entry(axiom_token.clone()).or_insert_with(|| expr_token.clone());
			}
		}
		Ok(Renaming(map))
	}

	pub fn get(&self, token: &Token) -> Option<&Token> {
		self.0.get(token)
	}
}

/// Replaces every axiom variable that differs from `expr` at its position.
pub fn substitute(expr: &[Token], axiom: &[Token]) -> Result<Expression, StructureError> {
	let renaming = Renaming::between(expr, axiom)?;
	Ok(axiom.iter()
		.zip(expr.iter())
		.map(|(axiom_token, expr_token)| {
			if axiom_token.is_connective() || axiom_token == expr_token {
				axiom_token.clone()
			} else {
				renaming.get(axiom_token).unwrap_or(axiom_token).clone()
			}
		})
		.collect())
}

fn uses(tokens: &[Token], level: Level, predicate: fn(Connective) -> bool) -> bool {
	tokens.iter()
		.filter_map(Token::connective_kind)
		.any(|kind| kind.level() == level && predicate(kind))
}

/// Replaces selected connectives by their duals and toggles the variable right before each of them.
fn rewrite_connectives(tokens: &[Token], level: Level, predicate: fn(Connective) -> bool) -> Vec<Token> {
	let mut result: Vec<Token> = Vec::with_capacity(tokens.len());
	for token in tokens {
		let dual = token.connective_kind()
			.filter(|kind| kind.level() == level && predicate(*kind))
			.and_then(Connective::dual);
		match dual {
			Some(dual) => {
				if let Some(previous) = result.pop() {
					result.push(previous.toggle_negation());
				}
				result.push(Token::connective(dual));
			},
			None => result.push(token.clone()),
		}
	}
	result
}

/// Rewrites the axiom so that it uses the same kind of connective as `expr` on every level: `p v q` is `-p > q`.
pub fn normalize_connective(expr: &[Token], axiom: &[Token]) -> Expression {
	let mut result = axiom.to_vec();
	for level in [Level::Standard, Level::Unit].iter().copied() {
		if uses(&result, level, Connective::is_disjunction) && !uses(expr, level, Connective::is_disjunction) {
			result = rewrite_connectives(&result, level, Connective::is_disjunction);
		} else if uses(&result, level, Connective::is_implication) && !uses(expr, level, Connective::is_implication) {
			result = rewrite_connectives(&result, level, Connective::is_implication);
		}
	}
	Expression(result)
}

/// Matching routine: connective normalization, then substitution.
pub fn matching(expr: &[Token], axiom: &[Token]) -> Result<Expression, StructureError> {
	substitute(expr, &normalize_connective(expr, axiom))
}
