use crate::expr::{Expression, StructureError};
use crate::store::Theorem;
use crate::token::{Connective, Token};
use crate::utils::span::{GlobalSpan, LocalSpan, Spanned};
use itertools::Itertools;
use thiserror::Error;

peg::parser!(
	grammar parser() for str {
		pub rule expression() -> Expression
			= _ tokens:token() ++ __ _ { Expression(tokens) }

		rule token() -> Token
			= kind:connective() &token_end() { Token::Connective { kind } }
			/ "-" name:name() { Token::Variable { name, negated: true } }
			/ name:name() { Token::Variable { name, negated: false } }

		rule connective() -> Connective
			= ":>:" { Connective::Main }
			/ ".v." { Connective::UnitOr }
			/ ".>." { Connective::UnitImplies }
			/ ">" { Connective::Implies }
			/ "v" { Connective::Or }

		rule token_end() = [' ' | '\t' | '\r'] / ![_]

		rule name() -> String
			= n:$(name_char()+) { String::from(n) }

		rule name_char() = !['\n' | ' ' | '\t' | '\r'] [_]

		rule __() = quiet!{[' ' | '\t' | '\r']+}
		rule _() = quiet!{[' ' | '\t' | '\r']*}
	}
);

#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("unexpected token, expected one of: {expected}")]
pub struct ParseError {
	pub expected: String,
}

/// Parses a whitespace delimited token stream. Every token that is not a connective is a variable.
pub fn parse_expression(input: &str) -> Result<Expression, Spanned<ParseError>> {
	parser::expression(input).map_err(|err| {
		let offset = err.location.offset;
		let expected = err.expected.tokens().sorted().join(", ");
		Spanned::new(ParseError { expected }, GlobalSpan(offset..offset + 1))
	})
}

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ReadTheoremsError {
	#[error("{0}")]
	Parse(ParseError),
	#[error("{0}")]
	Structure(StructureError),
}

/// Part of the line before a `#` comment.
pub fn strip_comment(line: &str) -> &str {
	line.find('#').map_or(line, |index| &line[..index])
}

/// Reads a theorem file: one expression per line, `#` starts a comment. All erroneous lines are reported.
pub fn read_theorems(input: &str) -> Result<Vec<Theorem>, Vec<Spanned<ReadTheoremsError>>> {
	let mut errors = Vec::new();
	let mut result = Vec::new();
	let mut line_start = 0;
	for line in input.split('\n') {
		let start = line_start;
		line_start += line.len() + 1;

		let content = strip_comment(line);
		if content.trim().is_empty() {
			continue;
		}

		let expression = match parse_expression(content) {
			Ok(x) => x,
			Err(err) => {
				let span = LocalSpan(err.span.0).globalize_span(start);
				errors.push(Spanned::new(ReadTheoremsError::Parse(err.inner), span));
				continue;
			}
		};

		match Theorem::new(expression) {
			Ok(theorem) => result.push(theorem),
			Err(err) => {
				let span = LocalSpan(0..content.trim_end().len()).globalize_span(start);
				errors.push(Spanned::new(ReadTheoremsError::Structure(err), span));
			}
		}
	}

	if errors.is_empty() {
		Ok(result)
	} else {
		Err(errors)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tokens() {
		let e = parse_expression("-p .v. q v r :>: q .>. p > vx").unwrap();
		assert_eq!(e.0, vec![
			Token::negated("p"),
			Token::connective(Connective::UnitOr),
			Token::variable("q"),
			Token::connective(Connective::Or),
			Token::variable("r"),
			Token::connective(Connective::Main),
			Token::variable("q"),
			Token::connective(Connective::UnitImplies),
			Token::variable("p"),
			Token::connective(Connective::Implies),
			Token::variable("vx"),
		]);
		assert_eq!(e.to_string(), "-p .v. q v r :>: q .>. p > vx");
	}

	#[test]
	fn surrounding_whitespace() {
		assert_eq!(parse_expression("  p  :>:\tp ").unwrap().len(), 3);
	}

	#[test]
	fn any_other_token_is_variable() {
		let e = parse_expression("p* :>: -p'_2 v :>:x").unwrap();
		assert_eq!(e.0, vec![
			Token::variable("p*"),
			Token::connective(Connective::Main),
			Token::negated("p'_2"),
			Token::connective(Connective::Or),
			Token::variable(":>:x"),
		]);
		assert_eq!(parse_expression("p:>:p").unwrap().0, vec![Token::variable("p:>:p")]);
		assert_eq!(parse_expression("p .v.q").unwrap().len(), 2);
	}

	#[test]
	fn rejects_empty_and_multiline() {
		assert!(parse_expression("").is_err());
		assert!(parse_expression(" \t ").is_err());
		assert_eq!(parse_expression("p\nq").unwrap_err().span, GlobalSpan(1..2));
	}

	#[test]
	fn theorem_file() {
		let theorems = read_theorems("# comment\np .v. p :>: p\n\nq :>: p .v. q # *1.3\n").unwrap();
		assert_eq!(theorems.len(), 2);
		assert_eq!(theorems[1].expression().to_string(), "q :>: p .v. q");
	}

	#[test]
	fn theorem_file_errors() {
		let errors = read_theorems("p :>: p\np .v. q\nq :>: p :>: q\n").unwrap_err();
		assert_eq!(errors.len(), 2);
		assert_eq!(errors[0].inner, ReadTheoremsError::Structure(StructureError::MissingMainConnective));
		assert_eq!(errors[0].span, GlobalSpan(8..15));
		assert_eq!(
			errors[1].inner,
			ReadTheoremsError::Structure(StructureError::DuplicateMainConnective { count: 2 })
		);
		assert_eq!(errors[1].span, GlobalSpan(16..29));
	}
}
