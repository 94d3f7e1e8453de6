use std::fmt;

/// Level of a connective. Unit connectives group weaker than standard ones, the main connective is the weakest.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Copy)]
pub enum Level {
	Standard,
	Unit,
	Main,
}

/// Connective alphabet. In an expression looks like: `v`, `>`, `.v.`, `.>.`, `:>:`.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Copy)]
pub enum Connective {
	/// `v`
	Or,
	/// `>`
	Implies,
	/// `.v.`
	UnitOr,
	/// `.>.`
	UnitImplies,
	/// `:>:`, separates antecedent from consequent.
	Main,
}

impl Connective {
	pub const ALL: [Connective; 5] = [
		Connective::Or,
		Connective::Implies,
		Connective::UnitOr,
		Connective::UnitImplies,
		Connective::Main,
	];

	pub fn symbol(self) -> &'static str {
		use Connective::*;

		match self {
			Or => "v",
			Implies => ">",
			UnitOr => ".v.",
			UnitImplies => ".>.",
			Main => ":>:",
		}
	}

	pub fn level(self) -> Level {
		use Connective::*;

		match self {
			Or | Implies => Level::Standard,
			UnitOr | UnitImplies => Level::Unit,
			Main => Level::Main,
		}
	}

	pub fn is_disjunction(self) -> bool {
		matches!(self, Connective::Or | Connective::UnitOr)
	}

	pub fn is_implication(self) -> bool {
		matches!(self, Connective::Implies | Connective::UnitImplies)
	}

	/// Disjunction of the same level for an implication and vice versa. The main connective has no dual.
	pub fn dual(self) -> Option<Connective> {
		use Connective::*;

		match self {
			Or => Some(Implies),
			Implies => Some(Or),
			UnitOr => Some(UnitImplies),
			UnitImplies => Some(UnitOr),
			Main => None,
		}
	}

	/// `.v.` -> `v`, `.>.` -> `>`.
	pub fn standardised(self) -> Connective {
		use Connective::*;

		match self {
			UnitOr => Or,
			UnitImplies => Implies,
			other => other,
		}
	}

	/// `v` -> `.v.`, `>` -> `.>.`.
	pub fn promoted(self) -> Connective {
		use Connective::*;

		match self {
			Or => UnitOr,
			Implies => UnitImplies,
			other => other,
		}
	}
}

impl fmt::Display for Connective {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.symbol())
	}
}

/// One element of an expression.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Token {
	/// `p`, `q1`, `-p`.
	Variable {
		name: String,
		negated: bool,
	},

	Connective {
		kind: Connective,
	},
}

impl Token {
	pub fn variable(name: impl Into<String>) -> Token {
		Token::Variable { name: name.into(), negated: false }
	}

	pub fn negated(name: impl Into<String>) -> Token {
		Token::Variable { name: name.into(), negated: true }
	}

	pub fn connective(kind: Connective) -> Token {
		Token::Connective { kind }
	}

	pub fn is_connective(&self) -> bool {
		matches!(self, Token::Connective { .. })
	}

	pub fn is_variable(&self) -> bool {
		!self.is_connective()
	}

	pub fn is_main(&self) -> bool {
		self.connective_kind() == Some(Connective::Main)
	}

	pub fn connective_kind(&self) -> Option<Connective> {
		match self {
			Token::Connective { kind } => Some(*kind),
			Token::Variable { .. } => None,
		}
	}

	/// Name of the variable without negation marker.
	pub fn variable_name(&self) -> Option<&str> {
		match self {
			Token::Variable { name, .. } => Some(name),
			Token::Connective { .. } => None,
		}
	}

	/// Same variable with opposite sign. Connectives are returned unchanged.
	pub fn toggle_negation(self) -> Token {
		match self {
			Token::Variable { name, negated } => Token::Variable { name, negated: !negated },
			connective => connective,
		}
	}
}

impl From<Connective> for Token {
	fn from(kind: Connective) -> Self {
		Token::Connective { kind }
	}
}

impl fmt::Display for Token {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Token::Variable { name, negated: true } => write!(f, "-{}", name),
			Token::Variable { name, negated: false } => f.write_str(name),
			Token::Connective { kind } => fmt::Display::fmt(kind, f),
		}
	}
}
