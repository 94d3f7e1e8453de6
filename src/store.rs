use crate::expr::{split_on_main, Expression, StructureError};
use crate::methods::{Method, Proof};
use crate::parsing::{read_theorems, ReadTheoremsError};
use crate::token::Token;
use crate::utils::span::Spanned;
use petgraph::graphmap::DiGraphMap;
use petgraph::visit::Dfs;
use std::collections::BTreeMap;
use std::fmt;
use tracing::info;

/// Axioms *1.2 - *1.6 of Principia Mathematica.
pub const PRINCIPIA: &str = include_str!("../axioms/principia.lt");

/// Expression with exactly one main connective.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Theorem {
	expression: Expression,
	main: usize,
}

impl Theorem {
	pub fn new(expression: Expression) -> Result<Self, StructureError> {
		let main = split_on_main(&expression)?.0.len();
		Ok(Theorem { expression, main })
	}

	pub fn expression(&self) -> &Expression {
		&self.expression
	}

	pub fn into_expression(self) -> Expression {
		self.expression
	}

	pub fn left(&self) -> &[Token] {
		&self.expression[..self.main]
	}

	pub fn right(&self) -> &[Token] {
		&self.expression[self.main + 1..]
	}
}

impl fmt::Display for Theorem {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(&self.expression, f)
	}
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Origin {
	Axiom,
	Proved {
		method: Method,
		premises: Vec<usize>,
	},
}

impl fmt::Display for Origin {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Origin::Axiom => f.write_str("axiom"),
			Origin::Proved { method, premises } => {
				write!(f, "{} from ", method)?;
				for (index, premise) in premises.iter().enumerate() {
					if index != 0 {
						f.write_str(", ")?;
					}
					write!(f, "{}", premise)?;
				}
				Ok(())
			},
		}
	}
}

#[derive(Clone, Debug)]
struct Entry {
	theorem: Theorem,
	origin: Origin,
}

/// Append-only theorem memory. Keys start from 1 and are dense; nothing is ever removed or replaced.
#[derive(Clone, Debug, Default)]
pub struct TheoremStore {
	entries: BTreeMap<usize, Entry>,
	/// Edge `a -> b` means that `b` was used to prove `a`.
	derivations: DiGraphMap<usize, ()>,
}

impl TheoremStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_axioms<I: IntoIterator<Item = Theorem>>(axioms: I) -> Self {
		let mut store = Self::new();
		for axiom in axioms {
			store.add_axiom(axiom);
		}
		store
	}

	/// Store seeded with `axioms/principia.lt`.
	pub fn principia() -> Result<Self, Vec<Spanned<ReadTheoremsError>>> {
		read_theorems(PRINCIPIA).map(Self::with_axioms)
	}

	pub fn next_key(&self) -> usize {
		self.entries.len() + 1
	}

	pub fn add_axiom(&mut self, theorem: Theorem) -> usize {
		self.push(theorem, Origin::Axiom)
	}

	/// Appends a successful proof under the next key.
	pub fn record(&mut self, proof: Proof) -> Result<usize, StructureError> {
		let theorem = Theorem::new(proof.theorem)?;
		let key = self.push(theorem, Origin::Proved { method: proof.method, premises: proof.premises.clone() });
		for premise in proof.premises {
			self.derivations.add_edge(key, premise, ());
		}
		info!(key, method = %proof.method, "theorem stored");
		Ok(key)
	}

	fn push(&mut self, theorem: Theorem, origin: Origin) -> usize {
		let key = self.next_key();
		self.entries.insert(key, Entry { theorem, origin });
		self.derivations.add_node(key);
		key
	}

	pub fn get(&self, key: usize) -> Option<&Theorem> {
		self.entries.get(&key).map(|entry| &entry.theorem)
	}

	pub fn origin(&self, key: usize) -> Option<&Origin> {
		self.entries.get(&key).map(|entry| &entry.origin)
	}

	/// Theorems in key order.
	pub fn iter(&self) -> impl Iterator<Item = (usize, &Theorem)> + '_ {
		self.entries.iter().map(|(key, entry)| (*key, &entry.theorem))
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Every theorem that `key` transitively depends on, ascending.
	pub fn premises(&self, key: usize) -> Option<Vec<usize>> {
		if !self.entries.contains_key(&key) {
			return None;
		}

		let mut dfs = Dfs::new(&self.derivations, key);
		let mut result = Vec::new();
		while let Some(found) = dfs.next(&self.derivations) {
			if found != key {
				result.push(found);
			}
		}
		result.sort_unstable();
		Some(result)
	}

	pub fn derivations_are_acyclic(&self) -> bool {
		!petgraph::algo::is_cyclic_directed(&self.derivations)
	}
}
