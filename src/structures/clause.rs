/*!
Clauses, aka. ordered collections of literals, interpreted as a disjunction under universal quantification.

Every literal of a clause shares the clause's variable count `univs`, and the clause asserts that for every binding of the `univs` variables to universe elements at least one literal holds.

The order of literals is irrelevant to meaning, but is fixed: propagation takes each literal in turn as the target of forcing, and the declaration order makes runs reproducible.

- The empty clause is rejected at construction ([EmptyClause](crate::types::err::BuildError::EmptyClause)), as it is false under any interpretation.
- A clause of exactly one literal is a forced fact, and is resolved when tables are created rather than during propagation.
*/

use crate::{
    db::symbol::SymbolDB,
    structures::literal::Literal,
    types::err::{self},
};

/// A disjunction of literals, universally quantified over `univs` variables.
#[derive(Clone, Debug)]
pub struct Clause {
    /// The number of universally quantified variables.
    univs: usize,

    /// The literals of the clause, in declaration order.
    literals: Vec<Literal>,
}

impl Clause {
    /// A clause over `univs` variables with the given literals.
    ///
    /// Returns an error if no literals are given.
    /// The coordinate maps of the literals are *not* checked here, as doing so requires the signature --- see [add_clause](crate::context::Theory::add_clause).
    pub fn new(univs: usize, literals: Vec<Literal>) -> Result<Self, err::BuildError> {
        if literals.is_empty() {
            return Err(err::BuildError::EmptyClause);
        }
        Ok(Self { univs, literals })
    }

    /// The number of universally quantified variables.
    pub fn univs(&self) -> usize {
        self.univs
    }

    /// An iterator over the literals of the clause, in declaration order.
    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter()
    }

    /// The number of literals in the clause.
    pub fn size(&self) -> usize {
        self.literals.len()
    }

    /// The literal at the given position.
    pub fn literal(&self, index: usize) -> &Literal {
        &self.literals[index]
    }

    /// Some string representation of the clause, e.g. `-one(x0), +mul(x0,x1,x1)`.
    pub fn as_string(&self, symbols: &SymbolDB) -> String {
        self.literals
            .iter()
            .map(|literal| literal.as_string(symbols))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
