/*!
The clause database.

Owns every clause of a theory, and, once tables exist:
- A [view](crate::db::view) for each literal of each clause, built against the fixed universe size.
- For each symbol, the list of clauses some literal of which references it.
  These incidence lists play the role watch lists play in a clausal solver: when a table changes, exactly the clauses on its symbol's list may be able to propagate further.

[initialize](ClauseDB::initialize) also resolves unit clauses.
A clause of a single literal leaves no choice --- the literal must hold at every binding --- so the literal is forced true everywhere immediately, and unit clauses never take part in runtime propagation.
Conflicting unit clauses therefore surface as a [SignConflict](crate::types::err::TableError::SignConflict) from initialization.
*/

use crate::{
    db::{symbol::SymbolDB, view::View, ClauseKey},
    misc::log::targets::{self},
    structures::{
        binding::BindingMask,
        clause::Clause,
        symbol::SymbolId,
        trit::Trit,
    },
    types::err::ErrorKind,
};

/// The clauses of a theory, their views, and the symbol incidence lists.
#[derive(Debug, Default)]
pub struct ClauseDB {
    clauses: Vec<Clause>,

    /// Views for the literals of each clause, parallel to `clauses`. Empty until initialized.
    views: Vec<Vec<View>>,

    /// For each symbol, the keys of clauses referencing it. Empty until initialized.
    incidence: Vec<Vec<ClauseKey>>,
}

impl ClauseDB {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a clause and returns its key.
    pub fn add(&mut self, clause: Clause) -> ClauseKey {
        self.clauses.push(clause);
        self.clauses.len() - 1
    }

    /// The number of clauses.
    pub fn count(&self) -> usize {
        self.clauses.len()
    }

    /// The clause with the given key.
    pub fn clause(&self, key: ClauseKey) -> &Clause {
        &self.clauses[key]
    }

    /// An iterator over all clause keys, in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = ClauseKey> {
        0..self.clauses.len()
    }

    /// The views of the clause with the given key, in literal order.
    ///
    /// Views exist only for the clauses [initialize](ClauseDB::initialize) reached: when a conflicting unit clause cuts initialization short, the remaining clauses have none, and asking for them is an [Inconsistent](crate::types::err::StateError::Inconsistent) error.
    pub fn views(&self, key: ClauseKey) -> Result<&[View], ErrorKind> {
        match self.views.get(key) {
            Some(views) => Ok(views.as_slice()),
            None => Err(crate::types::err::StateError::Inconsistent.into()),
        }
    }

    /// The keys of clauses referencing the given symbol.
    pub fn clauses_on_symbol(&self, symbol: SymbolId) -> &[ClauseKey] {
        &self.incidence[symbol as usize]
    }

    /// Builds every clause's views against the created tables, in declaration order, forcing unit clauses as they are met.
    ///
    /// Requires tables to exist, and is called once, from [create_tables](crate::context::Theory::create_tables).
    pub fn initialize(&mut self, symbols: &mut SymbolDB) -> Result<(), ErrorKind> {
        let size = match symbols.size() {
            Some(size) => size,
            None => return Err(crate::types::err::StateError::NoTables.into()),
        };

        self.incidence = vec![Vec::new(); symbols.count()];

        for (key, clause) in self.clauses.iter().enumerate() {
            let mut views = Vec::with_capacity(clause.size());
            for literal in clause.literals() {
                views.push(View::build(literal, clause.univs(), size));

                let on_symbol = &mut self.incidence[literal.symbol() as usize];
                if !on_symbol.contains(&key) {
                    on_symbol.push(key);
                }
            }

            if clause.size() == 1 {
                // A unit clause is itself a forced fact.
                let literal = clause.literal(0);
                let everywhere = BindingMask::all(clause.univs(), size);
                let table = symbols.table_mut(literal.symbol())?;
                views[0].write_masked(table, &everywhere, Trit::True)?;
                log::debug!(target: targets::BUILD, "Unit clause {key} resolved at initialization.");
            }

            self.views.push(views);
        }

        Ok(())
    }
}
