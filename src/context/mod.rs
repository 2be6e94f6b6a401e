/*!
The theory --- to which symbols and clauses are added, and within which propagation takes place.

A theory owns a [symbol database](crate::db::symbol), a [clause database](crate::db::clause), and a [configuration](crate::config), and moves through three states:

- [Declaration](TheoryState::Declaration): symbols and clauses may be added; no cell values exist.
- [Active](TheoryState::Active): [create_tables](Theory::create_tables) has fixed the universe size.
  Facts may be seeded, propagation run, and values and statuses read.
  The signature and clause set are closed.
- [Inconsistent](TheoryState::Inconsistent): a [SignConflict](crate::types::err::TableError::SignConflict) surfaced.
  The tables are partially mutated and propagation refuses to run again; cell values remain readable for diagnosis.
  Clause statuses read through the clause views, so they too remain available --- unless the conflict cut [create_tables](Theory::create_tables) short, in which case clauses initialization never reached have no views and their status is an [Inconsistent](crate::types::err::StateError::Inconsistent) error.

# Example

```rust
# use relsat::config::Config;
# use relsat::context::Theory;
# use relsat::reports::ClauseStatus;
# use relsat::structures::{literal::Literal, trit::Trit};
let mut theory = Theory::from_config(Config::default());

let p = theory.fresh_symbol("p", 1).unwrap();
let q = theory.fresh_symbol("q", 1).unwrap();

// p(x) → q(x)
let clause = theory
    .add_clause(1, vec![Literal::new(p, false, vec![0]), Literal::new(q, true, vec![0])])
    .unwrap();

theory.create_tables(3).unwrap();
theory.fill_constant(p, Trit::True).unwrap();

assert!(theory.propagate().is_ok());
assert_eq!(theory.table_values(q).unwrap(), &[Trit::True; 3]);
assert_eq!(theory.clause_status(clause).unwrap(), ClauseStatus::Satisfied);
```
*/

use crate::{
    config::Config,
    db::{clause::ClauseDB, symbol::SymbolDB, ClauseKey},
    misc::log::targets::{self},
    reports::{ClauseStatus, Report},
    structures::{
        binding::BindingTable,
        clause::Clause,
        literal::Literal,
        symbol::SymbolId,
        trit::Trit,
    },
    types::err::{self, ErrorKind},
};

/// The state of a theory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TheoryState {
    /// The theory allows structural additions; no tables exist.
    Declaration,

    /// Tables exist, and the structure is closed.
    Active,

    /// A conflict was found; the tables are partially mutated and must not be propagated again.
    Inconsistent,
}

/// A theory: signature, clause set, configuration, and universe.
pub struct Theory {
    /// The configuration of the theory.
    pub config: Config,

    /// The symbol database.
    /// See [db::symbol](crate::db::symbol) for details.
    pub symbol_db: SymbolDB,

    /// The clause database.
    /// See [db::clause](crate::db::clause) for details.
    pub clause_db: ClauseDB,

    /// The state of the theory.
    state: TheoryState,
}

impl Default for Theory {
    fn default() -> Self {
        Self::from_config(Config::default())
    }
}

impl Theory {
    /// Creates a theory from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Self {
            config,
            symbol_db: SymbolDB::new(),
            clause_db: ClauseDB::new(),
            state: TheoryState::Declaration,
        }
    }

    /// The state of the theory.
    pub fn state(&self) -> TheoryState {
        self.state
    }

    /// Declares a fresh relation symbol and returns its id.
    ///
    /// Only permitted before tables are created.
    pub fn fresh_symbol(
        &mut self,
        name: impl Into<String>,
        arity: usize,
    ) -> Result<SymbolId, ErrorKind> {
        match self.state {
            TheoryState::Declaration => Ok(self.symbol_db.fresh_symbol(name, arity)),
            _ => Err(err::StateError::TablesExist.into()),
        }
    }

    /// Declares a clause over `univs` universally quantified variables and returns its key.
    ///
    /// Every literal's coordinate map is checked here: the map must have one entry per coordinate of its symbol, and every entry must name a variable in `[0, univs)`.
    /// A violation is an [InvalidLiteralBinding](err::BuildError::InvalidLiteralBinding) --- a programmer error in the theory definition, not a runtime data condition.
    pub fn add_clause(
        &mut self,
        univs: usize,
        literals: Vec<Literal>,
    ) -> Result<ClauseKey, ErrorKind> {
        match self.state {
            TheoryState::Declaration => {}
            _ => return Err(err::StateError::TablesExist.into()),
        }

        for literal in &literals {
            if !self.symbol_db.contains(literal.symbol()) {
                return Err(err::BuildError::UnknownSymbol.into());
            }
            let arity = self.symbol_db.symbol(literal.symbol()).arity();
            if literal.vars().len() != arity || literal.vars().iter().any(|&var| var >= univs) {
                log::error!(target: targets::BUILD, "Invalid coordinate map {:?} for symbol of arity {arity} under {univs} variables.", literal.vars());
                return Err(err::BuildError::InvalidLiteralBinding.into());
            }
        }

        let clause = Clause::new(univs, literals)?;
        log::debug!(target: targets::BUILD, "Clause declared: {}.", clause.as_string(&self.symbol_db));
        Ok(self.clause_db.add(clause))
    }

    /// Fixes the universe size, allocates every symbol's table (all-unknown), and builds every clause's views in declaration order.
    ///
    /// Must be called exactly once, after declaration and before any value is read or set.
    /// Unit clauses are resolved here, so conflicting unit clauses surface as a [SignConflict](err::TableError::SignConflict) and leave the theory [Inconsistent](TheoryState::Inconsistent).
    pub fn create_tables(&mut self, size: usize) -> Result<(), ErrorKind> {
        match self.state {
            TheoryState::Declaration => {}
            _ => return Err(err::StateError::TablesExist.into()),
        }

        self.symbol_db.create_tables(size)?;

        match self.clause_db.initialize(&mut self.symbol_db) {
            Ok(()) => {
                self.state = TheoryState::Active;
                Ok(())
            }
            Err(error) => {
                if error == ErrorKind::Table(err::TableError::SignConflict) {
                    self.state = TheoryState::Inconsistent;
                }
                Err(error)
            }
        }
    }

    /// Seeds a single fact on a symbol's table.
    pub fn set_value(
        &mut self,
        symbol: SymbolId,
        coordinates: &[usize],
        value: Trit,
    ) -> Result<(), ErrorKind> {
        self.require_tables()?;
        self.symbol_db.set_value(symbol, coordinates, value)
    }

    /// Seeds a symbol's whole table with a constant value.
    pub fn fill_constant(&mut self, symbol: SymbolId, value: Trit) -> Result<(), ErrorKind> {
        self.require_tables()?;
        self.symbol_db.fill_constant(symbol, value)
    }

    /// Seeds a symbol's table with the equality relation.
    ///
    /// Requires the symbol to be binary.
    pub fn set_equality(&mut self, symbol: SymbolId) -> Result<(), ErrorKind> {
        self.require_tables()?;
        self.symbol_db.set_equality(symbol)
    }

    /// The value of a symbol at the given coordinates.
    pub fn value_of(&self, symbol: SymbolId, coordinates: &[usize]) -> Result<Trit, ErrorKind> {
        Ok(self.symbol_db.table(symbol)?.get(coordinates)?)
    }

    /// A symbol's cells, flattened in row-major order.
    pub fn table_values(&self, symbol: SymbolId) -> Result<&[Trit], ErrorKind> {
        self.symbol_db.values(symbol)
    }

    /// The ternary disjunction of a clause's literals over every binding.
    pub(crate) fn combined_table(&self, key: ClauseKey) -> Result<BindingTable, ErrorKind> {
        let clause = self.clause_db.clause(key);
        let size = match self.symbol_db.size() {
            Some(size) => size,
            None => return Err(err::StateError::NoTables.into()),
        };

        let mut combined = BindingTable::filled(clause.univs(), size, Trit::False);
        for (literal, view) in clause.literals().zip(self.clause_db.views(key)?) {
            let table = self.symbol_db.table(literal.symbol())?;
            combined.max_assign(&view.read(table));
        }
        Ok(combined)
    }

    /// The status of a clause on the current tables.
    pub fn clause_status(&self, key: ClauseKey) -> Result<ClauseStatus, ErrorKind> {
        let status = match self.combined_table(key)?.min() {
            Trit::True => ClauseStatus::Satisfied,
            Trit::Unknown => ClauseStatus::Undetermined,
            Trit::False => ClauseStatus::Falsified,
        };
        Ok(status)
    }

    /// A partition of the theory's clauses by status.
    pub fn report(&self) -> Result<Report, ErrorKind> {
        let mut report = Report::default();
        for key in self.clause_db.keys() {
            match self.clause_status(key)? {
                ClauseStatus::Satisfied => report.satisfied.push(key),
                ClauseStatus::Undetermined => report.undetermined.push(key),
                ClauseStatus::Falsified => report.falsified.push(key),
            }
        }
        Ok(report)
    }

    /// An error unless tables exist and no conflict has been found.
    pub(crate) fn require_tables(&self) -> Result<(), ErrorKind> {
        match self.state {
            TheoryState::Declaration => Err(err::StateError::NoTables.into()),
            TheoryState::Inconsistent => Err(err::StateError::Inconsistent.into()),
            TheoryState::Active => Ok(()),
        }
    }

    /// Moves the theory to the inconsistent state, if the error is a conflict.
    pub(crate) fn note_conflict(&mut self, error: &ErrorKind) {
        if *error == ErrorKind::Table(err::TableError::SignConflict) {
            log::info!(target: targets::SCHEDULER, "Theory inconsistent: a sign conflict was found.");
            self.state = TheoryState::Inconsistent;
        }
    }
}
