//! Databases holding the state of a theory.
//!
//! - [The symbol database](crate::db::symbol)
//!   + Owns every symbol of the signature together with its [relation table](crate::db::table).
//!     A table is the only mutable state of a theory, and every mutation funnels through the table's checked entry points.
//! - [The clause database](crate::db::clause)
//!   + Owns every clause, the [views](crate::db::view) built for its literals once tables exist, and, for each symbol, the list of clauses whose literals reference it.
//!     The incidence lists let the work-queue scheduler re-examine exactly the clauses a table change may affect.
//!
//! Structures are referenced across databases by index-style keys rather than borrows: a [SymbolId](crate::structures::symbol::SymbolId) resolves against the symbol database, a [ClauseKey] against the clause database.

pub mod clause;
pub mod symbol;
pub mod table;
pub mod view;

/// A key to access a clause stored in the clause database.
pub type ClauseKey = usize;
