//! A propagation kernel for checking finite relational structures against universally quantified clauses.
//!
//! relsat narrows the tables of a finite relational structure by constraint propagation over a three-valued (true/false/unknown) logic.
//! Given a finite universe of some size *n* and a signature of relation symbols, every relation is materialised as a dense ternary table, and a set of universally quantified clauses is repeatedly used to force unknown cells to known values until no clause can force anything further.
//! At that point each clause is either satisfied, falsified, or still undetermined on the partial structure.
//!
//! relsat is a consistency checker rather than a model searcher: there is no branching and no backtracking.
//! It is the propagation kernel a search procedure would sit on top of.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [theory](crate::context::Theory).
//!
//! A theory is built in two phases:
//! - Declaration: symbols are added with [fresh_symbol](crate::context::Theory::fresh_symbol) and clauses with [add_clause](crate::context::Theory::add_clause).
//! - Active: [create_tables](crate::context::Theory::create_tables) fixes the universe size, allocates every symbol's table, and builds every literal's view.
//!   From this point only cell values change, and only from unknown to known.
//!
//! Internally, and at a high level:
//! - Relation tables are stored in a [symbol database](crate::db::symbol).
//! - Clauses, their views, and the symbol incidence lists are stored in a [clause database](crate::db::clause).
//! - The [procedures](crate::procedures) read literal views, which read through to relation tables, and write forced values back through the views.
//!   Writes are globally visible to every other view of the same table, and this is how information flows between clauses.
//!
//! Useful starting points:
//! - The [propagation procedures](crate::procedures) for the dynamics of a fixed point.
//! - The [database module](crate::db) for the data considered during propagation.
//! - The [structures] for the abstract elements (symbols, literals, clauses, ternary values).
//!
//! # Example
//!
//! A unary predicate together with built-in equality, over a universe of two elements.
//! The clause `one(x) ∧ one(y) → equ(x, y)` says at most one element satisfies `one`:
//!
//! ```rust
//! # use relsat::config::Config;
//! # use relsat::context::Theory;
//! # use relsat::structures::{literal::Literal, trit::Trit};
//! let mut theory = Theory::from_config(Config::default());
//!
//! let one = theory.fresh_symbol("one", 1).unwrap();
//! let equ = theory.fresh_symbol("equ", 2).unwrap();
//!
//! let clause = theory.add_clause(
//!     2,
//!     vec![
//!         Literal::new(one, false, vec![0]),
//!         Literal::new(one, false, vec![1]),
//!         Literal::new(equ, true, vec![0, 1]),
//!     ],
//! );
//! assert!(clause.is_ok());
//!
//! theory.create_tables(2).unwrap();
//! theory.set_equality(equ).unwrap();
//! theory.set_value(one, &[0], Trit::True).unwrap();
//!
//! assert!(theory.propagate().is_ok());
//! assert_eq!(theory.value_of(one, &[0]).unwrap(), Trit::True);
//! ```
//!
//! # Conflicts
//!
//! The sole contradiction signal is a [SignConflict](crate::types::err::TableError::SignConflict): an attempt to overwrite a known cell with the opposite sign.
//! Propagation never recovers from a conflict.
//! The error is returned to the caller, the tables are left partially mutated, and the theory moves to an [Inconsistent](crate::context::TheoryState::Inconsistent) state which refuses further propagation.
//! A conflict does not distinguish contradictory seed facts from a clause set with no model of the chosen size --- both manifest identically.
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout the library, against the targets listed in [misc::log].
//! No log implementation is provided.

pub mod config;
pub mod context;
pub mod db;
pub mod misc;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;
