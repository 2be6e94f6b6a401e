//! Structures, in the sense of abstract elements of a theory and their representation.
//!
//! - [Ternary values](crate::structures::trit), the three truth values cells of a relation table may take.
//! - [Symbols](crate::structures::symbol), names paired with an arity.
//! - [Literals](crate::structures::literal), signed applications of a symbol to clause variables.
//! - [Clauses](crate::structures::clause), disjunctions of literals under universal quantification.
//! - [Binding-space tables and masks](crate::structures::binding), dense structures over the variable bindings of a clause.

pub mod binding;
pub mod clause;
pub mod literal;
pub mod symbol;
pub mod trit;
