//! Error types used in the library.
//!
//! - Most of these are programmer errors in a theory definition and surface once, at construction.
//! - [SignConflict](TableError::SignConflict) is the exception: it is the sole contradiction signal of the kernel, and may surface from seeding or from propagation.
//!   It is never caught internally, and does not distinguish contradictory seed facts from a clause set with no model of the chosen universe size.
//!
//! Names of the error enums overlap with corresponding structures, so throughout the library `err::{self}` is used to prefix the types with `err::`.

/// The general error type, wrapping the specific kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Build(BuildError),
    State(StateError),
    Table(TableError),
}

/// Noted errors while declaring a theory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildError {
    /// Some attempt was made to add a clause with no literals.
    EmptyClause,

    /// A literal's coordinate map is the wrong length for its symbol, or names a variable outside the clause's variable count.
    InvalidLiteralBinding,

    /// A literal references a symbol the theory does not contain.
    UnknownSymbol,
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

/// Errors from using a theory out of phase with its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateError {
    /// Tables already exist --- a second call to create tables, or a structural addition after the first.
    TablesExist,

    /// Tables do not exist yet, and the operation reads or writes cell values.
    NoTables,

    /// A conflict was found during some earlier propagation, and the partially mutated tables must not be propagated again.
    Inconsistent,
}

impl From<StateError> for ErrorKind {
    fn from(e: StateError) -> Self {
        ErrorKind::State(e)
    }
}

/// Errors in a relation table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableError {
    /// A request to create tables over a universe with fewer than one element.
    InvalidUniverseSize,

    /// An attempt to overwrite a known cell with the opposite sign.
    ///
    /// The one contradiction signal of the kernel.
    SignConflict,

    /// A coordinate tuple of the wrong length for the table.
    ArityMismatch,

    /// A coordinate outside the universe.
    CoordinateOutOfBounds,

    /// A mask whose length differs from the table's cell count.
    MaskShape,

    /// A request for the equality relation on a table which is not binary.
    NotBinary,
}

impl From<TableError> for ErrorKind {
    fn from(e: TableError) -> Self {
        ErrorKind::Table(e)
    }
}
