/*!
Reports on the clauses of a theory.
*/

use crate::db::ClauseKey;

/// The status of a clause on the current (partial) tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseStatus {
    /// Every binding of the clause's variables satisfies some literal.
    Satisfied,

    /// Some bindings are undetermined, while none are falsified.
    Undetermined,

    /// At least one binding falsifies every literal.
    Falsified,
}

impl std::fmt::Display for ClauseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfied => write!(f, "Satisfied"),
            Self::Undetermined => write!(f, "Undetermined"),
            Self::Falsified => write!(f, "Falsified"),
        }
    }
}

/// A partition of a theory's clauses by status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    /// Keys of satisfied clauses, in declaration order.
    pub satisfied: Vec<ClauseKey>,

    /// Keys of undetermined clauses, in declaration order.
    pub undetermined: Vec<ClauseKey>,

    /// Keys of falsified clauses, in declaration order.
    pub falsified: Vec<ClauseKey>,
}

impl Report {
    /// Whether every clause is satisfied.
    pub fn all_satisfied(&self) -> bool {
        self.undetermined.is_empty() && self.falsified.is_empty()
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} satisfied, {} undetermined, {} falsified",
            self.satisfied.len(),
            self.undetermined.len(),
            self.falsified.len()
        )
    }
}
