/// The fixed-point schedulers.
///
/// Both run every clause's propagation to global quiescence, and both reach the same fixed point --- cell transitions are monotonic, so only the number of intermediate passes differs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scheduler {
    /// An explicit queue of dirty clauses, seeded with every clause.
    ///
    /// When a clause changes a symbol's table, every clause referencing that symbol is re-enqueued.
    /// Terminates when the queue drains.
    WorkQueue,

    /// A cyclic pass over the clauses with a clean-streak counter.
    ///
    /// A clause reporting change resets the streak; the loop terminates once every clause has been visited in a row without change.
    RoundRobin,
}

impl std::fmt::Display for Scheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WorkQueue => write!(f, "WorkQueue"),
            Self::RoundRobin => write!(f, "RoundRobin"),
        }
    }
}
