/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library, with a handful of targets defined to help narrow output to relevant parts.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to declaring symbols and clauses.
    pub const BUILD: &str = "build";

    /// Logs related to [clause propagation](crate::procedures::propagate).
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to the [fixed-point schedulers](crate::procedures::solve).
    pub const SCHEDULER: &str = "scheduler";

    /// Logs related to [relation tables](crate::db::table).
    pub const TABLE: &str = "table";
}
