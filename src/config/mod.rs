/*!
Configuration of a theory.

All configuration for a theory is fixed at construction, via [from_config](crate::context::Theory::from_config).
*/

mod scheduler;
pub use scheduler::Scheduler;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Which fixed-point scheduler drives propagation to quiescence.
    pub scheduler: Scheduler,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            scheduler: Scheduler::WorkQueue,
        }
    }
}
