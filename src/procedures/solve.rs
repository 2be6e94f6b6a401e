/*!
Theory methods for running clause propagation to global quiescence.

See [Theory::propagate] for the relevant method.

# Overview

Quiescence is the state where no clause can force any further assignment.
Two schedulers reach it, selected by [Config](crate::config::Config):

- [WorkQueue](crate::config::Scheduler::WorkQueue): an explicit queue of dirty clauses, seeded with every clause in declaration order.
  When a clause changes a symbol's table, every clause referencing that symbol is re-enqueued (if not already queued) --- those are exactly the clauses the change may let propagate further.
  The loop terminates when the queue drains.
- [RoundRobin](crate::config::Scheduler::RoundRobin): a cyclic pass over the clauses with a clean-streak counter.
  A clause reporting change resets the streak, a clause without change extends it, and the loop terminates once the streak reaches the clause count --- every clause visited in a row with nothing to do.

# Termination and the fixed point

Each cell of each table transitions at most once, from unknown to known: writes pass through the sign-conflict check, and nothing un-assigns a cell.
Work is only re-scheduled when some cell transitions, so both loops terminate after at most one round per transition --- a hard bound independent of clause order.
And, as forcing is sound whenever it fires, the contents of the tables at quiescence do not depend on the visitation order; only the number of intermediate passes does.

Once quiescent, a further call reports no change.
*/

use std::collections::VecDeque;

use crate::{
    config::Scheduler,
    context::Theory,
    db::ClauseKey,
    misc::log::targets::{self},
    types::err::ErrorKind,
};

impl Theory {
    /// Runs clause propagation to quiescence, and reports whether any cell changed since the call began.
    ///
    /// A [SignConflict](crate::types::err::TableError::SignConflict) met along the way is returned uncaught, with the tables left partially mutated and the theory [Inconsistent](crate::context::TheoryState::Inconsistent).
    /// Callers wanting unsatisfiability detection rather than a failure should interpret the conflict as: no model of this universe size is consistent with the seeded facts.
    pub fn propagate(&mut self) -> Result<bool, ErrorKind> {
        self.require_tables()?;

        log::info!(target: targets::SCHEDULER, "Propagation began with the {} scheduler.", self.config.scheduler);

        let result = match self.config.scheduler {
            Scheduler::WorkQueue => self.propagate_work_queue(),
            Scheduler::RoundRobin => self.propagate_round_robin(),
        };

        match &result {
            Ok(changed) => {
                log::info!(target: targets::SCHEDULER, "Propagation quiescent, changed: {changed}.")
            }
            Err(error) => self.note_conflict(error),
        }

        result
    }

    /// The work-queue scheduler. See [procedures::solve](crate::procedures::solve).
    fn propagate_work_queue(&mut self) -> Result<bool, ErrorKind> {
        let count = self.clause_db.count();
        let mut queue: VecDeque<ClauseKey> = self.clause_db.keys().collect();
        let mut queued = vec![true; count];
        let mut changed_any = false;

        while let Some(key) = queue.pop_front() {
            queued[key] = false;

            let changed_symbols = self.propagate_clause(key)?;
            if changed_symbols.is_empty() {
                continue;
            }
            changed_any = true;

            for symbol in changed_symbols {
                for &other in self.clause_db.clauses_on_symbol(symbol) {
                    if !queued[other] {
                        queued[other] = true;
                        queue.push_back(other);
                    }
                }
            }
        }

        Ok(changed_any)
    }

    /// The round-robin scheduler. See [procedures::solve](crate::procedures::solve).
    fn propagate_round_robin(&mut self) -> Result<bool, ErrorKind> {
        let count = self.clause_db.count();
        if count == 0 {
            return Ok(false);
        }

        let mut changed_any = false;
        let mut clean_streak = 0;
        let mut index = 0;

        while clean_streak < count {
            match self.propagate_clause(index)?.is_empty() {
                true => clean_streak += 1,
                false => {
                    changed_any = true;
                    clean_streak = 0;
                }
            }
            index = (index + 1) % count;
        }

        Ok(changed_any)
    }
}
