/*!
A theory method for generalized unit propagation of a single clause.

See [Theory::propagate_clause] for the relevant method.

# Overview

A clause forces a literal at a binding when every *other* literal of the clause is known false at that binding: the clause must hold, and the target literal is the only way left for it to do so.

With tables in place of single cells, the rule lifts pointwise.
Each literal is taken in turn as the target:
- `rest` is the ternary disjunction of every other literal's view, read fresh from the tables.
- The forced mask selects the bindings where `rest` is false and the target is still unknown.
- True is written through the target's view, which projects the mask onto the symbol's native cells and delegates to the table's checked update.

Every literal is tried as target exactly once per call, in the clause's literal order.
The order affects only the intermediate path: writes are monotonic, so the fixed point the [scheduler](crate::procedures::solve) reaches is the same under any order.

Reads are taken fresh for each target rather than cached across the loop, as a write for an earlier target may have changed a table a later target reads --- including its own, when two literals of the clause share a symbol.

# Conflicts

A forced write may meet a cell already known false.
The table's [SignConflict](crate::types::err::TableError::SignConflict) is propagated to the caller unchanged --- the current partial structure admits no model, and nothing here recovers from that.

Clauses of one literal are resolved at [initialization](crate::db::clause::ClauseDB::initialize) and never need runtime propagation.
*/

use crate::{
    context::Theory,
    db::ClauseKey,
    misc::log::targets::{self},
    structures::{
        binding::{BindingMask, BindingTable},
        symbol::SymbolId,
        trit::Trit,
    },
    types::err::{self, ErrorKind},
};

impl Theory {
    /// For documentation see [procedures::propagate](crate::procedures::propagate).
    ///
    /// Returns the symbols whose tables changed, deduplicated --- empty when the clause forced nothing.
    pub(crate) fn propagate_clause(
        &mut self,
        key: ClauseKey,
    ) -> Result<Vec<SymbolId>, ErrorKind> {
        let clause_size = self.clause_db.clause(key).size();
        if clause_size <= 1 {
            return Ok(Vec::new());
        }

        let size = match self.symbol_db.size() {
            Some(size) => size,
            None => return Err(err::StateError::NoTables.into()),
        };

        let mut changed_symbols: Vec<SymbolId> = Vec::new();

        for target in 0..clause_size {
            let clause = self.clause_db.clause(key);
            let views = self.clause_db.views(key)?;
            let univs = clause.univs();

            let mut rest = BindingTable::filled(univs, size, Trit::False);
            for (index, (literal, view)) in clause.literals().zip(views).enumerate() {
                if index == target {
                    continue;
                }
                rest.max_assign(&view.read(self.symbol_db.table(literal.symbol())?));
            }

            let target_symbol = clause.literal(target).symbol();
            let target_values = views[target].read(self.symbol_db.table(target_symbol)?);

            let mut forced = BindingMask::none(univs, size);
            let mut any_forced = false;
            for binding in 0..target_values.len() {
                if rest.value(binding) == Trit::False
                    && target_values.value(binding) == Trit::Unknown
                {
                    forced.set(binding);
                    any_forced = true;
                }
            }

            if !any_forced {
                continue;
            }

            let view = &self.clause_db.views(key)?[target];
            let table = self.symbol_db.table_mut(target_symbol)?;
            match view.write_masked(table, &forced, Trit::True) {
                Ok(true) => {
                    log::trace!(target: targets::PROPAGATION, "Clause {key} forced literal {target} on symbol {target_symbol}.");
                    if !changed_symbols.contains(&target_symbol) {
                        changed_symbols.push(target_symbol);
                    }
                }

                Ok(false) => {}

                Err(error) => {
                    log::trace!(target: targets::PROPAGATION, "Clause {key} met a conflict forcing literal {target}.");
                    return Err(error.into());
                }
            }
        }

        Ok(changed_symbols)
    }
}
