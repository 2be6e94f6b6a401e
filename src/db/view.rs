/*!
Views: the projection of a relation table into a clause's variable space.

A literal names each coordinate of its symbol with one of the clause's `univs` variables, and propagation needs the literal's table *as a function of the clause's variables* --- with repeated symbol coordinates collapsed onto a diagonal, symbol coordinates fixed along variables absent from the coordinate map, and axes in global variable order.

A view realises this projection as a coordinate transform, not as a stored sub-array: for every binding of the clause's variables it precomputes the flat index of the symbol cell the binding addresses.
The map is built once per table size and reused for the lifetime of the tables.

- [read](View::read) evaluates the transform, producing a fresh [BindingTable] with the literal's sign applied.
- [write_masked](View::write_masked) inverts it, projecting a binding-space mask down onto native cells and delegating to the table's checked [update_masked](crate::db::table::RelationTable::update_masked).

Because the projection passes through the index map, a native cell is masked exactly when *some* selected binding addresses it.
This gives the required semantics in one stroke:
- Duplicate and broadcast axes OR-reduce --- an update is forced on a cell if it is forced under any binding of the collapsed variables.
- Diagonal literals (e.g. `mul(x0,x0,x1)`) only ever address diagonal cells, so off-diagonal cells a per-axis reduction would spuriously include are never touched.

Every write lands in the symbol's single buffer through [update_masked](crate::db::table::RelationTable::update_masked), so a write through one view is observed by every other view of the same symbol.
There is no aliasing of materialised sub-views to reason about.

A nullary symbol is the degenerate case: every binding addresses the single cell, and a mask collapses to whether any binding is selected.
*/

use crate::{
    db::table::RelationTable,
    structures::{
        binding::{for_each_point, volume, BindingMask, BindingTable},
        literal::Literal,
        trit::Trit,
    },
    types::err::{self},
};

/// A literal's coordinate transform from clause bindings to the cells of its symbol's table.
#[derive(Clone, Debug)]
pub struct View {
    polarity: bool,
    univs: usize,
    size: usize,

    /// For each flat binding index, the flat index of the symbol cell it addresses.
    cell_of_binding: Vec<usize>,

    /// The cell count of the symbol's table.
    native_len: usize,
}

impl View {
    /// Builds the view of a literal for clauses over `univs` variables and tables over a universe of the given size.
    ///
    /// The literal's coordinate map is taken as validated --- see [add_clause](crate::context::Theory::add_clause).
    pub fn build(literal: &Literal, univs: usize, size: usize) -> Self {
        let arity = literal.vars().len();
        let mut cell_of_binding = Vec::with_capacity(volume(univs, size));

        for_each_point(univs, size, |_, binding| {
            let mut cell = 0;
            for &var in literal.vars() {
                cell = cell * size + binding[var];
            }
            cell_of_binding.push(cell);
        });

        Self {
            polarity: literal.polarity(),
            univs,
            size,
            cell_of_binding,
            native_len: volume(arity, size),
        }
    }

    /// The view's values over every binding, with the literal's sign applied.
    pub fn read(&self, table: &RelationTable) -> BindingTable {
        debug_assert_eq!(table.len(), self.native_len);

        let cells = self
            .cell_of_binding
            .iter()
            .map(|&cell| {
                let value = table.value_at(cell);
                match self.polarity {
                    true => value,
                    false => value.negate(),
                }
            })
            .collect();

        BindingTable::from_cells(self.univs, self.size, cells)
    }

    /// Writes `value` to every masked binding, through to the symbol's table.
    ///
    /// The value is expressed at the literal's positive orientation, and is flipped here for a negative literal.
    /// Reports whether any cell changed, and fails with the table's [SignConflict](err::TableError::SignConflict) unchanged.
    pub fn write_masked(
        &self,
        table: &mut RelationTable,
        mask: &BindingMask,
        value: Trit,
    ) -> Result<bool, err::TableError> {
        let value = match self.polarity {
            true => value,
            false => value.negate(),
        };

        if !mask.any() {
            return Ok(false);
        }

        let mut native = vec![false; self.native_len];
        for (binding, &cell) in self.cell_of_binding.iter().enumerate() {
            if mask.selected(binding) {
                native[cell] = true;
            }
        }

        table.update_masked(&native, value)
    }
}
