/*!
Dense ternary storage for one relation symbol.

A table over a universe of size *n* for a symbol of arity *k* is a flat vector of *n*^*k* [ternary values](crate::structures::trit), indexed by coordinate tuples in row-major order (first coordinate most significant).
A nullary symbol has a single cell.

# Monotonic refinement

Information only flows from unknown to known.
Once a cell holds a sign, no operation of the propagation kernel overwrites it with the opposite sign: [set](RelationTable::set) and [update_masked](RelationTable::update_masked) fail with a [SignConflict](err::TableError::SignConflict) instead.
This invariant bounds propagation --- each cell transitions at most once --- and is what makes the fixed point independent of clause visitation order.

The seeding operations [fill_constant](RelationTable::fill_constant) and [set_equality](RelationTable::set_equality) are exempt: they overwrite unconditionally, and are intended for installing known relations before propagation begins.

# Mutation discipline

[update_masked](RelationTable::update_masked) is the single entry point for propagation writes.
It verifies the whole mask against the sign-conflict invariant before writing any cell, so a conflicting update leaves the table unchanged --- though the theory at large may already hold earlier writes from the same propagation pass.
*/

use crate::{
    misc::log::targets::{self},
    structures::{binding::volume, trit::Trit},
    types::err::{self},
};

/// A dense ternary table for one relation symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelationTable {
    arity: usize,
    size: usize,
    cells: Vec<Trit>,
}

impl RelationTable {
    /// An all-unknown table for a symbol of the given arity over a universe of the given size.
    ///
    /// Returns an error unless the universe has at least one element.
    pub fn create(arity: usize, size: usize) -> Result<Self, err::TableError> {
        if size < 1 {
            return Err(err::TableError::InvalidUniverseSize);
        }
        Ok(Self {
            arity,
            size,
            cells: vec![Trit::Unknown; volume(arity, size)],
        })
    }

    /// The arity of the table.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// The size of the universe.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the table has no cells. Never the case after creation.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cells of the table in row-major order.
    pub fn values(&self) -> &[Trit] {
        &self.cells
    }

    /// The flat index of a coordinate tuple.
    fn flatten(&self, coordinates: &[usize]) -> Result<usize, err::TableError> {
        if coordinates.len() != self.arity {
            return Err(err::TableError::ArityMismatch);
        }
        let mut flat = 0;
        for &coordinate in coordinates {
            if coordinate >= self.size {
                return Err(err::TableError::CoordinateOutOfBounds);
            }
            flat = flat * self.size + coordinate;
        }
        Ok(flat)
    }

    /// The value at the given flat cell index.
    ///
    /// Used by [views](crate::db::view), whose precomputed index maps are in bounds by construction.
    pub(crate) fn value_at(&self, cell: usize) -> Trit {
        self.cells[cell]
    }

    /// The value at the given coordinates.
    pub fn get(&self, coordinates: &[usize]) -> Result<Trit, err::TableError> {
        Ok(self.cells[self.flatten(coordinates)?])
    }

    /// Sets the value at the given coordinates.
    ///
    /// Fails with a [SignConflict](err::TableError::SignConflict) if the cell is known and differs from `value`.
    pub fn set(&mut self, coordinates: &[usize], value: Trit) -> Result<(), err::TableError> {
        let cell = self.flatten(coordinates)?;
        let current = self.cells[cell];
        if current.is_known() && current != value {
            log::warn!(target: targets::TABLE, "Conflicting assignment of {value} over {current} at {coordinates:?}.");
            return Err(err::TableError::SignConflict);
        }
        self.cells[cell] = value;
        Ok(())
    }

    /// Sets every cell to the given value, unconditionally.
    pub fn fill_constant(&mut self, value: Trit) {
        self.cells.fill(value);
    }

    /// Sets the table to the equality relation: true on the diagonal, false off it.
    ///
    /// Requires arity exactly two.
    pub fn set_equality(&mut self) -> Result<(), err::TableError> {
        if self.arity != 2 {
            return Err(err::TableError::NotBinary);
        }
        for row in 0..self.size {
            for column in 0..self.size {
                self.cells[row * self.size + column] = match row == column {
                    true => Trit::True,
                    false => Trit::False,
                };
            }
        }
        Ok(())
    }

    /// Sets every masked unknown cell to `value`, and reports whether any cell changed.
    ///
    /// The mask is in the table's own shape, one boolean per cell in row-major order.
    /// Before any write, every masked cell is checked against the sign-conflict invariant: a masked cell already holding the opposite sign fails the whole update with a [SignConflict](err::TableError::SignConflict), and no cell is written.
    pub fn update_masked(&mut self, mask: &[bool], value: Trit) -> Result<bool, err::TableError> {
        if mask.len() != self.cells.len() {
            return Err(err::TableError::MaskShape);
        }

        let opposite = value.negate();
        if value.is_known()
            && self
                .cells
                .iter()
                .zip(mask)
                .any(|(&cell, &masked)| masked && cell == opposite)
        {
            log::warn!(target: targets::TABLE, "Masked update to {value} conflicts with a known cell.");
            return Err(err::TableError::SignConflict);
        }

        let mut changed = false;
        for (cell, &masked) in self.cells.iter_mut().zip(mask) {
            if masked && *cell == Trit::Unknown && value.is_known() {
                *cell = value;
                changed = true;
            }
        }
        Ok(changed)
    }
}
