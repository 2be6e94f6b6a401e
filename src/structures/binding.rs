/*!
Dense tables and masks over the variable bindings of a clause.

A clause over `univs` variables and a universe of size *n* has *n*^`univs` bindings, and propagation works with values and masks indexed by those bindings.
The canonical representation is a flat vector in row-major order: the first variable is the most significant digit, the last varies fastest.
The same convention is used by [relation tables](crate::db::table) for native coordinates, so a binding index and a cell index flatten identically.

A [BindingTable] holds one ternary value per binding, a [BindingMask] one boolean.
Both are plain values --- reading a literal produces a fresh table, never a view into shared storage.
*/

use crate::structures::trit::Trit;

/// The number of points in a space of `axes` axes, each of extent `size`.
pub(crate) fn volume(axes: usize, size: usize) -> usize {
    size.pow(axes as u32)
}

/// Visits every point of the space in row-major order, passing the flat index and the coordinates.
///
/// With zero axes the single (empty) point is visited once.
pub(crate) fn for_each_point(axes: usize, size: usize, mut action: impl FnMut(usize, &[usize])) {
    let mut coordinates = vec![0_usize; axes];
    for flat in 0..volume(axes, size) {
        action(flat, &coordinates);

        for axis in (0..axes).rev() {
            coordinates[axis] += 1;
            if coordinates[axis] < size {
                break;
            }
            coordinates[axis] = 0;
        }
    }
}

/// A ternary value for each binding of a clause's variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BindingTable {
    univs: usize,
    size: usize,
    cells: Vec<Trit>,
}

impl BindingTable {
    /// A table with every binding at the given value.
    pub fn filled(univs: usize, size: usize, value: Trit) -> Self {
        Self {
            univs,
            size,
            cells: vec![value; volume(univs, size)],
        }
    }

    /// A table built from one value per binding, in row-major order.
    pub(crate) fn from_cells(univs: usize, size: usize, cells: Vec<Trit>) -> Self {
        debug_assert_eq!(cells.len(), volume(univs, size));
        Self { univs, size, cells }
    }

    /// The value at the given flat binding index.
    pub fn value(&self, binding: usize) -> Trit {
        self.cells[binding]
    }

    /// The number of bindings.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the table has no bindings. Never the case after construction, as a universe has at least one element.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Raises each value to the maximum of itself and the corresponding value of `other` --- elementwise ternary disjunction.
    pub fn max_assign(&mut self, other: &BindingTable) {
        debug_assert_eq!(self.cells.len(), other.cells.len());
        for (cell, value) in self.cells.iter_mut().zip(&other.cells) {
            *cell = (*cell).max(*value);
        }
    }

    /// The minimum value over all bindings.
    ///
    /// Classifies a clause when taken over its combined table: `True` is satisfied, `False` falsified, `Unknown` undetermined.
    pub fn min(&self) -> Trit {
        self.cells.iter().copied().min().unwrap_or(Trit::True)
    }
}

/// A boolean for each binding of a clause's variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BindingMask {
    univs: usize,
    size: usize,
    bits: Vec<bool>,
}

impl BindingMask {
    /// A mask with no binding selected.
    pub fn none(univs: usize, size: usize) -> Self {
        Self {
            univs,
            size,
            bits: vec![false; volume(univs, size)],
        }
    }

    /// A mask with every binding selected.
    pub fn all(univs: usize, size: usize) -> Self {
        Self {
            univs,
            size,
            bits: vec![true; volume(univs, size)],
        }
    }

    /// Selects the binding at the given flat index.
    pub fn set(&mut self, binding: usize) {
        self.bits[binding] = true;
    }

    /// Whether the binding at the given flat index is selected.
    pub fn selected(&self, binding: usize) -> bool {
        self.bits[binding]
    }

    /// Whether any binding is selected.
    pub fn any(&self) -> bool {
        self.bits.iter().any(|&bit| bit)
    }

    /// The number of bindings.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether the mask has no bindings.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }
}
