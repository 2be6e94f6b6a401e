/*!
Relation symbols.

A symbol is a name paired with an arity, and identifies one relation over the universe.
Symbols are owned by the [symbol database](crate::db::symbol) and referenced everywhere else by a [SymbolId] --- an index into the database, in place of a borrow.

The symbols of a theory are [0..*m*) for some *m*, so a symbol id doubles as an index into any structure sized to the signature.
*/

/// The index of a symbol in the symbol database.
pub type SymbolId = u32;

/// A relation symbol: a name with an arity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Symbol {
    name: String,
    arity: usize,
}

impl Symbol {
    /// A fresh symbol with the given name and arity.
    ///
    /// Arity zero is permitted, and gives a nullary predicate with a single cell.
    pub fn new(name: impl Into<String>, arity: usize) -> Self {
        Self {
            name: name.into(),
            arity,
        }
    }

    /// The name of the symbol.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The arity of the symbol.
    pub fn arity(&self) -> usize {
        self.arity
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}(", self.name)?;
        for coordinate in 0..self.arity {
            if coordinate > 0 {
                write!(f, ",")?;
            }
            write!(f, "x{coordinate}")?;
        }
        write!(f, ")")
    }
}
