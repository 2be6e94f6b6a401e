/*!
Literals: signed, variable-bound applications of a relation symbol.

A literal pairs a [symbol](crate::structures::symbol) with a polarity and a coordinate map `vars`.
The map has one entry per coordinate of the symbol, and each entry names one of the universally quantified variables of the enclosing clause.

The map is read as "coordinate *j* of the symbol is bound to variable `vars[j]`".
Variables may repeat (binding the symbol to a diagonal, e.g. `mul(x0,x0,x1)`) and variables of the clause may be absent from the map entirely (the literal is constant along them).

A literal owns no storage.
Once tables exist, a [view](crate::db::view) derived from the coordinate map mediates all reads and writes against the symbol's table.

Validity of the coordinate map --- length equal to the symbol's arity, every entry within the clause's variable count --- is checked when the literal's clause is added to a theory, and a violation is a fatal [InvalidLiteralBinding](crate::types::err::BuildError::InvalidLiteralBinding).
*/

use crate::{db::symbol::SymbolDB, structures::symbol::SymbolId};

/// A signed application of a symbol to clause variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Literal {
    symbol: SymbolId,

    /// True for a positive literal.
    polarity: bool,

    /// For each coordinate of the symbol, the clause variable bound to it.
    vars: Vec<usize>,
}

impl Literal {
    /// A fresh literal, specified by a symbol, a polarity, and a coordinate map.
    pub fn new(symbol: SymbolId, polarity: bool, vars: Vec<usize>) -> Self {
        Self {
            symbol,
            polarity,
            vars,
        }
    }

    /// The symbol the literal applies.
    pub fn symbol(&self) -> SymbolId {
        self.symbol
    }

    /// The polarity of the literal.
    pub fn polarity(&self) -> bool {
        self.polarity
    }

    /// The coordinate map from symbol coordinates to clause variables.
    pub fn vars(&self) -> &[usize] {
        &self.vars
    }

    /// Some string representation of the literal, e.g. `-mul(x0,x0,x1)`.
    ///
    /// The symbol database supplies the symbol's name.
    pub fn as_string(&self, symbols: &SymbolDB) -> String {
        let mut string = String::new();
        string.push(if self.polarity { '+' } else { '-' });
        string.push_str(symbols.symbol(self.symbol).name());
        string.push('(');
        for (index, var) in self.vars.iter().enumerate() {
            if index > 0 {
                string.push(',');
            }
            string.push_str(&format!("x{var}"));
        }
        string.push(')');
        string
    }
}
