/*!
The symbol database.

Owns every symbol of the signature together with, once tables have been created, its [relation table](crate::db::table).

The database follows the lifecycle of a theory:
- During declaration symbols are added with [fresh_symbol](SymbolDB::fresh_symbol) and no tables exist --- any cell-level operation fails with [NoTables](err::StateError::NoTables).
- [create_tables](SymbolDB::create_tables) fixes the universe size and allocates an all-unknown table for every symbol.
  Afterwards the signature is closed, and only cell values change.

Tables are exclusively owned here.
Literal [views](crate::db::view) resolve their symbol keys against this database for every read and write, so there is no aliasing of table storage anywhere in the library.
*/

use crate::{
    db::table::RelationTable,
    misc::log::targets::{self},
    structures::{
        symbol::{Symbol, SymbolId},
        trit::Trit,
    },
    types::err::{self, ErrorKind},
};

/// The symbols of a theory and their tables.
#[derive(Debug, Default)]
pub struct SymbolDB {
    symbols: Vec<Symbol>,

    /// One table per symbol, empty until tables are created.
    tables: Vec<RelationTable>,

    /// The universe size, fixed by table creation.
    size: Option<usize>,
}

impl SymbolDB {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a fresh symbol to the signature and returns its id.
    pub fn fresh_symbol(&mut self, name: impl Into<String>, arity: usize) -> SymbolId {
        let symbol = Symbol::new(name, arity);
        log::debug!(target: targets::BUILD, "Symbol {} declared.", symbol);
        self.symbols.push(symbol);
        (self.symbols.len() - 1) as SymbolId
    }

    /// The number of symbols in the signature.
    pub fn count(&self) -> usize {
        self.symbols.len()
    }

    /// The symbol with the given id.
    pub fn symbol(&self, id: SymbolId) -> &Symbol {
        &self.symbols[id as usize]
    }

    /// Whether the id names a symbol of the signature.
    pub fn contains(&self, id: SymbolId) -> bool {
        (id as usize) < self.symbols.len()
    }

    /// The universe size, if tables have been created.
    pub fn size(&self) -> Option<usize> {
        self.size
    }

    /// Allocates an all-unknown table for every symbol over a universe of the given size.
    ///
    /// Fails if tables already exist, or if the universe would be empty.
    pub fn create_tables(&mut self, size: usize) -> Result<(), ErrorKind> {
        if self.size.is_some() {
            return Err(err::StateError::TablesExist.into());
        }
        if size < 1 {
            return Err(err::TableError::InvalidUniverseSize.into());
        }
        for symbol in &self.symbols {
            self.tables.push(RelationTable::create(symbol.arity(), size)?);
        }
        self.size = Some(size);
        log::info!(target: targets::TABLE, "Tables created for {} symbols over a universe of size {size}.", self.symbols.len());
        Ok(())
    }

    /// The table of the given symbol.
    pub fn table(&self, id: SymbolId) -> Result<&RelationTable, ErrorKind> {
        match self.tables.get(id as usize) {
            Some(table) => Ok(table),
            None => Err(err::StateError::NoTables.into()),
        }
    }

    /// The table of the given symbol, mutably.
    pub fn table_mut(&mut self, id: SymbolId) -> Result<&mut RelationTable, ErrorKind> {
        match self.tables.get_mut(id as usize) {
            Some(table) => Ok(table),
            None => Err(err::StateError::NoTables.into()),
        }
    }

    /// Seeds a single fact: the symbol holds (or fails, or is unknown) at the given coordinates.
    pub fn set_value(
        &mut self,
        id: SymbolId,
        coordinates: &[usize],
        value: Trit,
    ) -> Result<(), ErrorKind> {
        self.table_mut(id)?.set(coordinates, value)?;
        Ok(())
    }

    /// Seeds the symbol's whole table with a constant value.
    pub fn fill_constant(&mut self, id: SymbolId, value: Trit) -> Result<(), ErrorKind> {
        self.table_mut(id)?.fill_constant(value);
        Ok(())
    }

    /// Seeds the symbol's table with the equality relation.
    pub fn set_equality(&mut self, id: SymbolId) -> Result<(), ErrorKind> {
        self.table_mut(id)?.set_equality()?;
        Ok(())
    }

    /// The symbol's cells in row-major order.
    pub fn values(&self, id: SymbolId) -> Result<&[Trit], ErrorKind> {
        Ok(self.table(id)?.values())
    }
}
