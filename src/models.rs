//! Domain model that mirrors the single `fruits` table. The type stays a
//! light-weight data holder so the persistence layer and the terminal screen
//! can pass it around freely.

use std::fmt;

/// Store-assigned identifier of a fruit row. SQLite hands these out through
/// `AUTOINCREMENT`, so an id is never reused after a delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FruitId(pub i64);

impl fmt::Display for FruitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A named record in the list. `name` is free text: it may be empty and
/// several fruits may share the same name.
pub struct Fruit {
    /// Primary key from the database. Rename and delete flows bubble it back
    /// to the store.
    pub id: FruitId,
    /// Display name, stored exactly as typed.
    pub name: String,
}

impl fmt::Display for Fruit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
