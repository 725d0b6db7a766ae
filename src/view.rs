//! Presentation-facing projection of the fruit table. `FruitList` turns user
//! intents into one store call each and then re-reads the whole sorted list,
//! so what the screen shows is always the result of the latest successful
//! query. It never edits its own copy in place.

use log::debug;
use rusqlite::Connection;

use crate::db::{
    create_fruit, delete_fruit, fetch_fruit, fetch_fruits, update_fruit, StoreError,
    StoreResult,
};
use crate::models::{Fruit, FruitId};

pub struct FruitList {
    conn: Connection,
    fruits: Vec<Fruit>,
}

impl FruitList {
    /// Take ownership of an open store and load the initial projection.
    pub fn open(conn: Connection) -> StoreResult<Self> {
        let mut list = Self {
            conn,
            fruits: Vec::new(),
        };
        list.refresh()?;
        Ok(list)
    }

    /// The last successfully loaded, name-sorted list.
    pub fn projection(&self) -> &[Fruit] {
        &self.fruits
    }

    pub fn get(&self, index: usize) -> Option<&Fruit> {
        self.fruits.get(index)
    }

    pub fn len(&self) -> usize {
        self.fruits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fruits.is_empty()
    }

    /// Row index of `id` in the current projection.
    pub fn position_of(&self, id: FruitId) -> Option<usize> {
        self.fruits.iter().position(|fruit| fruit.id == id)
    }

    /// Re-run the sorted scan. On failure the previous projection stays in
    /// place.
    pub fn refresh(&mut self) -> StoreResult<()> {
        self.fruits = fetch_fruits(&self.conn)?;
        debug!("event=projection_refresh count={}", self.fruits.len());
        Ok(())
    }

    /// Reload after a committed write to `id`. A failed reload is reported as
    /// `StaleProjection` so callers can tell the write itself went through.
    fn refresh_after(&mut self, id: FruitId) -> StoreResult<()> {
        self.refresh().map_err(|source| StoreError::StaleProjection {
            id,
            source: Box::new(source),
        })
    }

    /// Store `text` as a new fruit, untrimmed and unvalidated.
    pub fn on_add(&mut self, text: &str) -> StoreResult<Fruit> {
        let fruit = create_fruit(&self.conn, text)?;
        self.refresh_after(fruit.id)?;
        Ok(fruit)
    }

    /// Current name of `id`, used to seed a rename draft.
    pub fn begin_edit(&self, id: FruitId) -> StoreResult<String> {
        let fruit = fetch_fruit(&self.conn, id)?;
        debug!("event=edit_begin id={id}");
        Ok(fruit.name)
    }

    pub fn on_update(&mut self, id: FruitId, name: &str) -> StoreResult<()> {
        update_fruit(&self.conn, id, name)?;
        self.refresh_after(id)
    }

    /// Delete whatever sits at `index` in the current projection. An empty
    /// list or an out-of-range index does nothing and returns `Ok(None)`.
    pub fn on_delete_at(&mut self, index: usize) -> StoreResult<Option<Fruit>> {
        let Some(fruit) = self.fruits.get(index).cloned() else {
            debug!("event=delete_skip index={index} count={}", self.fruits.len());
            return Ok(None);
        };

        delete_fruit(&self.conn, fruit.id)?;
        self.refresh_after(fruit.id)?;
        Ok(Some(fruit))
    }

    /// Row gestures report a set of offsets; only the first one is acted on.
    pub fn on_delete_first<I>(&mut self, positions: I) -> StoreResult<Option<Fruit>>
    where
        I: IntoIterator<Item = usize>,
    {
        match positions.into_iter().next() {
            Some(index) => self.on_delete_at(index),
            None => Ok(None),
        }
    }
}
