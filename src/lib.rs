//! Core library surface for the Fruit List terminal application.
//!
//! `db` owns the SQLite table, `view` keeps the sorted projection the screen
//! draws from, and `ui` is the Ratatui shell. The binary only wires them
//! together, so tests and other tooling can drive the same pieces directly.
pub mod config;
pub mod db;
pub mod logging;
pub mod models;
pub mod ui;
pub mod view;

/// Convenience re-exports for the persistence layer.
pub use db::{open_in_memory, open_store, StoreError, StoreResult};

pub use config::AppConfig;
pub use models::{Fruit, FruitId};
pub use view::FruitList;

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
