//! Ratatui front-end: one screen with an add field on top, the sorted fruit
//! list below it, and a rename dialog drawn over the list when open.

mod app;
mod forms;
mod helpers;
mod terminal;

pub use app::App;
pub use terminal::run_app;
