//! Persistence module split across logical submodules.

mod connection;
mod error;
mod fruits;

pub use connection::{data_dir, default_db_path, ensure_schema, open_in_memory, open_store};
pub use error::{StoreError, StoreResult};
pub use fruits::{
    count_fruits, create_fruit, delete_fruit, fetch_fruit, fetch_fruits, update_fruit,
};
