//! Task list management: the store core, its persistence and configuration.

pub mod config;
pub mod error;
pub mod storage;
pub mod store;

pub use config::{Config, DisplayConfig};
pub use error::TaskError;
pub use storage::{Storage, STORE_FILE};
pub use store::{TaskStore, DEFAULT_LIST_COUNT};
