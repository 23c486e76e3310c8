#![forbid(unsafe_code)]

pub mod questions;
pub mod repository;
pub mod sqlite;

pub use questions::{RowSourceError, load_questions, read_questions};
pub use repository::{InMemoryKeyValueStore, KeyValueStore, Storage, StorageError};
