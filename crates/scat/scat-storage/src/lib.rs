//! # scat-storage
//!
//! Implementations of [`IProgressStore`](scat_core::IProgressStore):
//! a mutex-guarded in-memory map and a SQLite-backed engine with migrations.

pub mod engine;
pub mod in_memory;
pub mod migrations;
pub mod pragmas;
pub mod queries;

pub use engine::SqliteProgressStore;
pub use in_memory::InMemoryProgressStore;

use scat_core::errors::{ScatError, StorageError};

/// Map a SQLite error message into the workspace error type.
pub fn to_storage_err(message: String) -> ScatError {
    StorageError::SqliteError { message }.into()
}
