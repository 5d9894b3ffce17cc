//! Error handling for the SCAT wizard.
//! One error enum per subsystem, `thiserror` only, aggregated by [`ScatError`].

pub mod catalog_error;
pub mod config_error;
pub mod error_code;
pub mod scat_error;
pub mod snapshot_error;
pub mod storage_error;
pub mod validation_error;

pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use error_code::ScatErrorCode;
pub use scat_error::{ScatError, ScatResult};
pub use snapshot_error::SnapshotError;
pub use storage_error::StorageError;
pub use validation_error::ValidationError;
