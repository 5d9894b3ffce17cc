//! # scat-core
//!
//! Foundation crate for the SCAT incident-analysis wizard.
//! Defines the section/cause catalog, per-cause validation state, progress
//! snapshots, errors, config, and constants. The storage and wizard crates
//! depend on this.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod time;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use catalog::{Catalog, Cause, Section, Subcause};
pub use config::ScatConfig;
pub use errors::{ScatError, ScatResult};
pub use models::{
    CauseValidation, DecodedSnapshot, FormProgress, FormStep, NacDimension, ProgressSnapshot,
    SectionId, SectionProgress, StepStatus, ValidationPatch,
};
pub use traits::IProgressStore;
