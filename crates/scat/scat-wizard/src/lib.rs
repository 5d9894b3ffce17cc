//! # scat-wizard
//!
//! The SCAT wizard engine. [`FormStepper`] holds one user's position and
//! per-cause validations, answers progress and locking queries, and
//! checkpoints itself into an [`IProgressStore`](scat_core::IProgressStore).
//! [`StepperRegistry`] keeps one stepper per user for a multi-tenant host and
//! [`autosave`] saves every open stepper on a fixed interval.

pub mod autosave;
pub mod events;
pub mod observability;
pub mod policy;
pub mod registry;
pub mod stepper;

pub use autosave::{spawn_autosave, AutoSaveHandle, AutoSaveScheduler};
pub use events::{EventDispatcher, WizardEventHandler};
pub use registry::StepperRegistry;
pub use stepper::{FormStepper, LoadOutcome};
