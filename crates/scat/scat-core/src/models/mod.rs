pub mod cause_validation;
pub mod progress;
pub mod section;
pub mod snapshot;

pub use cause_validation::{CauseValidation, NacDimension, ValidationPatch};
pub use progress::{FormProgress, FormStep, SectionProgress, SectionProgressSet, StepStatus};
pub use section::SectionId;
pub use snapshot::{DecodedSnapshot, ProgressSnapshot};
