mod deliverable;
mod estimation_mode;
mod licensing;
mod project_info;
mod time_complexity;
mod wizard_state;

pub use deliverable::{
    DeliverableItem, MAX_QUANTITY, PREDEFINED_DELIVERABLES, PredefinedDeliverable,
    add_custom_deliverable, predefined_deliverables, remove_deliverable, set_quantity,
};
pub use estimation_mode::EstimationMode;
pub use licensing::{
    CommercialRights, CustomLicensingPolicy, LicensingInfo, LicensingPatch, ProjectLicensing,
};
pub use project_info::{PdfFile, ProjectInfoPatch, ProjectInformation, UploadMethod};
pub use time_complexity::{Difficulty, TimeComplexity, TimeComplexityPatch};
pub use wizard_state::{FIRST_STEP, WizardState};
