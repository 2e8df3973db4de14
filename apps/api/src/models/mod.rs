pub mod job_application;
pub mod portfolio;
pub mod resume;
pub mod serde_helpers;
