pub mod dashboard;
pub mod import;
