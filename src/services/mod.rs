pub mod json_columns;
pub mod report_service;
pub mod sample_data_service;

pub use json_columns::{JsonObject, Layout};
pub use report_service::*;
pub use sample_data_service::*;
