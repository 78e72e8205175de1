pub mod reports;
pub mod sample_data;
