pub mod health;
pub mod reports;
pub mod sample_data;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Plain confirmation body, e.g. after a delete or a seed.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
