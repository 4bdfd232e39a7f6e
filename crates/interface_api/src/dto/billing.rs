//! Payment DTOs

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct PaymentStatusRequest {
    pub status: String,
    /// Bank reference; generated when absent
    pub transaction_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BatchProcessResponse {
    pub started: usize,
}
