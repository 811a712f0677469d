use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

/// Generic success acknowledgement with a human-readable message.
#[derive(Serialize, Deserialize)]
pub struct MessageDto {
    pub success: bool,
    pub message: String,
}
