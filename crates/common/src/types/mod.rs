use serde::{Deserialize, Serialize};

/// Health check response body.
#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
    pub message: &'static str,
}

impl Health {
    pub fn ok(message: &'static str) -> Self {
        Self { status: "OK", message }
    }
}
