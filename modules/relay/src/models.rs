use serde::Serialize;

/// Response body for a successful publish
#[derive(Debug, Serialize)]
pub struct PublishAccepted {
    pub status: &'static str,
    pub message: String,
    pub endpoint: String,
}

/// Response body for a failed publish
#[derive(Debug, Serialize)]
pub struct PublishFailed {
    pub status: &'static str,
    pub message: String,
}
