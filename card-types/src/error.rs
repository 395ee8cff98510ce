use thiserror::Error;

#[derive(Debug, Error)]
pub enum CardError {
    #[error("Card attributes were not valid JSON {0}")]
    Json(#[from] serde_json::Error),
}
