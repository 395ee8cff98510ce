use leptos::config::errors::LeptosConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Leptos configuration error {0}")]
    Config(#[from] LeptosConfigError),
    #[error("IO Error {0}")]
    Io(#[from] std::io::Error),
}
