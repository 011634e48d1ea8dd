use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // Card errors
    #[error("Invalid card format: {0}")]
    InvalidCardFormat(String),

    #[error("Invalid card UID: {message}")]
    InvalidUid { message: String },

    // Credential errors
    #[error("Invalid Wi-Fi credential: {0}")]
    InvalidCredential(String),

    // Time errors
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

pub type Result<T> = std::result::Result<T, Error>;
