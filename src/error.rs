use thiserror::Error;

pub type Result<T> = std::result::Result<T, CallbackError>;

#[derive(Error, Debug)]
pub enum CallbackError {
    #[error("Interpretation error: {0}")]
    Interpretation(String),
}
