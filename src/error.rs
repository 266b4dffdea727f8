use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Empty corpus, zero `top_n`, or any other request the engine cannot act on.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A query arrived before any successful training run.
    #[error("Model not trained. Call train() first")]
    NotTrained,

    /// Every vectorizer configuration failed to produce a usable vocabulary.
    #[error("Vectorization failed: {0}")]
    VectorizationFailed(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
