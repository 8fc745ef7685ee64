use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Fitting on an empty corpus, or one whose texts are all empty after
    /// tokenization. Fatal at startup.
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Item not found: {0}")]
    ItemNotFound(String),
}
