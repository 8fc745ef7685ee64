use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to open catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog: {0}")]
    Csv(#[from] csv::Error),

    #[error("Catalog is missing required column: {0}")]
    MissingColumn(String),
}
