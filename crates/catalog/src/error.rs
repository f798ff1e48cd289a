use thiserror::Error;

/// Failures raised while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed catalog document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog entry #{index} has an empty name")]
    EmptyName { index: usize },

    #[error("duplicate catalog entry name: {0}")]
    DuplicateName(String),

    #[error("{item}: {capability} score {value} is outside [0, 100]")]
    ScoreOutOfRange {
        item: String,
        capability: &'static str,
        value: u8,
    },
}
