use thiserror::Error;

/// Errors raised while building or writing a colormap constant.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown colormap “{0}”")]
    UnknownColormap(String),
    #[error("at least 2 values are needed to sample a colormap, got {0}")]
    TooFewValues(usize),
    #[error("the colormap constant needs a non-empty name")]
    EmptyName,
    #[error("the number of divisions must be positive")]
    NoDivisions,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
