use thiserror::Error;

#[derive(Error, Debug)]
pub enum DictError {
    #[error("Dictionary not found: {0}")]
    DictionaryNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DictError>;
