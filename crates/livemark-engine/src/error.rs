use crate::io::IoError;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Document is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
    #[error(transparent)]
    Io(#[from] IoError),
}
