use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("File error: {0}.")]
    FileError(String),

    #[error("Report serialization failed: {0}.")]
    SerializeError(String),
}
