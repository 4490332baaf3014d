use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubsidyError {
    #[error("File error: {0}.")]
    FileError(String),

    #[error("Invalid public subsidy data: {0}.")]
    InvalidData(String),
}
