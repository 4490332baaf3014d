use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataSetError {
    #[error("File error: {0}.")]
    FileError(String),

    #[error("Workspace parse error: {0}.")]
    ParseError(String),

    #[error("Worksheet not found: {0}.")]
    WorksheetNotFound(String),

    #[error("Dataset '{0}' needs a workbook, but none was provided. Use -x or set settings.xlsx.")]
    MissingWorkbook(String),

    #[error("Invalid dataset source: {0}.")]
    InvalidSource(String),

    #[error("Integrated dataset not found: {0}.")]
    IntegratedNotFound(String),

    #[error("While loading dataset '{name}': {source}")]
    InDataSet {
        name: String,
        #[source]
        source: Box<DataSetError>,
    },
}
