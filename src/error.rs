use thiserror::Error;

use crate::dataset::errors::DataSetError;
use crate::output::errors::OutputError;
use crate::sheet::errors::SheetError;
use crate::subsidy::errors::SubsidyError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Sheet(#[from] SheetError),

    #[error(transparent)]
    DataSet(#[from] DataSetError),

    #[error(transparent)]
    Subsidy(#[from] SubsidyError),

    #[error(transparent)]
    Output(#[from] OutputError),

    #[error("While integrating dataset '{name}': {source}")]
    InDataSet {
        name: String,
        #[source]
        source: Box<AppError>,
    },
}
