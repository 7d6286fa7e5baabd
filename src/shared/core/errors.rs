use crate::shared::infrastructure::record_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("no time entry row at index {0}")]
    RowOutOfRange(usize),
}
