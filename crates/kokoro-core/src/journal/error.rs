use kokoro_model::journal::error::ValidationError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum JournalError {
    #[error("Invalid journal entry: {0}")]
    Validation(#[from] ValidationError),

    #[error("Journal entry {0} could not be found")]
    NotFound(Uuid),

    #[error("Journal store lock was poisoned")]
    Poisoned,
}
