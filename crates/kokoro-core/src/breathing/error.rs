use thiserror::Error;
use tokio::task::JoinError;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Breathing session task failed")]
    Join(#[from] JoinError),
}
