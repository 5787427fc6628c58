use tg_core::TourError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SequenceError {
    #[error("sequence parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Tour(#[from] TourError),
}

pub type SequenceResult<T> = Result<T, SequenceError>;
