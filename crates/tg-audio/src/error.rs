use tg_core::NarrationId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AudioError {
    #[error("narration asset {0} not found")]
    AssetNotFound(NarrationId),

    #[error("audio backend error: {0}")]
    Backend(String),
}

pub type AudioResult<T> = Result<T, AudioError>;
