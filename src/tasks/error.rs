//! Typed failures raised by the task store core.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("cannot add a task with an empty description")]
    EmptyDescription,

    #[error("no task at index {index} ({len} tasks total)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("malformed task file: {0}")]
    MalformedStore(String),

    #[error("failed to encode task file: {0}")]
    Encode(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, TaskError>;
