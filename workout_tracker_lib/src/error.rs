use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkoutError {
    #[error("{field} has to be a positive number")]
    InvalidInput { field: &'static str },

    #[error("saved workouts could not be read, refusing to overwrite them")]
    Unreadable,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("storage error: {0}")]
    Storage(String),
}
