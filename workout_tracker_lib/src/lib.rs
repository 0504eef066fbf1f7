pub mod error;
pub mod input;
pub mod log;
pub mod store;
pub mod workout;

pub use error::WorkoutError;
