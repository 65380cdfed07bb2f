//! Types shared across QuizCraft crates

mod error;

pub use error::HttpError;
