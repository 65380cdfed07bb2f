//! Provider wire formats

pub mod google;
pub mod openai;
