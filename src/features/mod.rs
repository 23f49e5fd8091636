//! Request pipeline

pub mod summarize;

pub use summarize::{NO_TEXT_MESSAGE, Summarizer};
