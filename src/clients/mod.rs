//! Client modules for external API interactions

pub mod inference_client;

pub use inference_client::{InferenceClient, Summarize};
