pub mod summarize;

pub use summarize::summarize_content;
