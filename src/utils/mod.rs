//! Text helpers shared across modules

pub mod html;

pub use html::normalize;
