//! HTTP surface: axum router, handlers and the optional Lambda adapter

pub mod error;
pub mod handler;
pub mod helpers;
#[cfg(feature = "lambda")]
pub mod lambda;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
