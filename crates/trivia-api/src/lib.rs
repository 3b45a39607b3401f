//! Trivia API - the HTTP boundary of the trivia service
//!
//! - `routes`: the axum router and server loop
//! - `handlers`: thin request handlers over the engine
//! - `middleware`: request ids, CORS headers, JSON 405 bodies
//! - `error`: error kind to status mapping
//! - `config`: layered settings

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::Settings;
pub use error::ApiError;
pub use routes::{create_router, serve};
pub use state::AppState;
