//! Gateway library
//!
//! Exposes the HTTP router, configuration and token generation so the
//! `gateway` and `tokengen` binaries and the integration tests share one
//! implementation.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod rejection;
pub mod router;
pub mod state;
pub mod tokengen;

pub use config::GatewayConfig;
pub use rejection::ApiError;
pub use router::{app_router, Access};
pub use state::AppState;
