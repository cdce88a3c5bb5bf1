//! # portal-api
//!
//! HTTP API layer: router, handlers, DTOs, middleware, and the mapping
//! from domain errors to HTTP responses.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
