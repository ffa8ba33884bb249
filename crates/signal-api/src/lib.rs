//! # signal-api
//!
//! HTTP boundary for the signal timing engine. Validates request bodies,
//! normalizes lane sets, calls the engine, and shapes the responses.
//! No timing logic lives here.

pub mod dto;
pub mod error;
pub mod normalize;
pub mod routes;
pub mod server;
pub mod validation;

pub use error::ApiError;
pub use server::{router, AppState};
