//! HTTP adapters - axum routers, handlers, and DTOs.

pub mod auth;
pub mod blog;
pub mod error;
pub mod media;
pub mod membership;
pub mod middleware;
pub mod pages;
pub mod router;
pub mod users;
pub mod videos;

pub use error::{ApiError, ErrorResponse};
pub use router::{api_router, AppState};
