//! YouTube video endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{VideoRequest, VideoResponse};
pub use routes::routes;
