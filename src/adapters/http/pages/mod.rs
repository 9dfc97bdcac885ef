//! Page copy endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{PageContentRequest, PageContentResponse};
pub use routes::routes;
