//! Authentication endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AuthResponse, ForgotPasswordRequest, LoginRequest, MessageResponse, RegisterRequest,
    ResetPasswordRequest,
};
pub use routes::routes;
