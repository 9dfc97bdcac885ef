//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.

mod blog_repository;
mod file_storage;
mod mailer;
mod media_repository;
mod page_content_repository;
mod password_hasher;
mod plan_repository;
mod token_service;
mod user_repository;
mod video_repository;

pub use blog_repository::{BlogPostUpdate, BlogRepository};
pub use file_storage::{FileStorage, StoredFile};
pub use mailer::Mailer;
pub use media_repository::MediaRepository;
pub use page_content_repository::PageContentRepository;
pub use password_hasher::PasswordHasher;
pub use plan_repository::{PlanRepository, PlanUpsert};
pub use token_service::TokenService;
pub use user_repository::UserRepository;
pub use video_repository::{VideoRepository, VideoUpdate};
