//! User administration handlers.

mod demote_user;
mod list_users;
mod promote_user;

pub use demote_user::{DemoteUserCommand, DemoteUserHandler};
pub use list_users::{ListUsersHandler, ListUsersQuery};
pub use promote_user::{PromoteUserCommand, PromoteUserHandler};
