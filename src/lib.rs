//! In-memory user registry: append-only storage of user records with
//! sequential identifiers, lookup by id, listing, and JSON export, plus a
//! standalone structural email check.

pub mod application;
pub mod data;
pub mod domain;
pub mod infrastructure;

pub use application::user_service::UserService;
pub use data::user_repository::{InMemoryUserRepository, UserRepository};
pub use domain::email::is_valid_email;
pub use domain::error::DomainError;
pub use domain::user::User;
pub use infrastructure::clock::{Clock, FixedClock, SystemClock};
pub use infrastructure::logging::init_logging;
