//! SQLite implementations of the repository traits.

mod sqlite_session_repository;
mod sqlite_user_repository;

pub use sqlite_session_repository::SqliteSessionRepository;
pub use sqlite_user_repository::SqliteUserRepository;
