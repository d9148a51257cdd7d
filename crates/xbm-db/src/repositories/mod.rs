//! `SQLite` implementations of core repository ports.

mod sqlite_session_repository;

pub use sqlite_session_repository::SqliteSessionRepository;
