//! # linkgate-database
//!
//! SQLite database connection management and concrete repository
//! implementations for all LinkGate entities.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use repositories::DownloadLinkRepository;
