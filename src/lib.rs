//! # linkgate
//!
//! Expiring, access-restricted download links over named storage disks.
//!
//! LinkGate issues unguessable 64-character tokens that let a holder
//! download one file from a configured storage backend, subject to
//! per-link restrictions: expiry, authenticated-only or guests-only
//! visibility, IP allow/deny lists, and an authorized-user list. The
//! crate records and enforces the rules; serving bytes over a transport
//! is left to the host application.
//!
//! This facade re-exports the public surface of the workspace crates.

pub use linkgate_core::config::storage::StorageConfig;
pub use linkgate_core::config::{AppConfig, DatabaseConfig, DiskConfig};
pub use linkgate_core::error::{AppError, ErrorKind};
pub use linkgate_core::result::AppResult;
pub use linkgate_core::traits::storage::{ByteStream, StorageObjectMeta, StorageProvider};

pub use linkgate_entity::download_link::{
    DownloadLink, DownloadLinkIpAddress, DownloadLinkUser, IpPolicy, Visibility,
};

pub use linkgate_database::connection::DatabasePool;
pub use linkgate_database::migration::run_migrations;
pub use linkgate_database::repositories::DownloadLinkRepository;

pub use linkgate_storage::manager::DiskManager;
pub use linkgate_storage::providers::LocalDiskProvider;

pub use linkgate_service::{AccessRequest, AccessService, DownloadLinkBuilder, DownloadLinkService};
