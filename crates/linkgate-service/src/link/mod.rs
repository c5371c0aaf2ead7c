//! Download link services.

pub mod access;
pub mod builder;
pub mod service;
pub mod token;

pub use access::{AccessRequest, AccessService};
pub use builder::DownloadLinkBuilder;
pub use service::DownloadLinkService;
