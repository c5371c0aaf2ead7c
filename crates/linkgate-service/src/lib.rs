//! # linkgate-service
//!
//! Business logic service layer for LinkGate. Services orchestrate the
//! repository and storage disks to issue, revoke, and enforce download
//! links.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod link;

pub use link::{AccessRequest, AccessService, DownloadLinkBuilder, DownloadLinkService};
