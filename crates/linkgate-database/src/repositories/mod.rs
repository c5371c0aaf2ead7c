//! Repository implementations for all LinkGate entities.

pub mod download_link;

pub use download_link::DownloadLinkRepository;
