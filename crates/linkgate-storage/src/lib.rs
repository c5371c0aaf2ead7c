//! # linkgate-storage
//!
//! Storage disk registry and provider implementations for LinkGate. A
//! download link references its backend only through a symbolic disk
//! name; the [`DiskManager`] resolves that name to a provider.

pub mod manager;
pub mod providers;

pub use manager::DiskManager;
pub use providers::LocalDiskProvider;
