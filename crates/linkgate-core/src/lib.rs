//! # linkgate-core
//!
//! Core crate for LinkGate. Contains the storage provider trait,
//! configuration schemas, and the unified error system.
//!
//! This crate has **no** internal dependencies on other LinkGate crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
