//! # linkgate-entity
//!
//! Domain entity models for LinkGate. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

pub mod download_link;

pub use download_link::{
    CreateDownloadLink, CreateIpRule, DownloadLink, DownloadLinkIpAddress, DownloadLinkUser,
    IpPolicy, Visibility,
};
