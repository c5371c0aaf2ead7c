//! IP rule entity for download links.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted per-link IP rule row.
///
/// `allowed = true` rows form the link's allow-list; `allowed = false`
/// rows form its deny-list. A single link only ever carries one of the
/// two kinds.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DownloadLinkIpAddress {
    /// Unique rule identifier.
    pub id: i64,
    /// The owning download link.
    pub download_link_id: i64,
    /// The IPv4 or IPv6 literal this rule applies to.
    pub ip_address: String,
    /// Whether this row is an allow-list entry.
    pub allowed: bool,
}

/// Data required to create a new IP rule row.
///
/// The address is kept as the caller-supplied string; format validation
/// happens immediately before the row is inserted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateIpRule {
    /// The IP literal to persist.
    pub ip_address: String,
    /// Whether this is an allow-list entry.
    pub allowed: bool,
}
