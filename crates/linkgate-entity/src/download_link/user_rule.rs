//! User rule entity for download links.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted per-link authorized-user row.
///
/// Presence of any rows for a link turns it into a user allow-list,
/// independent of the link's IP rules.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DownloadLinkUser {
    /// Unique rule identifier.
    pub id: i64,
    /// The owning download link.
    pub download_link_id: i64,
    /// Identifier of a user permitted to use the link.
    pub user_id: i64,
}
