//! Download link entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::visibility::Visibility;

/// A time-limited, access-restricted download link for a file on a
/// configured storage disk.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DownloadLink {
    /// Unique link identifier.
    pub id: i64,
    /// The 64-character random token that externally identifies the link.
    pub link: String,
    /// Symbolic name of the storage disk the file lives on.
    pub disk: String,
    /// Path to the target file within the disk's namespace.
    pub file_path: String,
    /// Display name presented for the download.
    pub file_name: String,
    /// Whether only authenticated users may use the link.
    pub auth_only: bool,
    /// Whether only unauthenticated guests may use the link.
    pub guest_only: bool,
    /// When the link expires (None = never).
    pub expire_time: Option<DateTime<Utc>>,
    /// When the link was created.
    pub created_at: DateTime<Utc>,
    /// When the link was last updated.
    pub updated_at: DateTime<Utc>,
}

impl DownloadLink {
    /// Check whether the link has passed its expiry time.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match self.expire_time {
            Some(expire_time) => expire_time <= now,
            None => false,
        }
    }

    /// Return the link's visibility restriction.
    pub fn visibility(&self) -> Visibility {
        Visibility::from_flags(self.auth_only, self.guest_only)
    }
}

/// Data required to create a new download link row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDownloadLink {
    /// The generated link token.
    pub link: String,
    /// Symbolic disk name.
    pub disk: String,
    /// File path within the disk.
    pub file_path: String,
    /// Display file name.
    pub file_name: String,
    /// Visibility restriction.
    pub visibility: Visibility,
    /// Expiry time (None = never).
    pub expire_time: Option<DateTime<Utc>>,
}
