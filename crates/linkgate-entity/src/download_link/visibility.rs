//! Link visibility restriction.

use serde::{Deserialize, Serialize};

/// Who may use a download link.
///
/// Modeled as a tagged variant instead of a pair of booleans so that the
/// auth-only and guest-only restrictions cannot both be set at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Anyone holding the token may use the link.
    #[default]
    Unrestricted,
    /// Only authenticated users may use the link.
    AuthOnly,
    /// Only unauthenticated guests may use the link.
    GuestOnly,
}

impl Visibility {
    /// Build from the persisted `(auth_only, guest_only)` column pair.
    pub fn from_flags(auth_only: bool, guest_only: bool) -> Self {
        match (auth_only, guest_only) {
            (true, _) => Self::AuthOnly,
            (false, true) => Self::GuestOnly,
            (false, false) => Self::Unrestricted,
        }
    }

    /// Return the `(auth_only, guest_only)` column pair for persistence.
    pub fn as_flags(&self) -> (bool, bool) {
        match self {
            Self::Unrestricted => (false, false),
            Self::AuthOnly => (true, false),
            Self::GuestOnly => (false, true),
        }
    }
}
