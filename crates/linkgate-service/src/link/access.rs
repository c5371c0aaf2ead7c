//! Link access enforcement — validates a token against the link's
//! restrictions at request time.

use std::net::IpAddr;
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use linkgate_core::error::AppError;
use linkgate_core::result::AppResult;
use linkgate_core::traits::storage::ByteStream;
use linkgate_database::repositories::download_link::DownloadLinkRepository;
use linkgate_entity::download_link::{DownloadLink, IpPolicy, Visibility};
use linkgate_storage::manager::DiskManager;

/// The requester context an enforcement decision is made against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessRequest {
    /// Authenticated user id, if any.
    pub user_id: Option<i64>,
    /// The requester's address.
    pub ip: IpAddr,
}

impl AccessRequest {
    /// Whether the requester is authenticated.
    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }
}

/// Evaluates download link restrictions for incoming requests.
#[derive(Debug, Clone)]
pub struct AccessService {
    /// Download link repository.
    repo: Arc<DownloadLinkRepository>,
    /// Configured storage disks.
    disks: Arc<DiskManager>,
}

impl AccessService {
    /// Creates a new access service.
    pub fn new(repo: Arc<DownloadLinkRepository>, disks: Arc<DiskManager>) -> Self {
        Self { repo, disks }
    }

    /// Validate a token against the requester context and return the
    /// link if every restriction passes.
    ///
    /// Checks run in order: token exists, link not expired, visibility
    /// restriction, IP rules, user allow-list.
    pub async fn authorize(&self, token: &str, request: &AccessRequest) -> AppResult<DownloadLink> {
        let link = self
            .repo
            .find_by_token(token)
            .await?
            .ok_or_else(|| AppError::not_found("Link NOT found!"))?;

        if link.is_expired(Utc::now()) {
            return Err(AppError::not_found("Link has expired!"));
        }

        match link.visibility() {
            Visibility::AuthOnly if !request.is_authenticated() => {
                return Err(AppError::authorization(
                    "Link is limited to authenticated users!",
                ));
            }
            Visibility::GuestOnly if request.is_authenticated() => {
                return Err(AppError::authorization("Link is limited to guests!"));
            }
            _ => {}
        }

        let ip_rules = self.repo.list_ip_rules(link.id).await?;
        if !IpPolicy::from_rules(&ip_rules).permits(request.ip) {
            return Err(AppError::authorization("IP is NOT allowed to download!"));
        }

        let users = self.repo.list_users(link.id).await?;
        if !users.is_empty() {
            let permitted = request
                .user_id
                .is_some_and(|id| users.iter().any(|u| u.user_id == id));
            if !permitted {
                return Err(AppError::authorization("User is NOT allowed to download!"));
            }
        }

        Ok(link)
    }

    /// Authorize a request and open the linked file for streaming.
    pub async fn open(
        &self,
        token: &str,
        request: &AccessRequest,
    ) -> AppResult<(DownloadLink, ByteStream)> {
        let link = self.authorize(token, request).await?;
        let provider = self.disks.get(&link.disk)?;
        let stream = provider.read(&link.file_path).await?;
        Ok((link, stream))
    }
}
