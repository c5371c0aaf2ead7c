//! Fluent download link builder.

use chrono::{DateTime, Duration, Utc};

use linkgate_core::result::AppResult;
use linkgate_entity::download_link::Visibility;

use super::service::DownloadLinkService;

/// Fluent accumulator for the properties of a link before issuance.
///
/// Obtained from [`DownloadLinkService::link`]. Each method consumes and
/// returns the builder; the terminal [`issue`](Self::issue) call hands
/// the accumulated configuration to the service for validation and
/// atomic persistence. The builder itself performs no I/O.
#[derive(Debug, Clone)]
pub struct DownloadLinkBuilder {
    service: DownloadLinkService,
    pub(crate) file_path: Option<String>,
    pub(crate) file_name: Option<String>,
    pub(crate) disk: Option<String>,
    pub(crate) visibility: Visibility,
    pub(crate) expire_time: Option<DateTime<Utc>>,
    pub(crate) allow_ips: Vec<String>,
    pub(crate) deny_ips: Vec<String>,
    pub(crate) user_ids: Vec<i64>,
}

impl DownloadLinkBuilder {
    /// Create an empty builder bound to the issuing service.
    pub(crate) fn new(service: DownloadLinkService) -> Self {
        Self {
            service,
            file_path: None,
            file_name: None,
            disk: None,
            visibility: Visibility::Unrestricted,
            expire_time: None,
            allow_ips: Vec::new(),
            deny_ips: Vec::new(),
            user_ids: Vec::new(),
        }
    }

    /// Set the path of the file to serve, relative to the disk root.
    pub fn file_path(mut self, file_path: impl Into<String>) -> Self {
        self.file_path = Some(file_path.into());
        self
    }

    /// Set the display name for the download.
    ///
    /// Defaults to the last `/`-separated segment of the file path.
    pub fn file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    /// Set the symbolic name of the storage disk holding the file.
    pub fn disk(mut self, disk: impl Into<String>) -> Self {
        self.disk = Some(disk.into());
        self
    }

    /// Restrict the link to authenticated users. Clears a previous
    /// guests-only restriction.
    pub fn auth_only(mut self) -> Self {
        self.visibility = Visibility::AuthOnly;
        self
    }

    /// Restrict the link to unauthenticated guests. Clears a previous
    /// authenticated-only restriction.
    pub fn guest_only(mut self) -> Self {
        self.visibility = Visibility::GuestOnly;
        self
    }

    /// Set an absolute expiry time.
    pub fn expire_at(mut self, expire_time: DateTime<Utc>) -> Self {
        self.expire_time = Some(expire_time);
        self
    }

    /// Set the expiry relative to now.
    pub fn expire_in(mut self, duration: Duration) -> Self {
        self.expire_time = Some(Utc::now() + duration);
        self
    }

    /// Add a single IP to the allow-list.
    pub fn allow_ip(mut self, ip: impl Into<String>) -> Self {
        self.allow_ips.push(ip.into());
        self
    }

    /// Add a collection of IPs to the allow-list.
    pub fn allow_ips<I, S>(mut self, ips: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow_ips.extend(ips.into_iter().map(Into::into));
        self
    }

    /// Add a single IP to the deny-list.
    ///
    /// Deny-list entries are ignored when an allow-list is also supplied.
    pub fn deny_ip(mut self, ip: impl Into<String>) -> Self {
        self.deny_ips.push(ip.into());
        self
    }

    /// Add a collection of IPs to the deny-list.
    pub fn deny_ips<I, S>(mut self, ips: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.deny_ips.extend(ips.into_iter().map(Into::into));
        self
    }

    /// Authorize a single user to use the link.
    pub fn for_user(mut self, user_id: i64) -> Self {
        self.user_ids.push(user_id);
        self
    }

    /// Authorize a collection of users to use the link.
    pub fn for_users<I>(mut self, user_ids: I) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        self.user_ids.extend(user_ids);
        self
    }

    /// Validate the accumulated configuration and persist the link and
    /// its rules atomically. Returns the generated token.
    pub async fn issue(self) -> AppResult<String> {
        let service = self.service.clone();
        service.issue(self).await
    }
}
