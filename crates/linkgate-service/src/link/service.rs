//! Download link issuance and revocation service.

use std::sync::Arc;

use tracing::info;

use linkgate_core::error::AppError;
use linkgate_core::result::AppResult;
use linkgate_database::repositories::download_link::DownloadLinkRepository;
use linkgate_entity::download_link::{CreateDownloadLink, CreateIpRule};
use linkgate_storage::manager::DiskManager;

use super::builder::DownloadLinkBuilder;
use super::token;

/// Issues and revokes download links.
#[derive(Debug, Clone)]
pub struct DownloadLinkService {
    /// Download link repository.
    repo: Arc<DownloadLinkRepository>,
    /// Configured storage disks.
    disks: Arc<DiskManager>,
}

impl DownloadLinkService {
    /// Creates a new download link service.
    pub fn new(repo: Arc<DownloadLinkRepository>, disks: Arc<DiskManager>) -> Self {
        Self { repo, disks }
    }

    /// Start configuring a new download link.
    pub fn link(&self) -> DownloadLinkBuilder {
        DownloadLinkBuilder::new(self.clone())
    }

    /// Validate the builder's configuration, then persist the link and
    /// its rule rows in one transaction. Returns the generated token.
    ///
    /// Validation fails fast: nothing is persisted until every
    /// structural check and the file existence check have passed.
    pub(crate) async fn issue(&self, builder: DownloadLinkBuilder) -> AppResult<String> {
        let file_path = builder
            .file_path
            .filter(|p| !p.is_empty())
            .ok_or_else(|| AppError::missing_field("File path must NOT be empty!"))?;

        let disk = builder
            .disk
            .filter(|d| !d.is_empty())
            .ok_or_else(|| AppError::missing_field("Disk must NOT be empty!"))?;

        if !self.disks.contains(&disk) {
            return Err(AppError::invalid_configuration("Disk is NOT valid!"));
        }

        let file_name = builder
            .file_name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| derive_file_name(&file_path));

        let provider = self.disks.get(&disk)?;
        if !provider.exists(&file_path).await? {
            return Err(AppError::not_found("File not found!"));
        }

        let data = CreateDownloadLink {
            link: token::generate(),
            disk,
            file_path,
            file_name,
            visibility: builder.visibility,
            expire_time: builder.expire_time,
        };
        let ip_rules = ip_rule_rows(builder.allow_ips, builder.deny_ips);

        let link = self
            .repo
            .create_with_rules(&data, &ip_rules, &builder.user_ids)
            .await?;

        info!(
            id = link.id,
            disk = %link.disk,
            ip_rules = ip_rules.len(),
            user_rules = builder.user_ids.len(),
            "Download link issued"
        );

        Ok(link.link)
    }

    /// Revoke a link by its token.
    ///
    /// The link's IP and user rule rows are removed with it by cascade.
    pub async fn delete(&self, token: &str) -> AppResult<()> {
        let deleted = self.repo.delete_by_token(token).await?;
        if !deleted {
            return Err(AppError::not_found("Link NOT found!"));
        }

        info!("Download link deleted");
        Ok(())
    }
}

/// Default file name: the last `/`-separated segment of the file path.
fn derive_file_name(file_path: &str) -> String {
    file_path
        .rsplit('/')
        .next()
        .unwrap_or(file_path)
        .to_string()
}

/// Translate the accumulated allow/deny lists into rule row payloads.
///
/// The allow-list takes precedence: when it is non-empty, deny-list
/// entries are dropped from this issuance.
fn ip_rule_rows(allow_ips: Vec<String>, deny_ips: Vec<String>) -> Vec<CreateIpRule> {
    let (ips, allowed) = if allow_ips.is_empty() {
        (deny_ips, false)
    } else {
        (allow_ips, true)
    };

    ips.into_iter()
        .map(|ip_address| CreateIpRule {
            ip_address,
            allowed,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_file_name_takes_last_segment() {
        assert_eq!(derive_file_name("docs/reports/q3.pdf"), "q3.pdf");
        assert_eq!(derive_file_name("flat.txt"), "flat.txt");
    }

    #[test]
    fn test_deny_rows_when_no_allow_list() {
        let rows = ip_rule_rows(vec![], vec!["127.0.0.1".to_string()]);
        assert_eq!(rows.len(), 1);
        assert!(!rows[0].allowed);
    }

    #[test]
    fn test_allow_list_suppresses_deny_list() {
        let rows = ip_rule_rows(
            vec!["127.0.0.1".to_string(), "127.0.0.2".to_string()],
            vec!["10.0.0.1".to_string()],
        );
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.allowed));
    }
}
