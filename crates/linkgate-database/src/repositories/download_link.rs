//! Download link repository implementation.

use std::net::IpAddr;

use chrono::Utc;
use sqlx::SqlitePool;

use linkgate_core::error::{AppError, ErrorKind};
use linkgate_core::result::AppResult;
use linkgate_entity::download_link::{
    CreateDownloadLink, CreateIpRule, DownloadLink, DownloadLinkIpAddress, DownloadLinkUser,
};

/// Repository for download link rows and their owned rule rows.
#[derive(Debug, Clone)]
pub struct DownloadLinkRepository {
    pool: SqlitePool,
}

impl DownloadLinkRepository {
    /// Create a new download link repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a link together with its IP and user rule rows in a single
    /// transaction.
    ///
    /// Each IP literal is format-checked immediately before its insert;
    /// the first invalid one rolls back the whole transaction, including
    /// the link row already created.
    pub async fn create_with_rules(
        &self,
        data: &CreateDownloadLink,
        ip_rules: &[CreateIpRule],
        user_ids: &[i64],
    ) -> AppResult<DownloadLink> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let now = Utc::now();
        let (auth_only, guest_only) = data.visibility.as_flags();
        let link = sqlx::query_as::<_, DownloadLink>(
            "INSERT INTO download_links (link, disk, file_path, file_name, auth_only, guest_only, \
             expire_time, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING *",
        )
        .bind(&data.link)
        .bind(&data.disk)
        .bind(&data.file_path)
        .bind(&data.file_name)
        .bind(auth_only)
        .bind(guest_only)
        .bind(data.expire_time)
        .bind(now)
        .bind(now)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create download link", e)
        })?;

        for rule in ip_rules {
            if rule.ip_address.parse::<IpAddr>().is_err() {
                tx.rollback().await.map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to roll back", e)
                })?;
                return Err(AppError::invalid_input("Given IP is NOT valid!"));
            }

            sqlx::query(
                "INSERT INTO download_link_ip_addresses (download_link_id, ip_address, allowed) \
                 VALUES ($1, $2, $3)",
            )
            .bind(link.id)
            .bind(&rule.ip_address)
            .bind(rule.allowed)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to create IP rule", e)
            })?;
        }

        for user_id in user_ids {
            sqlx::query(
                "INSERT INTO download_link_users (download_link_id, user_id) VALUES ($1, $2)",
            )
            .bind(link.id)
            .bind(user_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to create user rule", e)
            })?;
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })?;

        Ok(link)
    }

    /// Find a link by its token.
    pub async fn find_by_token(&self, token: &str) -> AppResult<Option<DownloadLink>> {
        sqlx::query_as::<_, DownloadLink>("SELECT * FROM download_links WHERE link = $1")
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find link by token", e)
            })
    }

    /// Delete a link by its token; the rule rows go with it via cascade.
    ///
    /// Returns whether a row was deleted.
    pub async fn delete_by_token(&self, token: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM download_links WHERE link = $1")
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete link", e))?;
        Ok(result.rows_affected() > 0)
    }

    /// List the IP rule rows owned by a link.
    pub async fn list_ip_rules(&self, link_id: i64) -> AppResult<Vec<DownloadLinkIpAddress>> {
        sqlx::query_as::<_, DownloadLinkIpAddress>(
            "SELECT * FROM download_link_ip_addresses WHERE download_link_id = $1 ORDER BY id",
        )
        .bind(link_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list IP rules", e))
    }

    /// List the user rule rows owned by a link.
    pub async fn list_users(&self, link_id: i64) -> AppResult<Vec<DownloadLinkUser>> {
        sqlx::query_as::<_, DownloadLinkUser>(
            "SELECT * FROM download_link_users WHERE download_link_id = $1 ORDER BY id",
        )
        .bind(link_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list user rules", e))
    }
}
