//! Shared test helpers for integration tests.

use std::sync::Arc;

use sqlx::SqlitePool;
use tempfile::TempDir;

use linkgate::{
    AccessService, DatabaseConfig, DatabasePool, DiskManager, DownloadLinkRepository,
    DownloadLinkService, LocalDiskProvider,
};

/// Test application context: an in-memory database, a temporary disk
/// root registered as the `"local"` disk, and the services under test.
pub struct TestApp {
    /// Database pool for direct row assertions.
    pub pool: SqlitePool,
    /// Link issuance and revocation service.
    pub links: DownloadLinkService,
    /// Enforcement-time access service.
    pub access: AccessService,
    /// Repository, for rule-row assertions.
    pub repo: Arc<DownloadLinkRepository>,
    /// Keeps the scratch disk root alive for the test's duration.
    _disk_root: TempDir,
}

impl TestApp {
    /// Create a new test application.
    ///
    /// The pool is capped at a single connection so that the in-memory
    /// SQLite database is shared by every query in the test.
    pub async fn new() -> Self {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
            ..DatabaseConfig::default()
        };

        let db = DatabasePool::connect(&config)
            .await
            .expect("Failed to connect to test database");
        linkgate::run_migrations(db.pool())
            .await
            .expect("Failed to run migrations");

        let disk_root = tempfile::tempdir().expect("Failed to create disk root");
        let provider = LocalDiskProvider::new(disk_root.path().to_str().unwrap())
            .await
            .expect("Failed to init local disk");

        let mut disks = DiskManager::new();
        disks.register("local", Arc::new(provider));
        let disks = Arc::new(disks);

        let pool = db.pool().clone();
        let repo = Arc::new(DownloadLinkRepository::new(pool.clone()));
        let links = DownloadLinkService::new(Arc::clone(&repo), Arc::clone(&disks));
        let access = AccessService::new(Arc::clone(&repo), Arc::clone(&disks));

        Self {
            pool,
            links,
            access,
            repo,
            _disk_root: disk_root,
        }
    }

    /// Place a file on the `"local"` test disk.
    pub async fn seed_file(&self, path: &str, contents: &[u8]) {
        let full_path = self._disk_root.path().join(path.trim_start_matches('/'));
        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .expect("Failed to create parent dir");
        }
        tokio::fs::write(&full_path, contents)
            .await
            .expect("Failed to seed file");
    }

    /// Count the rows of a table.
    pub async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count rows")
    }

    /// Count the rows across all three link tables.
    pub async fn total_rows(&self) -> i64 {
        self.count("download_links").await
            + self.count("download_link_ip_addresses").await
            + self.count("download_link_users").await
    }
}
