//! Helpers for integration tests.
#![allow(dead_code)]

use std::path::PathBuf;

use tempfile::TempDir;

use planos_api::db::{DbPool, establish_connection_pool, run_migrations};
use planos_api::repository::DieselRepository;

/// Migrated SQLite database living in a temporary directory.
pub struct TestDb {
    pool: DbPool,
    dir: TempDir,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temporary directory.");
        let path = dir.path().join(filename);
        let url = path.to_str().expect("Temporary path is not UTF-8.");

        let pool = establish_connection_pool(url).expect("Failed to establish SQLite connection.");
        run_migrations(&pool).expect("Migrations failed");

        TestDb { pool, dir }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn repository(&self) -> DieselRepository {
        DieselRepository::new(self.pool())
    }

    pub fn path(&self, filename: &str) -> PathBuf {
        self.dir.path().join(filename)
    }
}
