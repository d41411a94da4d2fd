//! Persistence for the plan list.
//!
//! The tracker's in-memory state is authoritative; this module is the
//! key-value persistence collaborator behind it. The [`PlanStore`] trait is
//! the seam the tracker is built against, so tests can inject their own
//! adapter; [`SqliteStore`] is the default implementation, storing the
//! whole plan list as one JSON document in a SQLite key-value table.

use std::path::{Path, PathBuf};

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};
use crate::models::Plan;

pub mod migrations;
pub mod queries;

/// Adapter interface the tracker persists through.
///
/// `load` runs once at startup; `save` receives the full current plan list
/// after every mutation (full overwrite, not incremental).
pub trait PlanStore: Send + Sync {
    /// Load the stored plan list. Missing or unreadable state yields an
    /// empty list rather than an error; see [`queries`].
    fn load(&self) -> Result<Vec<Plan>>;

    /// Replace the stored plan list with the given one.
    fn save(&self, plans: &[Plan]) -> Result<()>;
}

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}

/// The default [`PlanStore`]: a SQLite-backed key-value document store.
///
/// A fresh connection is opened per call, so the store stays `Send + Sync`
/// without holding a connection across await points.
pub struct SqliteStore {
    db_path: PathBuf,
}

impl SqliteStore {
    pub fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }
}

impl PlanStore for SqliteStore {
    fn load(&self) -> Result<Vec<Plan>> {
        Database::new(&self.db_path)?.load_plans()
    }

    fn save(&self, plans: &[Plan]) -> Result<()> {
        Database::new(&self.db_path)?.save_plans(plans)
    }
}
