//! Builder for creating and configuring Tracker instances.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::task;

use super::Tracker;
use crate::error::{ConfigResultExt, Result, TrackerError};
use crate::store::{PlanStore, SqliteStore};

/// Builder for creating and configuring Tracker instances.
///
/// By default the tracker persists through a SQLite store at the XDG data
/// path; a custom [`PlanStore`] adapter can be injected instead, which is
/// how tests substitute in-memory or failing stores.
#[derive(Default)]
pub struct TrackerBuilder {
    database_path: Option<PathBuf>,
    store: Option<Arc<dyn PlanStore>>,
}

impl TrackerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/wayfarer/wayfarer.db` or
    /// `~/.local/share/wayfarer/wayfarer.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Injects a persistence adapter, replacing the default SQLite store.
    pub fn with_store(mut self, store: Arc<dyn PlanStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Builds the configured tracker, hydrating state from the store.
    ///
    /// Corrupt stored state hydrates to an empty list (the store fails
    /// closed); an unopenable database is a hard error.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::FileSystem` if the database directory cannot
    /// be created, `TrackerError::Database` if the store cannot be opened.
    pub async fn build(self) -> Result<Tracker> {
        let store: Arc<dyn PlanStore> = match self.store {
            Some(store) => store,
            None => {
                let db_path = if let Some(path) = self.database_path {
                    path
                } else {
                    Self::default_database_path()?
                };

                if let Some(parent) = db_path.parent() {
                    std::fs::create_dir_all(parent).map_err(|e| TrackerError::FileSystem {
                        path: parent.to_path_buf(),
                        source: e,
                    })?;
                }

                Arc::new(SqliteStore::new(db_path))
            }
        };

        let load_store = Arc::clone(&store);
        let plans = task::spawn_blocking(move || load_store.load())
            .await
            .config_context("Plan store load task failed")??;

        Ok(Tracker::new(plans, store))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("wayfarer")
            .place_data_file("wayfarer.db")
            .map_err(|e| TrackerError::XdgDirectory(e.to_string()))
    }
}
