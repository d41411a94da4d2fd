//! Database schema initialization and migrations.

use rusqlite::params;

use crate::error::{DatabaseResultExt, Result};

use super::queries::PLANS_KEY;

/// Key the browser-era releases stored the plan list under.
const LEGACY_PLANS_KEY: &str = "selectedPlans";

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()?;

        Ok(())
    }

    /// Apply migrations for databases written by earlier releases.
    fn apply_migrations(&self) -> Result<()> {
        // Move state saved under the legacy camelCase key to the current
        // key, unless the current key already has a row.
        self.connection
            .execute(
                "UPDATE app_state SET key = ?1
                 WHERE key = ?2
                   AND NOT EXISTS (SELECT 1 FROM app_state WHERE key = ?1)",
                params![PLANS_KEY, LEGACY_PLANS_KEY],
            )
            .db_context("Failed to migrate legacy plan state key")?;

        Ok(())
    }
}
