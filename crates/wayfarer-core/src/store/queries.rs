//! Plan-list document load and save.

use jiff::Timestamp;
use log::warn;
use rusqlite::{params, OptionalExtension};

use crate::error::{DatabaseResultExt, Result};
use crate::models::Plan;

/// Fixed key the plan list document is stored under.
pub const PLANS_KEY: &str = "selected_plans";

const SELECT_STATE_SQL: &str = "SELECT value FROM app_state WHERE key = ?1";
const UPSERT_STATE_SQL: &str = "INSERT INTO app_state (key, value, updated_at) VALUES (?1, ?2, ?3)
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";

impl super::Database {
    /// Loads the stored plan list.
    ///
    /// Fails closed: a missing row is an empty list, and an unparseable
    /// document is logged and treated as an empty list rather than
    /// propagated; this is a one-time startup path with no retry value.
    pub fn load_plans(&self) -> Result<Vec<Plan>> {
        let raw: Option<String> = self
            .connection
            .query_row(SELECT_STATE_SQL, params![PLANS_KEY], |row| row.get(0))
            .optional()
            .db_context("Failed to query plan state")?;

        let Some(document) = raw else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&document) {
            Ok(plans) => Ok(plans),
            Err(e) => {
                warn!("discarding unreadable plan state: {e}");
                Ok(Vec::new())
            }
        }
    }

    /// Replaces the stored plan list with the given one, as a single
    /// document write.
    pub fn save_plans(&mut self, plans: &[Plan]) -> Result<()> {
        let document = serde_json::to_string(plans)?;
        let now = Timestamp::now().to_string();

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(UPSERT_STATE_SQL, params![PLANS_KEY, document, now])
            .db_context("Failed to write plan state")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }
}
