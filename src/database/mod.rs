mod prefs;
pub(crate) mod queries;
mod snapshot;

use anyhow::{Context, Result};
use rusqlite::Connection;
use std::{fs, path::PathBuf};

/// Preference storage: watch-later set, per-video resume positions and
/// session key/value state. Constructed once at startup and injected into
/// whatever needs it; nothing in the crate reaches for a global handle.
pub struct Database {
    pub(crate) conn: Connection,
}

impl Database {
    pub fn open() -> Result<Self> {
        let path = Self::db_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Could not create {}", parent.display()))?;
        }

        let conn = Connection::open(&path)
            .with_context(|| format!("Could not open database at {}", path.display()))?;
        conn.execute_batch(queries::CREATE_SCHEMA)?;

        Ok(Database { conn })
    }

    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(queries::CREATE_SCHEMA)?;
        Ok(Database { conn })
    }

    fn db_path() -> Result<PathBuf> {
        let base = dirs::data_dir().context("Could not determine data directory!")?;
        Ok(base.join("drivestream").join("drivestream.db"))
    }
}
