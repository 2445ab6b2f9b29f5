use super::{Database, queries};
use anyhow::Result;
use nohash_hasher::IntSet;
use rusqlite::params;
use std::time::Duration;

const THEME_KEY: &str = "pref_theme";
const AGE_VERIFIED_KEY: &str = "pref_age_verified";

impl Database {
    // ==================
    //    WATCH LATER
    // ==================

    pub fn get_watch_later(&mut self) -> Result<IntSet<u64>> {
        let mut stmt = self.conn.prepare(queries::GET_WATCH_LATER)?;

        let ids = stmt
            .query_map([], |row| row.get::<_, i64>(0))?
            .filter_map(Result::ok)
            .map(|id| id as u64)
            .collect();

        Ok(ids)
    }

    /// Returns true if the id was added, false if it was removed.
    pub fn toggle_watch_later(&mut self, video_id: u64) -> Result<bool> {
        let added = self
            .conn
            .execute(queries::INSERT_WATCH_LATER, params![video_id as i64])?
            > 0;

        if !added {
            self.conn
                .execute(queries::DELETE_WATCH_LATER, params![video_id as i64])?;
        }

        Ok(added)
    }

    // ==================
    //  RESUME POSITIONS
    // ==================

    pub fn save_resume(&mut self, video_id: u64, position: Duration) -> Result<()> {
        self.conn.execute(
            queries::SET_RESUME,
            params![video_id as i64, position.as_millis() as i64],
        )?;
        Ok(())
    }

    pub fn get_resume(&mut self, video_id: u64) -> Result<Option<Duration>> {
        match self.conn.query_row(
            queries::GET_RESUME,
            params![video_id as i64],
            |row| row.get::<_, i64>(0),
        ) {
            Ok(ms) => Ok(Some(Duration::from_millis(ms.max(0) as u64))),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn clear_resume(&mut self, video_id: u64) -> Result<()> {
        self.conn
            .execute(queries::DELETE_RESUME, params![video_id as i64])?;
        Ok(())
    }

    // ==================
    //   SESSION STATE
    // ==================

    pub fn save_session_state(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn
            .execute(queries::SET_SESSION_STATE, params![key, value])?;
        Ok(())
    }

    pub fn get_session_state(&mut self, key: &str) -> Result<Option<String>> {
        match self.conn.query_row(queries::GET_SESSION_STATE, params![key], |row| {
            row.get::<_, String>(0)
        }) {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn save_theme(&mut self, theme: &str) -> Result<()> {
        self.save_session_state(THEME_KEY, theme)
    }

    pub fn get_theme(&mut self) -> Result<Option<String>> {
        self.get_session_state(THEME_KEY)
    }

    pub fn set_age_verified(&mut self) -> Result<()> {
        self.save_session_state(AGE_VERIFIED_KEY, "true")
    }

    pub fn is_age_verified(&mut self) -> Result<bool> {
        Ok(self
            .get_session_state(AGE_VERIFIED_KEY)?
            .is_some_and(|v| v == "true"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watch_later_toggles_both_ways() {
        let mut db = Database::open_in_memory().unwrap();
        let id = u64::MAX - 7; // exercises the i64 cast round-trip

        assert!(db.toggle_watch_later(id).unwrap());
        assert!(db.get_watch_later().unwrap().contains(&id));

        assert!(!db.toggle_watch_later(id).unwrap());
        assert!(db.get_watch_later().unwrap().is_empty());
    }

    #[test]
    fn resume_positions_round_trip() {
        let mut db = Database::open_in_memory().unwrap();

        assert_eq!(db.get_resume(42).unwrap(), None);

        db.save_resume(42, Duration::from_millis(61_500)).unwrap();
        assert_eq!(db.get_resume(42).unwrap(), Some(Duration::from_millis(61_500)));

        db.save_resume(42, Duration::from_secs(90)).unwrap();
        assert_eq!(db.get_resume(42).unwrap(), Some(Duration::from_secs(90)));

        db.clear_resume(42).unwrap();
        assert_eq!(db.get_resume(42).unwrap(), None);
    }

    #[test]
    fn session_state_is_plain_key_value() {
        let mut db = Database::open_in_memory().unwrap();

        assert!(!db.is_age_verified().unwrap());
        db.set_age_verified().unwrap();
        assert!(db.is_age_verified().unwrap());

        db.save_theme("light").unwrap();
        assert_eq!(db.get_theme().unwrap().as_deref(), Some("light"));
    }
}
