use super::{Database, queries};
use crate::ui_state::UiSnapshot;
use anyhow::Result;
use rusqlite::params;
use std::collections::HashMap;

impl Database {
    pub fn save_ui_snapshot(&mut self, snapshot: &UiSnapshot) -> Result<()> {
        let tx = self.conn.transaction()?;

        for (key, value) in snapshot.to_pairs() {
            tx.execute(queries::SET_SESSION_STATE, params![key, value])?;
        }

        tx.commit()?;
        Ok(())
    }

    pub fn load_ui_snapshot(&mut self) -> Result<UiSnapshot> {
        let mut stmt = self.conn.prepare(queries::GET_UI_SNAPSHOT)?;

        let map: HashMap<String, String> = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .filter_map(Result::ok)
            .collect();

        Ok(UiSnapshot::from_map(&map))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui_state::Mode;

    #[test]
    fn snapshot_survives_a_save_load_cycle() {
        let mut db = Database::open_in_memory().unwrap();

        let snapshot = UiSnapshot {
            mode: Mode::Browse,
            category: 2,
            page: 1,
            row: Some(4),
        };

        db.save_ui_snapshot(&snapshot).unwrap();
        assert_eq!(db.load_ui_snapshot().unwrap(), snapshot);
    }

    #[test]
    fn empty_table_yields_the_default_snapshot() {
        let mut db = Database::open_in_memory().unwrap();
        assert_eq!(db.load_ui_snapshot().unwrap(), UiSnapshot::default());
    }
}
