use super::{Mode, UiState};
use anyhow::Result;
use std::collections::HashMap;

const KEY_MODE: &str = "ui_mode";
const KEY_CATEGORY: &str = "ui_category";
const KEY_PAGE: &str = "ui_page";
const KEY_ROW: &str = "ui_row";

/// Browse-side view state persisted across sessions as session_state rows.
#[derive(Default, Debug, PartialEq)]
pub struct UiSnapshot {
    pub mode: Mode,
    pub category: usize,
    pub page: usize,
    pub row: Option<usize>,
}

impl UiSnapshot {
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            (KEY_MODE, self.mode.as_str().to_string()),
            (KEY_CATEGORY, self.category.to_string()),
            (KEY_PAGE, self.page.to_string()),
            (KEY_ROW, self.row.map(|r| r.to_string()).unwrap_or_default()),
        ]
    }

    pub fn from_map(map: &HashMap<String, String>) -> Self {
        let read_usize = |key: &str| map.get(key).and_then(|v| v.parse().ok());

        UiSnapshot {
            mode: map
                .get(KEY_MODE)
                .map(|m| Mode::from_str(m))
                .unwrap_or_default(),
            category: read_usize(KEY_CATEGORY).unwrap_or(0),
            page: read_usize(KEY_PAGE).unwrap_or(0),
            row: read_usize(KEY_ROW),
        }
    }
}

impl UiState {
    pub fn save_state(&mut self) -> Result<()> {
        let snapshot = UiSnapshot {
            mode: self.get_mode().clone(),
            category: self.display_state.category_pos.selected().unwrap_or(0),
            page: self.display_state.page,
            row: self.display_state.table_pos.selected(),
        };

        self.db.save_ui_snapshot(&snapshot)
    }

    /// Re-apply the previous session's view state, clamped to whatever the
    /// catalog holds today.
    pub fn restore_state(&mut self) -> Result<()> {
        let snapshot = self.db.load_ui_snapshot()?;

        let filters = self.category_filters().len();
        let category = snapshot.category.min(filters.saturating_sub(1));
        self.display_state.category_pos.select(Some(category));

        self.set_mode(snapshot.mode);

        self.display_state.page = snapshot.page.min(self.page_count() - 1);
        self.display_state
            .table_pos
            .select(Some(snapshot.row.unwrap_or(0)));
        self.clamp_selection();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_and_map_round_trip() {
        let snapshot = UiSnapshot {
            mode: Mode::Search,
            category: 3,
            page: 2,
            row: Some(5),
        };

        let map: HashMap<String, String> = snapshot
            .to_pairs()
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();

        assert_eq!(UiSnapshot::from_map(&map), snapshot);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let map = HashMap::new();
        let snapshot = UiSnapshot::from_map(&map);

        assert_eq!(snapshot.mode, Mode::Browse);
        assert_eq!(snapshot.page, 0);
        assert_eq!(snapshot.row, None);
    }

    #[test]
    fn player_mode_is_never_restored() {
        let mut map = HashMap::new();
        map.insert(KEY_MODE.to_string(), "player".to_string());

        assert_eq!(UiSnapshot::from_map(&map).mode, Mode::Browse);
    }
}
