use super::{CategoryFilter, Mode, Pane, UiState};
use crate::domain::VideoEntry;
use anyhow::{Result, anyhow};
use ratatui::widgets::{ListState, TableState};
use std::sync::Arc;

pub struct DisplayState {
    mode: Mode,
    pub pane: Pane,

    pub category_pos: ListState,
    pub table_pos: TableState,
    pub page: usize,
}

impl DisplayState {
    pub fn new() -> Self {
        DisplayState {
            mode: Mode::Browse,
            pane: Pane::VideoList,
            category_pos: ListState::default().with_selected(Some(0)),
            table_pos: TableState::default().with_selected(0),
            page: 0,
        }
    }
}

impl UiState {
    pub fn get_mode(&self) -> &Mode {
        &self.display_state.mode
    }

    pub fn get_pane(&self) -> Pane {
        self.display_state.pane
    }

    pub fn set_pane(&mut self, pane: Pane) {
        self.display_state.pane = pane;
    }

    pub fn set_mode(&mut self, mode: Mode) {
        match mode {
            Mode::Browse => {
                self.display_state.mode = Mode::Browse;
                self.display_state.pane = Pane::VideoList;
                self.set_legal_videos();
            }
            Mode::Search => {
                self.search_input_clear();
                self.display_state.mode = Mode::Search;
                self.display_state.pane = Pane::Search;
                self.display_state.page = 0;
                self.set_legal_videos();
            }
            Mode::Player => {
                self.display_state.mode = Mode::Player;
                self.display_state.pane = Pane::VideoList;
            }
            Mode::QUIT => {
                let _ = self.save_state();
                self.display_state.mode = Mode::QUIT;
            }
        }
    }

    // ==================
    //     CATEGORIES
    // ==================

    /// Sidebar entries: the pseudo-filters first, then configured categories.
    pub fn category_filters(&self) -> Vec<CategoryFilter> {
        let mut filters = vec![
            CategoryFilter::All,
            CategoryFilter::Featured,
            CategoryFilter::WatchLater,
        ];

        filters.extend(
            self.catalog
                .categories()
                .iter()
                .map(|c| CategoryFilter::Custom(Arc::clone(c))),
        );

        filters
    }

    pub fn current_filter(&self) -> CategoryFilter {
        let filters = self.category_filters();
        let idx = self.display_state.category_pos.selected().unwrap_or(0);

        filters.get(idx).cloned().unwrap_or_default()
    }

    pub fn cycle_category(&mut self, forward: bool) {
        let count = self.category_filters().len();
        if count == 0 {
            return;
        }

        let current = self.display_state.category_pos.selected().unwrap_or(0);
        let next = match forward {
            true => (current + 1) % count,
            false => current.checked_sub(1).unwrap_or(count - 1),
        };

        self.display_state.category_pos.select(Some(next));
        self.display_state.page = 0;
        self.set_legal_videos();
    }

    pub fn select_category(&mut self, index: usize) {
        let count = self.category_filters().len();
        if index < count {
            self.display_state.category_pos.select(Some(index));
            self.display_state.page = 0;
            self.set_legal_videos();
        }
    }

    // ==================
    //     PAGINATION
    // ==================

    pub fn page_size(&self) -> usize {
        self.catalog.app.videos_per_page.max(1)
    }

    pub fn page_count(&self) -> usize {
        self.legal_videos.len().div_ceil(self.page_size()).max(1)
    }

    pub fn current_page(&self) -> usize {
        self.display_state.page
    }

    /// The slice of filtered videos shown on the current page.
    pub fn visible_page(&self) -> &[Arc<VideoEntry>] {
        let size = self.page_size();
        let start = (self.display_state.page * size).min(self.legal_videos.len());
        let end = (start + size).min(self.legal_videos.len());

        &self.legal_videos[start..end]
    }

    pub fn next_page(&mut self) {
        if self.display_state.page + 1 < self.page_count() {
            self.display_state.page += 1;
            self.display_state.table_pos.select(Some(0));
        }
    }

    pub fn prev_page(&mut self) {
        if self.display_state.page > 0 {
            self.display_state.page -= 1;
            self.display_state.table_pos.select(Some(0));
        }
    }

    // ==================
    //     SELECTION
    // ==================

    pub fn scroll(&mut self, delta: isize) {
        let len = self.visible_page().len();
        if len == 0 {
            self.display_state.table_pos.select(None);
            return;
        }

        let current = self.display_state.table_pos.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, len as isize - 1) as usize;
        self.display_state.table_pos.select(Some(next));
    }

    pub fn scroll_to_edge(&mut self, top: bool) {
        let len = self.visible_page().len();
        if len == 0 {
            return;
        }

        let target = match top {
            true => 0,
            false => len - 1,
        };
        self.display_state.table_pos.select(Some(target));
    }

    pub fn get_selected_video(&self) -> Result<Arc<VideoEntry>> {
        let page = self.visible_page();
        if page.is_empty() {
            return Err(anyhow!("No videos to select!"));
        }

        let idx = self
            .display_state
            .table_pos
            .selected()
            .ok_or_else(|| anyhow!("No video selected!"))?;

        page.get(idx)
            .cloned()
            .ok_or_else(|| anyhow!("Selection out of bounds!"))
    }

    /// Keep page and row selection valid after any refilter.
    pub(super) fn clamp_selection(&mut self) {
        let pages = self.page_count();
        if self.display_state.page >= pages {
            self.display_state.page = pages - 1;
        }

        let len = self.visible_page().len();
        match len {
            0 => self.display_state.table_pos.select(None),
            _ => {
                let idx = self.display_state.table_pos.selected().unwrap_or(0);
                self.display_state.table_pos.select(Some(idx.min(len - 1)));
            }
        }
    }
}
