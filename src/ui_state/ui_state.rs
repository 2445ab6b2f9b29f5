use super::{
    CategoryFilter, DisplayState, Mode, Pane, PlaybackView, Theme, ThemeKind,
    popup::{PopupState, PopupType},
    search_state::SearchState,
};
use crate::{
    Catalog, Database,
    domain::{VideoEntry, VideoInfo},
    player::PlaybackState,
};
use crate::key_handler::InputContext;
use anyhow::{Error, Result};
use nohash_hasher::IntSet;
use std::{
    sync::Arc,
    time::{Duration, Instant},
};

const NOTICE_TTL: Duration = Duration::from_secs(3);

pub struct UiState {
    // Backend modules
    pub(super) catalog: Arc<Catalog>,
    pub(crate) db: Database,

    // Visual elements
    pub(crate) theme: Theme,
    pub(crate) popup: PopupState,
    pub(super) search: SearchState,
    pub(crate) display_state: DisplayState,

    // Playback snapshot published by the app each frame
    pub(crate) playback: PlaybackView,

    // View models
    pub legal_videos: Vec<Arc<VideoEntry>>,
    pub(super) watch_later: IntSet<u64>,

    notice: Option<(String, Instant)>,
}

impl UiState {
    /// The database handle is injected by the composition root; the UI
    /// never opens its own connection.
    pub fn new(catalog: Arc<Catalog>, mut db: Database) -> Self {
        let watch_later = db.get_watch_later().unwrap_or_default();
        let theme_kind = db
            .get_theme()
            .ok()
            .flatten()
            .map(|t| ThemeKind::from_str(&t))
            .unwrap_or_default();

        let mut state = UiState {
            catalog,
            db,
            theme: Theme::new(theme_kind),
            popup: PopupState::new(),
            search: SearchState::new(),
            display_state: DisplayState::new(),
            playback: PlaybackView::new(),
            legal_videos: Vec::new(),
            watch_later,
            notice: None,
        };

        state.set_legal_videos();
        state
    }

    /// Rebuild the filtered video list from the current category filter and
    /// search query, then repair page/row selection.
    pub fn set_legal_videos(&mut self) {
        let mut videos = self.catalog.get_all_videos();

        match self.current_filter() {
            CategoryFilter::All => (),
            CategoryFilter::Featured => videos.retain(|v| v.is_featured()),
            CategoryFilter::WatchLater => videos.retain(|v| self.watch_later.contains(&v.get_id())),
            CategoryFilter::Custom(name) => videos.retain(|v| v.in_category(&name)),
        }

        let query = self.read_search().to_string();
        if !query.trim().is_empty() {
            videos = self.rank_by_search(videos, &query);
        }

        self.legal_videos = videos;
        self.clamp_selection();
    }

    pub fn get_input_context(&self) -> InputContext {
        if self.popup.is_open() {
            return InputContext::Popup(self.popup.current.clone());
        }

        match self.get_mode() {
            Mode::Player => InputContext::Player,
            _ if self.get_pane() == Pane::Search => InputContext::Search,
            _ => InputContext::Browse,
        }
    }

    pub fn app_name(&self) -> &str {
        &self.catalog.app.name
    }

    pub fn tagline(&self) -> &str {
        &self.catalog.app.tagline
    }

    // ==================
    //      PLAYBACK
    // ==================

    /// Refresh the read-only playback snapshot. The controller stays the
    /// single writer of transport state.
    pub fn publish_playback(&mut self, snapshot: PlaybackState, now_playing: Option<Arc<VideoEntry>>) {
        self.playback.snapshot = snapshot;
        self.playback.now_playing = now_playing;
    }

    pub fn get_now_playing(&self) -> Option<&Arc<VideoEntry>> {
        self.playback.now_playing.as_ref()
    }

    // ==================
    //   POPUPS & NOTICES
    // ==================

    pub fn set_error(&mut self, e: Error) {
        self.show_popup(PopupType::Error(e.to_string()));
    }

    pub fn show_popup(&mut self, popup: PopupType) {
        self.popup.current = popup;
        self.display_state.pane = Pane::Popup;
    }

    pub fn close_popup(&mut self) {
        self.popup.close();
        self.display_state.pane = match self.get_mode() {
            Mode::Search => Pane::Search,
            _ => Pane::VideoList,
        };
    }

    /// Transient status-line message, self-expiring.
    pub fn set_notice(&mut self, message: String) {
        self.notice = Some((message, Instant::now() + NOTICE_TTL));
    }

    pub fn active_notice(&mut self) -> Option<&str> {
        if matches!(&self.notice, Some((_, expiry)) if *expiry <= Instant::now()) {
            self.notice = None;
        }
        self.notice.as_ref().map(|(message, _)| message.as_str())
    }

    pub fn soft_reset(&mut self) {
        if self.popup.is_open() {
            self.close_popup();
        }

        if self.get_mode() == &Mode::Search {
            self.set_mode(Mode::Browse);
        }

        self.search_input_clear();
        self.set_legal_videos();
    }

    // ==================
    //       THEME
    // ==================

    pub fn toggle_theme(&mut self) -> Result<()> {
        let kind = self.theme.kind.toggled();
        self.theme = Theme::new(kind);
        self.db.save_theme(kind.as_str())?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> UiState {
        let catalog = Catalog::from_toml(
            r#"
            [app]
            categories = ["All", "New"]
            videos_per_page = 2

            [[videos]]
            title = "Alpha Ocean"
            url = "/media/alpha.mp4"
            category = ["New"]
            featured = true

            [[videos]]
            title = "Beta River"
            url = "/media/beta.mp4"

            [[videos]]
            title = "Gamma Lake"
            url = "/media/gamma.mp4"
            "#,
        )
        .unwrap();

        UiState::new(Arc::new(catalog), Database::open_in_memory().unwrap())
    }

    #[test]
    fn pagination_follows_the_configured_page_size() {
        let mut state = test_state();

        assert_eq!(state.page_count(), 2);
        assert_eq!(state.visible_page().len(), 2);

        state.next_page();
        assert_eq!(state.visible_page().len(), 1);
        assert_eq!(state.visible_page()[0].get_title(), "Gamma Lake");

        // No page beyond the last
        state.next_page();
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn category_filters_narrow_the_list() {
        let mut state = test_state();

        // Featured pseudo-category
        state.select_category(1);
        assert_eq!(state.legal_videos.len(), 1);
        assert_eq!(state.legal_videos[0].get_title(), "Alpha Ocean");

        // Configured category
        let custom_idx = state
            .category_filters()
            .iter()
            .position(|f| f.label() == "New")
            .unwrap();
        state.select_category(custom_idx);
        assert_eq!(state.legal_videos.len(), 1);
    }

    #[test]
    fn watch_later_filter_tracks_toggles() {
        let mut state = test_state();

        state.toggle_watch_later().unwrap(); // Alpha Ocean, first row
        assert_eq!(state.watch_later_count(), 1);

        state.select_category(2); // Watch Later view
        assert_eq!(state.legal_videos.len(), 1);
        assert_eq!(state.legal_videos[0].get_title(), "Alpha Ocean");

        // Toggling inside the view empties it and fixes the selection
        state.toggle_watch_later().unwrap();
        assert!(state.legal_videos.is_empty());
        assert_eq!(state.display_state.table_pos.selected(), None);
    }

    #[test]
    fn fuzzy_search_ranks_titles() {
        let mut state = test_state();

        state.set_mode(Mode::Search);
        for key in "gamma".chars() {
            state.process_search(ratatui::crossterm::event::KeyEvent::new(
                ratatui::crossterm::event::KeyCode::Char(key),
                ratatui::crossterm::event::KeyModifiers::NONE,
            ));
        }

        assert_eq!(state.legal_videos.len(), 1);
        assert_eq!(state.legal_videos[0].get_title(), "Gamma Lake");
    }
}
