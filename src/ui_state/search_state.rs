use super::{Pane, UiState, new_textarea};
use crate::domain::{VideoEntry, VideoInfo};
use fuzzy_matcher::{FuzzyMatcher, skim::SkimMatcherV2};
use ratatui::crossterm::event::KeyEvent;
use std::sync::Arc;
use tui_textarea::TextArea;
use unicode_normalization::UnicodeNormalization;

const MATCH_THRESHOLD: i64 = 50;

pub(super) struct SearchState {
    pub input: TextArea<'static>,
    matcher: SkimMatcherV2,
}

impl SearchState {
    pub fn new() -> Self {
        SearchState {
            input: new_textarea("Search videos"),
            matcher: SkimMatcherV2::default(),
        }
    }
}

fn normalize(text: &str) -> String {
    text.nfc().collect::<String>().to_lowercase()
}

impl UiState {
    /// Rank the given videos against the query, best match first. Entries
    /// under the score threshold drop out.
    pub(super) fn rank_by_search(
        &self,
        videos: Vec<Arc<VideoEntry>>,
        query: &str,
    ) -> Vec<Arc<VideoEntry>> {
        let query = normalize(query);

        let mut scored: Vec<(Arc<VideoEntry>, i64)> = videos
            .into_iter()
            .filter_map(|video| {
                self.search
                    .matcher
                    .fuzzy_match(&normalize(video.get_title()), &query)
                    .filter(|&score| score > MATCH_THRESHOLD)
                    .map(|score| (video, score))
            })
            .collect();

        scored.sort_by(|a, b| b.1.cmp(&a.1));

        scored.into_iter().map(|(video, _)| video).collect()
    }

    pub fn get_search_widget(&mut self) -> &mut TextArea<'static> {
        &mut self.search.input
    }

    pub fn read_search(&self) -> &str {
        &self.search.input.lines()[0]
    }

    pub(super) fn search_input_clear(&mut self) {
        self.search.input.select_all();
        self.search.input.cut();
    }

    pub fn process_search(&mut self, k: KeyEvent) {
        self.search.input.input(k);
        self.display_state.page = 0;
        self.set_legal_videos();

        match self.legal_videos.is_empty() {
            true => self.display_state.table_pos.select(None),
            false => self.display_state.table_pos.select(Some(0)),
        }
    }

    pub fn send_search(&mut self) {
        match !self.legal_videos.is_empty() {
            true => self.set_pane(Pane::VideoList),
            false => self.soft_reset(),
        }
    }
}
