use crate::ui_state::{Mode, PlayerRegions, UiState};
use ratatui::layout::{Constraint, Layout, Rect};

pub struct AppLayout {
    pub sidebar: Rect,
    pub search_bar: Rect,
    pub video_window: Rect,
    pub status_line: Rect,
}

impl AppLayout {
    pub fn new(area: Rect, state: &UiState) -> Self {
        let search_height = match state.get_mode() == &Mode::Search {
            true => 3,
            false => 0,
        };

        let [upper_block, status_line] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let [sidebar, _, upper_block] = Layout::horizontal([
            Constraint::Length(24),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(upper_block);

        let [search_bar, video_window] = Layout::vertical([
            Constraint::Length(search_height),
            Constraint::Fill(1),
        ])
        .areas(upper_block);

        AppLayout {
            sidebar,
            search_bar,
            video_window,
            status_line,
        }
    }
}

/// Playback view layout. The hit regions it computes are published to the
/// ui state every frame so mouse input lands on the same cells that were
/// drawn.
pub struct PlayerLayout {
    pub header: Rect,
    pub surface: Rect,
    pub controls: Rect,
    pub regions: PlayerRegions,
}

impl PlayerLayout {
    pub fn new(area: Rect, show_header: bool, show_controls: bool) -> Self {
        let header_height = match show_header {
            true => 1,
            false => 0,
        };
        let controls_height = match show_controls {
            true => 2,
            false => 0,
        };

        let [header, surface, controls] = Layout::vertical([
            Constraint::Length(header_height),
            Constraint::Fill(1),
            Constraint::Length(controls_height),
        ])
        .areas(area);

        let regions = match show_controls {
            true => Self::control_regions(area, controls),
            false => PlayerRegions {
                surface: area,
                ..Default::default()
            },
        };

        PlayerLayout {
            header,
            surface,
            controls,
            regions,
        }
    }

    fn control_regions(area: Rect, controls: Rect) -> PlayerRegions {
        let [progress, buttons] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(controls);

        let [btn_skip_back, btn_play, btn_skip_fwd, _timer, btn_speed, btn_mute, btn_fullscreen] =
            Layout::horizontal([
                Constraint::Length(7),
                Constraint::Length(7),
                Constraint::Length(7),
                Constraint::Fill(1),
                Constraint::Length(8),
                Constraint::Length(8),
                Constraint::Length(8),
            ])
            .areas(buttons);

        PlayerRegions {
            surface: area,
            controls,
            progress,
            btn_play,
            btn_skip_back,
            btn_skip_fwd,
            btn_speed,
            btn_mute,
            btn_fullscreen,
        }
    }
}
