use super::{
    AppLayout, PlayerLayout,
    widgets::{
        AgeGatePopup, ControlBar, ErrorMsg, PlayerHeader, PlayerSurface, SearchBar, SideBar,
        SpeedMenuPopup, StatusLine, VideoTable,
    },
};
use crate::ui_state::{Mode, PopupType, UiState};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Stylize,
    widgets::{Block, Clear, StatefulWidget, Widget},
};

pub fn render(f: &mut Frame, state: &mut UiState) {
    Block::new()
        .bg(state.theme.bg_global)
        .render(f.area(), f.buffer_mut());

    match state.get_mode() {
        Mode::Player => render_player(f, state),
        _ => render_browse(f, state),
    }

    if state.popup.is_open() {
        let popup_rect = match &state.popup.current {
            PopupType::Error(_) => centered_rect(40, 30, f.area()),
            PopupType::AgeGate => centered_rect(45, 35, f.area()),
            PopupType::SpeedMenu { .. } => centered_rect(20, 40, f.area()),
            PopupType::None => return,
        };

        Clear.render(popup_rect, f.buffer_mut());
        match &state.popup.current {
            PopupType::Error(_) => ErrorMsg.render(popup_rect, f.buffer_mut(), state),
            PopupType::AgeGate => AgeGatePopup.render(popup_rect, f.buffer_mut(), state),
            PopupType::SpeedMenu { .. } => {
                SpeedMenuPopup.render(popup_rect, f.buffer_mut(), state)
            }
            PopupType::None => (),
        }
    }
}

fn render_browse(f: &mut Frame, state: &mut UiState) {
    let layout = AppLayout::new(f.area(), state);
    state.playback.regions = None;

    SideBar.render(layout.sidebar, f.buffer_mut(), state);
    if state.get_mode() == &Mode::Search {
        SearchBar.render(layout.search_bar, f.buffer_mut(), state);
    }
    VideoTable.render(layout.video_window, f.buffer_mut(), state);
    StatusLine.render(layout.status_line, f.buffer_mut(), state);
}

fn render_player(f: &mut Frame, state: &mut UiState) {
    let snapshot = state.playback.snapshot;

    // Fullscreen drops the header; the control bar stays hidden only
    // while playing with no recent activity
    let show_header = !snapshot.is_fullscreen;
    let show_controls = snapshot.controls_visible || !snapshot.is_playing;

    let layout = PlayerLayout::new(f.area(), show_header, show_controls);
    state.playback.regions = Some(layout.regions);

    if show_header {
        PlayerHeader.render(layout.header, f.buffer_mut(), state);
    }
    PlayerSurface.render(layout.surface, f.buffer_mut(), state);
    if show_controls {
        ControlBar.render(layout.controls, f.buffer_mut(), state);
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}
