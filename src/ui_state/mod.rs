mod display_state;
mod mode;
mod playback_view;
mod popup;
mod search_state;
mod theme;
mod ui_snapshot;
mod ui_state;
mod watch_later;

pub use display_state::DisplayState;
pub use mode::{CategoryFilter, Mode, Pane};
pub use playback_view::{PlaybackView, PlayerRegions};
pub use popup::{PopupState, PopupType};
pub use theme::{Theme, ThemeKind};
pub use ui_snapshot::UiSnapshot;
pub use ui_state::UiState;

fn new_textarea(placeholder: &str) -> tui_textarea::TextArea<'static> {
    let mut input = tui_textarea::TextArea::default();
    input.set_cursor_line_style(ratatui::style::Style::default());
    input.set_placeholder_text(format!(" {placeholder}: "));

    input
}
