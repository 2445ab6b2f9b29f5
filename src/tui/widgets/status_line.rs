use crate::ui_state::UiState;
use ratatui::{
    style::Stylize,
    text::Line,
    widgets::{Paragraph, StatefulWidget, Widget},
};

const BROWSE_KEYMAPS: &str =
    " [enter] play ✧ [w] watch later ✧ [/] search ✧ [tab] category ✧ [h/l] page ✧ [q] quit ";

pub struct StatusLine;

impl StatefulWidget for StatusLine {
    type State = UiState;
    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let accent = state.theme.accent;
        let faded = state.theme.text_faded;

        let line = match state.active_notice() {
            Some(notice) => Line::from(format!(" {notice} ")).fg(accent),
            None => Line::from(BROWSE_KEYMAPS).fg(faded),
        };

        Paragraph::new(line).render(area, buf);
    }
}
