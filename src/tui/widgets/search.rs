use crate::ui_state::UiState;
use ratatui::{
    style::Stylize,
    widgets::{Block, BorderType, StatefulWidget, Widget},
};

pub struct SearchBar;

impl StatefulWidget for SearchBar {
    type State = UiState;
    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let accent = state.theme.accent;
        let search = state.get_search_widget();
        search.set_block(
            Block::bordered()
                .border_type(BorderType::Thick)
                .fg(accent),
        );

        search.render(area, buf);
    }
}
