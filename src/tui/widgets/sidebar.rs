use crate::ui_state::{CategoryFilter, UiState};
use ratatui::{
    style::{Style, Stylize},
    widgets::{Block, BorderType, List, StatefulWidget},
};

pub struct SideBar;

impl StatefulWidget for SideBar {
    type State = UiState;
    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let items: Vec<String> = state
            .category_filters()
            .iter()
            .map(|filter| match filter {
                CategoryFilter::WatchLater => {
                    format!("{} ({})", filter.label(), state.watch_later_count())
                }
                other => other.label().to_string(),
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .title(format!(" {} ", state.app_name()))
                    .title_bottom(format!(" {} ", state.tagline()))
                    .fg(state.theme.text_secondary),
            )
            .style(Style::new().fg(state.theme.text_primary))
            .highlight_style(Style::new().fg(state.theme.accent).bold())
            .highlight_symbol("▸ ");

        StatefulWidget::render(list, area, buf, &mut state.display_state.category_pos);
    }
}
