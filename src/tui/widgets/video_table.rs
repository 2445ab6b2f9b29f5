use crate::{
    domain::VideoInfo,
    truncate_at_last_space,
    ui_state::{Pane, UiState},
};
use ratatui::{
    layout::{Alignment, Constraint},
    style::{Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, Padding, Row, StatefulWidget, Table},
};

const COLUMN_SPACING: u16 = 2;

const PADDING: Padding = Padding {
    left: 2,
    right: 2,
    top: 1,
    bottom: 0,
};

pub struct VideoTable;

impl StatefulWidget for VideoTable {
    type State = UiState;
    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let theme = &state.theme;
        let max_title = (area.width as usize * 2 / 3).max(20);

        let rows: Vec<Row> = state
            .visible_page()
            .iter()
            .map(|video| {
                let marker = match state.is_watch_later(video.get_id()) {
                    true => "◆",
                    false => " ",
                };
                let featured = match video.is_featured() {
                    true => "★",
                    false => " ",
                };

                Row::new([
                    marker.to_string(),
                    truncate_at_last_space(video.get_title(), max_title),
                    video.get_duration_str(),
                    video.resolution().unwrap_or_default().to_string(),
                    featured.to_string(),
                ])
            })
            .collect();

        let title = Line::from(format!(
            " {} [{}/{}] ",
            state.current_filter().label(),
            state.current_page() + 1,
            state.page_count(),
        ))
        .fg(theme.text_highlighted);

        let highlight_style = match state.get_pane() {
            Pane::VideoList => Style::new().fg(theme.text_highlighted).bg(theme.bar_inactive),
            _ => Style::new(),
        };

        let table = Table::new(
            rows,
            [
                Constraint::Length(1),
                Constraint::Fill(1),
                Constraint::Length(8),
                Constraint::Length(10),
                Constraint::Length(1),
            ],
        )
        .header(
            Row::new(["", "Title", "Length", "Quality", ""])
                .style(Style::new().fg(theme.text_faded)),
        )
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .title_top(title.alignment(Alignment::Center))
                .padding(PADDING)
                .fg(theme.text_secondary),
        )
        .column_spacing(COLUMN_SPACING)
        .style(Style::new().fg(theme.text_primary))
        .row_highlight_style(highlight_style);

        StatefulWidget::render(table, area, buf, &mut state.display_state.table_pos);
    }
}
