use crate::{domain::VideoInfo, ui_state::UiState};
use ratatui::{
    layout::Alignment,
    style::Stylize,
    text::{Line, Span},
    widgets::{Block, Padding, Paragraph, StatefulWidget, Widget},
};

pub struct PlayerHeader;

impl StatefulWidget for PlayerHeader {
    type State = UiState;
    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let theme = &state.theme;
        let title = state
            .get_now_playing()
            .map(|v| v.get_title().to_string())
            .unwrap_or_default();

        let line = Line::from_iter([
            Span::from(format!(" {} ", state.app_name())).fg(theme.accent).bold(),
            Span::from("✧ ").fg(theme.text_faded),
            Span::from(title).fg(theme.text_highlighted),
        ]);

        Paragraph::new(line).left_aligned().render(area, buf);
    }
}

pub struct PlayerSurface;

impl StatefulWidget for PlayerSurface {
    type State = UiState;
    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let theme = &state.theme;
        let snapshot = state.playback.snapshot;

        let message: Line = match (snapshot.is_ready(), snapshot.is_playing) {
            (false, _) => Line::from("Preparing stream ...").fg(theme.text_faded),
            (true, false) => Line::from_iter([
                Span::from("⏸ Paused ").fg(theme.text_highlighted),
                Span::from("(space to resume)").fg(theme.text_faded),
            ]),
            (true, true) => {
                let detail = state
                    .get_now_playing()
                    .and_then(|v| v.resolution().map(str::to_string))
                    .unwrap_or_default();

                Line::from_iter([
                    Span::from("▶ ").fg(theme.accent),
                    Span::from(detail).fg(theme.text_faded),
                ])
            }
        };

        // Center the status vertically on the otherwise empty surface
        let top = area.height.saturating_sub(1) / 2;

        Paragraph::new(message)
            .alignment(Alignment::Center)
            .block(Block::new().padding(Padding::new(0, 0, top, 0)))
            .render(area, buf);
    }
}
