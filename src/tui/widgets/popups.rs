use super::POPUP_PADDING;
use crate::{
    player::PLAYBACK_RATES,
    ui_state::{PopupType, UiState},
};
use ratatui::{
    layout::Alignment,
    style::{Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, List, ListState, Paragraph, StatefulWidget, Widget, Wrap},
};

pub struct ErrorMsg;

impl StatefulWidget for ErrorMsg {
    type State = UiState;
    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let message = match &state.popup.current {
            PopupType::Error(e) => e.as_str(),
            _ => "No error to display",
        };

        Paragraph::new(message.to_string())
            .wrap(Wrap { trim: true })
            .centered()
            .block(
                Block::bordered()
                    .border_type(BorderType::Double)
                    .title_bottom(" Press any key to dismiss ")
                    .title_alignment(Alignment::Center)
                    .padding(POPUP_PADDING),
            )
            .fg(state.theme.text_highlighted)
            .bg(ratatui::style::Color::LightRed)
            .render(area, buf);
    }
}

pub struct AgeGatePopup;

impl StatefulWidget for AgeGatePopup {
    type State = UiState;
    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let theme = &state.theme;

        let lines = vec![
            Line::from(state.app_name().to_string()).fg(theme.accent).bold(),
            Line::default(),
            Line::from("This catalog is restricted to adults.").fg(theme.text_primary),
            Line::from("You must be 18 or older to continue.").fg(theme.text_primary),
            Line::default(),
            Line::from("[enter] I am 18 or older    [esc] leave").fg(theme.text_faded),
        ];

        Paragraph::new(lines)
            .centered()
            .block(
                Block::bordered()
                    .border_type(BorderType::Thick)
                    .border_style(Style::new().fg(theme.accent))
                    .padding(POPUP_PADDING)
                    .bg(theme.bg_global),
            )
            .render(area, buf);
    }
}

pub struct SpeedMenuPopup;

impl StatefulWidget for SpeedMenuPopup {
    type State = UiState;
    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let theme = &state.theme;
        let selected = match state.popup.current {
            PopupType::SpeedMenu { selected } => selected,
            _ => 2,
        };

        let items: Vec<String> = PLAYBACK_RATES.iter().map(|r| format!(" {r}x ")).collect();
        let mut pos = ListState::default().with_selected(Some(selected));

        let list = List::new(items)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .title(" Speed ")
                    .title_alignment(Alignment::Center)
                    .padding(POPUP_PADDING)
                    .fg(theme.text_secondary)
                    .bg(theme.bg_global),
            )
            .style(Style::new().fg(theme.text_primary))
            .highlight_style(Style::new().fg(theme.accent).bold())
            .highlight_symbol("▸");

        StatefulWidget::render(list, area, buf, &mut pos);
    }
}
