use crate::{DurationStyle, get_readable_duration, ui_state::UiState};
use ratatui::{
    style::{Style, Stylize},
    widgets::{LineGauge, Paragraph, StatefulWidget, Widget},
};

pub struct ControlBar;

impl StatefulWidget for ControlBar {
    type State = UiState;
    fn render(
        self,
        _area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        // The layout published these regions just before this render
        let Some(regions) = state.playback.regions else {
            return;
        };

        let theme = &state.theme;
        let snapshot = state.playback.snapshot;

        LineGauge::default()
            .filled_style(Style::new().fg(theme.bar_active))
            .unfilled_style(Style::new().fg(theme.bar_inactive))
            .label("")
            .ratio(snapshot.fraction_played() as f64)
            .render(regions.progress, buf);

        let play_icon = match snapshot.is_playing {
            true => "⏸",
            false => "▶",
        };
        let mute_label = match snapshot.is_muted {
            true => "muted".to_string(),
            false => format!("vol {:.0}", snapshot.volume * 100.0),
        };
        let timer = match snapshot.duration {
            Some(total) => format!(
                "{} / {}",
                get_readable_duration(snapshot.current_time, DurationStyle::Compact),
                get_readable_duration(total, DurationStyle::Compact),
            ),
            None => String::from("--:-- / --:--"),
        };

        let faded = Style::new().fg(theme.text_secondary);

        Paragraph::new("«10").centered().style(faded).render(regions.btn_skip_back, buf);
        Paragraph::new(play_icon)
            .centered()
            .style(Style::new().fg(theme.accent).bold())
            .render(regions.btn_play, buf);
        Paragraph::new("10»").centered().style(faded).render(regions.btn_skip_fwd, buf);

        // The gap between the transport buttons and the right-hand controls
        let timer_rect = ratatui::layout::Rect {
            x: regions.btn_skip_fwd.right(),
            y: regions.btn_skip_fwd.y,
            width: regions.btn_speed.x.saturating_sub(regions.btn_skip_fwd.right()),
            height: regions.btn_skip_fwd.height,
        };
        Paragraph::new(timer)
            .centered()
            .style(Style::new().fg(theme.text_primary))
            .render(timer_rect, buf);

        Paragraph::new(format!("{}x", snapshot.playback_rate))
            .centered()
            .style(faded)
            .render(regions.btn_speed, buf);
        Paragraph::new(mute_label).centered().style(faded).render(regions.btn_mute, buf);

        let fullscreen_label = match snapshot.is_fullscreen {
            true => "window",
            false => "full",
        };
        Paragraph::new(fullscreen_label)
            .centered()
            .style(faded)
            .render(regions.btn_fullscreen, buf);
    }
}
