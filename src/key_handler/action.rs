use crate::{
    REFRESH_RATE,
    app_core::DriveStream,
    key_handler::*,
    ui_state::{Mode, Pane, PopupType, UiState},
};
use anyhow::Result;
use ratatui::{
    crossterm::event::{self, Event, KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind},
    layout::Position,
};
use std::time::Instant;

use KeyCode::*;

pub fn handle_key_event(key_event: KeyEvent, state: &UiState) -> Option<Action> {
    if let Some(action) = global_commands(&key_event) {
        return Some(action);
    }

    match state.get_input_context() {
        InputContext::Popup(popup) => handle_popup(&key_event, &popup),
        InputContext::Player => handle_player(&key_event),
        InputContext::Search => handle_search_pane(&key_event),
        InputContext::Browse => handle_browse(&key_event),
    }
}

/// Mouse input only matters inside the playback view: clicks on the bare
/// surface are primary gestures, clicks on the control bar hit whichever
/// control they land on, and movement counts as activity.
pub fn handle_mouse_event(mouse: MouseEvent, state: &UiState) -> Option<Action> {
    if state.get_mode() != &Mode::Player || state.popup.is_open() {
        return None;
    }

    let regions = state.playback.regions?;
    let pos = Position::new(mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(fraction) = regions.progress_fraction(pos) {
                return Some(Action::SeekToFraction(fraction));
            }

            match pos {
                p if regions.btn_play.contains(p) => Some(Action::TogglePlay),
                p if regions.btn_skip_back.contains(p) => Some(Action::Skip(-SKIP_SMALL)),
                p if regions.btn_skip_fwd.contains(p) => Some(Action::Skip(SKIP_SMALL)),
                p if regions.btn_speed.contains(p) => Some(Action::OpenSpeedMenu),
                p if regions.btn_mute.contains(p) => Some(Action::ToggleMute),
                p if regions.btn_fullscreen.contains(p) => Some(Action::ToggleFullscreen),
                // The rest of the control bar swallows the click
                p if regions.on_controls(p) => Some(Action::NoteActivity),
                p if regions.on_surface(p) => Some(Action::PrimaryGesture),
                _ => None,
            }
        }
        MouseEventKind::Moved => Some(Action::NoteActivity),
        _ => None,
    }
}

fn global_commands(key: &KeyEvent) -> Option<Action> {
    match (key.modifiers, key.code) {
        (C, Char('c')) => Some(Action::QUIT),
        (C, Char('t')) => Some(Action::ToggleTheme),
        _ => None,
    }
}

fn handle_browse(key: &KeyEvent) -> Option<Action> {
    match (key.modifiers, key.code) {
        (X, Enter) => Some(Action::OpenPlayer),
        (X, Char('w')) => Some(Action::ToggleWatchLater),
        (X, Char('/')) => Some(Action::OpenSearch),

        // SCROLLING
        (X, Char('j')) | (X, Down) => Some(Action::Scroll(Director::Down(1))),
        (X, Char('k')) | (X, Up) => Some(Action::Scroll(Director::Up(1))),
        (X, Char('d')) => Some(Action::Scroll(Director::Down(SCROLL_MID))),
        (X, Char('u')) => Some(Action::Scroll(Director::Up(SCROLL_MID))),
        (X, Char('g')) => Some(Action::Scroll(Director::Top)),
        (S, Char('G')) => Some(Action::Scroll(Director::Bottom)),

        // PAGES & CATEGORIES
        (X, Char('l')) | (X, Right) => Some(Action::NextPage),
        (X, Char('h')) | (X, Left) => Some(Action::PrevPage),
        (X, Tab) | (X, Char(']')) => Some(Action::CycleCategory(true)),
        (S, BackTab) | (X, Char('[')) => Some(Action::CycleCategory(false)),

        (X, Esc) => Some(Action::SoftReset),
        (X, Char('q')) => Some(Action::QUIT),
        _ => None,
    }
}

fn handle_player(key: &KeyEvent) -> Option<Action> {
    match (key.modifiers, key.code) {
        (X, Char(' ')) | (X, Char('k')) => Some(Action::TogglePlay),

        (X, Char('l')) | (X, Right) => Some(Action::Skip(SKIP_SMALL)),
        (X, Char('j')) | (X, Left) => Some(Action::Skip(-SKIP_SMALL)),
        (S, Right) => Some(Action::Skip(SKIP_LARGE)),
        (S, Left) => Some(Action::Skip(-SKIP_LARGE)),

        (X, Up) => Some(Action::VolumeUp),
        (X, Down) => Some(Action::VolumeDown),
        (X, Char('m')) => Some(Action::ToggleMute),
        (X, Char('f')) => Some(Action::ToggleFullscreen),
        (X, Char('s')) => Some(Action::OpenSpeedMenu),

        // Digit keys jump to that tenth of the video
        (X, Char(c)) if c.is_ascii_digit() => {
            let tenth = c.to_digit(10).unwrap_or(0) as f32;
            Some(Action::SeekToFraction(tenth / 10.0))
        }

        (X, Esc) | (X, Char('q')) => Some(Action::ClosePlayer),
        _ => None,
    }
}

fn handle_search_pane(key: &KeyEvent) -> Option<Action> {
    match (key.modifiers, key.code) {
        (X, Tab) | (X, Enter) => Some(Action::SendSearch),
        (X, Esc) => Some(Action::SoftReset),
        _ => Some(Action::UpdateSearch(*key)),
    }
}

fn handle_popup(key: &KeyEvent, popup: &PopupType) -> Option<Action> {
    match popup {
        PopupType::Error(_) => Some(Action::ClosePopup),

        // Declining the age gate ends the session
        PopupType::AgeGate => match key.code {
            Enter | Char('y') => Some(Action::AgeConfirm),
            Esc | Char('n') | Char('q') => Some(Action::QUIT),
            _ => None,
        },

        PopupType::SpeedMenu { .. } => match key.code {
            Up | Char('k') => Some(Action::SpeedMenuScroll(false)),
            Down | Char('j') => Some(Action::SpeedMenuScroll(true)),
            Enter => Some(Action::SpeedMenuConfirm),
            Esc | Char('q') => Some(Action::ClosePopup),
            _ => None,
        },

        PopupType::None => None,
    }
}

pub fn next_event() -> Result<Option<Event>> {
    match event::poll(REFRESH_RATE)? {
        true => Ok(Some(event::read()?)),
        false => Ok(None),
    }
}

impl DriveStream {
    #[rustfmt::skip]
    pub fn handle_action(&mut self, action: Action) -> Result<()> {
        match action {
            // Transport
            Action::TogglePlay        => self.controller.toggle_play(),
            Action::Skip(delta)       => self.controller.skip(delta),
            Action::SeekToFraction(f) => self.controller.seek_to_fraction(f),
            Action::ToggleMute        => self.controller.toggle_mute(),
            Action::ToggleFullscreen  => self.controller.toggle_fullscreen(),
            Action::PrimaryGesture    => self.controller.handle_primary_gesture(Instant::now()),
            Action::NoteActivity      => self.controller.note_activity(Instant::now()),

            Action::VolumeUp => {
                let volume = self.controller.state().volume;
                self.controller.set_volume(volume + VOLUME_STEP);
            }
            Action::VolumeDown => {
                let volume = self.controller.state().volume;
                self.controller.set_volume(volume - VOLUME_STEP);
            }

            Action::OpenSpeedMenu => {
                let rate = self.controller.state().playback_rate;
                self.ui.popup.open_speed_menu(rate);
                self.ui.set_pane(Pane::Popup);
            }
            Action::SpeedMenuScroll(down) => self.ui.popup.speed_menu_scroll(down),
            Action::SpeedMenuConfirm => {
                if let Some(rate) = self.ui.popup.speed_menu_choice() {
                    self.controller.set_playback_rate(rate)?;
                }
                self.ui.close_popup();
            }

            Action::OpenPlayer  => self.open_player()?,
            Action::ClosePlayer => self.close_player()?,

            // Browsing
            Action::Scroll(director)  => match director {
                Director::Up(n)   => self.ui.scroll(-(n as isize)),
                Director::Down(n) => self.ui.scroll(n as isize),
                Director::Top     => self.ui.scroll_to_edge(true),
                Director::Bottom  => self.ui.scroll_to_edge(false),
            },
            Action::NextPage          => self.ui.next_page(),
            Action::PrevPage          => self.ui.prev_page(),
            Action::CycleCategory(fwd)=> self.ui.cycle_category(fwd),
            Action::ToggleWatchLater  => self.ui.toggle_watch_later()?,

            // Search
            Action::UpdateSearch(k)   => self.ui.process_search(k),
            Action::SendSearch        => self.ui.send_search(),
            Action::OpenSearch        => self.ui.set_mode(Mode::Search),

            // Ops
            Action::ToggleTheme       => self.ui.toggle_theme()?,
            Action::AgeConfirm => {
                self.ui.db.set_age_verified()?;
                self.ui.close_popup();
            }
            Action::ClosePopup        => self.ui.close_popup(),
            Action::SoftReset         => self.ui.soft_reset(),
            Action::QUIT              => self.ui.set_mode(Mode::QUIT),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn player_keys_map_to_transport_actions() {
        assert_eq!(handle_player(&key(Char(' '))), Some(Action::TogglePlay));
        assert_eq!(handle_player(&key(Left)), Some(Action::Skip(-10.0)));
        assert_eq!(handle_player(&key(Char('f'))), Some(Action::ToggleFullscreen));
        assert_eq!(handle_player(&key(Char('5'))), Some(Action::SeekToFraction(0.5)));
        assert_eq!(handle_player(&key(Esc)), Some(Action::ClosePlayer));
    }

    #[test]
    fn age_gate_only_accepts_or_quits() {
        let gate = PopupType::AgeGate;

        assert_eq!(handle_popup(&key(Enter), &gate), Some(Action::AgeConfirm));
        assert_eq!(handle_popup(&key(Esc), &gate), Some(Action::QUIT));
        assert_eq!(handle_popup(&key(Char('x')), &gate), None);
    }

    #[test]
    fn search_pane_forwards_typing() {
        let typed = key(Char('a'));
        assert_eq!(
            handle_search_pane(&typed),
            Some(Action::UpdateSearch(typed))
        );
        assert_eq!(handle_search_pane(&key(Enter)), Some(Action::SendSearch));
    }
}
