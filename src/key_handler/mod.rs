mod action;

pub use action::{handle_key_event, handle_mouse_event, next_event};
use ratatui::crossterm::event::{KeyEvent, KeyModifiers};

use crate::ui_state::PopupType;

const X: KeyModifiers = KeyModifiers::NONE;
const S: KeyModifiers = KeyModifiers::SHIFT;
const C: KeyModifiers = KeyModifiers::CONTROL;

const SKIP_SMALL: f32 = 10.0;
const SKIP_LARGE: f32 = 30.0;
const SCROLL_MID: usize = 5;
const VOLUME_STEP: f32 = 0.05;

#[derive(PartialEq, Debug)]
pub enum Action {
    // Transport
    TogglePlay,
    Skip(f32),
    SeekToFraction(f32),
    VolumeUp,
    VolumeDown,
    ToggleMute,
    ToggleFullscreen,
    PrimaryGesture,
    NoteActivity,

    OpenSpeedMenu,
    SpeedMenuScroll(bool),
    SpeedMenuConfirm,

    OpenPlayer,
    ClosePlayer,

    // Browsing
    Scroll(Director),
    NextPage,
    PrevPage,
    CycleCategory(bool),
    ToggleWatchLater,

    // Search
    UpdateSearch(KeyEvent),
    SendSearch,

    // Display & Other
    OpenSearch,
    ToggleTheme,
    AgeConfirm,
    ClosePopup,
    SoftReset,
    QUIT,
}

pub enum InputContext {
    Browse,
    Search,
    Player,
    Popup(PopupType),
}

#[derive(PartialEq, Eq, Debug)]
pub enum Director {
    Up(usize),
    Down(usize),
    Top,
    Bottom,
}
