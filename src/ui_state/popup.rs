use crate::player::PLAYBACK_RATES;

#[derive(Clone, Default, PartialEq, Debug)]
pub enum PopupType {
    #[default]
    None,
    Error(String),
    AgeGate,
    SpeedMenu {
        selected: usize,
    },
}

pub struct PopupState {
    pub current: PopupType,
}

impl PopupState {
    pub fn new() -> Self {
        PopupState {
            current: PopupType::None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.current != PopupType::None
    }

    pub fn close(&mut self) {
        self.current = PopupType::None;
    }

    /// Open the speed menu with the current rate preselected.
    pub fn open_speed_menu(&mut self, current_rate: f32) {
        let selected = PLAYBACK_RATES
            .iter()
            .position(|r| *r == current_rate)
            .unwrap_or(2);

        self.current = PopupType::SpeedMenu { selected };
    }

    pub fn speed_menu_scroll(&mut self, down: bool) {
        if let PopupType::SpeedMenu { selected } = &mut self.current {
            *selected = match down {
                true => (*selected + 1) % PLAYBACK_RATES.len(),
                false => selected.checked_sub(1).unwrap_or(PLAYBACK_RATES.len() - 1),
            };
        }
    }

    pub fn speed_menu_choice(&self) -> Option<f32> {
        match self.current {
            PopupType::SpeedMenu { selected } => PLAYBACK_RATES.get(selected).copied(),
            _ => None,
        }
    }
}
