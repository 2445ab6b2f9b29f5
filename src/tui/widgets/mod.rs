mod control_bar;
mod player_surface;
mod popups;
mod search;
mod sidebar;
mod status_line;
mod video_table;

pub use control_bar::ControlBar;
pub use player_surface::{PlayerHeader, PlayerSurface};
pub use popups::{AgeGatePopup, ErrorMsg, SpeedMenuPopup};
pub use search::SearchBar;
pub use sidebar::SideBar;
pub use status_line::StatusLine;
pub use video_table::VideoTable;

static POPUP_PADDING: ratatui::widgets::Padding = ratatui::widgets::Padding {
    left: 2,
    right: 2,
    top: 1,
    bottom: 1,
};
