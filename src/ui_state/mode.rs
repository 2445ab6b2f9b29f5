use std::sync::Arc;

#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub enum Mode {
    #[default]
    Browse,
    Search,
    Player,
    QUIT,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Browse => "browse",
            Mode::Search => "search",
            Mode::Player => "player",
            Mode::QUIT => "quit",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "search" => Mode::Search,
            // A restored session never starts inside the player
            _ => Mode::Browse,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Pane {
    VideoList,
    Search,
    Popup,
}

/// What the video list is currently filtered by. Watch Later and Featured
/// behave as pseudo-categories alongside the configured ones.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub enum CategoryFilter {
    #[default]
    All,
    Featured,
    WatchLater,
    Custom(Arc<String>),
}

impl CategoryFilter {
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Featured => "Featured",
            CategoryFilter::WatchLater => "Watch Later",
            CategoryFilter::Custom(name) => name.as_str(),
        }
    }
}
