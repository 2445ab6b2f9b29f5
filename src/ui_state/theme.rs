use ratatui::style::Color;

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
}

impl ThemeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeKind::Dark => "dark",
            ThemeKind::Light => "light",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "light" => ThemeKind::Light,
            _ => ThemeKind::Dark,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeKind::Dark => ThemeKind::Light,
            ThemeKind::Light => ThemeKind::Dark,
        }
    }
}

pub struct Theme {
    pub kind: ThemeKind,
    pub bg_global: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_faded: Color,
    pub text_highlighted: Color,
    pub accent: Color,
    pub bar_active: Color,
    pub bar_inactive: Color,
}

impl Theme {
    pub fn new(kind: ThemeKind) -> Self {
        match kind {
            ThemeKind::Dark => Theme {
                kind,
                bg_global: Color::Rgb(16, 16, 24),
                text_primary: Color::Rgb(220, 220, 230),
                text_secondary: Color::Rgb(170, 170, 190),
                text_faded: Color::DarkGray,
                text_highlighted: Color::Rgb(250, 250, 255),
                accent: Color::Rgb(230, 57, 70),
                bar_active: Color::Rgb(230, 57, 70),
                bar_inactive: Color::Rgb(60, 60, 75),
            },
            ThemeKind::Light => Theme {
                kind,
                bg_global: Color::Rgb(245, 245, 248),
                text_primary: Color::Rgb(30, 30, 40),
                text_secondary: Color::Rgb(70, 70, 90),
                text_faded: Color::Gray,
                text_highlighted: Color::Rgb(10, 10, 20),
                accent: Color::Rgb(200, 40, 55),
                bar_active: Color::Rgb(200, 40, 55),
                bar_inactive: Color::Rgb(200, 200, 210),
            },
        }
    }
}
