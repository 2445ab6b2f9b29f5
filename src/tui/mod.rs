mod layout;
mod renderer;
mod widgets;

pub use layout::{AppLayout, PlayerLayout};
pub use renderer::render;
