mod video;

pub use video::{VideoEntry, VideoInfo};
