mod app;

pub use app::DriveStream;
