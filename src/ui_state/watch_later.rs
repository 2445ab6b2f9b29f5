use super::UiState;
use crate::domain::VideoInfo;
use anyhow::Result;

impl UiState {
    pub fn is_watch_later(&self, video_id: u64) -> bool {
        self.watch_later.contains(&video_id)
    }

    pub fn watch_later_count(&self) -> usize {
        self.watch_later.len()
    }

    /// Toggle the selected video's Watch Later membership, persisting the
    /// change immediately.
    pub fn toggle_watch_later(&mut self) -> Result<()> {
        let video = self.get_selected_video()?;
        self.toggle_watch_later_id(video.get_id(), video.get_title().to_string())
    }

    pub fn toggle_watch_later_id(&mut self, video_id: u64, title: String) -> Result<()> {
        match self.db.toggle_watch_later(video_id)? {
            true => {
                self.watch_later.insert(video_id);
                self.set_notice(format!("Added to Watch Later: {title}"));
            }
            false => {
                self.watch_later.remove(&video_id);
                self.set_notice(format!("Removed from Watch Later: {title}"));
            }
        }

        // The Watch Later view filters on membership, so refresh in place
        self.set_legal_videos();
        Ok(())
    }
}
