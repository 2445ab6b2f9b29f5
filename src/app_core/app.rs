use crate::{
    Catalog, Database, DurationStyle,
    domain::{VideoEntry, VideoInfo},
    get_readable_duration, key_handler,
    player::{PlaybackController, RodioElement},
    tui,
    ui_state::{Mode, PopupType, UiState},
};
use anyhow::Result;
use ratatui::crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
};
use std::{
    io::stdout,
    sync::Arc,
    time::{Duration, Instant},
};

/// Positions this close to either edge are not worth resuming from.
const RESUME_MIN: Duration = Duration::from_secs(5);
const RESUME_TAIL: Duration = Duration::from_secs(10);

pub struct DriveStream {
    catalog: Arc<Catalog>,
    pub(crate) ui: UiState,
    pub(crate) controller: PlaybackController<RodioElement>,
    now_playing: Option<Arc<VideoEntry>>,
    pending_resume: Option<Duration>,
}

impl DriveStream {
    pub fn new() -> Result<Self> {
        let catalog = Arc::new(Catalog::load()?);
        let db = Database::open()?;

        let element = RodioElement::new()?;
        let controller = PlaybackController::new(element, catalog.app.touch_primary);
        let ui = UiState::new(Arc::clone(&catalog), db);

        Ok(DriveStream {
            catalog,
            ui,
            controller,
            now_playing: None,
            pending_resume: None,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ratatui::init();
        terminal.clear()?;
        execute!(stdout(), EnableMouseCapture)?;

        self.initialize_ui();

        // MAIN ROUTINE
        loop {
            self.controller.tick(Instant::now());
            self.apply_pending_resume();

            match key_handler::next_event()? {
                Some(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    // Keyboard input counts as activity inside the player
                    if self.ui.get_mode() == &Mode::Player {
                        self.controller.note_activity(Instant::now());
                    }

                    if let Some(action) = key_handler::handle_key_event(key, &self.ui) {
                        if let Err(e) = self.handle_action(action) {
                            self.ui.set_error(e);
                        }
                    }
                }
                Some(Event::Mouse(mouse)) => {
                    if let Some(action) = key_handler::handle_mouse_event(mouse, &self.ui) {
                        if let Err(e) = self.handle_action(action) {
                            self.ui.set_error(e);
                        }
                    }
                }
                _ => (),
            }

            self.ui
                .publish_playback(*self.controller.state(), self.now_playing.clone());
            terminal.draw(|f| tui::render(f, &mut self.ui))?;

            if self.ui.get_mode() == &Mode::QUIT {
                self.shutdown()?;
                break;
            }
        }

        execute!(stdout(), DisableMouseCapture)?;
        ratatui::restore();

        Ok(())
    }

    fn initialize_ui(&mut self) {
        self.ui.soft_reset();
        let _ = self.ui.restore_state();

        if self.catalog.is_empty() {
            if let Ok(path) = Catalog::config_path() {
                self.ui
                    .set_notice(format!("No videos yet. Add some to {}", path.display()));
            }
        }

        if self.catalog.app.age_gate && !self.ui.db.is_age_verified().unwrap_or(false) {
            self.ui.show_popup(PopupType::AgeGate);
        }
    }
}

impl DriveStream {
    pub(crate) fn open_player(&mut self) -> Result<()> {
        let video = self.ui.get_selected_video()?;
        let source = video.media_source();

        self.pending_resume = self.ui.db.get_resume(video.get_id())?;

        match self.controller.bind(source) {
            Ok(()) => {
                self.now_playing = Some(Arc::clone(&video));
                self.ui.set_mode(Mode::Player);
                // Autoplay request; playing state waits on the element
                self.controller.toggle_play();
            }
            Err(e) => {
                self.pending_resume = None;
                self.controller.unbind();
                self.ui.set_notice(format!("Not playable: {e}"));
            }
        }

        Ok(())
    }

    pub(crate) fn close_player(&mut self) -> Result<()> {
        if let Some(position) = self.save_resume_position()? {
            self.ui.set_notice(format!(
                "Will resume at {}",
                get_readable_duration(position, DurationStyle::Clean)
            ));
        }

        self.controller.unbind();
        self.now_playing = None;
        self.pending_resume = None;
        self.ui.set_mode(Mode::Browse);

        Ok(())
    }

    /// A stored resume position is applied once, as soon as the element
    /// confirms the duration.
    fn apply_pending_resume(&mut self) {
        let Some(position) = self.pending_resume else {
            return;
        };

        if self.controller.state().is_ready() {
            let current = self.controller.state().current_time;
            self.controller
                .skip(position.as_secs_f32() - current.as_secs_f32());
            self.pending_resume = None;
        }
    }

    /// Returns the stored position, if one was worth keeping.
    fn save_resume_position(&mut self) -> Result<Option<Duration>> {
        let Some(video) = &self.now_playing else {
            return Ok(None);
        };
        let id = video.get_id();
        let state = *self.controller.state();

        let near_end = state
            .duration
            .is_some_and(|d| d.saturating_sub(state.current_time) <= RESUME_TAIL);

        match state.current_time <= RESUME_MIN || near_end {
            true => {
                self.ui.db.clear_resume(id)?;
                Ok(None)
            }
            false => {
                self.ui.db.save_resume(id, state.current_time)?;
                Ok(Some(state.current_time))
            }
        }
    }

    fn shutdown(&mut self) -> Result<()> {
        self.save_resume_position()?;
        self.controller.unbind();

        Ok(())
    }
}
