use super::{ElementSignal, MediaElement, MediaSource};
use crate::expand_tilde;
use anyhow::{Result, anyhow};
use crossbeam_channel::{Sender, unbounded};
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};
use std::{
    fs::File,
    io::BufReader,
    path::PathBuf,
    time::Duration,
};

/// Media element backed by a rodio sink. Decodes local files; remote-only
/// urls fail to load and simply never confirm, which the controller surfaces
/// as "not ready". Fullscreen is acknowledged synchronously since the
/// terminal shell owns the view.
pub struct RodioElement {
    // Keep the stream alive for the lifetime of the element
    _stream: OutputStream,
    sink: Option<Sink>,
    signals: Option<Sender<ElementSignal>>,

    duration: Option<Duration>,
    duration_reported: bool,
    ended_reported: bool,
    last_position: Duration,

    base_volume: f32,
    muted: bool,
}

impl RodioElement {
    pub fn new() -> Result<Self> {
        let stream = OutputStreamBuilder::open_default_stream()?;

        Ok(RodioElement {
            _stream: stream,
            sink: None,
            signals: None,
            duration: None,
            duration_reported: false,
            ended_reported: false,
            last_position: Duration::ZERO,
            base_volume: 1.0,
            muted: false,
        })
    }

    fn emit(&self, signal: ElementSignal) {
        if let Some(tx) = &self.signals {
            let _ = tx.send(signal);
        }
    }

    fn apply_volume(&self) {
        if let Some(sink) = &self.sink {
            sink.set_volume(match self.muted {
                true => 0.0,
                false => self.base_volume,
            });
        }
    }

    fn drop_sink(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
        self.duration = None;
        self.duration_reported = false;
        self.ended_reported = false;
        self.last_position = Duration::ZERO;
    }
}

impl MediaElement for RodioElement {
    fn load(&mut self, source: &MediaSource) -> Result<()> {
        self.drop_sink();

        let path = local_path(&source.stream_url)?;
        let file = File::open(&path)
            .map_err(|e| anyhow!("Cannot open {}: {e}", path.display()))?;
        let decoder = Decoder::new(BufReader::new(file))
            .map_err(|e| anyhow!("Cannot decode {}: {e}", path.display()))?;

        self.duration = decoder.total_duration();

        let sink = Sink::connect_new(self._stream.mixer());
        sink.append(decoder);
        sink.pause();
        self.sink = Some(sink);
        self.apply_volume();

        Ok(())
    }

    fn subscribe(&mut self) -> crossbeam_channel::Receiver<ElementSignal> {
        let (tx, rx) = unbounded();
        self.signals = Some(tx);
        rx
    }

    fn play(&mut self) {
        // An unloaded or drained sink never confirms, by design
        if let Some(sink) = &self.sink {
            if !sink.empty() {
                sink.play();
                self.emit(ElementSignal::Play);
            }
        }
    }

    fn pause(&mut self) {
        if let Some(sink) = &self.sink {
            sink.pause();
            self.emit(ElementSignal::Pause);
        }
    }

    fn seek(&mut self, to: Duration) {
        if let Some(sink) = &self.sink {
            if sink.try_seek(to).is_ok() {
                self.last_position = to;
                self.emit(ElementSignal::TimeUpdate(to));
            }
        }
    }

    fn set_volume(&mut self, volume: f32) {
        self.base_volume = volume.clamp(0.0, 1.0);
        self.apply_volume();
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        self.apply_volume();
    }

    fn set_rate(&mut self, rate: f32) {
        if let Some(sink) = &self.sink {
            sink.set_speed(rate);
        }
    }

    fn request_fullscreen(&mut self, enter: bool) {
        self.emit(ElementSignal::FullscreenChange(enter));
    }

    fn pump(&mut self) {
        let Some(sink) = &self.sink else {
            return;
        };

        if !self.duration_reported {
            if let Some(d) = self.duration {
                self.emit(ElementSignal::DurationKnown(d));
                self.duration_reported = true;
            }
        }

        if sink.empty() {
            if !self.ended_reported {
                self.ended_reported = true;
                self.emit(ElementSignal::Ended);
            }
            return;
        }

        let position = sink.get_pos();
        if position != self.last_position {
            self.last_position = position;
            self.emit(ElementSignal::TimeUpdate(position));
        }
    }
}

/// Resolve a catalog url to a local file path. `file://` urls and plain
/// paths (with optional tilde) are playable; anything remote is not.
fn local_path(stream_url: &str) -> Result<PathBuf> {
    if let Some(rest) = stream_url.strip_prefix("file://") {
        return Ok(PathBuf::from(rest));
    }

    if stream_url.contains("://") {
        return Err(anyhow!(
            "No local decoder for remote media: {stream_url}"
        ));
    }

    expand_tilde(stream_url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_urls_are_rejected() {
        assert!(local_path("https://files.example/clip.mp4").is_err());
        assert!(local_path("moq://relay/feed").is_err());
    }

    #[test]
    fn file_urls_and_paths_resolve() {
        assert_eq!(
            local_path("file:///tmp/clip.mp4").unwrap(),
            PathBuf::from("/tmp/clip.mp4")
        );
        assert_eq!(
            local_path("/tmp/clip.mp4").unwrap(),
            PathBuf::from("/tmp/clip.mp4")
        );
    }
}
