use super::{ElementSignal, MediaElement, MediaSource};
use anyhow::{Result, anyhow};
use crossbeam_channel::{Sender, unbounded};
use std::time::Duration;

/// Test double for the platform media element. Records every forwarded
/// intent and lets tests emit signals by hand. Seeks confirm themselves with
/// a `TimeUpdate`; play/pause/fullscreen confirm only when the test says so,
/// which is exactly the autoplay-restriction shape the controller must
/// tolerate.
pub(crate) struct MockElement {
    signals: Option<Sender<ElementSignal>>,

    pub loads: Vec<MediaSource>,
    pub play_calls: usize,
    pub pause_calls: usize,
    pub seeks: Vec<Duration>,
    pub volumes: Vec<f32>,
    pub mutes: Vec<bool>,
    pub rates: Vec<f32>,
    pub fullscreen_requests: Vec<bool>,
    pub fail_loads: bool,
}

impl MockElement {
    pub fn new() -> Self {
        MockElement {
            signals: None,
            loads: Vec::new(),
            play_calls: 0,
            pause_calls: 0,
            seeks: Vec::new(),
            volumes: Vec::new(),
            mutes: Vec::new(),
            rates: Vec::new(),
            fullscreen_requests: Vec::new(),
            fail_loads: false,
        }
    }

    pub fn emit(&mut self, signal: ElementSignal) {
        if let Some(tx) = &self.signals {
            let _ = tx.send(signal);
        }
    }
}

impl MediaElement for MockElement {
    fn load(&mut self, source: &MediaSource) -> Result<()> {
        self.loads.push(source.clone());

        match self.fail_loads {
            true => Err(anyhow!("No playable media: {}", source.stream_url)),
            false => Ok(()),
        }
    }

    fn subscribe(&mut self) -> crossbeam_channel::Receiver<ElementSignal> {
        let (tx, rx) = unbounded();
        self.signals = Some(tx);
        rx
    }

    fn play(&mut self) {
        self.play_calls += 1;
    }

    fn pause(&mut self) {
        self.pause_calls += 1;
    }

    fn seek(&mut self, to: Duration) {
        self.seeks.push(to);
        self.emit(ElementSignal::TimeUpdate(to));
    }

    fn set_volume(&mut self, volume: f32) {
        self.volumes.push(volume);
    }

    fn set_muted(&mut self, muted: bool) {
        self.mutes.push(muted);
    }

    fn set_rate(&mut self, rate: f32) {
        self.rates.push(rate);
    }

    fn request_fullscreen(&mut self, enter: bool) {
        self.fullscreen_requests.push(enter);
    }
}
