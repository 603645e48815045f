use crate::config::Settings;
use crate::correct::{NullCorrector, SpellCorrector};
use crate::detector::Detector;
use crate::geometry::Point;
use crate::grid::{Bounds, Cell, Grid};
use crate::layouts;
use crate::session::Session;
use crate::speech::{SilentSpeech, SpeechOutput};
use std::time::Instant;
use tracing::debug;

/// One pointer sample and its position in the gesture's buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub point: Point,
    pub index: usize,
}

/// Gesture-transient state, discarded atomically at gesture end.
#[derive(Debug)]
struct GestureState {
    samples: Vec<PointerSample>,
    detector: Detector,
}

/// The drag-to-select engine: owns the grid, the live settings, the session
/// text state, the external collaborators, and whatever gesture is in flight.
/// Single-threaded and synchronous; every operation is a total function of
/// current state plus one input.
pub struct Engine {
    settings: Settings,
    grid: Grid,
    session: Session,
    gesture: Option<GestureState>,
    corrector: Box<dyn SpellCorrector>,
    speech: Box<dyn SpeechOutput>,
}

impl Engine {
    pub fn new(
        settings: Settings,
        corrector: Box<dyn SpellCorrector>,
        speech: Box<dyn SpeechOutput>,
    ) -> Self {
        let grid = layouts::grid_for(settings.layout);
        Self {
            settings,
            grid,
            session: Session::default(),
            gesture: None,
            corrector,
            speech,
        }
    }

    /// Engine with no corrector and no speech, for hosts that wire their own
    /// collaborators later and for tests.
    pub fn with_defaults(settings: Settings) -> Self {
        Self::new(settings, Box::new(NullCorrector), Box::new(SilentSpeech))
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Settings are live: detector thresholds apply on the next sample, mode
    /// and layout changes at the next gesture start.
    pub fn update_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn formed_word(&self) -> &str {
        self.session.formed_word()
    }

    pub fn sentence(&self) -> &str {
        self.session.sentence()
    }

    pub fn gesture_active(&self) -> bool {
        self.gesture.is_some()
    }

    /// Cell the pointer is currently arming, for the host's highlight.
    pub fn hovered_cell(&self) -> Option<Cell> {
        self.gesture.as_ref().and_then(|g| g.detector.hovered_cell())
    }

    /// Most recently selected cell, for the host's highlight.
    pub fn completed_cell(&self) -> Option<Cell> {
        self.gesture
            .as_ref()
            .and_then(|g| g.detector.completed_cell())
    }

    /// The raw sample buffer of the gesture in flight (show-trail rendering).
    pub fn trail(&self) -> &[PointerSample] {
        self.gesture
            .as_ref()
            .map(|g| g.samples.as_slice())
            .unwrap_or(&[])
    }

    /// Starts a fresh gesture, discarding any transient state from the last
    /// one. Session text survives; the grid is rebuilt from the configured
    /// layout, so layout swaps land here.
    pub fn on_gesture_start(&mut self) {
        self.grid = layouts::grid_for(self.settings.layout);
        self.gesture = Some(GestureState {
            samples: Vec::new(),
            detector: Detector::for_mode(self.settings.mode),
        });
        debug!(mode = %self.settings.mode, layout = %self.settings.layout, "gesture started");
    }

    /// One pointer sample, stamped with the wall clock.
    pub fn on_gesture_sample(&mut self, point: Point, bounds: Bounds) {
        self.sample_at(point, bounds, Instant::now());
    }

    /// Timestamped sample entry point; hosts with their own clock (trace
    /// replay, synthetic dwell ticks, tests) feed this directly. Starts a
    /// gesture implicitly if none is active.
    pub fn sample_at(&mut self, point: Point, bounds: Bounds, now: Instant) {
        if self.gesture.is_none() {
            self.on_gesture_start();
        }
        let Some(gesture) = self.gesture.as_mut() else {
            return;
        };

        let index = gesture.samples.len();
        gesture.samples.push(PointerSample { point, index });

        let cell = self.grid.cell_at(point, bounds);
        if let Some(event) = gesture.detector.observe(point, cell, now, &self.settings) {
            let symbol = self.grid.symbol_at(event.cell).clone();
            self.session
                .dispatch(&symbol, self.corrector.as_ref(), &self.settings);
        }
    }

    /// Ends (or cancels) the gesture: finalizes whatever word was formed,
    /// speaks it, and discards all transient state. Unconditionally callable;
    /// calling it again without new samples changes nothing.
    pub fn on_gesture_end(&mut self) {
        if let Some(word) = self.session.finalize(self.corrector.as_ref(), &self.settings) {
            self.speech.speak(&word);
        }
        self.gesture = None;
    }

    pub fn clear_sentence(&mut self) {
        self.session.clear_sentence();
    }

    pub fn delete_last_char(&mut self) {
        self.session.delete_last_char();
    }

    /// Speaks the whole sentence assembled so far.
    pub fn speak_sentence(&self) {
        let text = self.session.sentence().trim();
        if !text.is_empty() {
            self.speech.speak(text);
        }
    }
}
