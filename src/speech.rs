//! Speech-output capability. Fire-and-forget: the core never consumes a
//! return value from the synthesizer.

use tracing::info;

pub trait SpeechOutput {
    fn speak(&self, text: &str);
}

/// Discards all utterances.
#[derive(Debug, Default, Clone)]
pub struct SilentSpeech;

impl SpeechOutput for SilentSpeech {
    fn speak(&self, _text: &str) {}
}

/// Logs utterances; stands in for a synthesizer in the CLI.
#[derive(Debug, Default, Clone)]
pub struct LogSpeech;

impl SpeechOutput for LogSpeech {
    fn speak(&self, text: &str) {
        info!(utterance = %text, "speak");
    }
}
