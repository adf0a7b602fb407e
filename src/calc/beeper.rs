use std::time::Duration;

use log::warn;
use rodio::source::{SineWave, Source};
use rodio::{OutputStream, Sink};

const TONE_HZ: f32 = 442.; // The "correct" A4
const TONE_LENGTH: Duration = Duration::from_millis(150);
const TONE_VOLUME: f32 = 0.2;

/// Plays a short tone when an alert goes up.
pub struct Beeper {
    // Dropping the stream silences the sink
    _stream: OutputStream,
    sink: Sink,
}

impl Beeper {
    /// Opens the default audio device. Returns `None` when there isn't one.
    pub fn new() -> Option<Beeper> {
        let (stream, handle) = match OutputStream::try_default() {
            Ok(output) => output,
            Err(err) => {
                warn!("no audio output, alerts will be silent: {}", err);
                return None;
            }
        };

        match Sink::try_new(&handle) {
            Ok(sink) => Some(Beeper {
                _stream: stream,
                sink,
            }),
            Err(err) => {
                warn!("cannot open audio sink, alerts will be silent: {}", err);
                None
            }
        }
    }

    pub fn beep(&self) {
        // Don't queue up tones behind each other
        if self.sink.empty() {
            let tone = SineWave::new(TONE_HZ)
                .take_duration(TONE_LENGTH)
                .amplify(TONE_VOLUME);
            self.sink.append(tone);
        }
    }
}
