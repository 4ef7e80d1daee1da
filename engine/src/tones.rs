//! Key-feedback tones.
//!
//! Each handled event maps to a fixed frequency/duration pair, mirroring the
//! original widget's oscillator settings. Playback is a collaborator concern:
//! the engine only queues [`Tone`] values, and the run loop hands them to a
//! [`ToneSink`]. A sink that cannot produce audio swallows the tone silently;
//! it must never surface an error or affect engine state.

/// A single feedback tone. The terminal bell cannot honor frequency or
/// duration, but the pairs are preserved for sinks that can.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tone {
    pub frequency_hz: u16,
    pub duration_ms: u16,
}

impl Tone {
    const fn new(frequency_hz: u16) -> Self {
        Self {
            frequency_hz,
            duration_ms: 100,
        }
    }
}

pub(crate) const DIGIT: Tone = Tone::new(200);
pub(crate) const DECIMAL: Tone = Tone::new(250);
pub(crate) const OPERATOR: Tone = Tone::new(300);
pub(crate) const SCIENTIFIC: Tone = Tone::new(350);
pub(crate) const MEMORY: Tone = Tone::new(300);
pub(crate) const EQUALS: Tone = Tone::new(400);
pub(crate) const CLEAR: Tone = Tone::new(150);
pub(crate) const BACKSPACE: Tone = Tone::new(180);
pub(crate) const THEME: Tone = Tone::new(350);
pub(crate) const SOUND_ON: Tone = Tone::new(300);
pub(crate) const HISTORY_CLEAR: Tone = Tone::new(200);

/// Fire-and-forget playback collaborator, driven by the run loop.
pub trait ToneSink {
    fn play(&mut self, tone: Tone);
}
