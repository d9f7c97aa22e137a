use midly::{MetaMessage, TrackEvent, TrackEventKind};

use crate::{io::TempoError, tempo::tempo_to_bpm};

/// A decoded set-tempo meta event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TempoEvent {
    /// Microseconds per quarter note
    pub tempo: u32,
}

impl TempoEvent {
    pub fn new(tempo: u32) -> Self {
        TempoEvent { tempo }
    }

    pub fn bpm(&self) -> Result<f64, TempoError> {
        tempo_to_bpm(self.tempo)
    }
}

/// An event that carries a delta time in ticks.
pub trait MIDIDelta {
    fn delta(&self) -> u32;
}

/// An event that may be a set-tempo event.
pub trait TempoCarrier: Sized {
    /// The tempo if this is a set-tempo event.
    fn inner_tempo(&self) -> Option<u32>;

    /// Replaces the tempo of a set-tempo event. Any other event is returned unchanged.
    fn with_tempo(self, tempo: u32) -> Self;

    fn as_tempo_event(&self) -> Option<TempoEvent> {
        self.inner_tempo().map(TempoEvent::new)
    }
}

impl<'a> TempoCarrier for TrackEventKind<'a> {
    #[inline(always)]
    fn inner_tempo(&self) -> Option<u32> {
        match self {
            TrackEventKind::Meta(MetaMessage::Tempo(tempo)) => Some(tempo.as_int()),
            _ => None,
        }
    }

    fn with_tempo(self, tempo: u32) -> Self {
        match self {
            TrackEventKind::Meta(MetaMessage::Tempo(_)) => {
                TrackEventKind::Meta(MetaMessage::Tempo(tempo.into()))
            }
            other => other,
        }
    }
}

impl<'a> TempoCarrier for TrackEvent<'a> {
    #[inline(always)]
    fn inner_tempo(&self) -> Option<u32> {
        self.kind.inner_tempo()
    }

    fn with_tempo(self, tempo: u32) -> Self {
        TrackEvent {
            delta: self.delta,
            kind: self.kind.with_tempo(tempo),
        }
    }
}

impl<'a> MIDIDelta for TrackEvent<'a> {
    #[inline(always)]
    fn delta(&self) -> u32 {
        self.delta.as_int()
    }
}
