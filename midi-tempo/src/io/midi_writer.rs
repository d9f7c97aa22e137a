use std::path::Path;

use log::debug;
use midly::{Header, Smf, Track, TrackEvent};

use super::errors::TempoError;

/// Builds a new MIDI document track by track.
///
/// ## Example
/// ```
/// use midi_tempo::io::MIDIWriter;
/// use midly::{Format, Header, MetaMessage, Timing, TrackEvent, TrackEventKind};
///
/// let mut writer = MIDIWriter::new(Header::new(Format::Parallel, Timing::Metrical(96.into())));
/// {
///     let mut track_writer = writer.open_next_track();
///     track_writer.write_event(TrackEvent {
///         delta: 0.into(),
///         kind: TrackEventKind::Meta(MetaMessage::EndOfTrack),
///     });
/// }
///
/// let smf = writer.finish();
/// assert_eq!(smf.tracks.len(), 1);
/// assert_eq!(smf.tracks[0].len(), 1);
/// ```
pub struct MIDIWriter<'a> {
    smf: Smf<'a>,
}

pub struct TrackWriter<'w, 'a> {
    track: &'w mut Track<'a>,
}

impl<'a> MIDIWriter<'a> {
    pub fn new(header: Header) -> Self {
        MIDIWriter {
            smf: Smf::new(header),
        }
    }

    /// Appends an empty track and returns a writer for it.
    pub fn open_next_track(&mut self) -> TrackWriter<'_, 'a> {
        self.smf.tracks.push(Track::new());
        let index = self.smf.tracks.len() - 1;
        TrackWriter {
            track: &mut self.smf.tracks[index],
        }
    }

    pub fn track_count(&self) -> usize {
        self.smf.tracks.len()
    }

    pub fn finish(self) -> Smf<'a> {
        self.smf
    }
}

impl<'w, 'a> TrackWriter<'w, 'a> {
    pub fn write_event(&mut self, event: TrackEvent<'a>) {
        self.track.push(event);
    }

    pub fn write_events(&mut self, events: impl IntoIterator<Item = TrackEvent<'a>>) {
        self.track.extend(events);
    }

    pub fn event_count(&self) -> usize {
        self.track.len()
    }
}

/// Encodes a document and writes it to `path`, replacing any existing file.
pub fn save(smf: &Smf, path: impl AsRef<Path>) -> Result<(), TempoError> {
    let path = path.as_ref();
    smf.save(path).map_err(|source| TempoError::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Wrote {} tracks to {}", smf.tracks.len(), path.display());
    Ok(())
}

/// Encodes a document into memory.
pub fn to_bytes(smf: &Smf) -> Result<Vec<u8>, std::io::Error> {
    let mut bytes = Vec::new();
    smf.write_std(&mut bytes)?;
    Ok(bytes)
}
