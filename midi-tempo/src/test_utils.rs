use std::path::{Path, PathBuf};

use midly::{
    Format, Header, MetaMessage, MidiMessage, Smf, Timing, Track, TrackEvent, TrackEventKind,
};

use crate::io::save;

pub fn header(ppq: u16) -> Header {
    Header::new(Format::Parallel, Timing::Metrical(ppq.into()))
}

pub fn tempo(delta: u32, tempo: u32) -> TrackEvent<'static> {
    TrackEvent {
        delta: delta.into(),
        kind: TrackEventKind::Meta(MetaMessage::Tempo(tempo.into())),
    }
}

pub fn note_on(delta: u32, key: u8) -> TrackEvent<'static> {
    TrackEvent {
        delta: delta.into(),
        kind: TrackEventKind::Midi {
            channel: 0.into(),
            message: MidiMessage::NoteOn {
                key: key.into(),
                vel: 100.into(),
            },
        },
    }
}

pub fn note_off(delta: u32, key: u8) -> TrackEvent<'static> {
    TrackEvent {
        delta: delta.into(),
        kind: TrackEventKind::Midi {
            channel: 0.into(),
            message: MidiMessage::NoteOff {
                key: key.into(),
                vel: 0.into(),
            },
        },
    }
}

pub fn end_of_track() -> TrackEvent<'static> {
    TrackEvent {
        delta: 0.into(),
        kind: TrackEventKind::Meta(MetaMessage::EndOfTrack),
    }
}

/// Builds a 480 ppq document, closing every track with an end-of-track event.
pub fn smf(tracks: Vec<Vec<TrackEvent<'static>>>) -> Smf<'static> {
    let mut smf = Smf::new(header(480));
    for mut events in tracks {
        events.push(end_of_track());
        smf.tracks.push(Track::from(events));
    }
    smf
}

/// A two track document: `first` followed by a track of plain notes.
pub fn two_track_song(first: Vec<TrackEvent<'static>>) -> Smf<'static> {
    smf(vec![
        first,
        vec![note_on(0, 64), note_off(10, 64), note_on(10, 67), note_off(10, 67)],
    ])
}

pub fn write_smf(dir: &Path, name: &str, smf: &Smf) -> PathBuf {
    let path = dir.join(name);
    save(smf, &path).unwrap();
    path
}
