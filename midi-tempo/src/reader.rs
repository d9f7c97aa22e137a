//! Tempo lookups on decoded documents and on files.

use std::path::Path;

use log::debug;
use midly::Smf;

use crate::{
    events::TempoCarrier,
    io::{MIDIFile, TempoError},
    num::MIDINum,
    pipe,
    sequence::{
        event::{sort_tempo_changes, track_tempo_changes, TempoChange},
        to_vec_result, wrap_ok,
    },
    tempo::tempo_to_bpm,
};

/// The BPM of the first tempo event, or `None` if the document has none.
///
/// Tracks are scanned in file order, so a tempo event in the first track wins over an
/// earlier-in-time one in a later track.
pub fn first_tempo(smf: &Smf) -> Result<Option<f64>, TempoError> {
    smf.tracks
        .iter()
        .flatten()
        .find_map(|e| e.inner_tempo())
        .map(tempo_to_bpm)
        .transpose()
}

/// Every tempo event in the document with its absolute tick time within its own track,
/// sorted by time.
pub fn all_tempo_changes<D: MIDINum>(smf: &Smf) -> Result<Vec<TempoChange<D>>, TempoError> {
    let mut changes = Vec::new();
    for track in smf.tracks.iter() {
        let track_changes: Result<Vec<TempoChange<D>>, TempoError> = pipe!(
            track.iter().copied()
            |>wrap_ok()
            |>track_tempo_changes()
            |>to_vec_result()
        );
        changes.extend(track_changes?);
    }

    sort_tempo_changes(&mut changes);
    Ok(changes)
}

/// Read the BPM of the first tempo event of a MIDI file, rounded to 2 decimal places.
///
/// Returns `None` if the file has no tempo events.
pub fn get_midi_bpm(midi_file: impl AsRef<Path>) -> Result<Option<f64>, TempoError> {
    let file = MIDIFile::open(midi_file)?;
    let bpm = first_tempo(&file.parse()?)?;
    debug!("First tempo of {:?}: {:?} BPM", file.path(), bpm);
    Ok(bpm)
}

/// Read every tempo change of a MIDI file, sorted by tick time.
pub fn get_all_tempo_changes(midi_file: impl AsRef<Path>) -> Result<Vec<TempoChange>, TempoError> {
    let file = MIDIFile::open(midi_file)?;
    let changes = all_tempo_changes(&file.parse()?)?;
    debug!("Found {} tempo changes in {:?}", changes.len(), file.path());
    Ok(changes)
}
