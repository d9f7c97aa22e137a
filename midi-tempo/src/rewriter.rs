//! Rewriting every tempo event of a document to a single tempo.

use std::path::{Path, PathBuf};

use log::debug;
use midly::{Smf, TrackEvent};

use crate::{
    io::{save, MIDIFile, MIDIWriter, TempoError},
    pipe,
    sequence::{event::replace_tempo_events, to_vec_result, wrap_ok},
    tempo::{bpm_to_tempo, DEFAULT_BPM},
};

/// Build a copy of `smf` where every tempo event is set to `target_bpm`.
///
/// The header (format and time-division) is kept, every track keeps its events in order,
/// and no delta time changes: notes are not retimed to keep their duration in seconds.
pub fn normalize_smf<'a>(smf: &Smf<'a>, target_bpm: f64) -> Result<Smf<'a>, TempoError> {
    let target_tempo = bpm_to_tempo(target_bpm)?;
    let mut writer = MIDIWriter::new(smf.header);

    for track in smf.tracks.iter() {
        let events: Result<Vec<TrackEvent<'a>>, TempoError> = pipe!(
            track.iter().copied()
            |>wrap_ok()
            |>replace_tempo_events(target_tempo)
            |>to_vec_result()
        );
        writer.open_next_track().write_events(events?);
    }

    Ok(writer.finish())
}

/// Set every tempo event of a MIDI file to one BPM.
///
/// `target_bpm` defaults to 120 and `output_path` defaults to overwriting `midi_path`.
/// Returns the path that was written.
pub fn normalize_tempo(
    midi_path: impl AsRef<Path>,
    target_bpm: Option<f64>,
    output_path: Option<&Path>,
) -> Result<PathBuf, TempoError> {
    let midi_path = midi_path.as_ref();
    let output_path = output_path.unwrap_or(midi_path);
    let target_bpm = target_bpm.unwrap_or(DEFAULT_BPM);

    let file = MIDIFile::open(midi_path)?;
    let normalized = normalize_smf(&file.parse()?, target_bpm)?;
    save(&normalized, output_path)?;

    debug!(
        "Normalized {} to {} BPM into {}",
        midi_path.display(),
        target_bpm,
        output_path.display()
    );
    Ok(output_path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        events::{MIDIDelta, TempoCarrier},
        reader::{all_tempo_changes, first_tempo, get_midi_bpm},
        test_utils::{note_on, smf, tempo, two_track_song, write_smf},
    };

    #[test]
    fn example_song_to_sixty_bpm() {
        let song = two_track_song(vec![tempo(0, 500_000), note_on(10, 60)]);
        let normalized = normalize_smf(&song, 60.0).unwrap();

        assert_eq!(normalized.tracks[0][0], tempo(0, 1_000_000));
        assert_eq!(normalized.tracks[0][1], note_on(10, 60));
        assert_eq!(normalized.tracks[1], song.tracks[1]);
        assert_eq!(first_tempo(&normalized).unwrap(), Some(60.0));
    }

    #[test]
    fn keeps_structure_and_timing() {
        let song = smf(vec![
            vec![tempo(0, 500_000), note_on(10, 60), tempo(480, 300_000)],
            vec![note_on(3, 62), tempo(5, 800_000)],
            vec![],
        ]);
        let normalized = normalize_smf(&song, 90.0).unwrap();

        assert_eq!(normalized.header, song.header);
        assert_eq!(normalized.tracks.len(), song.tracks.len());
        for (old, new) in song.tracks.iter().zip(normalized.tracks.iter()) {
            assert_eq!(old.len(), new.len());
            for (old, new) in old.iter().zip(new.iter()) {
                assert_eq!(old.delta(), new.delta());
                match old.inner_tempo() {
                    Some(_) => assert_eq!(new.inner_tempo(), Some(666_667)),
                    None => assert_eq!(old, new),
                }
            }
        }

        let times: Vec<u64> = all_tempo_changes::<u64>(&normalized)
            .unwrap()
            .iter()
            .map(|c| c.time)
            .collect();
        assert_eq!(times, vec![0, 8, 490]);
    }

    #[test]
    fn invalid_target_is_rejected() {
        let song = two_track_song(vec![tempo(0, 500_000)]);
        assert!(matches!(
            normalize_smf(&song, 0.0),
            Err(TempoError::InvalidBpm(_))
        ));
    }

    #[test]
    fn rewrites_to_separate_output() {
        let dir = tempfile::tempdir().unwrap();
        let song = two_track_song(vec![tempo(0, 500_000), note_on(10, 60)]);
        let input = write_smf(dir.path(), "in.mid", &song);
        let output = dir.path().join("out.mid");

        let written = normalize_tempo(&input, Some(90.0), Some(&output)).unwrap();

        assert_eq!(written, output);
        assert_eq!(get_midi_bpm(&output).unwrap(), Some(90.0));
        assert_eq!(get_midi_bpm(&input).unwrap(), Some(120.0));
    }

    #[test]
    fn overwrites_input_with_default_bpm() {
        let dir = tempfile::tempdir().unwrap();
        let song = two_track_song(vec![tempo(0, 750_000)]);
        let input = write_smf(dir.path(), "song.mid", &song);

        let written = normalize_tempo(&input, None, None).unwrap();

        assert_eq!(written, input);
        assert_eq!(get_midi_bpm(&input).unwrap(), Some(120.0));
    }

    #[test]
    fn missing_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("missing.mid");
        let output = dir.path().join("out.mid");

        let err = normalize_tempo(&input, Some(90.0), Some(&output)).unwrap_err();
        assert!(err.is_not_found());
        assert!(!output.exists());
    }

    #[test]
    fn invalid_bpm_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let song = two_track_song(vec![tempo(0, 500_000)]);
        let input = write_smf(dir.path(), "song.mid", &song);
        let output = dir.path().join("out.mid");

        let err = normalize_tempo(&input, Some(-5.0), Some(&output)).unwrap_err();
        assert!(matches!(err, TempoError::InvalidBpm(_)));
        assert!(!output.exists());
    }

    #[test]
    fn corrupt_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("corrupt.mid");
        std::fs::write(&input, b"not a midi file").unwrap();
        let output = dir.path().join("out.mid");

        let err = normalize_tempo(&input, Some(90.0), Some(&output)).unwrap_err();
        match err {
            TempoError::Decode { path, .. } => assert_eq!(path, Some(input.clone())),
            other => panic!("expected Decode, got {other:?}"),
        }
        assert!(!output.exists());
        assert_eq!(std::fs::read(&input).unwrap(), b"not a midi file");
    }
}
