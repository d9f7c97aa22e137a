use std::path::{Path, PathBuf};

use log::debug;

use crate::{
    io::{ChangeStage, TempoError},
    reader::get_midi_bpm,
    rewriter::normalize_tempo,
};

/// The BPM of a file before and after [`change_midi_bpm`].
#[derive(Debug, Clone, PartialEq)]
pub struct BpmChange {
    pub original_bpm: Option<f64>,
    pub new_bpm: Option<f64>,
    /// Where the rewritten file was written.
    pub file_path: PathBuf,
}

/// Rewrite every tempo of a MIDI file to `target_bpm` (120 by default) and report the BPM
/// before and after.
///
/// Without `output_path` the input is overwritten in place. A failure of any step is returned
/// as [`TempoError::BpmChange`] naming the step, with the cause as its source.
pub fn change_midi_bpm(
    midi_path: impl AsRef<Path>,
    output_path: Option<&Path>,
    target_bpm: Option<f64>,
) -> Result<BpmChange, TempoError> {
    let midi_path = midi_path.as_ref();

    let original_bpm =
        get_midi_bpm(midi_path).map_err(|e| e.during(ChangeStage::ReadOriginal))?;
    let file_path = normalize_tempo(midi_path, target_bpm, output_path)
        .map_err(|e| e.during(ChangeStage::Rewrite))?;
    let new_bpm = get_midi_bpm(&file_path).map_err(|e| e.during(ChangeStage::ReadResult))?;

    debug!("Changed {} from {original_bpm:?} to {new_bpm:?} BPM", midi_path.display());
    Ok(BpmChange {
        original_bpm,
        new_bpm,
        file_path,
    })
}
