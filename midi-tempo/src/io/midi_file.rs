use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, trace};
use midly::{Format, Header, Smf, Timing};

use super::errors::{MissingKind, TempoError};

/// Fails with [`TempoError::NotFound`] when `path` does not exist.
pub fn ensure_exists(path: &Path, kind: MissingKind) -> Result<(), TempoError> {
    if path.exists() {
        Ok(())
    } else {
        Err(TempoError::NotFound {
            kind,
            path: path.to_path_buf(),
        })
    }
}

/// The raw bytes of a Standard MIDI File.
///
/// Decoding borrows from the loaded bytes, so the file is read once and can be decoded
/// with [`parse`](MIDIFile::parse) as often as needed.
#[derive(Debug)]
pub struct MIDIFile {
    path: Option<PathBuf>,
    data: Vec<u8>,
}

impl MIDIFile {
    /// Reads a MIDI file from disk.
    ///
    /// Fails with [`TempoError::NotFound`] before touching the file if it does not exist.
    pub fn open(filename: impl AsRef<Path>) -> Result<Self, TempoError> {
        let path = filename.as_ref();
        ensure_exists(path, MissingKind::MidiFile)?;

        let data = fs::read(path).map_err(|source| TempoError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded {} bytes from {}", data.len(), path.display());

        Ok(MIDIFile {
            path: Some(path.to_path_buf()),
            data,
        })
    }

    pub fn from_bytes(data: Vec<u8>) -> Self {
        MIDIFile { path: None, data }
    }

    /// Decodes the loaded bytes.
    pub fn parse(&self) -> Result<Smf<'_>, TempoError> {
        let smf = Smf::parse(&self.data).map_err(|source| TempoError::Decode {
            path: self.path.clone(),
            source,
        })?;
        trace!(
            "Decoded {} tracks ({:?}, {:?})",
            smf.tracks.len(),
            smf.header.format,
            smf.header.timing
        );
        Ok(smf)
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// The time-division of a file, if it is expressed in ticks per quarter note.
pub fn ppq(header: &Header) -> Option<u16> {
    match header.timing {
        Timing::Metrical(ticks) => Some(ticks.as_int()),
        Timing::Timecode(_, _) => None,
    }
}

/// The format number as stored in the file header.
pub fn format_number(header: &Header) -> u16 {
    match header.format {
        Format::SingleTrack => 0,
        Format::Parallel => 1,
        Format::Sequential => 2,
    }
}
