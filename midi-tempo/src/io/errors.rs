use std::path::PathBuf;

use thiserror::Error;

/// Which required path was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingKind {
    MidiFile,
    Converter,
}

/// The step of a BPM change that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeStage {
    ReadOriginal,
    Rewrite,
    ReadResult,
}

impl std::fmt::Display for ChangeStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChangeStage::ReadOriginal => write!(f, "reading the original tempo"),
            ChangeStage::Rewrite => write!(f, "rewriting the tempo"),
            ChangeStage::ReadResult => write!(f, "reading the new tempo"),
        }
    }
}

#[derive(Debug, Error)]
pub enum TempoError {
    NotFound {
        kind: MissingKind,
        path: PathBuf,
    },
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    Decode {
        path: Option<PathBuf>,
        #[source]
        source: midly::Error,
    },
    Encode {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    InvalidTempo(u32),
    InvalidBpm(f64),
    Launch {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
    Subprocess {
        status: Option<i32>,
        stderr: String,
    },
    BpmChange {
        stage: ChangeStage,
        #[source]
        source: Box<TempoError>,
    },
}

impl TempoError {
    /// Wraps the error as a failure of one step of a BPM change.
    pub fn during(self, stage: ChangeStage) -> Self {
        TempoError::BpmChange {
            stage,
            source: Box::new(self),
        }
    }

    /// The innermost error, looking through [`TempoError::BpmChange`] wrappers.
    pub fn root(&self) -> &TempoError {
        match self {
            TempoError::BpmChange { source, .. } => source.root(),
            e => e,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.root(), TempoError::NotFound { .. })
    }
}

impl std::fmt::Display for TempoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TempoError::NotFound { kind, path } => match kind {
                MissingKind::MidiFile => write!(f, "MIDI file not found: {}", path.display()),
                MissingKind::Converter => {
                    write!(f, "Converter executable not found: {}", path.display())
                }
            },
            TempoError::Io { path, source } => {
                write!(f, "Filesystem error ({}): {source}", path.display())
            }
            TempoError::Decode { path, source } => match path {
                Some(path) => write!(f, "Failed to read MIDI file {}: {source}", path.display()),
                None => write!(f, "Failed to read MIDI data: {source}"),
            },
            TempoError::Encode { path, source } => {
                write!(f, "Failed to write MIDI file {}: {source}", path.display())
            }
            TempoError::InvalidTempo(tempo) => {
                write!(f, "Invalid tempo: {tempo} microseconds per beat")
            }
            TempoError::InvalidBpm(bpm) => write!(f, "Invalid BPM: {bpm}"),
            TempoError::Launch { program, source } => {
                write!(f, "Failed to launch {}: {source}", program.display())
            }
            TempoError::Subprocess { status, stderr } => match status {
                Some(code) => write!(f, "Converter exited with status {code}: {}", stderr.trim()),
                None => write!(f, "Converter was terminated by a signal: {}", stderr.trim()),
            },
            TempoError::BpmChange { stage, source } => {
                write!(f, "Failed to change MIDI BPM while {stage}: {source}")
            }
        }
    }
}
