//! Handing a MIDI file over to an external tempo converter program.
//!
//! The converter is run as `[launcher...] <converter> <working file> <tempo> <output file>`
//! and reports what it did on its standard output.

use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use log::{debug, trace};

use crate::{
    config::{bundled_converter_path, ConverterConfig, Launcher},
    io::{ensure_exists, MissingKind, TempoError},
};

const REPORT_MARKERS: [&str; 2] = ["Old Tempo", "New Tempo"];

/// What the converter printed about the tempo, and where it wrote its result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub tempo_info: Vec<String>,
    pub output_file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Converter {
    executable: PathBuf,
    launcher: Option<Launcher>,
}

impl Converter {
    /// A converter run with the launcher its file type needs (see [`Launcher::for_executable`]).
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        let executable = executable.into();
        let launcher = Launcher::for_executable(&executable);
        Converter {
            executable,
            launcher,
        }
    }

    pub fn with_launcher(mut self, launcher: Launcher) -> Self {
        self.launcher = Some(launcher);
        self
    }

    /// The converter bundled beside the running executable, run with `java -jar`.
    pub fn bundled() -> Result<Self, TempoError> {
        Ok(Converter::new(bundled_converter_path()?))
    }

    pub fn from_config(config: &ConverterConfig) -> Result<Self, TempoError> {
        let converter = Converter::new(config.resolve_executable()?);
        Ok(match &config.launcher {
            Some(launcher) => converter.with_launcher(launcher.clone()),
            None => converter,
        })
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    pub fn launcher(&self) -> Option<&Launcher> {
        self.launcher.as_ref()
    }

    /// Run the converter on a copy of `midi_file`, asking for `new_tempo`.
    ///
    /// The input is first copied to the output path (by default `<name>_tempo<new_tempo>.<ext>`
    /// next to the input), which the converter gets as both its working file and its output.
    /// The copy stays on disk if the converter fails.
    pub fn convert(
        &self,
        midi_file: impl AsRef<Path>,
        new_tempo: u32,
        output_file: Option<&Path>,
    ) -> Result<ConversionReport, TempoError> {
        let midi_file = midi_file.as_ref();
        ensure_exists(&self.executable, MissingKind::Converter)?;
        ensure_exists(midi_file, MissingKind::MidiFile)?;

        let output_file = match output_file {
            Some(path) => path.to_path_buf(),
            None => default_output_path(midi_file, new_tempo),
        };

        if !is_same_file(midi_file, &output_file) {
            fs::copy(midi_file, &output_file).map_err(|source| TempoError::Io {
                path: output_file.clone(),
                source,
            })?;
            trace!("Copied {} to {}", midi_file.display(), output_file.display());
        }

        let stdout = self.run(&output_file, new_tempo, &output_file)?;
        let tempo_info = filter_tempo_lines(&stdout);
        debug!(
            "Converter wrote {} with {} tempo lines",
            output_file.display(),
            tempo_info.len()
        );

        Ok(ConversionReport {
            tempo_info,
            output_file,
        })
    }

    fn command(&self) -> Command {
        match &self.launcher {
            Some(launcher) => {
                let mut command = Command::new(&launcher.program);
                command.args(&launcher.args).arg(&self.executable);
                command
            }
            None => Command::new(&self.executable),
        }
    }

    fn run(
        &self,
        working_file: &Path,
        new_tempo: u32,
        output_file: &Path,
    ) -> Result<String, TempoError> {
        let mut command = self.command();
        command
            .arg(working_file)
            .arg(new_tempo.to_string())
            .arg(output_file);
        debug!("Running {:?}", command);

        let program = PathBuf::from(command.get_program());
        let output = command
            .output()
            .map_err(|source| TempoError::Launch { program, source })?;

        if !output.status.success() {
            return Err(TempoError::Subprocess {
                status: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// `dir/song.mid` becomes `dir/song_tempo<new_tempo>.mid`. A path without an extension
/// gets the suffix appended.
pub fn default_output_path(midi_file: &Path, new_tempo: u32) -> PathBuf {
    let stem = midi_file
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match midi_file.extension() {
        Some(ext) => format!("{stem}_tempo{new_tempo}.{}", ext.to_string_lossy()),
        None => format!("{stem}_tempo{new_tempo}"),
    };
    midi_file.with_file_name(name)
}

/// The lines of the converter's output that report the old or new tempo.
pub fn filter_tempo_lines(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .filter(|line| REPORT_MARKERS.iter().any(|marker| line.contains(marker)))
        .map(str::to_string)
        .collect()
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Run the bundled converter. See [`Converter::convert`].
pub fn get_tempo_from_midi(
    midi_file: impl AsRef<Path>,
    new_tempo: u32,
    output_file: Option<&Path>,
) -> Result<ConversionReport, TempoError> {
    Converter::bundled()?.convert(midi_file, new_tempo, output_file)
}
