//! Settings shared by the command line tool and library callers.

use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
};

use crate::{io::TempoError, tempo::DEFAULT_BPM};

/// File name of the converter shipped next to the installed binary.
pub const BUNDLED_CONVERTER: &str = "MidiTempoConverter.jar";

/// A program that runs the converter, with the arguments placed before the converter path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launcher {
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

impl Launcher {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Launcher {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// `java -jar`
    pub fn java_jar() -> Self {
        Launcher::new("java").arg("-jar")
    }

    /// The launcher needed to run `executable`: `java -jar` for `.jar` files, otherwise none.
    pub fn for_executable(executable: &Path) -> Option<Self> {
        match executable.extension() {
            Some(ext) if ext.eq_ignore_ascii_case("jar") => Some(Launcher::java_jar()),
            _ => None,
        }
    }
}

/// Where the converter lives and how to run it.
///
/// Unset fields fall back to the bundled converter and to [`Launcher::for_executable`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConverterConfig {
    pub executable: Option<PathBuf>,
    pub launcher: Option<Launcher>,
}

impl ConverterConfig {
    /// The converter executable, resolving the bundled one if none is configured.
    pub fn resolve_executable(&self) -> Result<PathBuf, TempoError> {
        match &self.executable {
            Some(path) => Ok(path.clone()),
            None => bundled_converter_path(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TempoConfig {
    /// BPM used when a rewrite is requested without one.
    pub default_bpm: f64,
    pub converter: ConverterConfig,
}

impl Default for TempoConfig {
    fn default() -> Self {
        TempoConfig {
            default_bpm: DEFAULT_BPM,
            converter: ConverterConfig::default(),
        }
    }
}

/// The path of [`BUNDLED_CONVERTER`] in the directory of the running executable.
pub fn bundled_converter_path() -> Result<PathBuf, TempoError> {
    let exe = env::current_exe().map_err(|source| TempoError::Io {
        path: PathBuf::from(BUNDLED_CONVERTER),
        source,
    })?;
    let dir = exe.parent().unwrap_or_else(|| Path::new("."));
    Ok(dir.join(BUNDLED_CONVERTER))
}
