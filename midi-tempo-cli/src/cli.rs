use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use midi_tempo::config::{ConverterConfig, Launcher, TempoConfig};

#[derive(Parser, Debug)]
#[command(name = "midi-tempo")]
#[command(about = "Read and rewrite the tempo of Standard MIDI Files.")]
pub struct Cli {
    /// More log output. Repeat for more detail. RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the BPM of the first tempo event.
    Bpm { file: PathBuf },

    /// Print every tempo change as `tick<TAB>bpm`, sorted by tick.
    Changes { file: PathBuf },

    /// Set every tempo event to one BPM.
    Normalize {
        file: PathBuf,
        #[arg(short, long)]
        /// Target BPM. Defaults to 120.
        bpm: Option<f64>,
        #[arg(short, long)]
        /// Where to write the result. Defaults to overwriting the input.
        output: Option<PathBuf>,
    },

    /// Set every tempo event to one BPM and report the BPM before and after.
    Change {
        file: PathBuf,
        #[arg(short, long)]
        /// Target BPM. Defaults to 120.
        bpm: Option<f64>,
        #[arg(short, long)]
        /// Where to write the result. Defaults to overwriting the input.
        output: Option<PathBuf>,
    },

    /// Run the external tempo converter on a copy of the file.
    Convert {
        file: PathBuf,
        /// New tempo passed to the converter.
        tempo: u32,
        #[arg(short, long)]
        /// Where to write the result. Defaults to `<name>_tempo<TEMPO>.<ext>` beside the input.
        output: Option<PathBuf>,
        #[arg(long)]
        /// Converter to run instead of the bundled MidiTempoConverter.jar.
        converter: Option<PathBuf>,
        #[arg(long)]
        /// Program used to run the converter, e.g. `java`. `.jar` converters use `java -jar`.
        launcher: Option<PathBuf>,
    },
}

impl Cli {
    /// The default log filter for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    pub fn config(&self) -> TempoConfig {
        let mut config = TempoConfig::default();
        if let Commands::Convert {
            converter,
            launcher,
            ..
        } = &self.command
        {
            config.converter = ConverterConfig {
                executable: converter.clone(),
                launcher: launcher.clone().map(Launcher::new),
            };
        }
        config
    }
}
