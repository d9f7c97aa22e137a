use std::process::ExitCode;

use clap::Parser;
use log::{debug, log, Level};
use midi_tempo::{
    change_midi_bpm, get_all_tempo_changes, get_midi_bpm, normalize_tempo, Converter, TempoError,
};

mod cli;

use cli::{Cli, Commands};

/// The full error is only logged with `-vv`; stderr always gets the short message.
const ERROR_DETAIL_LEVEL: Level = Level::Debug;

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .format_timestamp(None)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log!(ERROR_DETAIL_LEVEL, "{e:?}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), TempoError> {
    let config = cli.config();
    debug!("{config:?}");

    match &cli.command {
        Commands::Bpm { file } => match get_midi_bpm(file)? {
            Some(bpm) => println!("{bpm}"),
            None => println!("no tempo"),
        },
        Commands::Changes { file } => {
            for change in get_all_tempo_changes(file)? {
                println!("{}\t{}", change.time, change.bpm);
            }
        }
        Commands::Normalize { file, bpm, output } => {
            let bpm = bpm.unwrap_or(config.default_bpm);
            let written = normalize_tempo(file, Some(bpm), output.as_deref())?;
            println!("{}", written.display());
        }
        Commands::Change { file, bpm, output } => {
            let bpm = bpm.unwrap_or(config.default_bpm);
            let change = change_midi_bpm(file, output.as_deref(), Some(bpm))?;
            println!(
                "{} -> {} ({})",
                format_bpm(change.original_bpm),
                format_bpm(change.new_bpm),
                change.file_path.display()
            );
        }
        Commands::Convert {
            file,
            tempo,
            output,
            ..
        } => {
            let report = Converter::from_config(&config.converter)?.convert(
                file,
                *tempo,
                output.as_deref(),
            )?;
            for line in &report.tempo_info {
                println!("{line}");
            }
            println!("{}", report.output_file.display());
        }
    }

    Ok(())
}

fn format_bpm(bpm: Option<f64>) -> String {
    match bpm {
        Some(bpm) => bpm.to_string(),
        None => "no tempo".to_string(),
    }
}
