use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use chordview::{PitchClass, corpus, diagnostics, evaluate, quiz};

#[derive(Parser)]
#[command(name = "chordview", about = "Spell chord symbols and show them on a keyboard")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the schema, notes and keyboard of one chord
    Show {
        /// Root note, e.g. C, F#, Bb
        root: String,

        /// Quality and modifiers, e.g. -7 b9 (empty for a major seventh)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        quality: Vec<String>,

        /// Write a diagnostic log here if the chord fails
        #[arg(long)]
        logs: Option<PathBuf>,
    },

    /// Evaluate every chord in a list over all twelve roots
    Check {
        /// Newline-delimited chord qualities
        #[arg(long, default_value = "chords.txt")]
        chords: PathBuf,
    },

    /// Quiz yourself on random chords from a list
    Quiz {
        /// Newline-delimited chord qualities
        #[arg(long, default_value = "chords.txt")]
        chords: PathBuf,

        /// Directory for failure logs
        #[arg(long, default_value = "logs")]
        logs: PathBuf,

        /// Seed for reproducible chord picks
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<ExitCode> {
    match command {
        Command::Show {
            root,
            quality,
            logs,
        } => {
            let root: PitchClass = root.parse()?;
            let quality = quality.join(" ");
            match evaluate(root, &quality) {
                Ok(eval) => {
                    print!("{}", eval);
                    Ok(ExitCode::SUCCESS)
                }
                Err(err) => {
                    eprintln!("{}", err);
                    if let Some(dir) = logs {
                        let path = diagnostics::write_log(&dir, &err)?;
                        eprintln!("logged to {}", path.display());
                    }
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Command::Check { chords } => {
            let qualities = corpus::load(&chords)?;
            let failures = corpus::check(&qualities);
            for err in &failures {
                eprintln!("{}", err);
            }
            println!(
                "{} chords x 12 roots: {} failed",
                qualities.len(),
                failures.len()
            );
            Ok(if failures.is_empty() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Quiz {
            chords,
            logs,
            seed,
        } => {
            let qualities = corpus::load(&chords)?;
            quiz::run(&qualities, &logs, seed).context("quiz ended unexpectedly")?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_quality_may_start_with_a_dash() {
        let cli = Cli::try_parse_from(["chordview", "show", "C", "-7", "b9"]).unwrap();
        match cli.command {
            Command::Show { root, quality, .. } => {
                assert_eq!(root, "C");
                assert_eq!(quality, vec!["-7", "b9"]);
            }
            _ => panic!("expected show"),
        }
    }
}
