mod app;
mod commands;
mod render;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "haven-cli", about = "Haven wellness companion CLI", version)]
struct Cli {
    /// Data directory (default: platform data dir, or `data_dir` from config)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Config file (default: platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Show the current wellness score
    Score {
        /// Save the score to the wellness history
        #[arg(long)]
        archive: bool,
    },

    /// Show archived wellness scores
    History,

    /// Show mood-tracking streaks
    Streak,

    /// Update and list achievements
    Achievements,

    /// Predict upcoming mood changes
    Predict,

    /// Show a quote picked for you
    Quote,

    /// Show today's reminder schedule
    Reminders,

    /// Suggest features to try next
    Recommend {
        /// Maximum suggestions (default: `recommendation_limit` from config)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Record activity
    #[command(subcommand)]
    Track(TrackCommand),

    /// Forget learned preferences
    Reset,
}

#[derive(Subcommand)]
enum TrackCommand {
    /// Record use of a feature
    Feature {
        /// Feature name (e.g. mood, journal, mindfulness)
        name: String,
    },

    /// Log a mood entry
    Mood {
        /// Mood label (ecstatic, happy, neutral, sad, angry, or your own)
        label: String,
        /// Intensity from 1 to 10
        #[arg(long, default_value = "5")]
        intensity: u8,
        /// Comma-separated factors
        #[arg(long)]
        factors: Option<String>,
        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,
    },
}

/// Split a comma-separated list, dropping empty items
fn parse_list(list: Option<&str>) -> Vec<String> {
    list.map(|s| {
        s.split(',')
            .map(|item| item.trim().to_string())
            .filter(|item| !item.is_empty())
            .collect()
    })
    .unwrap_or_default()
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let use_color = !cli.no_color && std::io::stdout().is_terminal();
    let app = app::App::new(cli.data_dir.as_deref(), cli.config.as_deref())?;

    match cli.command {
        Command::Score { archive } => {
            commands::score::run(&app, archive, &cli.format, use_color)?;
        }
        Command::History => {
            commands::history::run(&app, &cli.format, use_color)?;
        }
        Command::Streak => {
            commands::streak::run(&app, &cli.format, use_color)?;
        }
        Command::Achievements => {
            commands::achievements::run(&app, &cli.format, use_color)?;
        }
        Command::Predict => {
            commands::predict::run(&app, &cli.format, use_color)?;
        }
        Command::Quote => {
            commands::quote::run(&app, &cli.format, use_color)?;
        }
        Command::Reminders => {
            commands::reminders::run(&app, &cli.format, use_color)?;
        }
        Command::Recommend { limit } => {
            let limit = limit.unwrap_or(app.config.recommendation_limit);
            commands::recommend::run(&app, limit, &cli.format, use_color)?;
        }
        Command::Track(subcmd) => match subcmd {
            TrackCommand::Feature { name } => {
                commands::track::run_feature(&app, &name, &cli.format, use_color)?;
            }
            TrackCommand::Mood {
                label,
                intensity,
                factors,
                notes,
            } => {
                let factors = parse_list(factors.as_deref());
                commands::track::run_mood(
                    &app,
                    &label,
                    intensity,
                    factors,
                    notes,
                    &cli.format,
                    use_color,
                )?;
            }
        },
        Command::Reset => {
            commands::reset::run(&app, &cli.format)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list() {
        assert_eq!(parse_list(Some("sleep, work,,exercise ")), vec!["sleep", "work", "exercise"]);
        assert!(parse_list(None).is_empty());
    }

    #[test]
    fn test_cli_parses_track_mood() {
        let cli = Cli::try_parse_from([
            "haven-cli",
            "--format",
            "json",
            "track",
            "mood",
            "happy",
            "--intensity",
            "8",
            "--factors",
            "sleep,friends",
        ])
        .unwrap();

        assert!(matches!(cli.format, OutputFormat::Json));
        match cli.command {
            Command::Track(TrackCommand::Mood {
                label, intensity, ..
            }) => {
                assert_eq!(label, "happy");
                assert_eq!(intensity, 8);
            }
            _ => panic!("expected track mood"),
        }
    }
}
