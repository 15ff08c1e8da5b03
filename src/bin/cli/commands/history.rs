use anyhow::{Context, Result};

use crate::app::App;
use crate::render::terminal::{paint, rule, score_color};
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let history = app
        .storage
        .load_wellness_history()
        .context("Failed to load wellness history")?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&history)?);
        }
        OutputFormat::Plain => {
            if history.is_empty() {
                println!("No archived scores yet. Run `haven-cli score --archive` to save one.");
                return Ok(());
            }

            println!("{:<17} {:>7}", "Calculated", "Overall");
            println!("{} {}", rule(17), rule(7));
            for snapshot in history.snapshots().iter().rev() {
                let overall = format!("{:>7}", snapshot.overall);
                println!(
                    "{:<17} {}",
                    snapshot.calculated_at.format("%Y-%m-%d %H:%M"),
                    paint(&overall, score_color(snapshot.overall), use_color)
                );
            }

            if let Some(change) = history.overall_change() {
                println!("\nChange since previous: {:+}", change);
            }
        }
    }

    Ok(())
}
