use anyhow::Result;
use chrono::Utc;

use haven_lib::progress::calculate_streaks;

use crate::app::App;
use crate::render::terminal::bold;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let activity = app.activity()?;
    let summary = calculate_streaks(&activity.moods, Utc::now().date_naive());

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Plain => {
            println!("{} {} days", bold("Current streak:", use_color), summary.current_streak);
            println!("{} {} days", bold("Longest streak:", use_color), summary.longest_streak);
            println!("{} {}", bold("Days tracked:  ", use_color), summary.total_days);
            if summary.current_streak == 0 && summary.total_days > 0 {
                println!("\nLog a mood today to start a new streak.");
            }
        }
    }

    Ok(())
}
