use anyhow::{Context, Result};
use chrono::Utc;

use haven_lib::achievements::{unlock_notices, UnlockNotice};
use haven_lib::activity::CreateMoodRequest;

use crate::app::App;
use crate::render::terminal::{paint, Color};
use crate::OutputFormat;

pub fn run_feature(app: &App, name: &str, format: &OutputFormat, use_color: bool) -> Result<()> {
    let now = Utc::now();
    let mut personalization = app.personalization()?;
    personalization
        .track_feature_usage(name, now)
        .context("Failed to save behavior record")?;

    let (_, unlocked) = app.refresh_achievements(now.date_naive())?;
    let notices = unlock_notices(&unlocked);

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "feature": name,
                "behavior": personalization.behavior(),
                "unlocked": notices,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("Tracked use of '{}'.", name);
            print_notices(&notices, use_color);
        }
    }

    Ok(())
}

pub fn run_mood(
    app: &App,
    label: &str,
    intensity: u8,
    factors: Vec<String>,
    notes: Option<String>,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let entry = app
        .storage
        .add_mood_entry(CreateMoodRequest {
            mood: label.to_string(),
            intensity,
            factors,
            notes,
        })
        .context("Failed to save mood entry")?;

    let now = Utc::now();
    let mut personalization = app.personalization()?;
    personalization
        .track_mood_entry(entry.mood.clone(), entry.factors.clone(), now)
        .context("Failed to save behavior record")?;
    personalization
        .track_feature_usage("mood", now)
        .context("Failed to save behavior record")?;

    let (_, unlocked) = app.refresh_achievements(entry.date)?;
    let notices = unlock_notices(&unlocked);

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "entry": entry,
                "unlocked": notices,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("Logged {} ({}/10).", entry.mood, entry.intensity);
            print_notices(&notices, use_color);
        }
    }

    Ok(())
}

fn print_notices(notices: &[UnlockNotice], use_color: bool) {
    for notice in notices {
        println!("{}", paint(&notice.message, Color::GREEN, use_color));
    }
}
