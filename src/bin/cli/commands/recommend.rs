use anyhow::Result;

use crate::app::App;
use crate::render::terminal::{bold, paint, Color};
use crate::OutputFormat;

pub fn run(app: &App, limit: usize, format: &OutputFormat, use_color: bool) -> Result<()> {
    let recommendations = app.personalization()?.recommendations(limit);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&recommendations)?);
        }
        OutputFormat::Plain => {
            if recommendations.is_empty() {
                println!("You've tried every feature. Nice work!");
                return Ok(());
            }

            for (i, rec) in recommendations.iter().enumerate() {
                println!(
                    "{}. {} {}",
                    i + 1,
                    bold(&rec.title, use_color),
                    paint(&format!("({})", rec.feature), Color::DIM, use_color)
                );
                println!("   {}", rec.reason);
            }
        }
    }

    Ok(())
}
