use anyhow::Result;
use chrono::Utc;

use haven_lib::personalization::{generate_predictions, PredictionType};

use crate::app::App;
use crate::render::terminal::{bold, paint, Color};
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let activity = app.activity()?;
    let predictions = generate_predictions(&activity.moods, Utc::now().date_naive());

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&predictions)?);
        }
        OutputFormat::Plain => {
            if predictions.is_empty() {
                println!("Not enough mood history for predictions yet (need at least 7 entries).");
                return Ok(());
            }

            for prediction in &predictions {
                let (label, color) = match prediction.prediction_type {
                    PredictionType::Risk => ("Heads up", Color::RED),
                    PredictionType::Improvement => ("Looking up", Color::GREEN),
                    PredictionType::Maintenance => ("Steady", Color::BLUE),
                };
                println!(
                    "{} {} ({}% confidence)",
                    paint(label, color, use_color),
                    bold(&prediction.timeframe, use_color),
                    prediction.confidence
                );
                println!("  {}", prediction.description);
                println!("  {}", prediction.recommendation);
                println!();
            }
        }
    }

    Ok(())
}
