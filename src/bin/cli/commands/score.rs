use anyhow::{Context, Result};

use haven_lib::wellness::calculate_wellness_score_now;

use crate::app::App;
use crate::render::terminal::{bold, paint, rule, score_color, trend_arrow};
use crate::OutputFormat;

pub fn run(app: &App, archive: bool, format: &OutputFormat, use_color: bool) -> Result<()> {
    let activity = app.activity()?;
    let personalization = app.personalization()?;
    let score = calculate_wellness_score_now(&activity.inputs(personalization.behavior()));

    if archive {
        app.storage
            .archive_wellness_score(score.clone(), app.config.history_limit)
            .context("Failed to archive wellness score")?;
    }

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&score)?);
        }
        OutputFormat::Plain => {
            let overall = format!("{}/100", score.overall);
            println!(
                "{} {}",
                bold("Wellness score:", use_color),
                paint(&overall, score_color(score.overall), use_color)
            );
            println!();

            println!("{:<12} {:>5} {:>7}  {}", "Metric", "Value", "Weight", "Trend");
            println!("{} {} {}  {}", rule(12), rule(5), rule(7), rule(8));
            for metric in &score.metrics {
                println!(
                    "{:<12} {:>5} {:>6.0}%  {}",
                    metric.name,
                    metric.value,
                    metric.weight * 100.0,
                    trend_arrow(metric.trend, use_color)
                );
            }

            let minutes = activity.mindfulness.total_minutes();
            if minutes > 0 {
                println!("\nMindfulness practiced: {} minutes in total", minutes);
            }

            if !score.strengths.is_empty() {
                println!("\n{}", bold("Strengths", use_color));
                for strength in &score.strengths {
                    println!("  + {}", strength);
                }
            }

            if !score.improvements.is_empty() {
                println!("\n{}", bold("Try next", use_color));
                for suggestion in &score.improvements {
                    println!("  - {}", suggestion);
                }
            }

            if archive {
                println!("\nSaved to history.");
            }
        }
    }

    Ok(())
}
