use anyhow::Result;
use chrono::Utc;

use haven_lib::achievements::unlock_notices;

use crate::app::App;
use crate::render::terminal::{bold, paint, progress_bar, Color};
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let (engine, unlocked) = app.refresh_achievements(Utc::now().date_naive())?;
    let notices = unlock_notices(&unlocked);

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "achievements": engine.achievements(),
                "summary": engine.summary(),
                "unlocked": notices,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            for notice in &notices {
                println!("{}", paint(&notice.message, Color::GREEN, use_color));
            }
            if !notices.is_empty() {
                println!();
            }

            let title_w = engine
                .achievements()
                .iter()
                .map(|a| a.title.len())
                .max()
                .unwrap_or(5)
                .max(5);

            for achievement in engine.achievements() {
                let mark = if achievement.completed { "\u{2713}" } else { " " };
                let title = format!("{:<width$}", achievement.title, width = title_w);
                let title = if achievement.completed {
                    bold(&title, use_color)
                } else {
                    title
                };
                println!(
                    "{} {} {} {}/{}  {}",
                    mark,
                    title,
                    progress_bar(achievement.percent(), 10),
                    achievement.current_progress,
                    achievement.requirement,
                    paint(&achievement.description, Color::DIM, use_color)
                );
            }

            let summary = engine.summary();
            println!(
                "\n{} of {} completed ({}%)",
                summary.completed, summary.total, summary.completion_percent
            );
        }
    }

    Ok(())
}
