use anyhow::Result;

use crate::app::App;
use crate::render::terminal::priority_label;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let reminders = app.personalization()?.reminders();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&reminders)?);
        }
        OutputFormat::Plain => {
            if reminders.is_empty() {
                println!("Reminders are turned off.");
                return Ok(());
            }

            for reminder in &reminders {
                println!(
                    "{}  {:<6}  {}",
                    reminder.time.format("%H:%M"),
                    priority_label(reminder.priority, use_color),
                    reminder.message
                );
            }
        }
    }

    Ok(())
}
