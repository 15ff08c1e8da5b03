use anyhow::{Context, Result};

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat) -> Result<()> {
    let mut personalization = app.personalization()?;
    personalization
        .reset_preferences()
        .context("Failed to reset preferences")?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "reset": true }));
        }
        OutputFormat::Plain => {
            println!("Preferences reset. Activity records were kept.");
        }
    }

    Ok(())
}
