use anyhow::Result;

use crate::app::App;
use crate::render::terminal::{paint, Color};
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let content = app.personalization()?.personalized_quote();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&content)?);
        }
        OutputFormat::Plain => {
            println!("\"{}\"", content.quote);
            println!("  {}", paint(&format!("- {}", content.author), Color::DIM, use_color));
        }
    }

    Ok(())
}
