use haven_lib::personalization::Priority;
use haven_lib::wellness::Trend;

/// ANSI color codes
#[allow(dead_code)]
pub struct Color;

#[allow(dead_code)]
impl Color {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
}

/// Wrap `text` in an ANSI style when colors are enabled
pub fn paint(text: &str, style: &str, use_color: bool) -> String {
    if use_color {
        format!("{}{}{}", style, text, Color::RESET)
    } else {
        text.to_string()
    }
}

pub fn bold(text: &str, use_color: bool) -> String {
    paint(text, Color::BOLD, use_color)
}

pub fn trend_arrow(trend: Trend, use_color: bool) -> String {
    match trend {
        Trend::Up => paint("\u{2191} up", Color::GREEN, use_color),
        Trend::Down => paint("\u{2193} down", Color::RED, use_color),
        Trend::Stable => paint("\u{2192} stable", Color::GRAY, use_color),
    }
}

/// Color for a 0-100 score
pub fn score_color(value: u32) -> &'static str {
    if value >= 80 {
        Color::GREEN
    } else if value >= 50 {
        Color::YELLOW
    } else {
        Color::RED
    }
}

pub fn priority_label(priority: Priority, use_color: bool) -> String {
    match priority {
        Priority::High => paint("high", Color::RED, use_color),
        Priority::Medium => paint("medium", Color::YELLOW, use_color),
        Priority::Low => paint("low", Color::GRAY, use_color),
    }
}

/// Fixed-width progress bar, e.g. `[####------]`
pub fn progress_bar(percent: u32, width: usize) -> String {
    let filled = (percent.min(100) as usize * width) / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// Horizontal rule of `width` box-drawing characters
pub fn rule(width: usize) -> String {
    "\u{2500}".repeat(width)
}
