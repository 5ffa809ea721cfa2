//! Shared CLI output helpers for consistent operator-facing text.
//!
//! Every handler prints through this module so that `--json`, `--quiet`
//! and `--color` behave the same across commands. Monetary values are
//! rounded to cents here and nowhere else.

use std::fmt::Display;
use std::sync::{OnceLock, RwLock};
use std::time::Duration;

use owo_colors::OwoColorize;
use serde_json::json;

/// Runtime output configuration shared by CLI handlers.
#[derive(Debug, Clone, Copy)]
pub struct OutputConfig {
    /// Emit machine-readable JSON instead of human-readable text.
    pub json: bool,
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Use ANSI colors.
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            json: false,
            quiet: false,
            color: true,
        }
    }
}

static OUTPUT_CONFIG: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn config_cell() -> &'static RwLock<OutputConfig> {
    OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()))
}

fn read_config() -> OutputConfig {
    match config_cell().read() {
        Ok(config) => *config,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

/// Apply output settings from global CLI flags.
pub fn configure(config: OutputConfig) {
    match config_cell().write() {
        Ok(mut current) => *current = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

/// Return whether machine-readable JSON output is enabled.
#[must_use]
pub fn is_json() -> bool {
    read_config().json
}

/// Return whether quiet mode is enabled.
#[must_use]
pub fn is_quiet() -> bool {
    read_config().quiet
}

fn suppressed(config: OutputConfig) -> bool {
    config.json || config.quiet
}

fn paint(text: String, style: impl FnOnce(&str) -> String) -> String {
    if read_config().color && !is_json() {
        style(&text)
    } else {
        text
    }
}

/// Emit one JSON document on stdout.
pub fn json_output(value: serde_json::Value) {
    println!("{value}");
}

/// Print the application name and version.
pub fn header(version: &str) {
    if suppressed(read_config()) {
        return;
    }
    println!(
        "{} {}",
        paint("spreadcalc".to_string(), |s| s.bold().to_string()),
        paint(version.to_string(), |s| s.dimmed().to_string())
    );
}

/// Print a section header.
pub fn section(title: &str) {
    if suppressed(read_config()) {
        return;
    }
    println!();
    println!("{}", paint(title.to_string(), |s| s.bold().to_string()));
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    if suppressed(read_config()) {
        return;
    }
    let label = format!("{label:<16}");
    println!("  {} {}", paint(label, |s| s.dimmed().to_string()), value);
}

/// Print a success line.
pub fn success(message: &str) {
    if suppressed(read_config()) {
        return;
    }
    println!("  {} {}", paint("✓".to_string(), |s| s.green().to_string()), message);
}

/// Print a warning line.
pub fn warning(message: &str) {
    if suppressed(read_config()) {
        return;
    }
    println!("  {} {}", paint("⚠".to_string(), |s| s.yellow().to_string()), message);
}

/// Print an error line on stderr. Shown even in quiet mode.
pub fn error(message: &str) {
    if is_json() {
        eprintln!("{}", json!({ "type": "error", "message": message }));
        return;
    }
    eprintln!("  {} {}", paint("×".to_string(), |s| s.red().to_string()), message);
}

/// Print a dimmed note.
pub fn note(message: &str) {
    if suppressed(read_config()) {
        return;
    }
    println!("  {}", paint(message.to_string(), |s| s.dimmed().to_string()));
}

/// Print preformatted lines (e.g. a rendered table), each indented.
pub fn lines(content: &str) {
    if suppressed(read_config()) {
        return;
    }
    for line in content.lines() {
        println!("  {line}");
    }
}

/// Braille spinner animation frames.
const BRAILLE_SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Create and start a progress spinner. Hidden in JSON or quiet mode.
pub fn spinner(message: &str) -> indicatif::ProgressBar {
    if suppressed(read_config()) {
        return indicatif::ProgressBar::hidden();
    }

    let pb = indicatif::ProgressBar::new_spinner();
    if let Ok(style) = indicatif::ProgressStyle::default_spinner()
        .tick_strings(BRAILLE_SPINNER)
        .template("  {spinner:.cyan} {msg}")
    {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Finish a spinner with a success checkmark.
pub fn spinner_success(pb: &indicatif::ProgressBar, message: &str) {
    if suppressed(read_config()) {
        pb.finish_and_clear();
        return;
    }
    pb.finish_with_message(format!(
        "{} {}",
        paint("✓".to_string(), |s| s.green().to_string()),
        message
    ));
}

/// Finish a spinner with a warning mark.
pub fn spinner_warn(pb: &indicatif::ProgressBar, message: &str) {
    if suppressed(read_config()) {
        pb.finish_and_clear();
        return;
    }
    pb.finish_with_message(format!(
        "{} {}",
        paint("⚠".to_string(), |s| s.yellow().to_string()),
        message
    ));
}

/// Format a dollar amount rounded to cents (`$1234.50`, `-$12.00`).
#[must_use]
pub fn usd(value: f64) -> String {
    let cents = format!("{:.2}", value.abs());
    if value < 0.0 && cents != "0.00" {
        format!("-${cents}")
    } else {
        format!("${cents}")
    }
}

/// Dollar amount colored by sign: green for gains, red for losses.
#[must_use]
pub fn pnl(value: f64) -> String {
    let text = usd(value);
    if value >= 0.0 {
        paint(text, |s| s.green().to_string())
    } else {
        paint(text, |s| s.red().to_string())
    }
}

/// Horizontal bar proportional to `|value| / max_abs`, at most `width` cells.
#[must_use]
pub fn bar(value: f64, max_abs: f64, width: usize) -> String {
    if max_abs <= 0.0 || !value.is_finite() {
        return String::new();
    }
    let ratio = (value.abs() / max_abs).min(1.0);
    let cells = (ratio * width as f64).round() as usize;
    let text = "█".repeat(cells.max(usize::from(value != 0.0)));
    if value >= 0.0 {
        paint(text, |s| s.green().to_string())
    } else {
        paint(text, |s| s.red().to_string())
    }
}
