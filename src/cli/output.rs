//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (respects NO_COLOR):
//! - Green: success, checkmarks
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: paths, names, hints
//! - Dimmed: secondary info

use colored::Colorize;
use std::fmt::Display;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ published pr-42`
pub fn success(msg: &str) {
    if colors_enabled() {
        println!("{} {}", "✓".green(), msg);
    } else {
        println!("✓ {}", msg);
    }
}

/// Print an error message to stderr (red).
///
/// Example: `✗ Secret value for API_KEY not found`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", "✗".red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a warning message (yellow).
///
/// Example: `⚠ section [env.staging] not found`
pub fn warn(msg: &str) {
    if colors_enabled() {
        println!("{} {}", "⚠".yellow(), msg);
    } else {
        println!("⚠ {}", msg);
    }
}

/// Print a hint message (cyan) to stderr, alongside the error it explains.
///
/// Example: `→ export API_KEY before running publish`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", "→".cyan(), msg.cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Print a key-value pair (label dimmed, value bold).
///
/// Example: `  status:  200`
pub fn kv(label: &str, value: impl Display) {
    if colors_enabled() {
        println!("  {}  {}", label.dimmed(), value.to_string().bold());
    } else {
        println!("  {}  {}", label, value);
    }
}

/// Print a list item with bullet.
pub fn list_item(item: &str) {
    println!("  • {}", item);
}

/// Format a path string in cyan.
pub fn path(p: &str) -> String {
    if colors_enabled() {
        p.cyan().to_string()
    } else {
        p.to_string()
    }
}

/// Format a name (environment, secret, namespace) in cyan.
pub fn name(n: &str) -> String {
    if colors_enabled() {
        n.cyan().to_string()
    } else {
        n.to_string()
    }
}
