//! Formatting utilities

use footwork::DVec2;
use humansize::{DECIMAL, format_size};
use std::time::Duration;

/// Format file size in human-readable format
pub fn format_bytes(bytes: u64) -> String {
    format_size(bytes, DECIMAL)
}

/// Format a position as `(x, y)` with two decimals
pub fn format_point(point: DVec2) -> String {
    format!("({:.2}, {:.2})", point.x, point.y)
}

/// Format an angle in degrees
pub fn format_degrees(degrees: f64) -> String {
    format!("{degrees:.1}°")
}

/// Format a playing time in seconds
pub fn format_duration(duration: Duration) -> String {
    format!("{:.2}s", duration.as_secs_f64())
}
