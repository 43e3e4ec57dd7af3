// src/panel.rs
//! Metrics for the Sharp LS027B7DH01A memory LCD panel.
//!
//! From the datasheet: viewing area 58.8mm x 35.28mm, dot pitch
//! 0.147mm x 0.147mm. The canvas height is the portion of the panel the
//! ruler occupies; the physical constants drive the pixel-to-unit mapping
//! for both scales.

/// Canvas width in pixels.
pub const WIDTH: usize = 350;

/// Canvas height in pixels.
pub const HEIGHT: usize = 155;

/// Distance between adjacent pixels in millimeters.
pub const DOT_PITCH_MM: f64 = 0.147;

/// Conversion factor from millimeters to eighths of an inch.
pub const MM_TO_8TH_IN: f64 = (1.0 / 25.4) * 8.0;
