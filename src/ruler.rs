// src/ruler.rs
//! Tick and label generation for the two ruler scales.
//!
//! Both scales are one walk across the canvas width: each pixel column is
//! mapped to a physical-unit bucket, and a tick is drawn whenever the
//! bucket changes. Major boundaries get a tall labeled tick, minor
//! boundaries a medium one, everything else a short one. The metric scale
//! hangs its ticks from the top edge, the imperial scale grows them up
//! from the bottom edge.

use crate::canvas::Canvas;
use crate::digits::draw_digit;
use crate::panel::{DOT_PITCH_MM, MM_TO_8TH_IN};
use log::trace;

/// Which canvas edge a scale is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
}

/// Parameters for one ruler scale.
#[derive(Debug, Clone)]
pub struct Scale {
    /// Physical units advanced per pixel column.
    pub units_per_px: f64,
    /// Units between tall labeled ticks.
    pub major_step: i64,
    /// Units between medium ticks.
    pub minor_step: i64,
    /// Edge the ticks hang from.
    pub edge: Edge,
}

/// Metric scale: one tick per millimeter, medium every 5mm, labeled every
/// centimeter, along the top edge.
pub const METRIC: Scale = Scale {
    units_per_px: DOT_PITCH_MM,
    major_step: 10,
    minor_step: 5,
    edge: Edge::Top,
};

/// Imperial scale: one tick per 1/8in, medium every half inch, labeled
/// every inch, along the bottom edge.
pub const IMPERIAL: Scale = Scale {
    units_per_px: DOT_PITCH_MM * MM_TO_8TH_IN,
    major_step: 8,
    minor_step: 4,
    edge: Edge::Bottom,
};

/// Horizontal offset of a label's anchor from its tick, roughly centering
/// the 5-wide glyph over the tick column.
const LABEL_X_OFFSET: i64 = -7;

/// Tick lengths in millimeters of vertical extent, converted to pixels at
/// draw time.
const SHORT_TICK_MM: f64 = 1.0;
const MEDIUM_TICK_MM: f64 = 1.6;
const MAJOR_TICK_MM: f64 = 2.0;

/// Draw one scale onto the canvas.
///
/// Starts from a bucket of -1 so that column 0 always draws a boundary
/// tick.
pub fn draw_scale(canvas: &mut Canvas, scale: &Scale) {
    let height = canvas.height() as i64;
    let mut last_length: i64 = -1;

    for x in 0..canvas.width() {
        let length = (x as f64 * scale.units_per_px).floor() as i64;
        if length == last_length {
            continue;
        }

        let mut tick_height = (SHORT_TICK_MM / DOT_PITCH_MM).round() as i64;
        if length % scale.major_step == 0 {
            tick_height = (MAJOR_TICK_MM / DOT_PITCH_MM).round() as i64;
            if length > 0 {
                let label_y = match scale.edge {
                    Edge::Top => tick_height - 5,
                    Edge::Bottom => height - tick_height,
                };
                draw_digit(
                    canvas,
                    x as i64 + LABEL_X_OFFSET,
                    label_y,
                    length / scale.major_step,
                );
            }
        } else if length % scale.minor_step == 0 {
            tick_height = (MEDIUM_TICK_MM / DOT_PITCH_MM).round() as i64;
        }

        trace!("tick at x={x}: bucket {length}, height {tick_height}");
        for ty in 0..tick_height {
            match scale.edge {
                Edge::Top => canvas.set_black(x as i64, ty),
                Edge::Bottom => canvas.set_black(x as i64, height - 1 - ty),
            }
        }

        last_length = length;
    }
}
