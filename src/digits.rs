// src/digits.rs
//! 5x5 bitmap glyphs for the ruler labels, and the routine that stamps
//! them onto the canvas.
//!
//! Only digits 0 through 5 exist: for a 350-pixel canvas at 0.147mm dot
//! pitch the metric labels top out at "5" (50mm) and the imperial labels
//! at "2" (2in), so the higher digits are unreachable.

use crate::canvas::Canvas;
use log::warn;

/// Glyph patterns indexed by digit value. `#` is ink.
const DIGITS: [[&str; 5]; 6] = [
    [
        " ### ", //
        "#   #", //
        "#   #", //
        "#   #", //
        " ### ",
    ],
    [
        " ##  ", //
        "  #  ", //
        "  #  ", //
        "  #  ", //
        " ### ",
    ],
    [
        " ### ", //
        "    #", //
        " ### ", //
        "#    ", //
        "#####",
    ],
    [
        "#### ", //
        "    #", //
        " ### ", //
        "    #", //
        "#### ",
    ],
    [
        "  ## ", //
        " # # ", //
        "#  # ", //
        "#####", //
        "   # ",
    ],
    [
        "#####", //
        "#    ", //
        "#### ", //
        "    #", //
        "#### ",
    ],
];

/// Stamp the glyph for `digit` onto the canvas with its top-left corner at
/// `(x, y)`.
///
/// The anchor may sit partially off-canvas; clipped cells are skipped by
/// the canvas. A digit with no glyph draws nothing.
pub fn draw_digit(canvas: &mut Canvas, x: i64, y: i64, digit: i64) {
    let Some(glyph) = usize::try_from(digit).ok().and_then(|d| DIGITS.get(d)) else {
        warn!("no glyph for digit {digit}; label skipped");
        return;
    };
    for (row, line) in glyph.iter().enumerate() {
        for (col, cell) in line.bytes().enumerate() {
            if cell == b'#' {
                canvas.set_black(x + col as i64, y + row as i64);
            }
        }
    }
}
