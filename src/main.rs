// src/main.rs
//! `ruler-card`: renders a dual-scale ruler sized for the LS027B7DH01A
//! memory LCD and writes it to a grayscale PNG.

pub mod canvas;
pub mod digits;
pub mod panel;
pub mod ruler;

use crate::canvas::Canvas;
use anyhow::{Context, Result};
use log::info;

fn main() -> Result<()> {
    // Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "ruler-card".to_string());
    let output = match (args.next(), args.next()) {
        (Some(path), None) => path,
        _ => {
            println!("{program} {{output.png}}");
            std::process::exit(1);
        }
    };

    info!(
        "Rendering {}x{} ruler card to {}",
        panel::WIDTH,
        panel::HEIGHT,
        output
    );

    let mut canvas = Canvas::new(panel::WIDTH, panel::HEIGHT);
    ruler::draw_scale(&mut canvas, &ruler::METRIC);
    ruler::draw_scale(&mut canvas, &ruler::IMPERIAL);

    let (width, height) = (canvas.width() as u32, canvas.height() as u32);
    let encoded = image::GrayImage::from_raw(width, height, canvas.into_raw())
        .context("canvas buffer does not match the image dimensions")?;
    encoded
        .save(&output)
        .with_context(|| format!("failed to write {output}"))?;

    info!("Wrote {output}");
    Ok(())
}
