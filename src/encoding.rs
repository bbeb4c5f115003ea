//! PNG delivery: single sprites and seed-sweep contact sheets.
//!
//! The generation core never touches the filesystem; this module is the
//! binary's delivery boundary.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use image::RgbaImage;
use serde_json::json;

use crate::error_codes::{CodedError, CODE_INVALID_SHEET};
use crate::frame::SpriteFrame;

/// Write one frame as a PNG file.
pub fn write_png(frame: &SpriteFrame, path: &Path) -> Result<()> {
    let image = RgbaImage::from_raw(
        frame.width() as u32,
        frame.height() as u32,
        frame.as_bytes().to_vec(),
    )
    .ok_or_else(|| anyhow!("frame buffer does not match its dimensions"))?;
    image
        .save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Compose equally sized frames into one sheet on a transparent background,
/// laid out left-to-right, top-to-bottom on a fixed-column grid with
/// `padding` transparent pixels between cells.
pub fn compose_sheet(
    frames: &[SpriteFrame],
    columns: usize,
    padding: usize,
) -> Result<SpriteFrame> {
    if frames.is_empty() || columns == 0 {
        return Err(anyhow!(CodedError::usage(
            CODE_INVALID_SHEET,
            "sheet needs at least one sprite and one column",
        )));
    }
    let cell_width = frames[0].width();
    let cell_height = frames[0].height();
    for (index, frame) in frames.iter().enumerate() {
        if frame.width() != cell_width || frame.height() != cell_height {
            return Err(anyhow!(CodedError::usage(
                CODE_INVALID_SHEET,
                format!(
                    "sprite {index} is {}x{}, expected {cell_width}x{cell_height}",
                    frame.width(),
                    frame.height()
                ),
            )
            .with_details(json!({ "index": index }))));
        }
    }

    let columns = columns.min(frames.len());
    let rows = frames.len().div_ceil(columns);
    let sheet_width = columns * cell_width + (columns - 1) * padding;
    let sheet_height = rows * cell_height + (rows - 1) * padding;

    let mut sheet = SpriteFrame::blank(sheet_width, sheet_height);
    for (index, frame) in frames.iter().enumerate() {
        let origin_x = (index % columns) * (cell_width + padding);
        let origin_y = (index / columns) * (cell_height + padding);
        for y in 0..cell_height {
            for x in 0..cell_width {
                sheet.set_pixel(origin_x + x, origin_y + y, frame.pixel(x, y));
            }
        }
    }
    Ok(sheet)
}
