//! Nearest-neighbor rescaling of a rendered frame.
//!
//! Rescaling only changes the pixel repetition pattern; it never invents
//! channel values. Fractional and sub-1 factors are legal as long as the
//! floored output dimensions stay positive.

use anyhow::{anyhow, Result};
use serde_json::json;

use crate::error_codes::{CodedError, CODE_INVALID_SCALE};
use crate::frame::SpriteFrame;

/// Resample `frame` to `floor(w * scale_x) x floor(h * scale_y)`.
pub fn scale_frame(frame: &SpriteFrame, scale_x: f64, scale_y: f64) -> Result<SpriteFrame> {
    if !scale_x.is_finite() || !scale_y.is_finite() || scale_x <= 0.0 || scale_y <= 0.0 {
        return Err(anyhow!(CodedError::usage(
            CODE_INVALID_SCALE,
            format!("scale factors must be positive finite numbers, got ({scale_x}, {scale_y})"),
        )));
    }

    let width = frame.width();
    let height = frame.height();
    let new_width = (width as f64 * scale_x).floor() as usize;
    let new_height = (height as f64 * scale_y).floor() as usize;
    if new_width == 0 || new_height == 0 {
        return Err(anyhow!(CodedError::usage(
            CODE_INVALID_SCALE,
            format!("scale ({scale_x}, {scale_y}) collapses {width}x{height} to zero pixels"),
        )
        .with_details(json!({
            "scaled_width": new_width,
            "scaled_height": new_height,
        }))));
    }

    let mut scaled = SpriteFrame::blank(new_width, new_height);
    for y in 0..new_height {
        let src_y = y * height / new_height;
        for x in 0..new_width {
            let src_x = x * width / new_width;
            scaled.set_pixel(x, y, frame.pixel(src_x, src_y));
        }
    }
    Ok(scaled)
}
