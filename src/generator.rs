//! Generation front door: configuration plus the two entry points.
//!
//! Everything downstream of here is pure computation. Each call owns a
//! freshly seeded engine, so concurrent generations never share state.

use anyhow::{anyhow, Result};
use serde::Deserialize;

use crate::error_codes::{CodedError, CODE_INVALID_CONFIG, CODE_INVALID_SCALE};
use crate::frame::SpriteFrame;
use crate::mask::Mask;
use crate::presets::Preset;
use crate::render::render;
use crate::rng::SpriteRng;
use crate::scale::scale_frame;
use crate::shape::ShapeGrid;

/// Immutable per-call generation options.
///
/// The float knobs are conceptually in [0, 1] but are not hard-clamped;
/// saturation is clamped at render time after the random scaling draw.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpriteConfig {
    /// Double the width by reflecting the left half. Overridden by preset
    /// catalog flags when generating from a preset.
    #[serde(default)]
    pub mirror_x: bool,
    /// Double the height by reflecting the top half. Same preset override
    /// rule as `mirror_x`.
    #[serde(default)]
    pub mirror_y: bool,
    #[serde(default = "default_colored")]
    pub colored: bool,
    /// Multiplier darkening border pixels in colored mode.
    #[serde(default = "default_edge_brightness")]
    pub edge_brightness: f64,
    /// Probability weight for abrupt hue shifts along the sweep.
    #[serde(default = "default_color_variations")]
    pub color_variations: f64,
    /// Per-pixel brightness jitter amplitude.
    #[serde(default = "default_brightness_noise")]
    pub brightness_noise: f64,
    /// Upper bound for the randomly drawn base saturation.
    #[serde(default = "default_saturation")]
    pub saturation: f64,
    #[serde(default)]
    pub seed: u64,
    #[serde(default = "default_scale")]
    pub scale_x: f64,
    #[serde(default = "default_scale")]
    pub scale_y: f64,
}

fn default_colored() -> bool {
    true
}

fn default_edge_brightness() -> f64 {
    0.3
}

fn default_color_variations() -> f64 {
    0.2
}

fn default_brightness_noise() -> f64 {
    0.3
}

fn default_saturation() -> f64 {
    0.5
}

fn default_scale() -> f64 {
    1.0
}

impl Default for SpriteConfig {
    fn default() -> Self {
        Self {
            mirror_x: false,
            mirror_y: false,
            colored: default_colored(),
            edge_brightness: default_edge_brightness(),
            color_variations: default_color_variations(),
            brightness_noise: default_brightness_noise(),
            saturation: default_saturation(),
            seed: 0,
            scale_x: default_scale(),
            scale_y: default_scale(),
        }
    }
}

impl SpriteConfig {
    pub fn validate(&self) -> Result<()> {
        for (label, value) in [
            ("edge_brightness", self.edge_brightness),
            ("color_variations", self.color_variations),
            ("brightness_noise", self.brightness_noise),
            ("saturation", self.saturation),
        ] {
            if !value.is_finite() {
                return Err(anyhow!(CodedError::usage(
                    CODE_INVALID_CONFIG,
                    format!("{label} must be finite, got {value}"),
                )));
            }
        }
        for (label, value) in [("scale_x", self.scale_x), ("scale_y", self.scale_y)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(anyhow!(CodedError::usage(
                    CODE_INVALID_SCALE,
                    format!("{label} must be a positive finite number, got {value}"),
                )));
            }
        }
        Ok(())
    }
}

/// Generate from a catalog preset. The preset's mirror flags replace the
/// configured ones.
pub fn generate_from_preset(preset: Preset, config: &SpriteConfig) -> Result<SpriteFrame> {
    let (mirror_x, mirror_y) = preset.mirror();
    generate(&preset.mask(), mirror_x, mirror_y, config)
}

/// Generate from a caller-supplied mask, honoring the configured mirror
/// flags.
pub fn generate_from_mask(mask: &Mask, config: &SpriteConfig) -> Result<SpriteFrame> {
    generate(mask, config.mirror_x, config.mirror_y, config)
}

fn generate(
    mask: &Mask,
    mirror_x: bool,
    mirror_y: bool,
    config: &SpriteConfig,
) -> Result<SpriteFrame> {
    config.validate()?;
    let mut rng = SpriteRng::from_seed(config.seed);
    let shape = ShapeGrid::resolve(mask, mirror_x, mirror_y, &mut rng);
    let frame = render(&shape, config, &mut rng);
    if config.scale_x != 1.0 || config.scale_y != 1.0 {
        return scale_frame(&frame, config.scale_x, config.scale_y);
    }
    Ok(frame)
}
