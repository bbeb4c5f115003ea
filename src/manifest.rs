//! Sprite manifest files: one YAML document describing one sprite job.
//!
//! ```yaml
//! sprite:
//!   preset: robot        # or: mask: ["  ..", " .+*"]
//! options:
//!   seed: 42
//!   colored: false
//!   scale_x: 8
//!   scale_y: 8
//! ```

use std::fs;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;

use crate::frame::SpriteFrame;
use crate::generator::{generate_from_mask, generate_from_preset, SpriteConfig};
use crate::mask::Mask;
use crate::presets::Preset;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpriteManifest {
    pub sprite: SpriteSource,
    #[serde(default)]
    pub options: SpriteConfig,
}

/// Where the mask comes from: a catalog keyword or inline pattern rows.
/// Exactly one must be set.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpriteSource {
    #[serde(default)]
    pub preset: Option<String>,
    #[serde(default)]
    pub mask: Option<Vec<String>>,
}

/// The source with the preset/mask choice settled at the boundary.
#[derive(Debug, Clone)]
pub enum ResolvedSource {
    Preset(Preset),
    Mask(Mask),
}

impl SpriteManifest {
    pub fn resolve_source(&self) -> Result<ResolvedSource> {
        match (&self.sprite.preset, &self.sprite.mask) {
            (Some(keyword), None) => Ok(ResolvedSource::Preset(Preset::from_keyword(keyword)?)),
            (None, Some(rows)) => Ok(ResolvedSource::Mask(Mask::parse(rows)?)),
            (Some(_), Some(_)) => {
                bail!("sprite must set either 'preset' or 'mask', not both")
            }
            (None, None) => bail!("sprite must set one of 'preset' or 'mask'"),
        }
    }

    /// Run the full pipeline for this manifest.
    pub fn generate(&self) -> Result<SpriteFrame> {
        match self.resolve_source()? {
            ResolvedSource::Preset(preset) => generate_from_preset(preset, &self.options),
            ResolvedSource::Mask(mask) => generate_from_mask(&mask, &self.options),
        }
    }

    /// Same pipeline with the configured seed replaced, for seed sweeps.
    pub fn generate_with_seed(&self, seed: u64) -> Result<SpriteFrame> {
        let mut options = self.options.clone();
        options.seed = seed;
        match self.resolve_source()? {
            ResolvedSource::Preset(preset) => generate_from_preset(preset, &options),
            ResolvedSource::Mask(mask) => generate_from_mask(&mask, &options),
        }
    }
}

pub fn load_and_validate_manifest(path: &Path) -> Result<SpriteManifest> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read manifest {}", path.display()))?;
    let manifest: SpriteManifest = serde_yaml::from_str(&contents).map_err(|error| {
        let location = error
            .location()
            .map(|location| format!("line {}, column {}", location.line(), location.column()))
            .unwrap_or_else(|| "unknown location".to_owned());
        anyhow!(
            "failed to parse yaml in {} at {}: {}",
            path.display(),
            location,
            error
        )
    })?;

    manifest.resolve_source().with_context(|| {
        format!("failed validating sprite source in {}", path.display())
    })?;
    manifest.options.validate()?;
    Ok(manifest)
}
