//! spritegen: headless, seed-locked pixel sprite compiler.
//!
//! A compact mask template goes in; a finished RGBA bitmap comes out. The
//! pipeline is deterministic from the seed alone:
//!
//! ```text
//! preset / mask rows → decode → resolve shape (rng) → render (rng) → rescale
//! ```
//!
//! The core performs no I/O; PNG delivery and the YAML manifest loader exist
//! for the CLI and sit outside the generation boundary.

pub mod encoding;
pub mod error_codes;
pub mod frame;
pub mod generator;
pub mod manifest;
pub mod mask;
pub mod presets;
pub mod render;
pub mod rng;
pub mod scale;
pub mod shape;

pub use frame::SpriteFrame;
pub use generator::{generate_from_mask, generate_from_preset, SpriteConfig};
pub use mask::{Mask, MaskCell};
pub use presets::Preset;
pub use scale::scale_frame;
