use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::json;
use sha2::{Digest, Sha256};

use spritegen::encoding::{compose_sheet, write_png};
use spritegen::error_codes::find_coded_error;
use spritegen::frame::SpriteFrame;
use spritegen::manifest::load_and_validate_manifest;
use spritegen::presets::Preset;

#[derive(Debug, Parser)]
#[command(name = "spritegen")]
#[command(about = "Seed-locked pixel sprite compiler")]
#[command(version = version_string())]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate one sprite from a manifest and write it as PNG.
    Render {
        manifest: PathBuf,
        #[arg(short = 'o', long = "output")]
        output: PathBuf,
        /// Print a machine-readable result line on stdout.
        #[arg(long)]
        json: bool,
    },
    /// Validate a manifest without rendering.
    Check { manifest: PathBuf },
    /// List the built-in mask catalog.
    Presets {
        #[arg(long)]
        json: bool,
    },
    /// Render a grid of seed-varied sprites into one PNG.
    Sheet {
        manifest: PathBuf,
        #[arg(short = 'o', long = "output")]
        output: PathBuf,
        /// Number of sprites; seeds run from the manifest seed upward.
        #[arg(long, default_value_t = 16)]
        count: u64,
        #[arg(long, default_value_t = 8)]
        columns: usize,
        /// Transparent pixels between sheet cells.
        #[arg(long, default_value_t = 1)]
        padding: usize,
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    fn json_mode(&self) -> bool {
        match self {
            Commands::Render { json, .. }
            | Commands::Presets { json, .. }
            | Commands::Sheet { json, .. } => *json,
            Commands::Check { .. } => false,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.command.json_mode();

    if let Err(error) = run(cli.command) {
        if json_mode {
            let envelope = match find_coded_error(&error) {
                Some(coded) => serde_json::to_value(coded.envelope()).unwrap_or_default(),
                None => json!({
                    "ok": false,
                    "error": { "code": "INTERNAL", "message": format!("{error:#}") },
                }),
            };
            println!("{envelope}");
        }
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Render {
            manifest,
            output,
            json,
        } => run_render(&manifest, &output, json),
        Commands::Check { manifest } => run_check(&manifest),
        Commands::Presets { json } => run_presets(json),
        Commands::Sheet {
            manifest,
            output,
            count,
            columns,
            padding,
            json,
        } => run_sheet(&manifest, &output, count, columns, padding, json),
    }
}

fn run_render(manifest_path: &Path, output_path: &Path, json: bool) -> Result<()> {
    let manifest = load_and_validate_manifest(manifest_path)?;
    let frame = manifest.generate()?;
    write_png(&frame, output_path)?;

    if json {
        println!(
            "{}",
            json!({
                "ok": true,
                "width": frame.width(),
                "height": frame.height(),
                "pixel_hash": pixel_hash(&frame),
                "output": output_path.display().to_string(),
            })
        );
    } else {
        println!(
            "Wrote {} ({}x{})",
            output_path.display(),
            frame.width(),
            frame.height()
        );
    }
    Ok(())
}

fn run_check(manifest_path: &Path) -> Result<()> {
    let manifest = load_and_validate_manifest(manifest_path)?;
    let frame = manifest.generate()?;

    println!(
        "OK: {} ({}x{}, seed {}, {})",
        manifest_path.display(),
        frame.width(),
        frame.height(),
        manifest.options.seed,
        if manifest.options.colored {
            "colored"
        } else {
            "monochrome"
        }
    );
    Ok(())
}

fn run_presets(json: bool) -> Result<()> {
    if json {
        let entries = Preset::ALL
            .iter()
            .map(|preset| {
                let (mask_width, mask_height) = preset.mask_dimensions();
                let (width, height) = preset.sprite_dimensions();
                let (mirror_x, mirror_y) = preset.mirror();
                json!({
                    "name": preset.keyword(),
                    "mask_width": mask_width,
                    "mask_height": mask_height,
                    "sprite_width": width,
                    "sprite_height": height,
                    "mirror_x": mirror_x,
                    "mirror_y": mirror_y,
                })
            })
            .collect::<Vec<_>>();
        println!("{}", json!({ "ok": true, "presets": entries }));
    } else {
        for preset in Preset::ALL {
            let (width, height) = preset.sprite_dimensions();
            let (mirror_x, mirror_y) = preset.mirror();
            println!(
                "{:<10} {}x{} (mirror_x: {mirror_x}, mirror_y: {mirror_y})",
                preset.keyword(),
                width,
                height
            );
        }
    }
    Ok(())
}

fn run_sheet(
    manifest_path: &Path,
    output_path: &Path,
    count: u64,
    columns: usize,
    padding: usize,
    json: bool,
) -> Result<()> {
    let manifest = load_and_validate_manifest(manifest_path)?;
    let base_seed = manifest.options.seed;

    let mut frames = Vec::with_capacity(count as usize);
    for offset in 0..count {
        frames.push(manifest.generate_with_seed(base_seed.wrapping_add(offset))?);
        if (offset + 1) % 32 == 0 {
            eprintln!("generated sprite {}/{count}", offset + 1);
        }
    }

    let sheet = compose_sheet(&frames, columns, padding)?;
    write_png(&sheet, output_path)?;

    if json {
        println!(
            "{}",
            json!({
                "ok": true,
                "width": sheet.width(),
                "height": sheet.height(),
                "count": count,
                "columns": columns.min(frames.len()),
                "pixel_hash": pixel_hash(&sheet),
                "output": output_path.display().to_string(),
            })
        );
    } else {
        println!(
            "Wrote {} ({}x{}, {count} sprites)",
            output_path.display(),
            sheet.width(),
            sheet.height()
        );
    }
    Ok(())
}

fn pixel_hash(frame: &SpriteFrame) -> String {
    let mut hasher = Sha256::new();
    hasher.update(frame.as_bytes());
    format!("{:x}", hasher.finalize())
}

fn version_string() -> &'static str {
    use std::sync::OnceLock;
    static VERSION: OnceLock<String> = OnceLock::new();
    VERSION.get_or_init(|| match option_env!("SPRITEGEN_GIT_HASH") {
        Some(hash) => format!("{} ({hash})", env!("CARGO_PKG_VERSION")),
        None => env!("CARGO_PKG_VERSION").to_owned(),
    })
}
