mod raster;

use anyhow::Context;
use clap::Parser;
use pattern_core::{
    ExportFormat, LayoutPreset, PatternGenerator, PatternState, Settings, Viewport,
    DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH,
};
use raster::SkiaRasterizer;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Render one grid pattern to pattern.svg or pattern.png")]
struct Args {
    /// Viewport width in document units (pixels for PNG output).
    #[arg(long, default_value_t = DEFAULT_VIEWPORT_WIDTH)]
    width: f64,

    /// Viewport height in document units.
    #[arg(long, default_value_t = DEFAULT_VIEWPORT_HEIGHT)]
    height: f64,

    /// Layout preset: normal, puzzle, circles, flat or semi.
    #[arg(long, default_value_t = LayoutPreset::Normal)]
    preset: LayoutPreset,

    /// Output format: svg or png.
    #[arg(long, default_value = "svg")]
    format: ExportFormat,

    /// Seed for a reproducible pattern; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Paint PNG output on white instead of leaving it transparent.
    #[arg(long, default_value_t = false)]
    opaque: bool,

    /// Directory the file is written into.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

fn build_state(args: &Args) -> PatternState {
    let generator = match args.seed {
        Some(seed) => PatternGenerator::seeded(seed),
        None => PatternGenerator::from_entropy(),
    };
    let settings = Settings {
        preset: args.preset,
        export: args.format,
    };
    PatternState::new(Viewport::new(args.width, args.height), settings, generator)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let state = build_state(&args);
    let generation = &state.frame().generation;
    log::info!(
        "preset={} grid={}x{} cell={:.1} colors={}",
        args.preset,
        generation.cols,
        generation.rows,
        generation.cell_size,
        generation.color_function
    );

    let rasterizer = SkiaRasterizer {
        background: args.opaque.then_some([255, 255, 255]),
    };
    let export = state
        .export(&rasterizer)
        .with_context(|| format!("encoding {}", args.format.filename()))?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;
    let path = args.out_dir.join(&export.filename);
    std::fs::write(&path, &export.bytes)
        .with_context(|| format!("writing {}", path.display()))?;
    log::info!("wrote {} ({} bytes)", path.display(), export.bytes.len());
    Ok(())
}
