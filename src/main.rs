use anyhow::Context;
use clap::Parser;
use shapeboard::draw::Color;
use shapeboard::script::Script;
use shapeboard::{Config, DrawingSurface};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shapeboard")]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("SHAPEBOARD_GIT_HASH"), ")"),
    about = "Pointer-driven shape drawing surface"
)]
struct Cli {
    /// Gesture script to replay (TOML)
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Write the rendered canvas to this PNG file
    #[arg(long, short = 'o', value_name = "PNG")]
    output: Option<PathBuf>,

    /// Canvas width in pixels (overrides script and config)
    #[arg(long, value_name = "PX", requires = "height")]
    width: Option<u32>,

    /// Canvas height in pixels (overrides script and config)
    #[arg(long, value_name = "PX", requires = "width")]
    height: Option<u32>,

    /// Background color for the written image (e.g. "white", "#202020")
    #[arg(long, short = 'b', value_name = "COLOR")]
    background: Option<Color>,

    /// Configuration file to use instead of ~/.config/shapeboard/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the committed shapes after replaying
    #[arg(long, short = 'l')]
    list: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let Some(script_path) = cli.script else {
        println!("shapeboard: Pointer-driven shape drawing surface");
        println!();
        println!("Usage:");
        println!("  shapeboard --script gestures.toml --output canvas.png");
        println!("  shapeboard --script gestures.toml --list");
        println!("  shapeboard --help");
        println!();
        println!("Script steps:");
        println!("  shape {{ kind }}          rectangle, circle or line");
        println!("  press {{ x, y }}          pointer down");
        println!("  move {{ x, y, square }}   pointer motion (square = modifier held)");
        println!("  release                 pointer up");
        println!("  grab {{ x, y }}           drag the topmost shape under the pointer");
        println!("  drag {{ index, x, y }}    drag a shape by index");
        println!("  undo, reset");
        println!("  resize {{ width, height }}");
        println!("  stroke-width {{ width }}, arrowhead-length {{ length }}");
        return Ok(());
    };

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let script = Script::load(&script_path)?;

    let (width, height) = match (cli.width, cli.height, script.canvas) {
        (Some(w), Some(h), _) => (w, h),
        (_, _, Some(canvas)) => (canvas.width, canvas.height),
        _ => (config.canvas.width, config.canvas.height),
    };

    let mut surface = DrawingSurface::from_config(&config);
    surface.initialize(width, height);
    if !surface.has_render_target() {
        log::warn!("No render target for a {width}x{height} canvas; nothing will be drawn");
    }

    script.replay(&mut surface);
    log::info!(
        "Replayed {} with {} shape(s) committed",
        script_path.display(),
        surface.shapes().len()
    );

    if cli.list {
        for (index, shape) in surface.shapes().iter().enumerate() {
            println!("{index}: {shape}");
        }
    }

    if let Some(output) = &cli.output {
        let background = cli.background.or_else(|| config.background_color());
        let written = surface
            .write_png(output, background)
            .with_context(|| format!("Failed to write {}", output.display()))?;
        if !written {
            anyhow::bail!("Canvas has no render target; refusing to write {}", output.display());
        }
    }

    Ok(())
}
