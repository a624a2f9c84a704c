use anyhow::Context;
use clap::{ArgAction, Parser};
use pen::canvas::Canvas;
use pen::config::{ColorSpec, Config};
use pen::export;
use pen::script::{Script, ScriptRunner};
use std::path::{Path, PathBuf};

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("PEN_GIT_HASH"), ")");

#[derive(Parser, Debug)]
#[command(name = "pen")]
#[command(version = VERSION, about = "Simple raster drawing canvas with scripted export")]
struct Cli {
    /// Gesture script (TOML) to replay onto a fresh canvas
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Where to write the rendered PNG (default: export directory from config)
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Config file to use instead of ~/.config/pen/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Draw the grid overlay
    #[arg(long, action = ArgAction::SetTrue)]
    grid: bool,

    /// Canvas width in pixels
    #[arg(long, value_name = "PIXELS")]
    width: Option<u32>,

    /// Canvas height in pixels
    #[arg(long, value_name = "PIXELS")]
    height: Option<u32>,

    /// Background color (name like "white" or hex "#rrggbb")
    #[arg(long, value_name = "COLOR")]
    background: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let Some(script_path) = cli.script.as_deref() else {
        println!("pen: Simple raster drawing canvas with scripted export");
        println!();
        println!("Usage:");
        println!("  pen --script drawing.toml                 Replay a gesture script, save to export dir");
        println!("  pen --script drawing.toml -o out.png      Replay and save to a file");
        println!("  pen --help                                Show all options");
        println!();
        println!("Script steps:");
        println!("  tool, color, pick-color, brush-size, font, down, move, up, drag,");
        println!("  text, cancel-text, undo, redo, clear, grid, background, resize");
        return Ok(());
    };

    if let Err(err) = run(&cli, script_path) {
        log::error!("Operation failed: {err:#}");
        return Err(err);
    }
    Ok(())
}

fn run(cli: &Cli, script_path: &Path) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    apply_overrides(&mut config, cli)?;

    let script = Script::load(script_path)?;
    let mut canvas = Canvas::from_config(&config);
    let base_dir = script_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();

    let mut runner = ScriptRunner::new(&mut canvas, base_dir);
    runner.run(&script)?;
    let failures = runner.failures();
    if failures > 0 {
        log::warn!("{failures} script step(s) failed; rendering anyway");
    }

    let pixels = canvas
        .export_surface()
        .context("Failed to render canvas")?;
    let written = match &cli.output {
        Some(path) => export::save_png_to(&pixels, path),
        None => export::save_png(&pixels, &config.export),
    }
    .context("Failed to save image")?;

    println!("Saved: {}", written.display());
    Ok(())
}

fn apply_overrides(config: &mut Config, cli: &Cli) -> anyhow::Result<()> {
    if cli.grid {
        config.canvas.show_grid = true;
    }
    if let Some(width) = cli.width {
        config.canvas.width = width;
    }
    if let Some(height) = cli.height {
        config.canvas.height = height;
    }
    if let Some(background) = &cli.background {
        config.canvas.background_color = parse_color_arg(background)?;
    }
    config.validate_and_clamp();
    Ok(())
}

fn parse_color_arg(value: &str) -> anyhow::Result<ColorSpec> {
    if let Some(hex) = value.strip_prefix('#') {
        let channel = |i: usize| {
            hex.get(i..i + 2)
                .and_then(|s| u8::from_str_radix(s, 16).ok())
        };
        return match (hex.len(), channel(0), channel(2), channel(4)) {
            (6, Some(r), Some(g), Some(b)) => Ok(ColorSpec::Rgb([r, g, b])),
            _ => Err(anyhow::anyhow!("Invalid hex color '{value}'")),
        };
    }
    if pen::util::name_to_color(value).is_none() {
        anyhow::bail!("Unknown color '{value}'");
    }
    Ok(ColorSpec::Name(value.to_string()))
}
