use crate::config::{Config, load_config};
use crate::ir::Word;
use crate::layout::{Point, Size, compute_layout};
use crate::layout_dump::write_layout_dump;
use crate::render::{render_svg, write_output_png, write_output_svg};
use crate::words::{WordOrder, collect_words, read_words};
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tagcloud", version, about = "Tag cloud renderer in Rust")]
pub struct Args {
    /// Word file (one word per line, or free text with --validate) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file (svg/png). Defaults to stdout for SVG if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "svg")]
    pub output_format: OutputFormat,

    /// Config JSON/JSON5 file
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Canvas width
    #[arg(short = 'w', long = "width")]
    pub width: Option<f32>,

    /// Canvas height
    #[arg(short = 'H', long = "height")]
    pub height: Option<f32>,

    /// Shuffle words instead of placing the most frequent first
    #[arg(long = "random")]
    pub random: bool,

    /// Seed for --random
    #[arg(long = "seed")]
    pub seed: Option<u64>,

    /// Tokenize free text, lowercase it and drop short and stop words
    #[arg(long = "validate")]
    pub validate: bool,

    /// Font family list, CSS style
    #[arg(long = "fontFamily")]
    pub font_family: Option<String>,

    /// Font size of a word seen once
    #[arg(long = "baseUnit")]
    pub base_unit: Option<f32>,

    /// Keep only the first N words after ordering
    #[arg(long = "maxWords")]
    pub max_words: Option<usize>,

    /// Fail instead of growing past the canvas
    #[arg(long = "clip")]
    pub clip: bool,

    /// Use per-character width estimates instead of font files
    #[arg(long = "fastText")]
    pub fast_text: bool,

    /// Write the computed layout as JSON
    #[arg(long = "dumpLayout")]
    pub dump_layout: Option<PathBuf>,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OutputFormat {
    Svg,
    Png,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = apply_args(load_config(args.config.as_deref())?, &args)?;
    let words = load_words(args.input.as_deref(), &config)?;
    if words.is_empty() {
        return Err(anyhow::anyhow!("No words found in input"));
    }
    tracing::info!(words = words.len(), "loaded words");

    let layout = compute_layout(&words, &config.theme, &config.cloud, &config.render)?;
    if let Some(path) = args.dump_layout.as_deref() {
        write_layout_dump(path, &layout)?;
    }

    let svg = render_svg(&layout, &config.theme, &config.render);
    match args.output_format {
        OutputFormat::Svg => write_output_svg(&svg, args.output.as_deref())?,
        OutputFormat::Png => {
            let output = ensure_output(&args.output, "png")?;
            write_output_png(&svg, &output, &config.render)?;
        }
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("tagcloud_renderer={default}"))
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn apply_args(mut config: Config, args: &Args) -> Result<Config> {
    if let Some(width) = args.width {
        config.render.width = width;
    }
    if let Some(height) = args.height {
        config.render.height = height;
    }
    if args.random {
        config.words.order = WordOrder::Random;
    }
    if let Some(seed) = args.seed {
        config.words.seed = seed;
    }
    if args.validate {
        config.words.validate = true;
    }
    if args.max_words.is_some() {
        config.words.max_words = args.max_words;
    }
    if let Some(family) = &args.font_family {
        config.theme.font_family = family.clone();
    }
    if let Some(unit) = args.base_unit {
        config.cloud.base_unit = Size::new(unit, unit)
            .map_err(|_| anyhow::anyhow!("--baseUnit must be non-negative, got {unit}"))?;
    }
    if args.clip {
        config.cloud.clip_to_canvas = true;
    }
    if args.fast_text {
        config.cloud.fast_text_metrics = true;
    }
    // File-supplied centers are not re-derived when the canvas is resized.
    if let Some(Point { x, y }) = config.cloud.center
        && (x > config.render.width || y > config.render.height)
    {
        tracing::warn!(x, y, "configured center lies outside the canvas");
    }
    Ok(config)
}

fn load_words(path: Option<&Path>, config: &Config) -> Result<Vec<Word>> {
    match path {
        Some(path) if path != Path::new("-") => read_words(path, &config.words),
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(collect_words(&buf, &config.words))
        }
    }
}

fn ensure_output(output: &Option<PathBuf>, ext: &str) -> Result<PathBuf> {
    if let Some(path) = output {
        return Ok(path.clone());
    }
    Err(anyhow::anyhow!("Output path required for {} output", ext))
}
