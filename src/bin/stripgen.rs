use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use sha2::Digest as _;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "stripgen", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the strip to a PNG.
    Render(RenderArgs),
    /// Print diagnostics about a font file (family name, SHA-256, metrics).
    Font(FontArgs),
    /// Print the slot and jitter derived for each string.
    Placement(PlacementArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Directory relative asset paths resolve against.
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Strip config JSON (defaults to `<root>/config.json` when present).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Template artwork.
    #[arg(long, default_value = stripgen::DEFAULT_TEMPLATE)]
    template: PathBuf,

    /// Background visibility mask.
    #[arg(long, default_value = stripgen::DEFAULT_MASK)]
    mask: PathBuf,

    /// Caption font (TrueType/OpenType).
    #[arg(long, default_value = stripgen::DEFAULT_FONT)]
    font: PathBuf,

    /// Background image, overriding the config.
    #[arg(long)]
    background: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long, default_value = stripgen::DEFAULT_OUT)]
    out: PathBuf,

    /// Put captions without a placement at the top slot, without jitter.
    #[arg(long)]
    fixed_placement: bool,

    /// Captions in panel order; replaces the config's panels when given, keeping its background.
    captions: Vec<String>,
}

#[derive(Parser, Debug)]
struct FontArgs {
    /// Font file.
    #[arg(long, default_value = stripgen::DEFAULT_FONT)]
    font: PathBuf,

    /// Point size to measure at.
    #[arg(long, default_value_t = 14.0)]
    size: f32,

    /// Sample string to measure.
    #[arg(long, default_value = "The quick brown fox")]
    text: String,
}

#[derive(Parser, Debug)]
struct PlacementArgs {
    /// Strings to place.
    #[arg(required = true)]
    texts: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Font(args) => cmd_font(args),
        Command::Placement(args) => cmd_placement(args),
    }
}

fn read_config(args: &RenderArgs) -> anyhow::Result<stripgen::StripConfig> {
    let path = match &args.config {
        Some(p) => Some(p.clone()),
        None => Some(args.root.join("config.json")).filter(|p| p.is_file()),
    };
    let mut config = match path {
        Some(p) => stripgen::StripConfig::from_path(&p)
            .with_context(|| format!("load config '{}'", p.display()))?,
        None => stripgen::StripConfig::default(),
    };

    if !args.captions.is_empty() {
        config.panels = stripgen::StripConfig::from_captions(args.captions.clone()).panels;
    }
    Ok(config)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let config = read_config(&args)?;
    tracing::debug!(?config, "config loaded");

    let paths = stripgen::AssetPaths {
        root: args.root.clone(),
        template: args.template.clone(),
        mask: args.mask.clone(),
        font: args.font.clone(),
        background: args.background.clone(),
        out: args.out.clone(),
    };
    let opts = stripgen::RenderOpts {
        mode: if args.fixed_placement {
            stripgen::PlacementMode::Fixed
        } else {
            stripgen::PlacementMode::Derived
        },
        ..stripgen::RenderOpts::default()
    };

    let out = stripgen::run(&paths, &config, &opts)?;
    eprintln!("wrote {}", out.display());
    Ok(())
}

fn cmd_font(args: FontArgs) -> anyhow::Result<()> {
    let bytes = stripgen::read_asset(&args.font)?;
    let sha = sha256_hex(&bytes);
    let face = stripgen::FontFace::from_bytes(bytes, args.size)
        .with_context(|| format!("load font '{}'", args.font.display()))?;

    println!("font:    {}", args.font.display());
    println!("family:  {}", face.family_name().unwrap_or("unknown"));
    println!("sha256:  {sha}");
    println!("size:    {}pt", face.size_pt());
    println!("ascent:  {}px", face.ascent());
    println!("advance: {}px for {:?}", face.advance_width(&args.text), args.text);
    Ok(())
}

fn cmd_placement(args: PlacementArgs) -> anyhow::Result<()> {
    let layout = stripgen::StripLayout::default();
    for text in &args.texts {
        let slot = stripgen::choose_placement(text);
        let jitter = stripgen::Jitter::for_text(text, layout.jitter_modulus);
        println!(
            "{text:?}: slot={} dx={} dy={}",
            slot.keyword(),
            jitter.dx,
            jitter.dy
        );
    }
    Ok(())
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
