use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use rand::{SeedableRng, rngs::StdRng};

use photobooth::{FilterKind, FilterSettings, FrameRgba, StripLayout};

#[derive(Parser, Debug)]
#[command(name = "photobooth", version)]
struct Cli {
    /// Log debug output to stderr.
    #[arg(long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply one filter to an image.
    Filter(FilterArgs),
    /// Compose up to four images into a photo strip.
    Strip(StripArgs),
}

#[derive(Parser, Debug)]
struct FilterArgs {
    /// Input image (PNG or JPEG).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output image path; format follows the extension.
    #[arg(long)]
    out: PathBuf,

    /// Filter name: none, vintage, blackwhite, blue, grains, peachy.
    #[arg(long, default_value = "none")]
    kind: FilterKind,

    /// Process rows in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Seed for grain noise.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Parser, Debug)]
struct StripArgs {
    /// Input photos, top to bottom. Repeat the flag for each photo.
    #[arg(long = "in", required = true)]
    in_paths: Vec<PathBuf>,

    /// Output image path.
    #[arg(long)]
    out: PathBuf,

    /// Strip template id (classic, rose, golden, olive, peach).
    #[arg(long, default_value = "classic")]
    template: String,

    /// Filter applied to every photo before composing.
    #[arg(long, default_value = "none")]
    filter: FilterKind,

    /// Multiply the strip geometry (2 for a hi-dpi export).
    #[arg(long, default_value_t = 1)]
    scale: u32,

    /// Keep photos as captured instead of mirroring them.
    #[arg(long, default_value_t = false)]
    no_mirror: bool,

    /// Seed for grain noise.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }
    match cli.cmd {
        Command::Filter(args) => cmd_filter(args),
        Command::Strip(args) => cmd_strip(args),
    }
}

fn cmd_filter(args: FilterArgs) -> anyhow::Result<()> {
    let mut frame = load_frame(&args.in_path)?;
    let settings = FilterSettings {
        parallel: args.parallel,
    };
    photobooth::apply_filter_to_frame(&mut frame, args.kind, &settings, &mut rng(args.seed));
    save_frame(&frame, &args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_strip(args: StripArgs) -> anyhow::Result<()> {
    let template = photobooth::template_by_id(&args.template)
        .with_context(|| format!("unknown template '{}'", args.template))?;
    if args.in_paths.len() > photobooth::MAX_STRIP_PHOTOS {
        eprintln!(
            "only the first {} photos fit on a strip",
            photobooth::MAX_STRIP_PHOTOS
        );
    }

    let mut rng = rng(args.seed);
    let settings = FilterSettings::default();
    let mut photos = Vec::with_capacity(args.in_paths.len());
    for path in args.in_paths.iter().take(photobooth::MAX_STRIP_PHOTOS) {
        let mut frame = load_frame(path)?;
        if !args.no_mirror {
            photobooth::mirror_frame(&mut frame);
        }
        photobooth::apply_filter_to_frame(&mut frame, args.filter, &settings, &mut rng);
        photos.push(frame);
    }

    let layout = StripLayout::default().scaled(args.scale.max(1));
    let strip = photobooth::compose_strip(&photos, template, &layout)?;
    save_frame(&strip, &args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn load_frame(path: &Path) -> anyhow::Result<FrameRgba> {
    let img = image::open(path)
        .with_context(|| format!("read image '{}'", path.display()))?
        .to_rgba8();
    let (width, height) = img.dimensions();
    Ok(FrameRgba::new(width, height, img.into_raw())?)
}

fn save_frame(frame: &FrameRgba, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let img = image::RgbaImage::from_raw(frame.width, frame.height, frame.data.clone())
        .context("frame buffer does not match its size")?;
    let img = image::DynamicImage::ImageRgba8(img);
    // JPEG has no alpha channel.
    let saved = match image::ImageFormat::from_path(path) {
        Ok(image::ImageFormat::Jpeg) => img.to_rgb8().save(path),
        _ => img.save(path),
    };
    saved.with_context(|| format!("write image '{}'", path.display()))
}
