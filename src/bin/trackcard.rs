use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "trackcard", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a banner PNG from explicit track fields.
    Render(RenderArgs),
    /// Build a caption and optional banner from a track JSON file.
    Reply(ReplyArgs),
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Cover artwork (any format the `image` crate decodes).
    #[arg(long)]
    cover: PathBuf,

    /// TrueType/OpenType font file.
    #[arg(long)]
    font: PathBuf,

    /// Track title.
    #[arg(long)]
    title: String,

    /// Artist name.
    #[arg(long)]
    artist: String,

    /// Track length in milliseconds.
    #[arg(long)]
    duration_ms: u64,

    /// Playback position in milliseconds.
    #[arg(long, default_value_t = 0)]
    progress_ms: u64,

    /// Built-in layout preset.
    #[arg(long, value_enum, default_value_t = Preset::Full)]
    layout: Preset,

    /// Layout JSON; overrides `--layout`.
    #[arg(long)]
    layout_json: Option<PathBuf>,

    /// Omit the progress row.
    #[arg(long)]
    no_progress: bool,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct ReplyArgs {
    /// Track JSON, either the card's own shape or a raw API track object.
    #[arg(long)]
    track: PathBuf,

    /// TrueType/OpenType font file.
    #[arg(long)]
    font: PathBuf,

    /// Cover artwork; caption only when absent.
    #[arg(long)]
    cover: Option<PathBuf>,

    /// Card config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for `banner.png`.
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Preset {
    Full,
    Compact,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Reply(args) => cmd_reply(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn read_bytes(path: &Path, what: &str) -> anyhow::Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("read {what} '{}'", path.display()))
}

fn read_text(path: &Path, what: &str) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("read {what} '{}'", path.display()))
}

fn write_bytes(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write '{}'", path.display()))
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut layout = match &args.layout_json {
        Some(path) => {
            let f = File::open(path)
                .with_context(|| format!("open layout '{}'", path.display()))?;
            trackcard::LayoutConfig::from_json_reader(BufReader::new(f))
                .with_context(|| format!("parse layout '{}'", path.display()))?
        }
        None => match args.layout {
            Preset::Full => trackcard::LayoutConfig::full(),
            Preset::Compact => trackcard::LayoutConfig::compact(),
        },
    };
    if args.no_progress {
        layout = layout.with_progress(None);
    }

    let cover = read_bytes(&args.cover, "cover")?;
    let font = read_bytes(&args.font, "font")?;
    let req = trackcard::BannerRequest {
        title: &args.title,
        artist: &args.artist,
        duration_ms: args.duration_ms,
        progress_ms: args.progress_ms.min(args.duration_ms),
        cover: &cover,
        font: &font,
    };

    let banner = trackcard::render_banner(&req, &layout)?;
    write_bytes(&args.out, &banner.png)?;
    eprintln!(
        "wrote {} ({}x{})",
        args.out.display(),
        banner.width,
        banner.height
    );
    Ok(())
}

fn parse_track(json: &str) -> anyhow::Result<trackcard::TrackInfo> {
    match serde_json::from_str::<trackcard::TrackInfo>(json) {
        Ok(track) => Ok(track),
        Err(_) => trackcard::TrackInfo::from_api_json(json).context("parse track JSON"),
    }
}

fn cmd_reply(args: ReplyArgs) -> anyhow::Result<()> {
    let track = parse_track(&read_text(&args.track, "track")?)?;
    let cfg = match &args.config {
        Some(path) => trackcard::CardConfig::from_json_str(&read_text(path, "config")?)
            .with_context(|| format!("parse config '{}'", path.display()))?,
        None => trackcard::CardConfig::default(),
    };
    let font = read_bytes(&args.font, "font")?;
    let cover = args
        .cover
        .as_deref()
        .map(|p| read_bytes(p, "cover"))
        .transpose()?;

    let reply = trackcard::build_reply(&track, cover.as_deref(), Some(font.as_slice()), &cfg);
    println!("{}", reply.caption);
    if let Some(banner) = &reply.banner {
        let out = args.out_dir.join(&banner.file_name);
        write_bytes(&out, &banner.png)?;
        eprintln!("wrote {}", out.display());
    }
    Ok(())
}
