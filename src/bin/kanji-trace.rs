use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;

#[derive(Parser, Debug)]
#[command(name = "kanji-trace", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a gesture script against a character list and write the result as a PNG.
    Replay(ReplayArgs),
}

#[derive(Parser, Debug)]
struct ReplayArgs {
    /// Character list JSON (array of `{ "glyph", "targetStrokeCount", ... }`).
    #[arg(long)]
    characters: PathBuf,

    /// Script JSON (array of `{ "op": ... }`).
    #[arg(long)]
    script: PathBuf,

    /// Board options JSON; defaults apply to missing fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Session settings JSON (`{ "isAutoReset", "lastIndex" }`).
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Write emitted session events here as JSON.
    #[arg(long)]
    events: Option<PathBuf>,

    /// Include the brush/pointer indicator layer in the PNG.
    #[arg(long)]
    cursor: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Replay(args) => cmd_replay(args),
    }
}

fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> anyhow::Result<T> {
    let f = File::open(path).with_context(|| format!("open {what} '{}'", path.display()))?;
    let r = BufReader::new(f);
    serde_json::from_reader(r).with_context(|| format!("parse {what} JSON"))
}

fn cmd_replay(args: ReplayArgs) -> anyhow::Result<()> {
    let characters: Vec<kanji_trace::Character> = read_json(&args.characters, "characters")?;
    let ops: Vec<kanji_trace::replay::ScriptOp> = read_json(&args.script, "script")?;
    let opts = match &args.config {
        Some(path) => read_json::<kanji_trace::BoardOpts>(path, "config")?,
        None => kanji_trace::BoardOpts::default(),
    }
    .with_env_overrides();
    let settings = match &args.settings {
        Some(path) => read_json::<kanji_trace::SessionSettings>(path, "settings")?,
        None => kanji_trace::SessionSettings::default(),
    };

    let sink: Vec<kanji_trace::SessionEvent> = Vec::new();
    let mut board = kanji_trace::TraceBoard::new(opts, characters, settings, sink)?;
    let summary = kanji_trace::replay::replay(&mut board, &ops)?;

    let frame = board
        .snapshot(Some(kanji_trace::Rgba8::rgb(255, 255, 255)), args.cursor)?
        .context("layers not allocated")?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        &args.out,
        &frame.to_straight_rgba8(),
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    let progress = board.progress();
    let state = board.state();
    if let Some(path) = &args.events {
        let f = File::create(path)
            .with_context(|| format!("create events file '{}'", path.display()))?;
        serde_json::to_writer_pretty(f, board.sink()).with_context(|| "write events JSON")?;
    }

    eprintln!(
        "replayed {} ops over {} frames; character {} at {progress}",
        summary.ops, summary.frames, state.active_index
    );
    eprintln!("wrote {}", args.out.display());
    Ok(())
}
