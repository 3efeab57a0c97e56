use std::io::Write as _;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand};
use credio_motion::{FrameDriven, MotionSession, SessionConfig};

#[derive(Parser, Debug)]
#[command(name = "credio-motion", version)]
struct Cli {
    /// Log to stderr (`-v` debug, `-vv` trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the scene definition as JSON.
    Scene(SceneArgs),
    /// Print one frame output as JSON.
    Frame(FrameArgs),
    /// Print a counter run as JSON lines.
    Counter(CounterArgs),
    /// Print per-frame fingerprints for a fixed frame rate.
    Trace(TraceArgs),
}

#[derive(Parser, Debug)]
struct SceneArgs {
    /// Session config JSON (defaults to the built-in hero scene).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Elapsed time in seconds.
    #[arg(long)]
    at: f64,

    /// Session config JSON (defaults to the built-in hero scene).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Object id to hover (repeatable).
    #[arg(long)]
    hover: Vec<String>,
}

#[derive(Parser, Debug)]
struct CounterArgs {
    /// Final value.
    #[arg(long, allow_negative_numbers = true)]
    target: i64,

    #[arg(long, default_value_t = 2000.0)]
    duration_ms: f64,

    /// Interval between samples.
    #[arg(long, default_value_t = 16.0)]
    step_ms: f64,
}

#[derive(Parser, Debug)]
struct TraceArgs {
    /// Session config JSON (defaults to the built-in hero scene).
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    #[arg(long, default_value_t = 3.0)]
    seconds: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Scene(args) => cmd_scene(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Counter(args) => cmd_counter(args),
        Command::Trace(args) => cmd_trace(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => return,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<SessionConfig> {
    match path {
        Some(p) => SessionConfig::from_path(p)
            .with_context(|| format!("load session config '{}'", p.display())),
        None => Ok(SessionConfig::default()),
    }
}

fn elapsed_from_secs(secs: f64) -> anyhow::Result<Duration> {
    Duration::try_from_secs_f64(secs)
        .with_context(|| format!("elapsed time must be finite and >= 0 (got {secs})"))
}

fn cmd_scene(args: SceneArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_ref())?;
    let json = serde_json::to_string_pretty(&config.scene_def()).context("serialize scene")?;
    println!("{json}");
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let at = elapsed_from_secs(args.at)?;
    let config = load_config(args.config.as_ref())?;
    let mut session = MotionSession::new(&config)?;
    session.mount_stats()?;
    for id in &args.hover {
        session.pointer_enter(id)?;
    }

    session.on_frame(Duration::ZERO);
    let frame = session.on_frame(at);
    let json = serde_json::to_string_pretty(&frame).context("serialize frame")?;
    println!("{json}");
    Ok(())
}

fn cmd_counter(args: CounterArgs) -> anyhow::Result<()> {
    if !args.step_ms.is_finite() || args.step_ms <= 0.0 {
        anyhow::bail!("--step-ms must be finite and > 0 (got {})", args.step_ms);
    }
    let mut counter = credio_motion::animate(args.target, args.duration_ms)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut step = 0u64;
    loop {
        let t_ms = step as f64 * args.step_ms;
        let Some(value) = counter.sample(t_ms) else {
            break;
        };
        let line = serde_json::json!({ "t_ms": t_ms, "value": value });
        writeln!(out, "{line}").context("write counter sample")?;
        step += 1;
    }
    Ok(())
}

fn cmd_trace(args: TraceArgs) -> anyhow::Result<()> {
    if !args.fps.is_finite() || args.fps <= 0.0 {
        anyhow::bail!("--fps must be finite and > 0 (got {})", args.fps);
    }
    if !args.seconds.is_finite() || args.seconds < 0.0 {
        anyhow::bail!("--seconds must be finite and >= 0 (got {})", args.seconds);
    }

    let config = load_config(args.config.as_ref())?;
    let mut session = MotionSession::new(&config)?;
    session.mount_stats()?;

    let frames = (args.seconds * args.fps).ceil() as u64;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for frame in 0..=frames {
        let elapsed = elapsed_from_secs(frame as f64 / args.fps)?;
        let output = session.on_frame(elapsed);
        let fp = credio_motion::fingerprint_frame(&output);
        let line = serde_json::json!({
            "frame": frame,
            "elapsed_s": output.elapsed_secs,
            "fingerprint": fp.to_string(),
        });
        writeln!(out, "{line}").context("write trace line")?;
    }
    Ok(())
}
