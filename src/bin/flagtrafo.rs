use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "flagtrafo", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a scripted editing session and print the final state as JSON.
    Replay(ReplayArgs),
    /// Summarize the kinds and slider ranges of a recorded solver response.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
struct ReplayArgs {
    /// Event script JSON (array of actions).
    #[arg(long)]
    script: PathBuf,

    /// Recorded solver responses (one object or an array), answered in order.
    #[arg(long)]
    responses: Option<PathBuf>,

    /// Session options JSON.
    #[arg(long)]
    opts: Option<PathBuf>,

    /// Error-code message table JSON (`{"<code>": "<text>"}`).
    #[arg(long)]
    messages: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Recorded solver response JSON.
    #[arg(long)]
    response: PathBuf,

    /// Number of flags the response was computed for.
    #[arg(long)]
    count: usize,
}

fn main() -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Replay(args) => cmd_replay(args),
        Command::Inspect(args) => cmd_inspect(args),
    }
}

fn cmd_replay(args: ReplayArgs) -> anyhow::Result<()> {
    let opts = match &args.opts {
        Some(p) => flag_transformator::SessionOpts::from_path(p)
            .with_context(|| format!("load options '{}'", p.display()))?,
        None => flag_transformator::SessionOpts::default(),
    };
    let messages = match &args.messages {
        Some(p) => {
            let f = std::fs::File::open(p)
                .with_context(|| format!("open messages '{}'", p.display()))?;
            serde_json::from_reader(std::io::BufReader::new(f))
                .with_context(|| format!("parse messages '{}'", p.display()))?
        }
        None => flag_transformator::ErrorMessages::default(),
    };
    let events = flag_transformator::replay::load_script(&args.script)
        .with_context(|| format!("load script '{}'", args.script.display()))?;
    let responses = match &args.responses {
        Some(p) => flag_transformator::replay::load_responses(p)
            .with_context(|| format!("load responses '{}'", p.display()))?,
        None => Vec::new(),
    };

    let report = flag_transformator::replay::replay(opts, messages, &events, responses)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let response = flag_transformator::SolverResponse::from_path(&args.response)
        .with_context(|| format!("load response '{}'", args.response.display()))?;
    let payload = match response {
        flag_transformator::SolverResponse::Success(payload) => payload,
        flag_transformator::SolverResponse::Failure { code } => {
            let msg = flag_transformator::ErrorMessages::default().message_for(code);
            anyhow::bail!("solver reported error {code}: {msg}");
        }
    };

    let mut cache = flag_transformator::TrafoCache::new();
    let default = cache
        .ingest(payload, args.count)
        .context("ingest response")?;
    let kinds: Vec<serde_json::Value> = cache
        .kinds()
        .filter_map(|kind| {
            let r = cache.kind_range(kind)?;
            Some(serde_json::json!({
                "kind": kind,
                "range": r.range,
                "step": r.step,
            }))
        })
        .collect();
    let summary = serde_json::json!({
        "count": args.count,
        "default_kind": default,
        "frames": cache.len(),
        "kinds": kinds,
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
