use std::{
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use trajectory::{
    AnimationSpec, AnimationType, ComposerOpts, MotionRegistry, PathOptions, Plane,
    TransformComposer, TransformRequest,
};

#[derive(Parser, Debug)]
#[command(name = "trajectory", version)]
struct Cli {
    /// Log debug diagnostics to stderr (overridden by `RUST_LOG`).
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the preview path of an animation spec as JSON.
    Sample(SampleArgs),
    /// Print the multi-track transform of a request as JSON.
    Transform(TransformArgs),
    /// List animation types with their anchor parameter.
    Types,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Input animation spec JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Number of steps; the path holds one more point.
    #[arg(long, default_value_t = 100)]
    samples: usize,

    /// Editor plane to preview in.
    #[arg(long, value_enum)]
    view: Option<ViewChoice>,
}

#[derive(Parser, Debug)]
struct TransformArgs {
    /// Input transform request JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Stagger step used when the request carries none.
    #[arg(long, default_value_t = 0.5)]
    default_phase_offset: f64,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ViewChoice {
    Xy,
    Xz,
    Yz,
}

impl From<ViewChoice> for Plane {
    fn from(v: ViewChoice) -> Self {
        match v {
            ViewChoice::Xy => Plane::Xy,
            ViewChoice::Xz => Plane::Xz,
            ViewChoice::Yz => Plane::Yz,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Sample(args) => cmd_sample(args),
        Command::Transform(args) => cmd_transform(args),
        Command::Types => cmd_types(),
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> anyhow::Result<T> {
    let f = File::open(path).with_context(|| format!("open {what} '{}'", path.display()))?;
    let r = BufReader::new(f);
    let v = serde_json::from_reader(r).with_context(|| format!("parse {what} JSON"))?;
    Ok(v)
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value).context("write JSON to stdout")?;
    writeln!(out).context("write JSON to stdout")?;
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let spec: AnimationSpec = read_json(&args.in_path, "animation spec")?;
    let opts = PathOptions {
        num_samples: args.samples,
        view: args.view.map(Plane::from),
    };
    let path = trajectory::sample_path(&spec, opts)
        .with_context(|| format!("sample '{}' path", spec.kind))?;
    print_json(&path)
}

fn cmd_transform(args: TransformArgs) -> anyhow::Result<()> {
    let req: TransformRequest = read_json(&args.in_path, "transform request")?;
    let opts = ComposerOpts {
        default_phase_offset_seconds: args.default_phase_offset,
        ..ComposerOpts::default()
    };
    let transform = TransformComposer::with_opts(MotionRegistry::builtin(), opts)
        .build(&req)
        .context("build transform")?;
    print_json(&transform)
}

fn cmd_types() -> anyhow::Result<()> {
    let registry = MotionRegistry::builtin();
    let mut out = std::io::stdout().lock();
    for kind in AnimationType::ALL {
        let entry = registry.entry(kind);
        writeln!(out, "{:<14} {}", kind.as_str(), entry.anchor_key)
            .context("write to stdout")?;
    }
    Ok(())
}
