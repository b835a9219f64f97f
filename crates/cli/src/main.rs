use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::{Path, PathBuf};
use touchgeom::analysis::Analysis;
use touchgeom::cfg::DEFAULT_MAX_TOUCHES;
use touchgeom::sample::{draw_points, PointCount, ReplayToken, SampleCfg, Spread};
use touchgeom::touch::TouchSet;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod input;
mod provenance;
mod report;

#[derive(Parser)]
#[command(name = "touchgeom")]
#[command(about = "Shape analysis for touch point sets")]
struct Cmd {
    /// Log filter (tracing syntax), e.g. `info` or `touchgeom=debug`
    #[arg(long, default_value = "info")]
    log: String,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Analyze one point set (.json, .csv or .parquet) and print the shapes as JSON
    Analyze {
        #[arg(long)]
        input: PathBuf,
        /// Write the report here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Replay a JSON-lines touch event script, printing one analysis per event
    Replay {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value_t = DEFAULT_MAX_TOUCHES)]
        max_touches: usize,
        /// Abort on the first rejected event instead of skipping it
        #[arg(long)]
        strict: bool,
    },
    /// Print a seeded random point set as JSON
    Sample {
        #[arg(long, default_value_t = 5)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 1920.0)]
        width: f64,
        #[arg(long, default_value_t = 1080.0)]
        height: f64,
        /// Cluster points in a disk of this radius; uniform over the screen if omitted
        #[arg(long)]
        cluster: Option<f64>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_new(&cmd.log).context("invalid --log filter")?)
        .init();
    match cmd.action {
        Action::Analyze { input, out } => analyze(&input, out.as_deref()),
        Action::Replay {
            input,
            max_touches,
            strict,
        } => replay(&input, max_touches, strict),
        Action::Sample {
            count,
            seed,
            index,
            width,
            height,
            cluster,
        } => sample(count, ReplayToken { seed, index }, width, height, cluster),
        Action::Report => report(),
    }
}

fn analyze(input: &Path, out: Option<&Path>) -> Result<()> {
    let points = input::read_points(input)?;
    tracing::info!(input = %input.display(), points = points.len(), "analyze");
    let analysis = Analysis::of(&points);
    if analysis.is_none() {
        tracing::warn!("input has no points");
    }
    let doc = report::analysis_json(analysis.as_ref());

    let Some(out) = out else {
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    };
    provenance::ensure_parent(out)?;
    std::fs::write(out, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let sidecar = provenance::write_sidecar(
        out,
        json!({
            "command": "analyze",
            "input": input.to_string_lossy(),
            "points": points.len()
        }),
    )?;
    tracing::info!(out = %out.display(), sidecar = %sidecar.display(), "wrote report");
    Ok(())
}

fn replay(input: &Path, max_touches: usize, strict: bool) -> Result<()> {
    let events = input::read_events(input)?;
    tracing::info!(input = %input.display(), events = events.len(), max_touches, "replay");
    let mut set = TouchSet::with_capacity(max_touches);
    let mut rejected = 0usize;
    for (k, ev) in events.iter().enumerate() {
        if let Err(err) = set.apply(ev) {
            if strict {
                return Err(err).with_context(|| format!("event {k}"));
            }
            rejected += 1;
            tracing::warn!(event = k, %err, "skipping event");
            continue;
        }
        tracing::debug!(event = k, touches = set.len(), "applied");
        let a = Analysis::of(set.points());
        let line = json!({
            "event": k,
            "touch": ev.id().0,
            "analysis": report::analysis_json(a.as_ref()),
        });
        println!("{line}");
    }
    tracing::info!(rejected, remaining = set.len(), "replay done");
    Ok(())
}

fn sample(
    count: usize,
    tok: ReplayToken,
    width: f64,
    height: f64,
    cluster: Option<f64>,
) -> Result<()> {
    let cfg = SampleCfg {
        count: PointCount::Fixed(count),
        spread: cluster.map_or(Spread::Uniform, |radius| Spread::Cluster { radius }),
        width,
        height,
    };
    tracing::info!(count, seed = tok.seed, index = tok.index, "sample");
    let points = draw_points(cfg, tok);
    println!("{}", serde_json::to_string(&report::points_json(&points))?);
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "kernel_version": touchgeom::VERSION,
        "default_max_touches": DEFAULT_MAX_TOUCHES,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
