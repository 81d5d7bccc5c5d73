use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use polylabel::geom2::signed_distance;
use polylabel::{find_pole_traced, PoleCfg, Point};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;

#[derive(Parser)]
#[command(name = "polylabel")]
#[command(about = "Pole of inaccessibility for polygon label placement")]
struct Cmd {
    /// Report search progress (improvements and probe counts) on stderr
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Find the label point of a polygon file (.json, .csv, .parquet)
    Run {
        #[arg(long)]
        input: PathBuf,
        /// Result JSON path; a provenance sidecar is written next to it.
        /// Prints to stdout when omitted.
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long, default_value_t = 1.0)]
        precision: f64,
    },
    /// Signed distance from a point to the polygon outline
    Distance {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
    },
    /// Print a small provenance JSON block
    Report,
}

/// Result record written by `run`.
#[derive(Debug, Serialize)]
struct RunOutput {
    x: f64,
    y: f64,
    distance: f64,
    precision: f64,
    probes: usize,
    improvements: usize,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.debug { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Run {
            input,
            out,
            precision,
        } => run(&input, out.as_deref(), precision, cmd.debug),
        Action::Distance { input, x, y } => distance(&input, x, y),
        Action::Report => report(),
    }
}

fn run(input: &Path, out: Option<&Path>, precision: f64, debug: bool) -> Result<()> {
    tracing::info!(input = %input.display(), precision, "run");
    anyhow::ensure!(
        precision.is_finite() && precision > 0.0,
        "precision must be a positive number, got {precision}"
    );
    let polygon = input::load_polygon(input)?;
    let (res, trace) = find_pole_traced(&polygon, PoleCfg { precision, debug });
    tracing::info!(
        x = res.x(),
        y = res.y(),
        distance = res.distance,
        probes = trace.probes,
        "pole"
    );
    let record = RunOutput {
        x: res.x(),
        y: res.y(),
        distance: res.distance,
        precision,
        probes: trace.probes,
        improvements: trace.improvements.len(),
    };

    let Some(out) = out else {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    };
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(&record)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let payload = provenance::Payload::new(serde_json::json!({
        "precision": precision,
        "debug": debug,
    }))
    .with_input(input);
    let prov_path = provenance::write_sidecar(out, payload)?;
    tracing::info!(out = %out.display(), provenance = %prov_path.display(), "written");
    Ok(())
}

fn distance(input: &Path, x: f64, y: f64) -> Result<()> {
    let polygon = input::load_polygon(input)?;
    let d = signed_distance(Point::new(x, y), &polygon);
    println!("{}", serde_json::json!({ "x": x, "y": y, "distance": d }));
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "polylabel_version": polylabel::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
