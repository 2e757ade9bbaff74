mod io;
mod provenance;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use hull2d::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

use provenance::Payload;

#[derive(Parser)]
#[command(name = "hull2d")]
#[command(about = "Planar convex hulls: compute, sample, report")]
struct Cmd {
    /// Optional run tag; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    /// Log debug events (including the library's)
    #[arg(long, short)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
enum Algo {
    DivideConquer,
    MonotoneChain,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
enum Shape {
    Square,
    Circle,
    Radial,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the hull of a point file (CSV or Parquet, columns x,y) and write JSON
    Hull {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, value_enum, default_value_t = Algo::DivideConquer)]
        algo: Algo,
        /// Collinearity/duplicate tolerance (default 1e-9)
        #[arg(long)]
        eps: Option<f64>,
    },
    /// Write a reproducible point cloud as CSV
    Sample {
        #[arg(long, value_enum, default_value_t = Shape::Square)]
        shape: Shape,
        #[arg(long, default_value_t = 100)]
        n: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        /// Half-width of the square, or radius
        #[arg(long, default_value_t = 1.0)]
        scale: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

/// JSON written by `hull`.
#[derive(Debug, Serialize)]
struct HullReport {
    algo: Algo,
    eps: f64,
    input_points: usize,
    vertices: Vec<[f64; 2]>,
    area: f64,
    perimeter: f64,
    centroid: Option<[f64; 2]>,
}

impl HullReport {
    fn new(algo: Algo, eps: f64, input_points: usize, hull: &Hull) -> Self {
        Self {
            algo,
            eps,
            input_points,
            vertices: hull.iter().map(|p| [p.x, p.y]).collect(),
            area: hull.area(),
            perimeter: hull.perimeter(),
            centroid: hull.centroid().map(|c| [c.x, c.y]),
        }
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Hull {
            input,
            out,
            algo,
            eps,
        } => hull_cmd(&input, &out, algo, eps, cmd.tag).map(|_| ()),
        Action::Sample {
            shape,
            n,
            seed,
            index,
            scale,
            out,
        } => sample_cmd(shape, n, ReplayToken::new(seed, index), scale, &out, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

fn hull_cmd(
    input: &Path,
    out: &Path,
    algo: Algo,
    eps: Option<f64>,
    tag: Option<String>,
) -> Result<HullReport> {
    tracing::info!(input = %input.display(), out = %out.display(), ?algo, tag = ?tag, "hull");
    let pts = io::read_points(input)?;
    let cfg = match eps {
        Some(eps) => HullCfg::default().with_eps(eps),
        None => HullCfg::default(),
    };
    let hull = match algo {
        Algo::DivideConquer => convex_hull_with(&pts, cfg),
        Algo::MonotoneChain => monotone_chain_with(&pts, cfg),
    }
    .with_context(|| format!("hull of {}", input.display()))?;
    tracing::info!(vertices = hull.len(), area = hull.area(), "hull_done");

    let report = HullReport::new(algo, cfg.eps, pts.len(), &hull);
    io::ensure_parent(out)?;
    std::fs::write(out, serde_json::to_vec_pretty(&report)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let params = serde_json::json!({
        "cmd": "hull",
        "algo": algo,
        "eps": cfg.eps,
        "input": input.to_string_lossy(),
    });
    provenance::write_sidecar(out, Payload::new(params).with_tag(tag))?;
    Ok(report)
}

fn sample_cmd(
    shape: Shape,
    n: usize,
    tok: ReplayToken,
    scale: f64,
    out: &Path,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(?shape, n, seed = tok.seed, index = tok.index, "sample");
    let pts = match shape {
        Shape::Square => uniform_square(n, scale, tok),
        Shape::Circle => on_circle(n, scale, 0.0),
        Shape::Radial => radial(
            n,
            RadialCfg {
                base_radius: scale,
                ..RadialCfg::default()
            },
            tok,
        ),
    };
    io::write_points(out, &pts)?;
    let params = serde_json::json!({
        "cmd": "sample",
        "shape": shape,
        "n": n,
        "seed": tok.seed,
        "index": tok.index,
        "scale": scale,
    });
    provenance::write_sidecar(out, Payload::new(params).with_tag(tag))?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = provenance::document(&[], &Payload::new(serde_json::json!({})).with_tag(tag));
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
