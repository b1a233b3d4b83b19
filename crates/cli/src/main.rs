use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use hull2::prelude::*;
use serde::Serialize;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;

#[derive(Parser)]
#[command(name = "hull")]
#[command(about = "Compute and cross-check planar convex hulls", version = hull2::VERSION)]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute one hull and write it (plus a provenance sidecar) as JSON
    Run {
        /// graham, gift, dc, or quick
        #[arg(long)]
        algo: Algorithm,
        /// Points as .csv (x,y columns) or .json ([[x, y], ...])
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Also record every intermediate snapshot
        #[arg(long)]
        steps: bool,
    },
    /// Run all algorithms on one input and fail unless they agree
    Compare {
        #[arg(long)]
        input: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run {
            algo,
            input,
            out,
            steps,
        } => run(algo, &input, &out, steps),
        Action::Compare { input } => compare(&input),
        Action::Report => report(),
    }
}

#[derive(Serialize)]
struct RunOutput {
    algo: &'static str,
    input_count: usize,
    hull: Vec<[f64; 2]>,
    steps: Vec<Step>,
}

#[derive(Serialize)]
struct Step {
    stage: &'static str,
    points: Vec<[f64; 2]>,
}

fn pairs(points: &[Point2]) -> Vec<[f64; 2]> {
    points.iter().map(|p| [p.x, p.y]).collect()
}

fn run(algo: Algorithm, input: &Path, out: &Path, steps: bool) -> Result<()> {
    tracing::info!(%algo, input = %input.display(), out = %out.display(), steps, "run");
    let points = input::read_points(input)?;

    let mut recorder = Recorder::new();
    let hull = if steps {
        algo.hull_observed(&points, &mut recorder)
    } else {
        algo.hull(&points)
    };
    tracing::info!(
        points = points.len(),
        vertices = hull.len(),
        snapshots = recorder.snapshots.len(),
        "hull"
    );

    let output = RunOutput {
        algo: algo.name(),
        input_count: points.len(),
        hull: pairs(&hull),
        steps: recorder
            .into_snapshots()
            .into_iter()
            .map(|s| Step {
                stage: s.stage.as_str(),
                points: pairs(&s.points),
            })
            .collect(),
    };

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out, serde_json::to_vec_pretty(&output)?)
        .with_context(|| format!("writing {}", out.display()))?;
    provenance::write_sidecar(
        out,
        json!({
            "algo": algo.name(),
            "input": input.to_string_lossy(),
            "input_count": points.len(),
            "steps": steps
        }),
    )?;
    Ok(())
}

fn compare(input: &Path) -> Result<()> {
    tracing::info!(input = %input.display(), "compare");
    let points = input::read_points(input)?;
    let failures = check_agreement(&points);
    for failure in &failures {
        tracing::warn!("{failure}");
    }
    if !failures.is_empty() {
        bail!(
            "{} check(s) failed on {} points from {}",
            failures.len(),
            points.len(),
            input.display()
        );
    }
    Ok(())
}

/// Run every algorithm on `points`; describe each convexity, containment, or
/// agreement failure. Empty means all four hulls match.
fn check_agreement(points: &[Point2]) -> Vec<String> {
    let mut failures = Vec::new();
    let mut reference: Option<(Algorithm, Vec<Point2>)> = None;
    for algo in Algorithm::ALL {
        let hull = algo.hull(points);
        tracing::info!(%algo, vertices = hull.len(), "hull");
        if !is_convex_ccw(&hull) {
            failures.push(format!("{algo}: hull is not strictly convex counterclockwise"));
        }
        if !contains_all(&hull, points) {
            failures.push(format!("{algo}: hull misses input points"));
        }
        let hull = canonical(&hull);
        match &reference {
            None => reference = Some((algo, hull)),
            Some((first, expected)) if *expected != hull => failures.push(format!(
                "{algo}: {} vertices, {first} found {}",
                hull.len(),
                expected.len()
            )),
            Some(_) => {}
        }
    }
    failures
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "hull2_version": hull2::VERSION,
        "algorithms": Algorithm::ALL.iter().map(|a| a.name()).collect::<Vec<_>>()
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
