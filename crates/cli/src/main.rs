use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use polyflow::robust::contains;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod job;
mod provenance;

use job::Job;
use provenance::{current_git_rev, write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "polyflow")]
#[command(about = "Flow words into polygons and inspect the results")]
struct Cmd {
    /// Optional label; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Lay out the job's text and write placed boxes as JSON
    Flow {
        #[arg(long)]
        job: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print whether a point lies inside the job's polygon
    Contains {
        #[arg(long)]
        job: PathBuf,
        #[arg(long)]
        x: f64,
        #[arg(long)]
        y: f64,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Flow { job, out } => flow(&job, &out, cmd.tag),
        Action::Contains { job, x, y } => contains_point(&job, x, y, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

fn flow(job_path: &Path, out: &Path, tag: Option<String>) -> Result<()> {
    tracing::info!(job = %job_path.display(), out = %out.display(), tag = ?tag, "flow");
    let job = Job::read(job_path)?;
    let result = job::flow(&job)?;
    tracing::info!(
        placed = result.placed,
        lines = result.lines,
        complete = result.complete,
        "layout"
    );

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(&result)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let mut payload = Payload::new(json!({
        "job": job_path.to_string_lossy(),
        "words": job.text.split_whitespace().count(),
        "char_width": job.char_width,
        "line_height": job.line_height,
        "space": job.space,
    }))
    .with_summary(json!({
        "placed": result.placed,
        "lines": result.lines,
        "complete": result.complete,
    }));
    payload.tag = tag;
    write_sidecar(out, payload)?;
    Ok(())
}

fn contains_point(job_path: &Path, x: f64, y: f64, tag: Option<String>) -> Result<()> {
    tracing::info!(job = %job_path.display(), x, y, tag = ?tag, "contains");
    let job = Job::read(job_path)?;
    let pts = job.path().single_contour().context("reading polygon")?;
    let inside = contains(&pts, polyflow::Point::new(x, y));
    println!("{}", serde_json::to_string_pretty(&json!({ "x": x, "y": y, "inside": inside }))?);
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = json!({
        "code_rev": current_git_rev(),
        "version": polyflow::VERSION,
        "tag": tag,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
