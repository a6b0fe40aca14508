mod app;
mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use thiserror::Error;

use crate::app::ChartApp;
use crate::input::InputError;
use crate::model::config::ChartConfig;
use crate::model::sort::MEDIAN_TAG;
use crate::pipeline::stage1_load::run_stage1;
use crate::pipeline::stage2_aggregate::run_stage2;
use crate::pipeline::stage4_report::{Stage4Input, collect_states, write_reports};

#[derive(Debug, Parser)]
#[command(name = "kira-tissuebars", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Aggregate medians per tissue and write the chart and summaries.
    Run(RunArgs),
}

#[derive(Debug, Clone, Args)]
struct RunArgs {
    /// JSON document with a `geneExpression` array (.gz accepted).
    #[arg(long)]
    expression: PathBuf,
    /// JSON document with a `tissueInfo` array (.gz accepted).
    #[arg(long)]
    tissues: PathBuf,
    #[arg(long)]
    out: PathBuf,
    /// Initially selected order: `alphabet`, anything else sorts by median.
    #[arg(long, default_value = MEDIAN_TAG)]
    sort: String,
    /// Plot width in pixels, excluding margins.
    #[arg(long)]
    width: Option<f64>,
    /// Plot height in pixels, excluding margins.
    #[arg(long)]
    height: Option<f64>,
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("failed to write reports: {0}")]
    Report(#[from] std::io::Error),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

fn main() {
    logging::init();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    match cli.command {
        Command::Run(args) => run_chart(&args),
    }
}

fn run_chart(args: &RunArgs) -> Result<(), AppError> {
    let config = build_config(args)?;

    let bundle = run_stage1(&args.expression, &args.tissues)?;
    let aggregate = run_stage2(&bundle.records, &bundle.tissues);

    let app = ChartApp::init(aggregate.summaries.clone(), &args.sort, config.clone());
    tracing::info!("initial sort: {}", app.sort_mode().tag());
    let states = collect_states(app);

    let input = Stage4Input {
        bundle: &bundle,
        aggregate: &aggregate,
        states: &states,
        config: &config,
        tool_name: "kira-tissuebars".to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        git_hash: read_git_hash(&PathBuf::from(".")),
    };
    write_reports(&input, &args.out)?;
    Ok(())
}

fn build_config(args: &RunArgs) -> Result<ChartConfig, AppError> {
    for (name, value) in [("--width", args.width), ("--height", args.height)] {
        if let Some(v) = value {
            if !(v.is_finite() && v > 0.0) {
                return Err(AppError::InvalidArgument(format!(
                    "{} must be a positive number, got {}",
                    name, v
                )));
            }
        }
    }
    Ok(ChartConfig::default_v1().with_size(args.width, args.height))
}

fn read_git_hash(repo_root: &Path) -> Option<String> {
    let head = repo_root.join(".git/HEAD");
    let content = std::fs::read_to_string(head).ok()?;
    if let Some(ref_line) = content.strip_prefix("ref: ") {
        let ref_path = repo_root.join(".git").join(ref_line.trim());
        return std::fs::read_to_string(ref_path)
            .ok()
            .map(|s| s.trim().to_string());
    }
    Some(content.trim().to_string())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
