use anyhow::Context;
use clap::Parser;
use generator::profile::{build_case_from_config, GeneratorConfig};
use generator::template::reference_cases;
use log::info;
use report::model::{CaseReport, RunSummary};
use report::printer::{OutputFormat, ReportPrinter};
use std::io;
use std::path::PathBuf;
use workflow::config::CaseConfig;
use workflow::runner::Runner;

mod generator;
mod report;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Runs dimension-checked integer matrix products")]
struct Args {
    /// Load a multiplication case from YAML
    #[arg(long, conflicts_with = "reference")]
    case: Option<PathBuf>,
    /// Run the built-in reference cases, including the mis-declared ones
    #[arg(long, default_value_t = false)]
    reference: bool,
    #[arg(long, default_value_t = 3)]
    rows_a: usize,
    #[arg(long, default_value_t = 4)]
    inner_dim: usize,
    #[arg(long, default_value_t = 2)]
    cols_b: usize,
    /// Random entries are drawn from [-magnitude, magnitude]
    #[arg(long, default_value_t = 100)]
    magnitude: i32,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Print the summary as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let cases = if args.reference {
        reference_cases()
    } else if let Some(path) = args.case {
        vec![CaseConfig::load(path)?]
    } else {
        let config = GeneratorConfig {
            rows_a: args.rows_a,
            inner_dim: args.inner_dim,
            cols_b: args.cols_b,
            magnitude: args.magnitude,
            seed: args.seed,
            name: None,
        };
        vec![build_case_from_config(&config)?]
    };

    let runner = Runner::new();
    let reports = cases
        .iter()
        .map(|case| match runner.execute(case) {
            Ok(result) => CaseReport::from_result(&result),
            Err(err) => CaseReport::from_error(&case.name, &err),
        })
        .collect();

    let metrics = runner.metrics();
    info!(
        "ran {} cases: {} products, {} mismatches",
        cases.len(),
        metrics.multiplications,
        metrics.mismatches
    );

    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let summary = RunSummary::new(reports, metrics);
    ReportPrinter::new(format)
        .publish(&summary, &mut io::stdout().lock())
        .context("writing report to stdout")?;

    // A single requested case that was rejected is a failed run.
    if !args.reference {
        if let Some(rejected) = summary.cases.iter().find(|case| case.error.is_some()) {
            anyhow::bail!("case {} was rejected", rejected.name);
        }
    }

    Ok(())
}
