use crate::report::model::{CaseReport, RunSummary};
use anyhow::{Context, Result};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Writes run summaries either as aligned rows or as pretty JSON.
pub struct ReportPrinter {
    format: OutputFormat,
}

impl ReportPrinter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn publish<W: Write>(&self, summary: &RunSummary, out: &mut W) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, summary)
                    .context("serializing run summary")?;
                writeln!(out)?;
            }
            OutputFormat::Text => {
                for case in &summary.cases {
                    write_case(case, out)?;
                }
                writeln!(
                    out,
                    "[summary] products {}, mismatches {}, multiply-adds {}",
                    summary.multiplications, summary.mismatches, summary.multiply_adds
                )?;
            }
        }
        Ok(())
    }
}

fn write_case<W: Write>(case: &CaseReport, out: &mut W) -> Result<()> {
    match (&case.dims, &case.product, &case.error) {
        (Some(dims), Some(product), _) => {
            writeln!(out, "[{}] {}", case.name, dims)?;
            let width = product
                .iter()
                .flatten()
                .map(|value| value.to_string().len())
                .max()
                .unwrap_or(1);
            for row in product {
                let cells: Vec<String> = row
                    .iter()
                    .map(|value| format!("{:>width$}", value, width = width))
                    .collect();
                writeln!(out, "  [{}]", cells.join(", "))?;
            }
        }
        (_, _, Some(error)) => writeln!(out, "[{}] error: {}", case.name, error)?,
        _ => writeln!(out, "[{}] no result", case.name)?,
    }
    Ok(())
}
