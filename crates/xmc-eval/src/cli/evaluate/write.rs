//! Report output: summary to stdout, optional report, prediction and detail files.

use std::fs::File;
use std::io::{BufWriter, Write};

use xmc_eval_core::output::{self, OutputFormat, OutputWriter};
use xmc_eval_core::{Config, EvaluationReport};

use super::EvaluateArgs;

/// Print the summary and write every requested output file.
pub fn write_outputs(
    args: &EvaluateArgs,
    config: &Config,
    report: &EvaluationReport,
) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if args.json {
        writeln!(out, "{}", output::to_json(report, true)?)?;
    } else {
        output::write_summary(&mut out, report)?;
    }

    if let Some(path) = &args.report {
        output::write_summary(BufWriter::new(File::create(path)?), report)?;
        tracing::info!("Summary written to {:?}", path);
    }

    if let Some(path) = &args.predictions {
        let count = output::write_top1(BufWriter::new(File::create(path)?), report)?;
        tracing::info!("{} top-1 predictions written to {:?}", count, path);
    }

    if let Some(path) = &args.details {
        let format = detail_format(args, config)?;
        let mut writer =
            OutputWriter::new(BufWriter::new(File::create(path)?), format, config.output.pretty);
        output::write_details(&mut writer, report)?;
        tracing::info!(
            "{} document details written to {:?}",
            writer.items_written(),
            path
        );
    }

    if report.cancelled {
        tracing::warn!(
            "Evaluation was interrupted: metrics cover {} of {} documents",
            report.documents_evaluated,
            report.documents_total
        );
    }

    Ok(())
}

/// Detail format from the CLI flag, else from `output.format`.
fn detail_format(args: &EvaluateArgs, config: &Config) -> anyhow::Result<OutputFormat> {
    if let Some(format) = args.format {
        return Ok(format.into());
    }
    OutputFormat::parse(&config.output.format).ok_or_else(|| {
        anyhow::anyhow!(
            "Unknown output.format {:?} (expected \"json\" or \"jsonl\")",
            config.output.format
        )
    })
}
