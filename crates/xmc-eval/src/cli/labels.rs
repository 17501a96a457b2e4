//! The `xmc-eval labels` command: inspect a canonical label list.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use xmc_eval_core::config::LabelsConfig;
use xmc_eval_core::LabelSpace;

/// Arguments for the `labels` command.
#[derive(Args, Debug)]
pub struct LabelsArgs {
    /// Label list file
    pub file: PathBuf,

    /// File has no header line
    #[arg(long)]
    pub no_header: bool,

    /// Column delimiter (first column is the label identifier)
    #[arg(long, default_value_t = '\t')]
    pub delimiter: char,

    /// Look up the index of these labels
    #[arg(long, num_args = 1..)]
    pub lookup: Vec<String>,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct LabelsSummary {
    file: PathBuf,
    size: usize,
    fingerprint: String,
    first: Option<String>,
    last: Option<String>,
    lookups: Vec<Lookup>,
}

#[derive(Debug, Serialize)]
struct Lookup {
    label: String,
    index: Option<usize>,
}

/// Execute the labels command.
pub async fn execute(args: LabelsArgs) -> anyhow::Result<()> {
    let config = LabelsConfig {
        has_header: !args.no_header,
        delimiter: args.delimiter,
        ..LabelsConfig::default()
    };
    let space = LabelSpace::load(&args.file, &config)?;
    let summary = summarize(&args, &space);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("File:        {}", summary.file.display());
    println!("Labels:      {}", summary.size);
    println!("Fingerprint: {}", summary.fingerprint);
    if let (Some(first), Some(last)) = (&summary.first, &summary.last) {
        println!("Range:       {} .. {}", first, last);
    }
    for lookup in &summary.lookups {
        match lookup.index {
            Some(index) => println!("  {} -> {}", lookup.label, index),
            None => println!("  {} -> not in label space", lookup.label),
        }
    }
    Ok(())
}

fn summarize(args: &LabelsArgs, space: &LabelSpace) -> LabelsSummary {
    LabelsSummary {
        file: args.file.clone(),
        size: space.size(),
        fingerprint: space.fingerprint(),
        first: space.labels().first().cloned(),
        last: space.labels().last().cloned(),
        lookups: args
            .lookup
            .iter()
            .map(|label| Lookup {
                label: label.clone(),
                index: space.index_of(label).ok(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_with_lookups() {
        let space = LabelSpace::build(["A01B", "B60K", "H04L"]).unwrap();
        let args = LabelsArgs {
            file: PathBuf::from("labels.tsv"),
            no_header: false,
            delimiter: '\t',
            lookup: vec!["B60K".into(), "Z99Z".into()],
            json: false,
        };

        let summary = summarize(&args, &space);
        assert_eq!(summary.size, 3);
        assert_eq!(summary.first.as_deref(), Some("A01B"));
        assert_eq!(summary.last.as_deref(), Some("H04L"));
        assert_eq!(summary.lookups[0].index, Some(1));
        assert_eq!(summary.lookups[1].index, None);
        assert_eq!(summary.fingerprint, space.fingerprint());
    }
}
