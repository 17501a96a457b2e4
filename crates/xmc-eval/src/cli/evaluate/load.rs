//! Corpus loading with a progress spinner.

use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use xmc_eval_core::dataset::CorpusReader;
use xmc_eval_core::DocumentExample;

/// Read every document of a JSONL corpus off the async runtime.
pub async fn load_corpus(path: &Path) -> anyhow::Result<Vec<DocumentExample>> {
    let path: PathBuf = path.to_path_buf();
    let docs = tokio::task::spawn_blocking(move || read_with_progress(&path)).await??;
    tracing::info!("Loaded {} documents", docs.len());
    Ok(docs)
}

fn read_with_progress(path: &Path) -> anyhow::Result<Vec<DocumentExample>> {
    let progress = create_spinner();
    let mut docs = Vec::new();

    for doc in CorpusReader::open(path)? {
        match doc {
            Ok(doc) => {
                docs.push(doc);
                progress.inc(1);
            }
            Err(e) => {
                progress.abandon_with_message("failed");
                return Err(e.into());
            }
        }
    }

    progress.finish_with_message("done");
    Ok(docs)
}

/// Create a spinner that counts documents read.
fn create_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let template = "{spinner:.green} [{elapsed_precise}] {pos} documents {msg}";
    if let Ok(style) = ProgressStyle::default_spinner().template(template) {
        pb.set_style(style);
    }
    pb.set_message("reading...");
    pb
}
