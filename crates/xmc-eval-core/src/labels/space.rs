//! The canonical label space shared by every score vector in a run.
//!
//! Maps label identifiers (e.g. IPC codes) to dense indices in `[0, L)`.
//! Built once from the canonical label list and never mutated afterwards,
//! so it can be shared read-only across evaluation workers.

use std::collections::HashMap;
use std::path::Path;

use crate::config::LabelsConfig;
use crate::error::{DatasetError, EvalError, ScoringError, ScoringResult};

/// Ordered, duplicate-free set of label identifiers.
#[derive(Debug, Clone)]
pub struct LabelSpace {
    labels: Vec<String>,
    by_id: HashMap<String, usize>,
}

impl LabelSpace {
    /// Build a label space from the canonical label list.
    ///
    /// Fails with `InvalidLabelSpace` if the list is empty or contains a
    /// duplicate identifier.
    pub fn build<I, S>(canonical: I) -> ScoringResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = canonical.into_iter().map(Into::into).collect();
        if labels.is_empty() {
            return Err(ScoringError::InvalidLabelSpace {
                reason: "label list is empty".into(),
            });
        }

        let mut by_id = HashMap::with_capacity(labels.len());
        for (index, label) in labels.iter().enumerate() {
            if by_id.insert(label.clone(), index).is_some() {
                return Err(ScoringError::InvalidLabelSpace {
                    reason: format!("duplicate label '{}' at position {}", label, index),
                });
            }
        }

        Ok(Self { labels, by_id })
    }

    /// Load the canonical label list from disk.
    ///
    /// The identifier is the first `delimiter`-separated column of each line.
    /// Blank lines are ignored; the first line is skipped when
    /// `config.has_header` is set.
    pub fn load(path: &Path, config: &LabelsConfig) -> Result<Self, EvalError> {
        if !path.exists() {
            return Err(DatasetError::FileNotFound(path.to_path_buf()).into());
        }
        let content = std::fs::read_to_string(path).map_err(|source| DatasetError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let skip = usize::from(config.has_header);
        let labels: Vec<&str> = content
            .lines()
            .skip(skip)
            .filter_map(|line| line.split(config.delimiter).next())
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .collect();

        let space = Self::build(labels)?;
        tracing::info!(
            "Loaded label space: {} labels from {:?} (fingerprint {})",
            space.size(),
            path,
            &space.fingerprint()[..12],
        );
        Ok(space)
    }

    /// Dense index of a label identifier.
    pub fn index_of(&self, label: &str) -> ScoringResult<usize> {
        self.by_id
            .get(label)
            .copied()
            .ok_or_else(|| ScoringError::UnknownLabel {
                label: label.to_string(),
            })
    }

    /// Identifier at a dense index, if in range.
    pub fn label_at(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Number of labels `L`.
    pub fn size(&self) -> usize {
        self.labels.len()
    }

    /// All identifiers in canonical order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Translate identifiers into sorted, deduplicated indices.
    ///
    /// With `truncate_to` set, each identifier is first cut to that many
    /// characters (e.g. a full IPC group code down to its subclass), so codes
    /// that collapse onto the same prefix count once.
    pub fn resolve<S: AsRef<str>>(
        &self,
        identifiers: &[S],
        truncate_to: Option<usize>,
    ) -> ScoringResult<Vec<usize>> {
        let mut indices = identifiers
            .iter()
            .map(|id| {
                let id = id.as_ref().trim();
                let id = match truncate_to {
                    Some(n) => truncate_chars(id, n),
                    None => id,
                };
                self.index_of(id)
            })
            .collect::<ScoringResult<Vec<usize>>>()?;
        indices.sort_unstable();
        indices.dedup();
        Ok(indices)
    }

    /// BLAKE3 hash of all identifiers in order.
    ///
    /// Two runs agree on what every score position means iff their
    /// fingerprints match.
    pub fn fingerprint(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        for label in &self.labels {
            hasher.update(label.as_bytes());
            hasher.update(b"\n");
        }
        hasher.finalize().to_hex().to_string()
    }
}

fn truncate_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((byte_idx, _)) => &s[..byte_idx],
        None => s,
    }
}
