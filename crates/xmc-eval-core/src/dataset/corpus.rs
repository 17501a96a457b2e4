//! JSON Lines corpus reader.
//!
//! One document per line:
//!
//! ```text
//! {"id": "EP3512345", "labels": ["A01B", "H04L"], "scores": [{"model": "bert-base", "scores": [...]}]}
//! ```
//!
//! Blank lines are skipped. Parse errors carry the file path and 1-based
//! line number.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use crate::error::DatasetError;
use crate::types::DocumentExample;

/// Streaming reader over a JSONL corpus file.
pub struct CorpusReader<R> {
    path: PathBuf,
    lines: Lines<R>,
    line_no: usize,
}

impl CorpusReader<BufReader<File>> {
    /// Open a corpus file for streaming.
    pub fn open(path: &Path) -> Result<Self, DatasetError> {
        if !path.exists() {
            return Err(DatasetError::FileNotFound(path.to_path_buf()));
        }
        let file = File::open(path).map_err(|source| DatasetError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(path, BufReader::new(file)))
    }
}

impl<R: BufRead> CorpusReader<R> {
    /// Wrap any buffered reader; `path` is only used in error messages.
    pub fn new(path: &Path, reader: R) -> Self {
        Self {
            path: path.to_path_buf(),
            lines: reader.lines(),
            line_no: 0,
        }
    }
}

impl<R: BufRead> Iterator for CorpusReader<R> {
    type Item = Result<DocumentExample, DatasetError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = self.lines.next()?;
            self.line_no += 1;
            let line = match line {
                Ok(line) => line,
                Err(source) => {
                    return Some(Err(DatasetError::Read {
                        path: self.path.clone(),
                        source,
                    }))
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            return Some(
                serde_json::from_str(&line).map_err(|e| DatasetError::Parse {
                    path: self.path.clone(),
                    line: self.line_no,
                    message: e.to_string(),
                }),
            );
        }
    }
}

/// Read a whole corpus into memory, failing on the first malformed line.
pub fn read_corpus(path: &Path) -> Result<Vec<DocumentExample>, DatasetError> {
    let docs = CorpusReader::open(path)?.collect::<Result<Vec<_>, _>>()?;
    tracing::info!("Loaded {} documents from {:?}", docs.len(), path);
    Ok(docs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const TWO_DOCS: &str = r#"{"id":"d1","labels":["A","C"],"scores":[{"model":"m1","scores":[0.9,0.1,0.2,0.3]}]}

{"id":"d2","labels":[],"scores":[{"model":"m1","scores":[0.1,0.8,0.6,0.0]}]}
"#;

    #[test]
    fn test_reads_documents_and_skips_blank_lines() {
        let reader = CorpusReader::new(Path::new("mem.jsonl"), Cursor::new(TWO_DOCS));
        let docs: Vec<DocumentExample> = reader.collect::<Result<_, _>>().unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].id, "d1");
        assert_eq!(docs[0].labels, vec!["A", "C"]);
        assert!(docs[1].labels.is_empty());
    }

    #[test]
    fn test_parse_error_reports_line() {
        let input = "{\"id\":\"ok\",\"scores\":[]}\n\nnot json\n";
        let mut reader = CorpusReader::new(Path::new("bad.jsonl"), Cursor::new(input));
        assert!(reader.next().unwrap().is_ok());
        match reader.next().unwrap() {
            Err(DatasetError::Parse { line, path, .. }) => {
                assert_eq!(line, 3);
                assert_eq!(path, PathBuf::from("bad.jsonl"));
            }
            other => panic!("expected parse error, got {:?}", other),
        }
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_read_corpus_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.jsonl");
        std::fs::write(&path, TWO_DOCS).unwrap();
        let docs = read_corpus(&path).unwrap();
        assert_eq!(docs.len(), 2);
    }

    #[test]
    fn test_missing_file() {
        let err = read_corpus(Path::new("/nonexistent/corpus.jsonl")).unwrap_err();
        assert!(matches!(err, DatasetError::FileNotFound(_)));
    }
}
