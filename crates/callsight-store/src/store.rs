//! Append-only CSV store

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use csv::WriterBuilder;
use tracing::debug;

use callsight_core::AnalysisRecord;

use crate::error::StoreError;

/// CSV store with a fixed header and one row per analysis.
///
/// Single-process, single-writer: concurrent appends to the same path are
/// not guarded against.
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    /// Create a store for the given file path; the file itself is created
    /// lazily on the first append.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Target file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record, writing the header row first when the file is
    /// absent or empty.
    pub fn append(&self, record: &AnalysisRecord) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let needs_header = match fs::metadata(&self.path) {
            Ok(meta) => meta.len() == 0,
            Err(_) => true,
        };

        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;

        let mut writer = WriterBuilder::new()
            .has_headers(needs_header)
            .from_writer(file);
        writer.serialize(record)?;
        writer.flush()?;

        debug!("Appended analysis row to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use callsight_core::{Sentiment, Source};
    use chrono::Utc;

    fn sample_record(transcript: &str) -> AnalysisRecord {
        AnalysisRecord {
            transcript: transcript.to_string(),
            summary: "Caller asks for a refund".to_string(),
            sentiment: Sentiment::Negative,
            timestamp: Utc::now(),
            source: Source::Offline,
        }
    }

    #[test]
    fn test_fresh_path_gets_header_plus_n_rows() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvStore::new(dir.path().join("call_analysis.csv"));

        for i in 0..3 {
            store.append(&sample_record(&format!("transcript {}", i))).unwrap();
        }

        let content = fs::read_to_string(store.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "transcript,summary,sentiment,timestamp,source");
    }

    #[test]
    fn test_header_written_only_once() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvStore::new(dir.path().join("call_analysis.csv"));

        store.append(&sample_record("first")).unwrap();
        store.append(&sample_record("second")).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        let headers = content
            .lines()
            .filter(|l| l.starts_with("transcript,summary"))
            .count();
        assert_eq!(headers, 1);
    }

    #[test]
    fn test_rows_round_trip_through_reader() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvStore::new(dir.path().join("call_analysis.csv"));

        let record = sample_record("I was charged twice,\nand nobody called back.");
        store.append(&record).unwrap();

        let mut reader = csv::Reader::from_path(store.path()).unwrap();
        let rows: Vec<AnalysisRecord> =
            reader.deserialize().collect::<Result<_, _>>().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].transcript, record.transcript);
        assert_eq!(rows[0].sentiment, Sentiment::Negative);
        assert_eq!(rows[0].source, Source::Offline);
    }

    #[test]
    fn test_creates_missing_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvStore::new(dir.path().join("nested/out/call_analysis.csv"));

        store.append(&sample_record("hello")).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn test_unwritable_path_surfaces_error() {
        // A directory at the target path makes the open fail
        let dir = tempfile::tempdir().unwrap();
        let store = CsvStore::new(dir.path());

        let err = store.append(&sample_record("hello")).unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
    }
}
