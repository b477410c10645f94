//! JSONL edge list import.
//!
//! Each non-blank line holds one [`NewEdge`] as JSON:
//!
//! ```text
//! {"source_service":"checkout","target_service":"payments","dependency_type":"synchronous-http","criticality":"critical","latency_ms":42.0}
//! {"source_service":"payments","target_service":"ledger-db","dependency_type":"database","criticality":"high"}
//! ```
//!
//! Loading is resilient: a bad line is skipped and reported as an
//! [`ImportWarning`] instead of failing the whole file.

use crate::domain::NewEdge;
use crate::error::{Error, Result};
use std::fmt;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

/// A skipped line in an edge list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportWarning {
    /// 1-based line number
    pub line_number: usize,

    /// Parse or validation failure
    pub error: String,
}

impl fmt::Display for ImportWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line_number, self.error)
    }
}

impl From<Error> for ImportWarning {
    fn from(error: Error) -> Self {
        match error {
            Error::InvalidEdge {
                line_number,
                reason,
            } => Self {
                line_number,
                error: reason,
            },
            other => Self {
                line_number: 0,
                error: other.to_string(),
            },
        }
    }
}

/// Load an edge list from a JSONL file.
///
/// Returns the parsed edges in file order together with a warning for every
/// skipped line.
///
/// # Errors
///
/// Returns `Error::Io` if the file cannot be opened or read.
pub async fn load_edges_from_jsonl(path: &Path) -> Result<(Vec<NewEdge>, Vec<ImportWarning>)> {
    let file = File::open(path).await?;
    read_edges(file).await
}

/// Read an edge list from any async reader.
///
/// # Errors
///
/// Returns `Error::Io` if reading fails.
pub async fn read_edges<R>(reader: R) -> Result<(Vec<NewEdge>, Vec<ImportWarning>)>
where
    R: AsyncRead + Unpin,
{
    let mut lines = BufReader::new(reader).lines();
    let mut edges = Vec::new();
    let mut warnings = Vec::new();
    let mut line_number = 0;

    while let Some(line) = lines.next_line().await? {
        line_number += 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match parse_edge(trimmed, line_number) {
            Ok(edge) => edges.push(edge),
            Err(error) => {
                let warning = ImportWarning::from(error);
                tracing::warn!(
                    line_number = warning.line_number,
                    error = %warning.error,
                    "Skipping invalid edge record"
                );
                warnings.push(warning);
            }
        }
    }

    tracing::debug!(edges = edges.len(), skipped = warnings.len(), "Read edge list");
    Ok((edges, warnings))
}

fn parse_edge(line: &str, line_number: usize) -> Result<NewEdge> {
    let edge: NewEdge = serde_json::from_str(line).map_err(|e| Error::InvalidEdge {
        line_number,
        reason: e.to_string(),
    })?;
    edge.validate()
        .map_err(|reason| Error::InvalidEdge { line_number, reason })?;
    Ok(edge)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Criticality, DependencyType};
    use std::io::Cursor;
    use tempfile::TempDir;

    #[tokio::test]
    async fn reads_valid_lines_in_order() {
        let data = concat!(
            r#"{"source_service":"a","target_service":"b","dependency_type":"database","criticality":"critical","latency_ms":3.5}"#,
            "\n",
            "\n",
            r#"{"source_service":"b","target_service":"c","dependency_type":"cache","criticality":"low"}"#,
            "\n",
        );

        let (edges, warnings) = read_edges(Cursor::new(data)).await.unwrap();

        assert!(warnings.is_empty());
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].dependency_type, DependencyType::Database);
        assert_eq!(edges[0].latency_ms, 3.5);
        assert_eq!(edges[1].criticality, Criticality::Low);
    }

    #[tokio::test]
    async fn skips_malformed_and_invalid_lines() {
        let data = concat!(
            "not json\n",
            r#"{"source_service":"a","target_service":"b","dependency_type":"telepathy","criticality":"low"}"#,
            "\n",
            r#"{"source_service":"a","target_service":"b","dependency_type":"cache","criticality":"low","latency_ms":-4}"#,
            "\n",
            r#"{"source_service":"a","target_service":"b","dependency_type":"cache","criticality":"low"}"#,
            "\n",
        );

        let (edges, warnings) = read_edges(Cursor::new(data)).await.unwrap();

        assert_eq!(edges.len(), 1);
        let lines: Vec<usize> = warnings.iter().map(|w| w.line_number).collect();
        assert_eq!(lines, [1, 2, 3]);
        assert!(warnings[2].error.contains("latency_ms"));
    }

    #[tokio::test]
    async fn loads_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("edges.jsonl");
        tokio::fs::write(
            &path,
            r#"{"source_service":"x","target_service":"y","dependency_type":"shared-storage","criticality":"optional"}"#,
        )
        .await
        .unwrap();

        let (edges, warnings) = load_edges_from_jsonl(&path).await.unwrap();
        assert!(warnings.is_empty());
        assert_eq!(edges[0].dependency_type, DependencyType::SharedStorage);
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = load_edges_from_jsonl(&temp_dir.path().join("absent.jsonl")).await;
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
