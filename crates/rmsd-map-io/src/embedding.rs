//! Precomputed 2D-embedding tables.
//!
//! The embedding pipeline writes one CSV per input set, stacking the
//! projections computed for several UMAP neighbor counts: each row carries
//! the neighbor count `N` alongside the 2D coordinates `X`, `Y`, and
//! optionally a cluster label. Column names are configurable since
//! upstream tooling varies.

use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use rmsd_map_core::{EmbeddedCloud, Point2};

use crate::errors::{IoError, Result};

/// Column naming for embedding CSVs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingColumns {
    /// X-coordinate column
    pub x: String,
    /// Y-coordinate column
    pub y: String,
    /// Neighbor-count column, if the file stacks several projections
    pub neighbors: Option<String>,
    /// Cluster-label column, if labels were precomputed
    pub label: Option<String>,
}

impl Default for EmbeddingColumns {
    fn default() -> Self {
        Self {
            x: "X".to_string(),
            y: "Y".to_string(),
            neighbors: Some("N".to_string()),
            label: None,
        }
    }
}

impl EmbeddingColumns {
    /// Plain `X`/`Y` files with no neighbor-count or label columns.
    pub fn coordinates_only() -> Self {
        Self {
            x: "X".to_string(),
            y: "Y".to_string(),
            neighbors: None,
            label: None,
        }
    }
}

/// One row of an embedding table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingRow {
    pub x: f64,
    pub y: f64,
    /// UMAP neighbor count this projection was computed with
    pub neighbors: Option<u32>,
    /// Precomputed cluster label (-1 = noise by convention)
    pub label: Option<i32>,
}

/// A loaded embedding CSV.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingTable {
    rows: Vec<EmbeddingRow>,
}

impl EmbeddingTable {
    /// All rows in file order.
    pub fn rows(&self) -> &[EmbeddingRow] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Is empty?
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sorted unique neighbor counts present in the table.
    pub fn neighbor_counts(&self) -> Vec<u32> {
        let mut counts: Vec<u32> = self.rows.iter().filter_map(|r| r.neighbors).collect();
        counts.sort_unstable();
        counts.dedup();
        counts
    }

    /// Sub-table of the projection computed with neighbor count `n`.
    pub fn with_neighbors(&self, n: u32) -> EmbeddingTable {
        EmbeddingTable {
            rows: self
                .rows
                .iter()
                .filter(|r| r.neighbors == Some(n))
                .copied()
                .collect(),
        }
    }

    /// Convert to an [`EmbeddedCloud`]. Labels carry over when every row
    /// has one.
    pub fn cloud(&self) -> Result<EmbeddedCloud> {
        let all_labeled = !self.rows.is_empty() && self.rows.iter().all(|r| r.label.is_some());
        let cloud = if all_labeled {
            EmbeddedCloud::from_labeled(
                self.rows
                    .iter()
                    .map(|r| ([r.x, r.y], r.label.unwrap_or(-1)))
                    .collect(),
            )?
        } else {
            let points: Vec<Point2> = self.rows.iter().map(|r| [r.x, r.y]).collect();
            EmbeddedCloud::new(points)?
        };
        Ok(cloud)
    }
}

/// Read an embedding CSV with the given column configuration.
///
/// # Errors
///
/// `MissingColumn` if a configured column is absent from the header;
/// `MalformedRow` if a field fails to parse; `Csv`/`Io` for lower-level
/// failures.
pub fn read_embedding_csv(
    path: impl AsRef<Path>,
    columns: &EmbeddingColumns,
) -> Result<EmbeddingTable> {
    let path = path.as_ref();
    let source_name = path.display().to_string();

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    let find = |column: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| IoError::missing_column(&source_name, column))
    };

    let x_idx = find(&columns.x)?;
    let y_idx = find(&columns.y)?;
    let n_idx = match &columns.neighbors {
        Some(column) => Some(find(column)?),
        None => None,
    };
    let label_idx = match &columns.label {
        Some(column) => Some(find(column)?),
        None => None,
    };

    let mut rows = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let row = idx + 1;
        let record = record?;

        let x = parse_field::<f64>(&record, x_idx, &columns.x, &source_name, row)?;
        let y = parse_field::<f64>(&record, y_idx, &columns.y, &source_name, row)?;
        let neighbors = match n_idx {
            Some(i) => Some(parse_field::<u32>(
                &record,
                i,
                columns.neighbors.as_deref().unwrap_or_default(),
                &source_name,
                row,
            )?),
            None => None,
        };
        let label = match label_idx {
            Some(i) => Some(parse_field::<i32>(
                &record,
                i,
                columns.label.as_deref().unwrap_or_default(),
                &source_name,
                row,
            )?),
            None => None,
        };

        rows.push(EmbeddingRow {
            x,
            y,
            neighbors,
            label,
        });
    }

    let table = EmbeddingTable { rows };
    info!(
        "loaded {} embedding rows from {} (neighbor counts: {:?})",
        table.len(),
        source_name,
        table.neighbor_counts()
    );
    Ok(table)
}

fn parse_field<T: std::str::FromStr>(
    record: &csv::StringRecord,
    idx: usize,
    column: &str,
    source_name: &str,
    row: usize,
) -> Result<T> {
    let field = record.get(idx).ok_or_else(|| {
        IoError::malformed_row(source_name, row, format!("missing field for column `{column}`"))
    })?;
    field.parse().map_err(|_| {
        IoError::malformed_row(
            source_name,
            row,
            format!("unparseable value `{field}` in column `{column}`"),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> EmbeddingTable {
        EmbeddingTable {
            rows: vec![
                EmbeddingRow { x: 0.0, y: 0.0, neighbors: Some(20), label: None },
                EmbeddingRow { x: 1.0, y: 1.0, neighbors: Some(40), label: None },
                EmbeddingRow { x: 2.0, y: 2.0, neighbors: Some(40), label: None },
            ],
        }
    }

    #[test]
    fn test_neighbor_filtering() {
        let table = table();
        assert_eq!(table.neighbor_counts(), vec![20, 40]);

        let forty = table.with_neighbors(40);
        assert_eq!(forty.len(), 2);
        assert_eq!(forty.rows()[0].x, 1.0);
    }

    #[test]
    fn test_cloud_without_labels() {
        let cloud = table().with_neighbors(40).cloud().unwrap();
        assert_eq!(cloud.len(), 2);
        assert!(!cloud.is_labeled());
    }

    #[test]
    fn test_cloud_with_labels() {
        let table = EmbeddingTable {
            rows: vec![
                EmbeddingRow { x: 0.0, y: 0.0, neighbors: None, label: Some(0) },
                EmbeddingRow { x: 1.0, y: 1.0, neighbors: None, label: Some(-1) },
            ],
        };
        let cloud = table.cloud().unwrap();
        assert!(cloud.is_labeled());
        assert_eq!(cloud.label(1), Some(-1));
    }
}
