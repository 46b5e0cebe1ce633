//! # rmsd-map-io
//!
//! Input-side orchestration for conformer-map analysis: reads CHARMM-style
//! `.cor` conformer files and precomputed 2D-embedding CSVs, producing the
//! data types `rmsd-map-core` operates on.
//!
//! Embeddings (UMAP projections of pairwise RMSD-like distances) and
//! cluster labels are computed by external tooling; this crate only loads
//! their outputs.

pub mod cor;
pub mod embedding;
pub mod errors;

pub use cor::{parse_cor_str, read_cor_file, Fragment};
pub use embedding::{read_embedding_csv, EmbeddingColumns, EmbeddingRow, EmbeddingTable};
pub use errors::{IoError, Result};
