//! CHARMM card-format `.cor` reading.
//!
//! A `.cor` file holds one or more conformer blocks. Each block is:
//!
//! ```text
//! * optional title lines
//! *
//!    36  EXT            <- atom count, optional EXT tag
//!     1    1 HEXA C1     0.123   4.567  -8.901 SEG  1  0.0
//!     ...               <- exactly `atom count` records
//! ```
//!
//! Atom records are parsed whitespace-separated in CHARMM card order
//! (`IATOM IRES RES TYPE X Y Z ...`): the atom name is field 4 and the
//! coordinates are fields 5-7. Trailing fields (segid, resid, weight) are
//! ignored. Consecutive blocks in one file are consecutive conformers.

use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::errors::{IoError, Result};

/// One conformer: atom names with their 3D coordinates, in file order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fragment {
    /// Atom type names as written in the file (e.g. `C1`, `O2`)
    pub atoms: Vec<String>,
    /// Coordinates in Ångström
    pub coords: Vec<[f64; 3]>,
}

impl Fragment {
    /// Number of atoms.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Is empty?
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Geometric center of the fragment.
    pub fn centroid(&self) -> Option<[f64; 3]> {
        if self.coords.is_empty() {
            return None;
        }
        let n = self.coords.len() as f64;
        let sum = self
            .coords
            .iter()
            .fold([0.0; 3], |acc, c| [acc[0] + c[0], acc[1] + c[1], acc[2] + c[2]]);
        Some([sum[0] / n, sum[1] / n, sum[2] / n])
    }
}

/// Read all conformer fragments from a `.cor` file on disk.
pub fn read_cor_file(path: impl AsRef<Path>) -> Result<Vec<Fragment>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let source_name = path.display().to_string();
    let fragments = parse_cor_str(&contents, &source_name)?;
    info!(
        "loaded {} fragments ({} atoms each) from {}",
        fragments.len(),
        fragments.first().map_or(0, Fragment::len),
        source_name
    );
    Ok(fragments)
}

/// Parse `.cor` content from memory. `source_name` only labels errors.
pub fn parse_cor_str(contents: &str, source_name: &str) -> Result<Vec<Fragment>> {
    let mut fragments = Vec::new();
    // (remaining atom records, fragment under construction)
    let mut pending: Option<(usize, Fragment)> = None;
    let mut last_line = 0;

    for (idx, raw) in contents.lines().enumerate() {
        let lineno = idx + 1;
        last_line = lineno;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        match pending.take() {
            Some((remaining, mut fragment)) => {
                let (name, coord) = parse_atom_record(line, source_name, lineno)?;
                fragment.atoms.push(name);
                fragment.coords.push(coord);
                if remaining == 1 {
                    fragments.push(fragment);
                } else {
                    pending = Some((remaining - 1, fragment));
                }
            }
            None => {
                // Between blocks: titles, then an atom count.
                if line.starts_with('*') {
                    continue;
                }
                let count: usize = line
                    .split_whitespace()
                    .next()
                    .and_then(|tok| tok.parse().ok())
                    .ok_or_else(|| {
                        IoError::malformed_cor(
                            source_name,
                            lineno,
                            format!("expected atom count, got `{line}`"),
                        )
                    })?;
                if count == 0 {
                    return Err(IoError::malformed_cor(
                        source_name,
                        lineno,
                        "atom count must be positive",
                    ));
                }
                pending = Some((count, Fragment::default()));
            }
        }
    }

    if let Some((remaining, _)) = pending {
        return Err(IoError::malformed_cor(
            source_name,
            last_line,
            format!("file ended with {remaining} atom records still expected"),
        ));
    }

    Ok(fragments)
}

fn parse_atom_record(line: &str, source_name: &str, lineno: usize) -> Result<(String, [f64; 3])> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 7 {
        return Err(IoError::malformed_cor(
            source_name,
            lineno,
            format!("expected at least 7 fields in atom record, got {}", fields.len()),
        ));
    }

    let mut coord = [0.0; 3];
    for (axis, field) in fields[4..7].iter().enumerate() {
        coord[axis] = field.parse().map_err(|_| {
            IoError::malformed_cor(
                source_name,
                lineno,
                format!("unparseable coordinate `{field}`"),
            )
        })?;
    }

    Ok((fields[3].to_string(), coord))
}
