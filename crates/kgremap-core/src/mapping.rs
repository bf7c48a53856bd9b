//! `entity2id.txt` / `relation2id.txt` loading.
//!
//! A mapping file pairs each long-form identifier with its short form:
//!
//! ```text
//! /m/06rf7\t0
//! /m/0c94fn\t1
//! ```
//!
//! The short form is kept verbatim and only parsed when a triple file asks
//! for it, so a malformed short id surfaces against the triple that used it.

use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

use crate::error::{IdKind, RemapError, Result};
use crate::tsv;

/// Long-form identifiers in file order plus the long → short lookup.
#[derive(Debug, Clone, Default)]
pub struct IdMapping {
    ids: Vec<String>,
    short_ids: Vec<String>,
    // long form -> position in `ids` (position + 1 is the defining line)
    positions: HashMap<String, usize>,
}

impl IdMapping {
    /// Parse a mapping from any buffered reader. `source` is only used for
    /// diagnostics.
    pub fn from_reader<R: BufRead>(reader: R, source: &Path) -> Result<Self> {
        let mut mapping = IdMapping::default();
        tsv::for_each_line(reader, source, |line_no, line| {
            let [long_id, short_id] = tsv::split_fields::<2>(line, source, line_no)?;
            mapping.insert(long_id, short_id, source, line_no)
        })?;
        Ok(mapping)
    }

    fn insert(&mut self, long_id: &str, short_id: &str, source: &Path, line: usize) -> Result<()> {
        if let Some(&pos) = self.positions.get(long_id) {
            return Err(RemapError::DuplicateKey {
                path: source.to_path_buf(),
                line,
                id: long_id.to_string(),
                first_line: pos + 1,
            });
        }
        self.positions.insert(long_id.to_string(), self.ids.len());
        self.ids.push(long_id.to_string());
        self.short_ids.push(short_id.to_string());
        Ok(())
    }

    /// Long-form identifiers in the order they appear in the file.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn into_ids(self) -> Vec<String> {
        self.ids
    }

    /// The short form recorded for `long_id`, exactly as written in the file.
    pub fn short_id(&self, long_id: &str) -> Option<&str> {
        self.positions
            .get(long_id)
            .map(|&pos| self.short_ids[pos].as_str())
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Resolve a long-form identifier referenced from `source:line` to its
    /// integer index.
    pub(crate) fn resolve(
        &self,
        long_id: &str,
        kind: IdKind,
        source: &Path,
        line: usize,
    ) -> Result<u32> {
        let short = self.short_id(long_id).ok_or_else(|| RemapError::Lookup {
            path: source.to_path_buf(),
            line,
            kind,
            id: long_id.to_string(),
        })?;
        short.parse::<u32>().map_err(|e| RemapError::Parse {
            path: source.to_path_buf(),
            line,
            value: short.to_string(),
            source: e,
        })
    }
}

/// Load a two-column mapping file.
pub fn load_mapping(path: &Path) -> Result<IdMapping> {
    let reader = tsv::open(path)?;
    let mapping = IdMapping::from_reader(reader, path)?;
    tracing::debug!(path = %path.display(), ids = mapping.len(), "loaded id mapping");
    Ok(mapping)
}
