// SPDX-License-Identifier: MIT
// Copyright (c) 2026 testmap contributors

//! Mapping rule loading and the in-process mapping cache.
//!
//! A mapping file is a JSON object from `@`-sigil tags to ordered lists of
//! path prefixes, either direct:
//!
//! ```json
//! { "@auth": ["src/auth/"], "@api": ["src/api/"] }
//! ```
//!
//! or wrapped one level under a conventional `"default"` key. The two
//! shapes are resolved at the loader boundary; nothing downstream sees the
//! wrapper.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Rules keyed by tag; values are ordered path-prefix lists.
pub type MappingTable = BTreeMap<String, Vec<String>>;

/// Where mapping rules come from.
pub enum MappingSource {
    /// In-memory table, returned unchanged.
    Table(MappingTable),
    /// JSON file, resolved relative to the current working directory.
    Path(PathBuf),
}

/// On-disk document shape: direct table, or boxed under `"default"`.
#[derive(Deserialize)]
#[serde(untagged)]
enum MappingDocument {
    Wrapped { default: MappingTable },
    Direct(MappingTable),
}

impl MappingDocument {
    fn into_table(self) -> MappingTable {
        match self {
            MappingDocument::Wrapped { default } => default,
            MappingDocument::Direct(table) => table,
        }
    }
}

/// In-process mapping cache, owned by the orchestrator.
///
/// Repeated loads of the same path within one process hit the cache;
/// `invalidate` drops the entry so the next load observes edits to the
/// underlying file. There is no ambient global state behind this.
#[derive(Default)]
pub struct MappingCache {
    entry: Option<(PathBuf, MappingTable)>,
}

impl MappingCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the cached entry; the next load reads from disk.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    /// Load a mapping table from `source`.
    ///
    /// Errors with [`Error::MappingNotFound`] when the path does not
    /// exist and [`Error::MappingMalformed`] when its content does not
    /// deserialize into tag rules.
    pub fn load(&mut self, source: &MappingSource) -> Result<MappingTable> {
        match source {
            MappingSource::Table(table) => Ok(table.clone()),
            MappingSource::Path(path) => {
                let resolved = resolve_path(path)?;
                if let Some((cached_path, table)) = &self.entry {
                    if cached_path == &resolved {
                        tracing::trace!("mapping cache hit for {}", resolved.display());
                        return Ok(table.clone());
                    }
                }
                let table = read_mapping_file(&resolved)?;
                self.entry = Some((resolved, table.clone()));
                Ok(table)
            }
        }
    }
}

/// Resolve a mapping path against the current working directory.
fn resolve_path(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir()
        .map_err(|e| Error::Internal(format!("cannot determine working directory: {e}")))?;
    Ok(cwd.join(path))
}

fn read_mapping_file(path: &Path) -> Result<MappingTable> {
    if !path.exists() {
        return Err(Error::MappingNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let document: MappingDocument =
        serde_json::from_str(&content).map_err(|e| Error::MappingMalformed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    tracing::debug!("loaded mapping rules from {}", path.display());
    Ok(document.into_table())
}

#[cfg(test)]
#[path = "mapping_tests.rs"]
mod tests;
