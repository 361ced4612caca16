use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::guid::Guid;
use crate::index::{AssetRecord, GuidIndex};
use crate::meta::{parse_meta, META_EXTENSION};
use crate::stats::ScanStats;

/// Why a scan step contributed nothing to the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Filesystem stat of the entry failed.
    Stat(String),

    /// The sidecar file could not be read.
    Unreadable(String),

    /// The sidecar content did not parse as YAML.
    Malformed(String),

    /// The document has no well-formed `guid` field.
    MissingGuid,

    /// The sidecar describes a directory, not a navigable asset file.
    FolderAsset,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Stat(e) => write!(f, "stat failed: {e}"),
            SkipReason::Unreadable(e) => write!(f, "unreadable: {e}"),
            SkipReason::Malformed(e) => write!(f, "malformed YAML: {e}"),
            SkipReason::MissingGuid => f.write_str("no guid field"),
            SkipReason::FolderAsset => f.write_str("folder asset"),
        }
    }
}

/// Result of examining one directory entry during a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    Indexed { guid: Guid, record: AssetRecord },
    Skipped { path: PathBuf, reason: SkipReason },
}

/// Scanner that walks a project tree for `.meta` sidecars and extracts
/// GUID → asset-path bindings.
pub struct MetaScanner {
    root: PathBuf,
}

impl MetaScanner {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Walk the tree and fold every discovered binding into a fresh index.
    ///
    /// Never fails: a nonexistent root, unreadable directories and files,
    /// and malformed sidecars all degrade to skipped entries.
    pub async fn scan(&self) -> (GuidIndex, ScanStats) {
        let started = Instant::now();
        let mut index = GuidIndex::new();
        let mut stats = ScanStats::new();

        for outcome in self.walk(&mut stats).await {
            match outcome {
                ScanOutcome::Indexed { guid, record } => {
                    stats.add_indexed();
                    index.insert(guid, record);
                }
                ScanOutcome::Skipped { path, reason } => {
                    stats.add_skipped();
                    log::debug!("Skipping {}: {reason}", path.display());
                }
            }
        }

        stats.time_ms = started.elapsed().as_millis() as u64;
        log::info!(
            "Indexed {} assets under {} ({} sidecars, {}ms)",
            index.len(),
            self.root.display(),
            stats.meta_files,
            stats.time_ms
        );
        (index, stats)
    }

    /// Per-entry outcomes of a full walk, without folding into an index.
    pub async fn scan_outcomes(&self) -> Vec<ScanOutcome> {
        let mut stats = ScanStats::new();
        self.walk(&mut stats).await
    }

    // Explicit worklist instead of recursion: project trees can nest
    // arbitrarily deep, and async recursion would box every level.
    async fn walk(&self, stats: &mut ScanStats) -> Vec<ScanOutcome> {
        let mut outcomes = Vec::new();
        let mut pending = vec![self.root.clone()];

        while let Some(dir) = pending.pop() {
            let mut entries = match tokio::fs::read_dir(&dir).await {
                Ok(entries) => entries,
                Err(e) => {
                    log::warn!("Failed to read directory {}: {e}", dir.display());
                    continue;
                }
            };
            stats.add_directory();

            loop {
                let entry = match entries.next_entry().await {
                    Ok(Some(entry)) => entry,
                    Ok(None) => break,
                    Err(e) => {
                        log::warn!("Failed to read entry in {}: {e}", dir.display());
                        break;
                    }
                };

                let path = entry.path();
                let file_type = match entry.file_type().await {
                    Ok(file_type) => file_type,
                    Err(e) => {
                        outcomes.push(ScanOutcome::Skipped {
                            path,
                            reason: SkipReason::Stat(e.to_string()),
                        });
                        continue;
                    }
                };

                if file_type.is_dir() {
                    pending.push(path);
                    continue;
                }

                if !Self::is_meta_file(&path) {
                    continue;
                }

                stats.add_meta_file();
                outcomes.push(self.examine(path).await);
            }
        }

        outcomes
    }

    /// Read and parse one sidecar, deriving its index binding.
    async fn examine(&self, path: PathBuf) -> ScanOutcome {
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) => {
                return ScanOutcome::Skipped {
                    path,
                    reason: SkipReason::Unreadable(e.to_string()),
                }
            }
        };

        let doc = match parse_meta(&content) {
            Ok(doc) => doc,
            Err(e) => {
                return ScanOutcome::Skipped {
                    path,
                    reason: SkipReason::Malformed(e.to_string()),
                }
            }
        };

        if doc.folder_asset {
            return ScanOutcome::Skipped {
                path,
                reason: SkipReason::FolderAsset,
            };
        }

        let Some(guid) = doc.guid else {
            return ScanOutcome::Skipped {
                path,
                reason: SkipReason::MissingGuid,
            };
        };

        let record = AssetRecord::new(self.asset_path(&path));
        ScanOutcome::Indexed { guid, record }
    }

    fn is_meta_file(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(META_EXTENSION))
    }

    /// Project-relative path of the asset a sidecar describes: root prefix
    /// stripped, components re-joined with `/`, sidecar extension removed.
    fn asset_path(&self, sidecar: &Path) -> String {
        let relative = sidecar.strip_prefix(&self.root).unwrap_or(sidecar);
        relative
            .with_extension("")
            .components()
            .map(|component| component.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/")
    }
}
