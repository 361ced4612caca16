use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use guid_peek_indexer::{is_guid, AssetRecord, Guid, GuidIndex, MetaScanner};
use tokio::sync::Mutex;

/// Hover display text for a GUID that resolves to nothing.
pub const MISSING_TEXT: &str = "Missing";

/// Navigable editor location for a resolved GUID.
///
/// Line and column default to the start of the file; sidecars carry no
/// position information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLocation {
    pub path: PathBuf,
    pub line: u32,
    pub column: u32,
}

/// Session-scoped lookup facade over the GUID index.
///
/// The index is built lazily by the first query and kept for the life of
/// this resolver. Concurrent first callers await the same in-flight build
/// rather than each starting a scan of their own.
pub struct GuidResolver {
    root: PathBuf,
    index: Mutex<Option<Arc<GuidIndex>>>,
    scans: AtomicUsize,
}

impl GuidResolver {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            index: Mutex::new(None),
            scans: AtomicUsize::new(0),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Number of full scans performed so far in this session.
    pub fn scans_performed(&self) -> usize {
        self.scans.load(Ordering::Relaxed)
    }

    /// Look up a GUID, building the index on first use.
    ///
    /// Absent is a normal outcome, not an error: unknown GUIDs and records
    /// whose asset no longer exists on disk both resolve to `None`.
    pub async fn resolve(&self, guid: &Guid) -> Option<AssetRecord> {
        let index = self.index().await;
        let record = index.get(guid)?.clone();

        // The index may be stale; never hand out a dangling location.
        match tokio::fs::try_exists(self.root.join(&record.path)).await {
            Ok(true) => Some(record),
            _ => None,
        }
    }

    /// Jump-to-definition target for a token under the cursor.
    ///
    /// The token is re-validated here; words that are not GUIDs resolve
    /// to `None`.
    pub async fn definition(&self, word: &str) -> Option<AssetLocation> {
        let guid = Guid::from_str(word).ok()?;
        let record = self.resolve(&guid).await?;

        Some(AssetLocation {
            path: self.root.join(&record.path),
            line: 0,
            column: 0,
        })
    }

    /// Hover text for a token: the resolved project-relative path, the
    /// explicit missing indicator for a GUID that resolves to nothing, or
    /// `None` for words that are not GUIDs at all.
    pub async fn hover(&self, word: &str) -> Option<String> {
        if !is_guid(word) {
            return None;
        }
        let guid = Guid::from_str(word).ok()?;

        match self.resolve(&guid).await {
            Some(record) => Some(record.path),
            None => Some(MISSING_TEXT.to_string()),
        }
    }

    /// Drop the session index; the next query triggers a fresh scan.
    pub async fn teardown(&self) {
        let mut slot = self.index.lock().await;
        *slot = None;
        log::debug!("GUID index released for {}", self.root.display());
    }

    async fn index(&self) -> Arc<GuidIndex> {
        // Holding the lock across the scan keeps concurrent first callers
        // waiting on this build instead of starting their own.
        let mut slot = self.index.lock().await;
        if let Some(index) = slot.as_ref() {
            return Arc::clone(index);
        }

        let (index, stats) = MetaScanner::new(&self.root).scan().await;
        self.scans.fetch_add(1, Ordering::Relaxed);
        log::info!(
            "Built GUID index for {}: {} entries in {}ms",
            self.root.display(),
            index.len(),
            stats.time_ms
        );

        let index = Arc::new(index);
        // An empty scan still counts as indexed; no rescan until teardown.
        *slot = Some(Arc::clone(&index));
        index
    }
}
