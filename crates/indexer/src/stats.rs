use serde::{Deserialize, Serialize};

/// Statistics about one metadata scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanStats {
    /// Directories visited
    pub directories: usize,

    /// Sidecar files considered for parsing
    pub meta_files: usize,

    /// Entries written into the index
    pub indexed: usize,

    /// Sidecars that contributed nothing (unreadable, malformed,
    /// folder assets, missing guid)
    pub skipped: usize,

    /// Time taken in milliseconds
    pub time_ms: u64,
}

impl ScanStats {
    pub fn new() -> Self {
        Self {
            directories: 0,
            meta_files: 0,
            indexed: 0,
            skipped: 0,
            time_ms: 0,
        }
    }

    pub fn add_directory(&mut self) {
        self.directories += 1;
    }

    pub fn add_meta_file(&mut self) {
        self.meta_files += 1;
    }

    pub fn add_indexed(&mut self) {
        self.indexed += 1;
    }

    pub fn add_skipped(&mut self) {
        self.skipped += 1;
    }
}

impl Default for ScanStats {
    fn default() -> Self {
        Self::new()
    }
}
