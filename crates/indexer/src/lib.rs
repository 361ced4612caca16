//! # GUID Peek Indexer
//!
//! Metadata indexing for Unity GUID navigation.
//!
//! ## Pipeline
//!
//! ```text
//! Project root
//!     │
//!     ├──> Meta Scanner (async worklist walk)
//!     │      └─> .meta sidecars
//!     │
//!     ├──> YAML parse (guid / folderAsset fields)
//!     │      └─> guid → asset-path bindings
//!     │
//!     └──> Guid Index (in-memory, last writer wins)
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use guid_peek_indexer::MetaScanner;
//!
//! #[tokio::main]
//! async fn main() {
//!     let scanner = MetaScanner::new("/path/to/project");
//!     let (index, stats) = scanner.scan().await;
//!
//!     println!("Indexed {} assets in {}ms", index.len(), stats.time_ms);
//! }
//! ```

mod error;
mod guid;
mod index;
mod meta;
mod scanner;
mod stats;

pub use error::{IndexerError, Result};
pub use guid::{is_guid, Guid, GUID_LEN};
pub use index::{AssetRecord, GuidIndex};
pub use meta::{parse_meta, MetaDocument, META_EXTENSION};
pub use scanner::{MetaScanner, ScanOutcome, SkipReason};
pub use stats::ScanStats;
