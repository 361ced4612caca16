//! # GUID Peek Resolver
//!
//! Session-scoped lookup facade over the GUID index: builds the index
//! lazily on first use, answers definition and hover queries, and tears
//! the index down at end of session.
//!
//! ## Example
//!
//! ```no_run
//! use guid_peek_resolver::GuidResolver;
//!
//! #[tokio::main]
//! async fn main() {
//!     let resolver = GuidResolver::new("/path/to/project");
//!
//!     if let Some(location) = resolver.definition("0ef2e22c39155c943b015dcf2f79bb99").await {
//!         println!("jump to {}", location.path.display());
//!     }
//!
//!     resolver.teardown().await;
//! }
//! ```

mod project;
mod resolver;

pub use project::is_unity_project;
pub use resolver::{AssetLocation, GuidResolver, MISSING_TEXT};
