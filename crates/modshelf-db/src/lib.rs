//! JSON database and file cache implementation of the modshelf catalog.
//!
//! - `database` - Reading database files
//! - `catalog` - Merging, indexing and answering catalog queries
//! - `cache` - Fetch-or-reuse file cache
//! - `mirror` - Local-directory file fetcher
//! - `archive` - Manifest extraction from pack archives

pub mod archive;
pub mod cache;
pub mod catalog;
pub mod database;
pub mod error;
pub mod mirror;

// Re-export the store types for convenient access
pub use cache::FileCache;
pub use catalog::{CatalogBuilder, JsonCatalog};
pub use database::{DatabaseFile, Secondaries, open_secondaries};
pub use error::StoreError;
pub use mirror::MirrorFetcher;
