//! File fetcher port.
//!
//! Abstracts where catalog files come from when they are not yet in the
//! local cache. The cache itself decides when to call it.

use std::fmt;
use std::io::Write;

use crate::domain::Project;
use crate::ports::CatalogError;

/// Source of file contents for the cache.
pub trait FileFetcher: fmt::Debug {
    /// Stream the contents of `file_name` (file `file_id` of `project`) into
    /// `dest`, returning the number of bytes written.
    fn fetch(
        &self,
        project: &Project,
        file_id: i64,
        file_name: &str,
        dest: &mut dyn Write,
    ) -> Result<u64, CatalogError>;
}
