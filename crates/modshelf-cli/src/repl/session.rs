//! Per-run shell state shared by every command handler.

use std::fmt;
use std::io::Write;
use std::sync::Arc;

use tracing::debug;

use modshelf_core::{CatalogPort, Filter, FilterChain, Project, TokenQueue};

/// Everything a command handler may read or change.
///
/// The working set is always recomputed from the catalog and the filter
/// chain as a whole; it is never edited in place.
pub struct Session {
    pub(crate) input: TokenQueue,
    pub(crate) catalog: Box<dyn CatalogPort>,
    pub(crate) filters: FilterChain,
    pub(crate) working: Vec<Arc<Project>>,
    pub(crate) out: Box<dyn Write>,
    pub(crate) running: bool,
}

impl Session {
    /// Start a session showing the full catalog.
    pub fn new(catalog: Box<dyn CatalogPort>, input: TokenQueue, out: Box<dyn Write>) -> Self {
        let working = catalog.projects().to_vec();
        Self {
            input,
            catalog,
            filters: FilterChain::new(),
            working,
            out,
            running: true,
        }
    }

    pub fn catalog(&self) -> &dyn CatalogPort {
        self.catalog.as_ref()
    }

    pub fn filters(&self) -> &FilterChain {
        &self.filters
    }

    /// The currently displayed projects.
    pub fn working_set(&self) -> &[Arc<Project>] {
        &self.working
    }

    pub fn input_mut(&mut self) -> &mut TokenQueue {
        &mut self.input
    }

    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Ask the top-level loop to stop after the current command.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Append a filter and recompute the working set.
    pub fn add_filter(&mut self, filter: Filter) {
        debug!(%filter, "Adding filter");
        self.filters.add(filter);
        self.refresh();
    }

    /// Drop every filter and recompute the working set.
    pub fn clear_filters(&mut self) {
        debug!(removed = self.filters.len(), "Clearing filters");
        self.filters.clear();
        self.refresh();
    }

    fn refresh(&mut self) {
        self.working = self.catalog.filter(&self.filters);
        debug!(size = self.working.len(), "Working set recomputed");
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("input", &self.input)
            .field("filters", &self.filters)
            .field("working", &self.working.len())
            .field("running", &self.running)
            .finish_non_exhaustive()
    }
}
