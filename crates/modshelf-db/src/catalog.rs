//! JSON-backed implementation of the `CatalogPort` trait.
//!
//! Building a catalog happens in three steps mirroring the startup output
//! of the shell: open the primary database, merge the secondaries on top,
//! then process the merged list into lookup indexes.

use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info, warn};

use modshelf_core::{CatalogError, CatalogPort, Manifest, Project};

use crate::archive::read_manifest;
use crate::cache::FileCache;
use crate::database::DatabaseFile;

/// Accumulates database files before indexing.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    projects: Vec<Project>,
    positions: HashMap<i64, usize>,
}

impl CatalogBuilder {
    /// Start from the primary database.
    pub fn from_primary(primary: DatabaseFile) -> Self {
        let mut builder = Self::default();
        builder.merge_secondary(primary);
        builder
    }

    /// Merge a newer database on top of what has been loaded.
    ///
    /// A project whose id is already present replaces the earlier record in
    /// place; new ids are appended in file order.
    pub fn merge_secondary(&mut self, secondary: DatabaseFile) -> &mut Self {
        let (mut replaced, mut added) = (0_usize, 0_usize);
        for project in secondary.data {
            if let Some(&index) = self.positions.get(&project.id) {
                self.projects[index] = project;
                replaced += 1;
            } else {
                self.positions.insert(project.id, self.projects.len());
                self.projects.push(project);
                added += 1;
            }
        }
        debug!(replaced, added, "Merged database");
        self
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Build the lookup indexes and attach the file cache.
    pub fn build(self, cache: FileCache) -> JsonCatalog {
        let projects: Vec<Arc<Project>> = self.projects.into_iter().map(Arc::new).collect();

        let mut by_id = HashMap::with_capacity(projects.len());
        let mut file_parents = HashMap::new();
        let mut sections = BTreeSet::new();
        let mut categories = BTreeSet::new();
        let mut versions = BTreeSet::new();

        for (index, project) in projects.iter().enumerate() {
            by_id.insert(project.id, index);
            for file_id in project.file_ids() {
                if let Some(previous) = file_parents.insert(file_id, index) {
                    if previous != index {
                        warn!(
                            file_id,
                            first = projects[previous].id,
                            second = project.id,
                            "File listed under two projects, keeping the later one"
                        );
                    }
                }
            }
            if !project.section_name().is_empty() {
                sections.insert(project.section_name().to_string());
            }
            if !project.primary_category_name.is_empty() {
                categories.insert(project.primary_category_name.clone());
            }
            versions.extend(
                project
                    .versions()
                    .filter(|version| !version.is_empty())
                    .map(str::to_string),
            );
        }

        info!(
            projects = projects.len(),
            files = file_parents.len(),
            sections = sections.len(),
            "Processed catalog"
        );

        JsonCatalog {
            projects,
            by_id,
            file_parents,
            sections: sections.into_iter().collect(),
            categories: categories.into_iter().collect(),
            versions: versions.into_iter().collect(),
            cache,
        }
    }
}

/// Catalog loaded from JSON database files.
#[derive(Debug)]
pub struct JsonCatalog {
    projects: Vec<Arc<Project>>,
    by_id: HashMap<i64, usize>,
    file_parents: HashMap<i64, usize>,
    sections: Vec<String>,
    categories: Vec<String>,
    versions: Vec<String>,
    cache: FileCache,
}

impl CatalogPort for JsonCatalog {
    fn projects(&self) -> &[Arc<Project>] {
        &self.projects
    }

    fn project_by_id(&self, id: i64) -> Option<Arc<Project>> {
        self.by_id.get(&id).map(|&index| Arc::clone(&self.projects[index]))
    }

    fn parent_of_file(&self, file_id: i64) -> Option<Arc<Project>> {
        self.file_parents
            .get(&file_id)
            .map(|&index| Arc::clone(&self.projects[index]))
    }

    fn manifest(&self, file_id: i64) -> Result<Manifest, CatalogError> {
        let parent = self
            .parent_of_file(file_id)
            .ok_or(CatalogError::FileNotFound(file_id))?;
        let archive = self.cached_file(parent.id, file_id)?;
        read_manifest(&archive, file_id)
    }

    fn cached_file(&self, project_id: i64, file_id: i64) -> Result<PathBuf, CatalogError> {
        let project = self
            .project_by_id(project_id)
            .ok_or(CatalogError::ProjectNotFound(project_id))?;
        self.cache.get_or_fetch(&project, file_id)
    }

    fn sections(&self) -> Vec<String> {
        self.sections.clone()
    }

    fn categories(&self) -> Vec<String> {
        self.categories.clone()
    }

    fn versions(&self) -> Vec<String> {
        self.versions.clone()
    }
}
