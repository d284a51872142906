//! Common test utilities.
//!
//! An in-memory catalog with call counters, a shared output buffer and a
//! helper that drives a full shell over a fixed input script.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};
use std::io::{self, Write};
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;

use modshelf_cli::{Session, Shell};
use modshelf_core::input::{PromptLog, ScriptedLines};
use modshelf_core::{
    CatalogError, CatalogPort, FileStub, Manifest, ManifestFile, Project, Section, TokenQueue,
};

// ─────────────────────────────────────────────────────────────────────────────
// Output
// ─────────────────────────────────────────────────────────────────────────────

/// Writer whose contents stay readable after it is boxed into a session.
#[derive(Debug, Clone, Default)]
pub struct SharedOutput(Rc<RefCell<Vec<u8>>>);

impl SharedOutput {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }

    /// Working-set sizes printed by the top-level loop, in order.
    pub fn project_counts(&self) -> Vec<usize> {
        self.text()
            .lines()
            .filter_map(|line| line.strip_prefix("Projects: "))
            .filter_map(|count| count.parse().ok())
            .collect()
    }
}

impl Write for SharedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Fixtures
// ─────────────────────────────────────────────────────────────────────────────

pub fn project(id: i64, name: &str, section: &str, author: &str) -> Project {
    Project {
        id,
        name: name.to_string(),
        primary_author_name: author.to_string(),
        primary_category_name: format!("{section} stuff"),
        category_section: Section {
            name: section.to_string(),
            package_type: "Mod".to_string(),
        },
        default_file_id: id * 10,
        game_version_latest_files: vec![FileStub {
            game_version: "1.12.2".to_string(),
            project_file_id: id * 10,
            project_file_name: format!("{}.jar", name.to_lowercase()),
        }],
        ..Default::default()
    }
}

pub fn pack(id: i64, name: &str) -> Project {
    let mut pack = project(id, name, "Modpacks", "packer");
    pack.category_section.package_type = "ModPack".to_string();
    pack.game_version_latest_files[0].project_file_name = format!("{}.zip", name.to_lowercase());
    pack
}

pub fn manifest(name: &str, entries: &[(i64, i64)]) -> Manifest {
    Manifest {
        name: name.to_string(),
        files: entries
            .iter()
            .map(|&(project_id, file_id)| ManifestFile {
                project_id,
                file_id,
                required: true,
            })
            .collect(),
        ..Default::default()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Fake catalog
// ─────────────────────────────────────────────────────────────────────────────

/// In-memory [`CatalogPort`] recording manifest and file requests.
#[derive(Debug, Default)]
pub struct FakeCatalog {
    projects: Vec<Arc<Project>>,
    manifests: HashMap<i64, Manifest>,
    manifest_calls: Rc<Cell<u32>>,
    manifest_failures: Cell<u32>,
    fetched: Rc<RefCell<Vec<(i64, i64)>>>,
}

impl FakeCatalog {
    pub fn new(projects: Vec<Project>) -> Self {
        Self {
            projects: projects.into_iter().map(Arc::new).collect(),
            ..Default::default()
        }
    }

    pub fn with_manifest(mut self, file_id: i64, manifest: Manifest) -> Self {
        self.manifests.insert(file_id, manifest);
        self
    }

    /// Fail the first `count` manifest requests.
    pub fn failing_manifest(self, count: u32) -> Self {
        self.manifest_failures.set(count);
        self
    }

    pub fn manifest_calls(&self) -> Rc<Cell<u32>> {
        Rc::clone(&self.manifest_calls)
    }

    pub fn fetched(&self) -> Rc<RefCell<Vec<(i64, i64)>>> {
        Rc::clone(&self.fetched)
    }
}

impl CatalogPort for FakeCatalog {
    fn projects(&self) -> &[Arc<Project>] {
        &self.projects
    }

    fn project_by_id(&self, id: i64) -> Option<Arc<Project>> {
        self.projects.iter().find(|p| p.id == id).cloned()
    }

    fn parent_of_file(&self, file_id: i64) -> Option<Arc<Project>> {
        self.projects
            .iter()
            .find(|p| p.file_ids().any(|id| id == file_id))
            .cloned()
    }

    fn manifest(&self, file_id: i64) -> Result<Manifest, CatalogError> {
        self.manifest_calls.set(self.manifest_calls.get() + 1);
        if self.manifest_failures.get() > 0 {
            self.manifest_failures.set(self.manifest_failures.get() - 1);
            return Err(CatalogError::InvalidManifest {
                file_id,
                reason: "archive unavailable".to_string(),
            });
        }
        self.manifests
            .get(&file_id)
            .cloned()
            .ok_or(CatalogError::FileNotFound(file_id))
    }

    fn cached_file(&self, project_id: i64, file_id: i64) -> Result<PathBuf, CatalogError> {
        self.fetched.borrow_mut().push((project_id, file_id));
        if self.project_by_id(project_id).is_none() {
            return Err(CatalogError::ProjectNotFound(project_id));
        }
        Ok(PathBuf::from(format!("/cache/{project_id}/{file_id}")))
    }

    fn sections(&self) -> Vec<String> {
        collect_sorted(self.projects.iter().map(|p| p.section_name().to_string()))
    }

    fn categories(&self) -> Vec<String> {
        collect_sorted(self.projects.iter().map(|p| p.primary_category_name.clone()))
    }

    fn versions(&self) -> Vec<String> {
        collect_sorted(
            self.projects
                .iter()
                .flat_map(|p| p.versions().map(str::to_string).collect::<Vec<_>>()),
        )
    }
}

fn collect_sorted(items: impl Iterator<Item = String>) -> Vec<String> {
    items.collect::<BTreeSet<_>>().into_iter().collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Driving a shell
// ─────────────────────────────────────────────────────────────────────────────

/// Everything observable after a scripted run.
pub struct ScriptRun {
    pub output: SharedOutput,
    pub prompts: PromptLog,
    pub shell: Shell,
}

/// Build a session over `catalog` reading `lines`.
pub fn session<C>(catalog: C, lines: &[&str]) -> (Session, SharedOutput, PromptLog)
where
    C: CatalogPort + 'static,
{
    let source = ScriptedLines::new(lines.iter().copied());
    let prompts = source.prompt_log();
    let output = SharedOutput::default();
    let session = Session::new(
        Box::new(catalog),
        TokenQueue::new(Box::new(source)),
        Box::new(output.clone()),
    );
    (session, output, prompts)
}

/// Run a standard shell over `catalog` until the script is exhausted.
pub fn run_script<C>(catalog: C, lines: &[&str]) -> ScriptRun
where
    C: CatalogPort + 'static,
{
    let (session, output, prompts) = session(catalog, lines);
    let mut shell = Shell::new(session);
    shell.run().unwrap();
    ScriptRun {
        output,
        prompts,
        shell,
    }
}

/// Three plain projects in sections Alpha, Alpha, Beta.
pub fn three_projects() -> Vec<Project> {
    vec![
        project(1, "Iron Chests", "Alpha", "Foo Bar Studios"),
        project(2, "Gold Pipes", "Alpha", "someone"),
        project(3, "Copper Wire", "Beta", "someone else"),
    ]
}
