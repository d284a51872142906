//! Composable project filters.
//!
//! A [`FilterChain`] narrows the master project list to the working list.
//! Every filter in the chain must match (logical AND); insertion order is
//! application order, and applying the chain never mutates it or its input.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::domain::Project;

/// Errors raised when constructing a filter.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    /// Match values must contain at least one non-whitespace character.
    #[error("{kind} filter needs a non-empty value")]
    EmptyValue { kind: &'static str },
}

/// A single predicate over a project.
///
/// Each variant keeps the trimmed value as entered. Text variants compare
/// case-insensitively; `Version` compares exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    Author(String),
    Category(String),
    Name(String),
    Section(String),
    Version(String),
}

impl Filter {
    /// Case-insensitive substring match on the primary author.
    pub fn author(value: &str) -> Result<Self, FilterError> {
        non_blank("Author", value).map(|v| Self::Author(v.to_string()))
    }

    /// Case-insensitive substring match on the primary category.
    pub fn category(value: &str) -> Result<Self, FilterError> {
        non_blank("Category", value).map(|v| Self::Category(v.to_string()))
    }

    /// Case-insensitive substring match on the project name.
    pub fn name(value: &str) -> Result<Self, FilterError> {
        non_blank("Name", value).map(|v| Self::Name(v.to_string()))
    }

    /// Case-insensitive exact match on the section name.
    pub fn section(value: &str) -> Result<Self, FilterError> {
        non_blank("Section", value).map(|v| Self::Section(v.to_string()))
    }

    /// Exact match against any game version associated with the project.
    pub fn version(value: &str) -> Result<Self, FilterError> {
        non_blank("Version", value).map(|v| Self::Version(v.to_string()))
    }

    /// Kind label used in displays and errors.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Author(_) => "Author",
            Self::Category(_) => "Category",
            Self::Name(_) => "Name",
            Self::Section(_) => "Section",
            Self::Version(_) => "Version",
        }
    }

    /// The value as entered, without surrounding whitespace.
    pub fn value(&self) -> &str {
        match self {
            Self::Author(v)
            | Self::Category(v)
            | Self::Name(v)
            | Self::Section(v)
            | Self::Version(v) => v,
        }
    }

    /// Whether the project satisfies this predicate.
    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Self::Author(v) => contains_ignore_case(&project.primary_author_name, v),
            Self::Category(v) => contains_ignore_case(&project.primary_category_name, v),
            Self::Name(v) => contains_ignore_case(&project.name, v),
            Self::Section(v) => project.section_name().to_lowercase() == v.to_lowercase(),
            Self::Version(v) => project.versions().any(|version| version == v),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind(), self.value())
    }
}

fn non_blank<'a>(kind: &'static str, value: &'a str) -> Result<&'a str, FilterError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(FilterError::EmptyValue { kind })
    } else {
        Ok(trimmed)
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Ordered set of filters applied as a conjunction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterChain {
    filters: Vec<Filter>,
}

impl FilterChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a filter. Duplicates are kept; they do not change the result.
    pub fn add(&mut self, filter: Filter) {
        self.filters.push(filter);
    }

    /// Remove every filter.
    pub fn clear(&mut self) {
        self.filters.clear();
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Filter> {
        self.filters.iter()
    }

    /// Whether every filter matches the project.
    pub fn matches(&self, project: &Project) -> bool {
        self.filters.iter().all(|filter| filter.matches(project))
    }

    /// Select the projects of `master` that pass every filter, in order.
    pub fn apply(&self, master: &[Arc<Project>]) -> Vec<Arc<Project>> {
        master
            .iter()
            .filter(|project| self.matches(project))
            .cloned()
            .collect()
    }
}

impl<'a> IntoIterator for &'a FilterChain {
    type Item = &'a Filter;
    type IntoIter = std::slice::Iter<'a, Filter>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FileStub, Section};

    fn project(id: i64, name: &str, author: &str, section: &str, version: &str) -> Arc<Project> {
        Arc::new(Project {
            id,
            name: name.to_string(),
            primary_author_name: author.to_string(),
            primary_category_name: "Technology".to_string(),
            category_section: Section {
                name: section.to_string(),
                package_type: String::new(),
            },
            game_version_latest_files: vec![FileStub {
                game_version: version.to_string(),
                project_file_id: id * 10,
                project_file_name: format!("{name}.jar"),
            }],
            ..Default::default()
        })
    }

    fn master() -> Vec<Arc<Project>> {
        vec![
            project(1, "Iron Chests", "progwml6", "Mods", "1.12.2"),
            project(2, "Iron Furnaces", "XenoMustache", "Mods", "1.16.5"),
            project(3, "Sky Factory", "Bacon_Donut", "Modpacks", "1.12.2"),
        ]
    }

    fn ids(projects: &[Arc<Project>]) -> Vec<i64> {
        projects.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_constructors_reject_blank_values() {
        assert_eq!(
            Filter::name("   "),
            Err(FilterError::EmptyValue { kind: "Name" })
        );
        assert!(Filter::version("").is_err());
        assert!(Filter::author("x").is_ok());
    }

    #[test]
    fn test_name_filter_is_case_insensitive_substring() {
        let mut chain = FilterChain::new();
        chain.add(Filter::name("IRON").unwrap());
        assert_eq!(ids(&chain.apply(&master())), vec![1, 2]);
    }

    #[test]
    fn test_section_filter_is_exact() {
        let mut chain = FilterChain::new();
        chain.add(Filter::section("mod").unwrap());
        assert!(chain.apply(&master()).is_empty());

        chain.clear();
        chain.add(Filter::section("MODS").unwrap());
        assert_eq!(ids(&chain.apply(&master())), vec![1, 2]);
    }

    #[test]
    fn test_version_filter_is_exact() {
        let mut chain = FilterChain::new();
        chain.add(Filter::version("1.12").unwrap());
        assert!(chain.apply(&master()).is_empty());

        chain.clear();
        chain.add(Filter::version("1.12.2").unwrap());
        assert_eq!(ids(&chain.apply(&master())), vec![1, 3]);
    }

    #[test]
    fn test_filters_combine_with_and() {
        let mut chain = FilterChain::new();
        chain.add(Filter::version("1.12.2").unwrap());
        chain.add(Filter::author("prog").unwrap());
        assert_eq!(ids(&chain.apply(&master())), vec![1]);
    }

    #[test]
    fn test_apply_is_pure() {
        let mut chain = FilterChain::new();
        chain.add(Filter::category("tech").unwrap());
        let all = master();
        let first = chain.apply(&all);
        let second = chain.apply(&all);
        assert_eq!(ids(&first), ids(&second));
        assert_eq!(all.len(), 3);
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn test_duplicate_filter_does_not_change_result() {
        let mut once = FilterChain::new();
        once.add(Filter::name("iron").unwrap());

        let mut twice = once.clone();
        twice.add(Filter::name("iron").unwrap());

        assert_eq!(twice.len(), 2);
        assert_eq!(ids(&once.apply(&master())), ids(&twice.apply(&master())));
    }

    #[test]
    fn test_empty_chain_keeps_everything() {
        let chain = FilterChain::new();
        assert_eq!(ids(&chain.apply(&master())), vec![1, 2, 3]);
    }

    #[test]
    fn test_display_shows_kind_and_value() {
        let filter = Filter::version("1.16.5").unwrap();
        assert_eq!(filter.to_string(), "Version: 1.16.5");
    }

    #[test]
    fn test_display_keeps_entered_case() {
        let author = Filter::author("  ProgWML ").unwrap();
        assert_eq!(author.to_string(), "Author: ProgWML");
        assert_eq!(author.value(), "ProgWML");

        let mut chain = FilterChain::new();
        chain.add(author);
        chain.add(Filter::section("mODs").unwrap());
        assert_eq!(ids(&chain.apply(&master())), vec![1]);
        assert_eq!(chain.iter().last().unwrap().to_string(), "Section: mODs");
    }
}
