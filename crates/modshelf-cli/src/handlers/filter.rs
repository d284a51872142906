//! Filter command handler.
//!
//! Reads a filter type and, depending on the type, a value. Text filters
//! take the rest of the line so multi-word values work; version and
//! section filters take a single token. Pressing return at a prompt
//! cancels without changing the chain.

use std::io::Write;

use tracing::debug;

use modshelf_core::{Filter, FilterError, TerminalError};

use crate::presentation::{write_active_filters, write_indented_list};
use crate::repl::Session;

const TYPE_MENU: &str = "\nAvailable filter types:\n  Author\n  Category\n  Name\n  Section\n  Version\n";
const TYPE_PROMPT: &str = "Enter type (\"clear\" to remove all, or return to cancel): ";
const SECTION_PROMPT: &str = "Enter section (or return to cancel): ";

/// Filter types accepted at the type prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Clear,
    Version,
    Section,
    Name,
    Author,
    Category,
}

impl FilterKind {
    /// Parse a type answer.
    ///
    /// Answers of one character or less are rejected. `clear` and `name`
    /// must match exactly; the other types accept any answer starting with
    /// their first three or four letters.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.to_lowercase();
        if input.chars().count() <= 1 {
            return None;
        }
        match input.as_str() {
            "clear" => Some(Self::Clear),
            "name" => Some(Self::Name),
            s if s.starts_with("ver") => Some(Self::Version),
            s if s.starts_with("sec") => Some(Self::Section),
            s if s.starts_with("auth") => Some(Self::Author),
            s if s.starts_with("cat") => Some(Self::Category),
            _ => None,
        }
    }
}

/// Execute the filter command.
pub fn execute(session: &mut Session) -> Result<(), TerminalError> {
    // The menu belongs to the prompt: skip it when the answer is already queued.
    if session.input.is_empty() {
        write_active_filters(session.out.as_mut(), &session.filters)?;
        writeln!(session.out, "{TYPE_MENU}")?;
    }

    let answer = session.input.next_token_or_blank(TYPE_PROMPT)?;
    match FilterKind::parse(&answer) {
        Some(FilterKind::Clear) => session.clear_filters(),
        Some(FilterKind::Version) => {
            let version = session.input.next_token_or_blank("Enter version: ")?;
            if !version.is_empty() {
                add_filter(session, Filter::version(&version))?;
            }
        }
        Some(FilterKind::Section) => choose_section(session)?,
        Some(FilterKind::Name) => read_text_filter(session, "Name: ", Filter::name)?,
        Some(FilterKind::Author) => read_text_filter(session, "Author: ", Filter::author)?,
        Some(FilterKind::Category) => read_text_filter(session, "Category: ", Filter::category)?,
        None => debug!(%answer, "Filter cancelled"),
    }

    write_active_filters(session.out.as_mut(), &session.filters)?;
    Ok(())
}

fn choose_section(session: &mut Session) -> Result<(), TerminalError> {
    let sections = session.catalog.sections();
    if session.input.is_empty() {
        writeln!(session.out, "\nSection:")?;
        write_indented_list(session.out.as_mut(), &sections)?;
        writeln!(session.out)?;
    }

    let prefix = session.input.next_token_or_blank(SECTION_PROMPT)?.to_lowercase();
    if prefix.chars().count() <= 1 {
        return Ok(());
    }

    match sections
        .iter()
        .find(|section| section.to_lowercase().starts_with(&prefix))
    {
        Some(section) => add_filter(session, Filter::section(section))?,
        None => debug!(%prefix, "No section matches"),
    }
    Ok(())
}

fn read_text_filter(
    session: &mut Session,
    prompt: &str,
    build: fn(&str) -> Result<Filter, FilterError>,
) -> Result<(), TerminalError> {
    let value = session.input.next_full_remainder(prompt)?;
    if value.trim().chars().count() > 1 {
        add_filter(session, build(&value))?;
    }
    Ok(())
}

fn add_filter(
    session: &mut Session,
    filter: Result<Filter, FilterError>,
) -> Result<(), TerminalError> {
    match filter {
        Ok(filter) => session.add_filter(filter),
        Err(err) => writeln!(session.out, "Error: {err}")?,
    }
    Ok(())
}
