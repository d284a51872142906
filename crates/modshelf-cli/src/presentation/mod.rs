//! Shared CLI presentation utilities.
//!
//! Format-only helpers that write to the session's output sink. Nothing in
//! here queries the catalog or changes session state.

pub mod project_display;

use std::io::{self, Write};

use modshelf_core::FilterChain;

pub use project_display::{write_file_listing, write_project_details, write_project_summary};

/// Indent used for list entries.
pub const LIST_INDENT: &str = "  ";

/// Write each item on its own indented line.
pub fn write_indented_list<I, S>(out: &mut dyn Write, items: I) -> io::Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for item in items {
        writeln!(out, "{LIST_INDENT}{}", item.as_ref())?;
    }
    Ok(())
}

/// Write the `Active filters:` block, `  none` when the chain is empty.
pub fn write_active_filters(out: &mut dyn Write, filters: &FilterChain) -> io::Result<()> {
    writeln!(out, "\nActive filters:")?;
    if filters.is_empty() {
        return writeln!(out, "{LIST_INDENT}none");
    }
    write_indented_list(out, filters.iter().map(ToString::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;
    use modshelf_core::Filter;

    fn render(filters: &FilterChain) -> String {
        let mut buf = Vec::new();
        write_active_filters(&mut buf, filters).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_active_filters_empty_chain() {
        assert_eq!(render(&FilterChain::new()), "\nActive filters:\n  none\n");
    }

    #[test]
    fn test_active_filters_lists_in_order() {
        let mut chain = FilterChain::new();
        chain.add(Filter::version("1.12.2").unwrap());
        chain.add(Filter::section("Mods").unwrap());
        let text = render(&chain);
        let version = text.find("1.12.2").unwrap();
        let section = text.find("Mods").unwrap();
        assert!(version < section);
        assert!(!text.contains("none"));
    }
}
