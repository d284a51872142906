//! Handlers for the catalog-wide listings: categories, versions and sections.

use std::io::Write;

use modshelf_core::TerminalError;

use crate::presentation::write_indented_list;
use crate::repl::Session;

pub fn categories(session: &mut Session) -> Result<(), TerminalError> {
    let items = session.catalog.categories();
    write_listing(session, &items)
}

pub fn versions(session: &mut Session) -> Result<(), TerminalError> {
    let items = session.catalog.versions();
    write_listing(session, &items)
}

pub fn sections(session: &mut Session) -> Result<(), TerminalError> {
    let items = session.catalog.sections();
    write_listing(session, &items)
}

fn write_listing(session: &mut Session, items: &[String]) -> Result<(), TerminalError> {
    writeln!(session.out)?;
    write_indented_list(session.out.as_mut(), items)?;
    Ok(())
}
