//! Project display utilities for CLI output.
//!
//! Field labels are right-aligned so the values line up in a column.

use std::io::{self, Write};

use modshelf_core::Project;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

/// Short block used by the `list` command.
pub fn write_project_summary(out: &mut dyn Write, project: &Project) -> io::Result<()> {
    writeln!(out, "           Name: {}", project.name)?;
    writeln!(out, "             Id: {}", project.id)?;
    writeln!(out, " Primary Author: {}", project.primary_author_name)?;
    writeln!(out, "        Section: {}", project.section_name())?;
    writeln!(out)
}

/// Full block used by the `project` command.
pub fn write_project_details(out: &mut dyn Write, project: &Project) -> io::Result<()> {
    writeln!(out, "             Name: {}", project.name)?;
    writeln!(out, "               Id: {}", project.id)?;
    writeln!(out, "          Section: {}", project.section_name())?;
    writeln!(out, "   Primary Author: {}", project.primary_author_name)?;
    writeln!(out, " Primary Category: {}", project.primary_category_name)?;
    writeln!(out, "          Summary: {}", project.summary)?;
    writeln!(out, "        Downloads: {:.0}", project.download_count)?;
    writeln!(out, "          Website: {}", project.website_url)?;
    writeln!(
        out,
        "            Files: {}",
        project.game_version_latest_files.len()
    )
}

/// Every latest-file stub followed by every latest file of `project`.
pub fn write_file_listing(out: &mut dyn Write, project: &Project) -> io::Result<()> {
    for stub in &project.game_version_latest_files {
        writeln!(out, "     Filename: {}", stub.project_file_name)?;
        writeln!(out, "      File ID: {}", stub.project_file_id)?;
        writeln!(out, " Game Version: {}", stub.game_version)?;
        writeln!(out)?;
    }

    for file in &project.latest_files {
        writeln!(out, "     Filename: {}", file.file_name)?;
        writeln!(out, "      File ID: {}", file.id)?;
        writeln!(out, " Game Version: [{}]", file.game_version.join(", "))?;
        if let Some(date) = file.file_date {
            writeln!(out, "         Date: {}", date.format(DATE_FORMAT))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use modshelf_core::{FileStub, ProjectFile, Section};

    fn sample() -> Project {
        Project {
            id: 42,
            name: "Iron Chests".to_string(),
            primary_author_name: "someone".to_string(),
            primary_category_name: "Storage".to_string(),
            category_section: Section {
                name: "Mods".to_string(),
                package_type: "Mod".to_string(),
            },
            download_count: 1234.0,
            game_version_latest_files: vec![FileStub {
                game_version: "1.12.2".to_string(),
                project_file_id: 7,
                project_file_name: "ironchest-1.12.2.jar".to_string(),
            }],
            latest_files: vec![ProjectFile {
                id: 8,
                file_name: "ironchest-1.10.jar".to_string(),
                file_date: Utc.with_ymd_and_hms(2017, 3, 4, 5, 6, 0).single(),
                game_version: vec!["1.10".to_string(), "1.10.2".to_string()],
                download_url: None,
            }],
            ..Default::default()
        }
    }

    fn render(write: fn(&mut dyn Write, &Project) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        write(&mut buf, &sample()).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_summary_aligns_labels() {
        let text = render(write_project_summary);
        assert!(text.starts_with("           Name: Iron Chests\n"));
        assert!(text.contains("        Section: Mods\n"));
    }

    #[test]
    fn test_details_prints_whole_download_count() {
        let text = render(write_project_details);
        assert!(text.contains("        Downloads: 1234\n"));
        assert!(text.ends_with("            Files: 1\n"));
    }

    #[test]
    fn test_file_listing_includes_stubs_and_files() {
        let text = render(write_file_listing);
        assert!(text.contains("     Filename: ironchest-1.12.2.jar\n"));
        assert!(text.contains(" Game Version: [1.10, 1.10.2]\n"));
        assert!(text.contains("         Date: 2017-03-04 05:06 UTC\n"));
    }
}
