//! Markdown reference pages rendered from the command definitions.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::CommandFactory;

use crate::cli::Cli;

/// One rendered documentation page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub file_name: String,
    pub contents: String,
}

/// ## Summary
/// Writes one page per command into `dir`, creating it if needed.
///
/// ## Errors
/// Returns an error if the directory or a page cannot be written.
pub fn run(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create directory '{}'", dir.display()))?;

    for page in render_pages() {
        let path = dir.join(&page.file_name);
        fs::write(&path, &page.contents)
            .with_context(|| format!("failed to write file '{}'", path.display()))?;
        tracing::debug!(path = %path.display(), "Wrote documentation page");
    }

    println!("Documentation generated in {}", dir.display());
    Ok(())
}

/// Renders the root page followed by one page per subcommand.
#[must_use]
pub fn render_pages() -> Vec<Page> {
    let mut root = Cli::command();
    root.build();

    let root_name = root.get_name().to_string();
    let root_about = about(&root);

    let mut subcommands: Vec<(String, String)> = Vec::new();
    let mut pages = Vec::new();
    for sub in root
        .get_subcommands_mut()
        .filter(|sub| sub.get_name() != "help")
    {
        let name = sub.get_name().to_string();
        let sub_about = about(sub);
        let title = format!("{root_name} {name}");
        let see_also = [(root_name.clone(), root_about.clone())];
        pages.push(Page {
            file_name: format!("{root_name}_{name}.md"),
            contents: render_page(&title, sub, &see_also),
        });
        subcommands.push((title, sub_about));
    }

    pages.insert(
        0,
        Page {
            file_name: format!("{root_name}.md"),
            contents: render_page(&root_name, &mut root, &subcommands),
        },
    );
    pages
}

fn about(cmd: &clap::Command) -> String {
    cmd.get_about().map(ToString::to_string).unwrap_or_default()
}

fn link_target(title: &str) -> String {
    format!("{}.md", title.replace(' ', "_"))
}

fn render_page(title: &str, cmd: &mut clap::Command, see_also: &[(String, String)]) -> String {
    let help = cmd.render_long_help().to_string();

    let mut page = format!(
        "## {title}\n\n{}\n\n### Synopsis\n\n```\n{}\n```\n",
        about(cmd),
        help.trim_end()
    );

    if !see_also.is_empty() {
        page.push_str("\n### SEE ALSO\n\n");
        for (name, description) in see_also {
            page.push_str(&format!("* [{name}]({}) - {description}\n", link_target(name)));
        }
    }
    page
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_page_per_command() {
        let names: Vec<String> = render_pages().into_iter().map(|page| page.file_name).collect();
        assert_eq!(
            names,
            ["icaljson.md", "icaljson_generate.md", "icaljson_version.md", "icaljson_docs.md"]
        );
    }

    #[test]
    fn root_page_links_subcommands() {
        let pages = render_pages();
        let root = &pages[0].contents;
        assert!(root.starts_with("## icaljson\n"));
        assert!(root.contains("* [icaljson generate](icaljson_generate.md) - Generate JSON from an ICS file"));
    }

    #[test]
    fn subcommand_page_shows_options() {
        let pages = render_pages();
        let generate = pages
            .iter()
            .find(|page| page.file_name == "icaljson_generate.md")
            .unwrap();
        assert!(generate.contents.contains("--output"));
        assert!(generate.contents.contains("* [icaljson](icaljson.md) - iCalendar tools"));
    }

    #[test_log::test]
    fn run_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("docs/cmd");

        run(&target).unwrap();

        assert!(target.join("icaljson.md").is_file());
        assert!(target.join("icaljson_version.md").is_file());
    }
}
