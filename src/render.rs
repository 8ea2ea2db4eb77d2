// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! HTML page rendering for package and index pages.
//!
//! Documents are assembled in memory and are byte-for-byte deterministic for
//! identical input. Every interpolated value is HTML-escaped.

use std::{borrow::Cow, fmt::Write as _};

use crate::{
    config::Repository,
    error::Error,
    packages::join_package_path,
    resolver::{home_url, resolve_repository}
};

const DOCUMENT_HEAD: &str = "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n";
const DOCUMENT_TAIL: &str = "</div>\n</body>\n</html>";

const PACKAGE_STYLE: &str = "<style>
* { font-family: sans-serif; }
body { margin-top: 0; }
.content { display: inline-block; }
code { display: block; font-family: monospace; font-size: 1em; background-color: #d5d5d5; padding: 1em; margin-bottom: 16px; }
ul { margin-top: 16px; margin-bottom: 16px; }
</style>
";

const INDEX_STYLE: &str = "<style>
* { font-family: sans-serif; }
body { margin-top: 0; }
.content { display: inline-block; }
ul { margin-top: 16px; margin-bottom: 16px; }
</style>
";

const TOOLS_HEADING: &str = "Tools";
const LIBRARIES_HEADING: &str = "Libraries";

/// Renders the page served for `package`.
///
/// The `go-import` and `go-source` tags always describe the repository
/// prefix, while title, heading, snippets and home link use the full package
/// path. The sub-package list appears only on the prefix page. The
/// repository is resolved before rendering, which is a no-op for repositories
/// that are already resolved.
///
/// # Errors
///
/// Returns [`Error::Render`](Error::Render) when the document cannot be
/// formatted.
///
/// # Examples
///
/// ```
/// use vangen::{Repository, render_package};
///
/// let repository = Repository {
///     prefix: "optional".to_owned(),
///     url: "https://github.com/leighmcculloch/go-optional".to_owned(),
///     ..Repository::default()
/// };
/// let page = render_package("example.com", "", "optional", &repository)?;
/// assert!(page.contains(
///     r#"<meta name="go-import" content="example.com/optional git https://github.com/leighmcculloch/go-optional">"#
/// ));
/// # Ok::<(), vangen::Error>(())
/// ```
pub fn render_package(
    domain: &str,
    docs_domain: &str,
    package: &str,
    repository: &Repository
) -> Result<String, Error> {
    let repository = resolve_repository(repository);
    let home = home_url(&repository, domain, docs_domain, package);
    let is_prefix_page = package == repository.prefix;

    let domain = escape_html(domain);
    let package = escape_html(package);
    let prefix = escape_html(&repository.prefix);
    let vcs = escape_html(&repository.vcs);
    let url = escape_html(&repository.url);
    let home = escape_html(&home);
    let source_home = escape_html(&repository.source_urls.home);
    let source_dir = escape_html(&repository.source_urls.dir);
    let source_file = escape_html(&repository.source_urls.file);

    let mut page = String::with_capacity(2048);
    page.push_str(DOCUMENT_HEAD);
    writeln!(page, "<title>{domain}/{package}</title>")?;
    writeln!(
        page,
        "<meta name=\"go-import\" content=\"{domain}/{prefix} {vcs} {url}\">"
    )?;
    writeln!(
        page,
        "<meta name=\"go-source\" content=\"{domain}/{prefix} {source_home} {source_dir} {source_file}\">"
    )?;
    page.push_str(PACKAGE_STYLE);
    page.push_str("</head>\n<body>\n<div class=\"content\">\n");
    writeln!(page, "<h2>{domain}/{package}</h2>")?;
    writeln!(page, "<code>go get {domain}/{package}</code>")?;
    writeln!(page, "<code>import \"{domain}/{package}\"</code>")?;
    writeln!(page, "Home: <a href=\"{home}\">{home}</a><br/>")?;
    writeln!(page, "Source: <a href=\"{url}\">{url}</a><br/>")?;
    if is_prefix_page {
        write_sub_packages(&mut page, &domain, &repository)?;
    }
    page.push_str(DOCUMENT_TAIL);

    Ok(page)
}

/// Renders the index page listing every visible repository.
///
/// Repositories marked `main` are listed under "Tools", all others under
/// "Libraries", each group keeping the input order and being omitted when
/// empty. Hidden repositories and hidden sub-entries are left out.
///
/// # Errors
///
/// Returns [`Error::Render`](Error::Render) when the document cannot be
/// formatted.
pub fn render_index(domain: &str, repositories: &[Repository]) -> Result<String, Error> {
    let (tools, libraries): (Vec<&Repository>, Vec<&Repository>) = repositories
        .iter()
        .filter(|repository| !repository.hidden)
        .partition(|repository| repository.main);

    let domain = escape_html(domain);

    let mut page = String::with_capacity(1024);
    page.push_str(DOCUMENT_HEAD);
    writeln!(page, "<title>{domain}</title>")?;
    page.push_str(INDEX_STYLE);
    page.push_str("</head>\n<body>\n<div class=\"content\">\n");
    writeln!(page, "<h2>{domain}</h2>")?;
    write_index_group(&mut page, &domain, TOOLS_HEADING, &tools)?;
    write_index_group(&mut page, &domain, LIBRARIES_HEADING, &libraries)?;
    page.push_str(DOCUMENT_TAIL);

    Ok(page)
}

fn write_index_group(
    page: &mut String,
    domain: &str,
    heading: &str,
    repositories: &[&Repository]
) -> Result<(), Error> {
    if repositories.is_empty() {
        return Ok(());
    }

    writeln!(page, "<h3>{heading}</h3>")?;
    page.push_str("<ul>\n");
    for repository in repositories {
        let prefix = escape_html(&repository.prefix);
        write!(page, "<li><a href=\"/{prefix}\">{domain}/{prefix}</a>")?;

        let mut visible = repository.visible_subs().peekable();
        if visible.peek().is_some() {
            page.push_str("<ul>");
            for sub in visible {
                let path = join_package_path(&repository.prefix, &sub.name);
                write_package_link(page, domain, &path)?;
            }
            page.push_str("</ul>");
        }
        page.push_str("</li>\n");
    }
    page.push_str("</ul>\n");

    Ok(())
}

fn write_sub_packages(page: &mut String, domain: &str, repository: &Repository) -> Result<(), Error> {
    let mut visible = repository.visible_subs().peekable();
    if visible.peek().is_none() {
        return Ok(());
    }

    page.push_str("Sub-packages:<ul>");
    for sub in visible {
        let path = join_package_path(&repository.prefix, &sub.name);
        write_package_link(page, domain, &path)?;
    }
    page.push_str("</ul>");

    Ok(())
}

fn write_package_link(page: &mut String, domain: &str, path: &str) -> Result<(), Error> {
    let path = escape_html(path);
    write!(page, "<li><a href=\"/{path}\">{domain}/{path}</a></li>")?;
    Ok(())
}

fn escape_html(value: &str) -> Cow<'_, str> {
    if value
        .chars()
        .any(|character| matches!(character, '&' | '<' | '>' | '\"' | '\''))
    {
        let mut escaped = String::with_capacity(value.len() + 8);
        for character in value.chars() {
            match character {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '\"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&#39;"),
                other => escaped.push(other)
            }
        }
        Cow::Owned(escaped)
    } else {
        Cow::Borrowed(value)
    }
}
