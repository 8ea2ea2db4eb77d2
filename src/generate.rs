// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Writing of rendered pages to an output directory.
//!
//! Pages are written one at a time in prefix order, then sub-entry order,
//! with the index page last. A failure aborts the run immediately and leaves
//! the files written so far in place.

use std::{
    fs::{self, File, OpenOptions},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf}
};

use tracing::{debug, info};

use crate::{
    config::Config,
    error::{self, Error},
    render::{render_index, render_package},
    resolver::resolve_config
};

/// File name of every generated page.
const PAGE_FILE_NAME: &str = "index.html";

/// Output settings for [`generate_site`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Directory receiving the page tree.
    pub output_dir: PathBuf,
    /// Replace files that already exist instead of failing.
    pub overwrite:  bool
}

impl GenerateOptions {
    /// Creates options that write into `output_dir`, replacing existing files.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            overwrite:  true
        }
    }

    /// Sets whether existing files may be replaced.
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }
}

/// Files produced by a generation run, in write order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Package pages.
    pub pages: Vec<PathBuf>,
    /// Index page, when the configuration requested one.
    pub index: Option<PathBuf>
}

/// Renders every package page, and the index when enabled, into
/// `options.output_dir`.
///
/// The configuration is validated before anything is written.
///
/// # Errors
///
/// Returns [`Error::Validation`](Error::Validation) for configurations that
/// cannot be rendered, [`Error::OverwriteConflict`](Error::OverwriteConflict)
/// when a target exists and overwriting is disabled,
/// [`Error::Write`](Error::Write) when directories or files cannot be written
/// and [`Error::Render`](Error::Render) when a page cannot be formatted.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
///
/// use vangen::{GenerateOptions, generate_site, load_config};
///
/// # fn main() -> Result<(), vangen::Error> {
/// let config = load_config(Path::new("vangen.json"))?;
/// let report = generate_site(&config, &GenerateOptions::new("vangen"))?;
/// println!("wrote {} pages", report.pages.len());
/// # Ok(())
/// # }
/// ```
pub fn generate_site(config: &Config, options: &GenerateOptions) -> Result<GenerationReport, Error> {
    config.validate_for_rendering()?;
    let resolved = resolve_config(config);

    info!(
        "Generating pages for {} repositories into {}",
        resolved.repositories.len(),
        options.output_dir.display()
    );

    let mut report = GenerationReport::default();
    for repository in &resolved.repositories {
        for package in repository.packages() {
            let page =
                render_package(&resolved.domain, &resolved.docs_domain, &package, repository)?;
            let path = options.output_dir.join(&package).join(PAGE_FILE_NAME);
            write_page(&path, &page, options.overwrite)?;
            debug!("Wrote page for {}/{} to {}", resolved.domain, package, path.display());
            report.pages.push(path);
        }
    }

    if resolved.index {
        let page = render_index(&resolved.domain, &resolved.repositories)?;
        let path = options.output_dir.join(PAGE_FILE_NAME);
        write_page(&path, &page, options.overwrite)?;
        debug!("Wrote index to {}", path.display());
        report.index = Some(path);
    }

    info!("Generated {} package pages", report.pages.len());
    Ok(report)
}

fn write_page(path: &Path, contents: &str, overwrite: bool) -> Result<(), Error> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| error::write_error(parent, source))?;
    }

    let file = open_page(path, overwrite)?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents.as_bytes())
        .map_err(|source| error::write_error(path, source))?;
    writer
        .flush()
        .map_err(|source| error::write_error(path, source))
}

fn open_page(path: &Path, overwrite: bool) -> Result<File, Error> {
    if overwrite {
        return File::create(path).map_err(|source| error::write_error(path, source));
    }

    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|source| match source.kind() {
            io::ErrorKind::AlreadyExists => Error::OverwriteConflict {
                path: path.to_path_buf()
            },
            _ => error::write_error(path, source)
        })
}
