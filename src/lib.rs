//! Utilities for generating static vanity import pages for Go packages.
//!
//! The library loads JSON configuration files describing source repositories
//! and their sub-packages, resolves the `go-import` and `go-source` metadata
//! of every repository, and renders one HTML page per package path plus an
//! optional index page.

mod config;
mod error;
mod generate;
mod packages;
mod render;
mod resolver;

pub use config::{Config, Repository, SourceUrls, SubEntry, Website, load_config, parse_config};
pub use error::{Error, io_error, write_error};
pub use generate::{GenerateOptions, GenerationReport, generate_site};
pub use packages::join_package_path;
pub use render::{render_index, render_package};
pub use resolver::{
    DEFAULT_DOCS_DOMAIN, DEFAULT_VCS, Provider, SENTINEL, home_url, resolve_config,
    resolve_repository
};
