// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Configuration document types describing vanity import repositories.
//!
//! The types in this module mirror the structure of the JSON documents
//! consumed by the generator CLI. Every field is optional at decode time so
//! partially specified repositories can be completed later by the
//! [`resolver`](crate::resolver).

use std::{fs, path::Path};

use serde::{Deserialize, Deserializer};
use tracing::{debug, info};

use crate::error::{self, Error};

/// Message attached to decode failures of a single `subs` entry.
const MALFORMED_SUB_ENTRY: &str = "malformed sub entry";

/// Root configuration document.
///
/// Repositories are sorted by prefix once the document is parsed through
/// [`parse_config`] or [`load_config`], so index output is deterministic.
///
/// # Examples
///
/// ```
/// use vangen::parse_config;
///
/// let json = r#"{"domain":"example.com","repositories":[{"prefix":"b"},{"prefix":"a"}]}"#;
/// let config = parse_config(json).expect("valid configuration");
/// assert_eq!(config.repositories[0].prefix, "a");
/// ```
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Vanity domain every package path lives under.
    pub domain:       String,
    /// Documentation host used for home links, `pkg.go.dev` when empty.
    pub docs_domain:  String,
    /// Whether an index page is emitted at the output root.
    pub index:        bool,
    /// Repositories ordered by ascending prefix.
    pub repositories: Vec<Repository>
}

impl Config {
    /// Checks the fields the renderer cannot do without.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`](Error::Validation) when `domain` is empty,
    /// any repository has an empty `prefix` or a sub-entry name is empty once
    /// its surrounding `/` are stripped.
    pub fn validate_for_rendering(&self) -> Result<(), Error> {
        if self.domain.trim().is_empty() {
            return Err(Error::validation("domain cannot be empty"));
        }
        if let Some(position) = self
            .repositories
            .iter()
            .position(|repository| repository.prefix.trim().is_empty())
        {
            return Err(Error::validation(format!(
                "repository {position} has an empty prefix"
            )));
        }
        for repository in &self.repositories {
            // Such a name would join back to the bare prefix page.
            if let Some(position) = repository
                .subs
                .iter()
                .position(|sub| sub.name.trim_matches('/').is_empty())
            {
                return Err(Error::validation(format!(
                    "sub entry {position} of repository '{}' has an empty name",
                    repository.prefix
                )));
            }
        }
        Ok(())
    }
}

/// One source repository and the packages it provides.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Repository {
    /// Top-level package path segment under the vanity domain.
    pub prefix:      String,
    /// Nested packages, in the order they should be listed.
    pub subs:        Vec<SubEntry>,
    /// Version control system announced in `go-import`.
    #[serde(rename = "type")]
    pub vcs:         String,
    /// Location of the source repository.
    pub url:         String,
    /// Marks the repository as a tool rather than a library.
    pub main:        bool,
    /// Excludes the repository from the index listing.
    pub hidden:      bool,
    /// Optional `go-source` URL templates.
    #[serde(rename = "source", alias = "sourceURLs")]
    pub source_urls: SourceUrls,
    /// Optional website override for the home link.
    pub website:     Website
}

/// `go-source` URL templates for a repository.
///
/// The `{/dir}`, `{file}` and `{line}` placeholders are expanded by the
/// consumers of the meta tag and are never substituted here.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SourceUrls {
    /// Repository home page.
    pub home: String,
    /// Directory browsing template.
    pub dir:  String,
    /// File browsing template.
    pub file: String
}

/// Website override for the home link of every page in a repository.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Website {
    /// Home link target; synthesized from the docs domain when empty.
    pub url: String
}

/// Sub-package entry of a repository.
///
/// Decodes from either a bare string or an object with `name` and an
/// optional `hidden` flag. Hidden entries still get pages; they are only left
/// out of rendered listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubEntry {
    /// Path below the repository prefix, possibly containing `/`.
    pub name:   String,
    /// Excludes the entry from sub-package listings.
    pub hidden: bool
}

impl SubEntry {
    /// Creates a visible entry.
    pub fn visible(name: impl Into<String>) -> Self {
        Self {
            name:   name.into(),
            hidden: false
        }
    }

    /// Creates a hidden entry.
    pub fn hidden(name: impl Into<String>) -> Self {
        Self {
            name:   name.into(),
            hidden: true
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SubEntryInput {
    Name(String),
    Entry {
        name:   String,
        #[serde(default)]
        hidden: bool
    }
}

impl From<SubEntryInput> for SubEntry {
    fn from(input: SubEntryInput) -> Self {
        match input {
            SubEntryInput::Name(name) => Self::visible(name),
            SubEntryInput::Entry {
                name,
                hidden
            } => Self {
                name,
                hidden
            }
        }
    }
}

impl<'de> Deserialize<'de> for SubEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>
    {
        let input = SubEntryInput::deserialize(deserializer)
            .map_err(|_: D::Error| <D::Error as serde::de::Error>::custom(MALFORMED_SUB_ENTRY))?;
        Ok(input.into())
    }
}

/// Loads the configuration from the JSON file at `path`.
///
/// # Errors
///
/// Returns [`Error::Io`](Error::Io) when the file cannot be read and the
/// errors of [`parse_config`] otherwise.
pub fn load_config(path: &Path) -> Result<Config, Error> {
    info!("Reading configuration from {}", path.display());
    let contents = fs::read_to_string(path).map_err(|source| error::io_error(path, source))?;
    parse_config(&contents)
}

/// Parses a configuration document and sorts its repositories by prefix.
///
/// # Errors
///
/// Returns [`Error::MalformedSubEntry`](Error::MalformedSubEntry) when a
/// `subs` entry has an unsupported shape and [`Error::Parse`](Error::Parse)
/// for any other decoding failure.
pub fn parse_config(contents: &str) -> Result<Config, Error> {
    let mut config: Config = serde_json::from_str(contents).map_err(classify_decode_error)?;
    config
        .repositories
        .sort_by(|left, right| left.prefix.cmp(&right.prefix));

    debug!(
        "Parsed {} repositories for domain '{}'",
        config.repositories.len(),
        config.domain
    );
    Ok(config)
}

// serde_json renders custom data errors as "{message} at line L column C";
// the position suffix is stripped before comparing.
fn classify_decode_error(source: serde_json::Error) -> Error {
    let rendered = source.to_string();
    let message = rendered
        .rsplit_once(" at line ")
        .map_or(rendered.as_str(), |(message, _)| message);
    if source.is_data() && message == MALFORMED_SUB_ENTRY {
        return Error::MalformedSubEntry {
            line:   source.line(),
            column: source.column()
        };
    }
    source.into()
}
