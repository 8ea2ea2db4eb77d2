// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Expansion of repositories into importable package paths.

use crate::config::{Repository, SubEntry};

impl Repository {
    /// Returns every package path provided by the repository.
    ///
    /// The bare prefix comes first, followed by one path per sub-entry in
    /// configuration order. Hidden entries are included because they still
    /// receive pages.
    ///
    /// # Examples
    ///
    /// ```
    /// use vangen::{Repository, SubEntry};
    ///
    /// let repository = Repository {
    ///     prefix: "foo".to_owned(),
    ///     subs: vec![SubEntry::visible("bar"), SubEntry::hidden("car/dar")],
    ///     ..Repository::default()
    /// };
    /// assert_eq!(repository.packages(), ["foo", "foo/bar", "foo/car/dar"]);
    /// ```
    pub fn packages(&self) -> Vec<String> {
        let mut packages = Vec::with_capacity(self.subs.len() + 1);
        packages.push(self.prefix.clone());
        packages.extend(
            self.subs
                .iter()
                .map(|sub| join_package_path(&self.prefix, &sub.name))
        );
        packages
    }

    /// Sub-entries that appear in rendered listings, in configuration order.
    pub fn visible_subs(&self) -> impl Iterator<Item = &SubEntry> {
        self.subs.iter().filter(|sub| !sub.hidden)
    }
}

/// Joins a prefix and a sub-entry name with exactly one `/`.
///
/// Separators at the seam and at the end are dropped; interior separators of
/// `name` are kept as written.
pub fn join_package_path(prefix: &str, name: &str) -> String {
    let head = prefix.trim_end_matches('/');
    let tail = name.trim_matches('/');

    let mut path = String::with_capacity(head.len() + tail.len() + 1);
    path.push_str(head);
    if !tail.is_empty() {
        path.push('/');
        path.push_str(tail);
    }
    path
}
