// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Resolution of partially specified repositories into renderable ones.
//!
//! Precedence for every `go-source` template is: explicit `source` override,
//! then the default of a recognized hosting provider, then the `"_"`
//! sentinel. Resolution never fails and is idempotent, so it is safe to run
//! on an already resolved repository.

use crate::config::{Config, Repository};

/// Placeholder announced in `go-source` when no URL is known.
pub const SENTINEL: &str = "_";
/// Version control system assumed when a repository does not name one.
pub const DEFAULT_VCS: &str = "git";
/// Documentation host used for home links when none is configured.
pub const DEFAULT_DOCS_DOMAIN: &str = "pkg.go.dev";

/// Source hosting platforms with known browsing URL layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    /// `https://github.com`
    GitHub,
    /// `https://gitlab.com`
    GitLab
}

impl Provider {
    const ALL: [Self; 2] = [Self::GitHub, Self::GitLab];

    /// URL prefix that identifies the provider.
    pub fn host_prefix(self) -> &'static str {
        match self {
            Self::GitHub => "https://github.com",
            Self::GitLab => "https://gitlab.com"
        }
    }

    /// Detects the provider hosting `url`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use vangen::Provider;
    ///
    /// assert_eq!(Provider::detect("https://gitlab.com/a/b"), Some(Provider::GitLab));
    /// assert_eq!(Provider::detect("https://example.com/a/b"), None);
    /// ```
    pub fn detect(url: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|provider| url.starts_with(provider.host_prefix()))
    }

    /// Directory browsing template for a repository at `url`.
    pub fn dir_template(self, url: &str) -> String {
        match self {
            Self::GitHub | Self::GitLab => format!("{url}/tree/master{{/dir}}")
        }
    }

    /// File browsing template for a repository at `url`.
    pub fn file_template(self, url: &str) -> String {
        match self {
            Self::GitHub | Self::GitLab => format!("{url}/blob/master{{/dir}}/{{file}}#L{{line}}")
        }
    }
}

/// Returns a copy of `repository` with its VCS and source URLs completed.
///
/// Repositories on a recognized [`Provider`] always announce `git`; elsewhere
/// an empty `type` becomes [`DEFAULT_VCS`]. Explicit source overrides are
/// kept, empty fields are filled from the provider and whatever is still
/// empty becomes [`SENTINEL`].
///
/// # Examples
///
/// ```
/// use vangen::{Repository, resolve_repository};
///
/// let repository = Repository {
///     prefix: "optional".to_owned(),
///     url: "https://github.com/leighmcculloch/go-optional".to_owned(),
///     ..Repository::default()
/// };
/// let resolved = resolve_repository(&repository);
/// assert_eq!(resolved.vcs, "git");
/// assert_eq!(
///     resolved.source_urls.dir,
///     "https://github.com/leighmcculloch/go-optional/tree/master{/dir}"
/// );
/// ```
pub fn resolve_repository(repository: &Repository) -> Repository {
    let mut resolved = repository.clone();

    if let Some(provider) = Provider::detect(&repository.url) {
        resolved.vcs = DEFAULT_VCS.to_owned();
        let url = repository.url.as_str();
        let urls = &mut resolved.source_urls;
        fill_if_empty(&mut urls.home, || url.to_owned());
        fill_if_empty(&mut urls.dir, || provider.dir_template(url));
        fill_if_empty(&mut urls.file, || provider.file_template(url));
    }

    fill_if_empty(&mut resolved.vcs, || DEFAULT_VCS.to_owned());
    let urls = &mut resolved.source_urls;
    for field in [&mut urls.home, &mut urls.dir, &mut urls.file] {
        fill_if_empty(field, || SENTINEL.to_owned());
    }

    resolved
}

/// Resolves every repository of `config`, keeping their order.
pub fn resolve_config(config: &Config) -> Config {
    Config {
        repositories: config.repositories.iter().map(resolve_repository).collect(),
        ..config.clone()
    }
}

/// Computes the home link shown on the page of `package`.
///
/// The repository website wins; otherwise the link points at the package on
/// `docs_domain`, or on [`DEFAULT_DOCS_DOMAIN`] when that is empty.
pub fn home_url(
    repository: &Repository,
    domain: &str,
    docs_domain: &str,
    package: &str
) -> String {
    if !repository.website.url.is_empty() {
        return repository.website.url.clone();
    }

    let docs = if docs_domain.is_empty() {
        DEFAULT_DOCS_DOMAIN
    } else {
        docs_domain
    };
    format!("https://{docs}/{domain}/{package}")
}

fn fill_if_empty<F>(field: &mut String, default: F)
where
    F: FnOnce() -> String
{
    if field.is_empty() {
        *field = default();
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::{Provider, SENTINEL, home_url, resolve_config, resolve_repository};
    use crate::config::{Config, Repository, SourceUrls, Website};

    fn repository_with_url(url: &str) -> Repository {
        Repository {
            prefix: "pkg1".to_owned(),
            url: url.to_owned(),
            ..Repository::default()
        }
    }

    fn arbitrary_repository() -> impl Strategy<Value = Repository> {
        (
            prop_oneof![
                Just(String::new()),
                "https://github\\.com/[a-z]{1,8}/[a-z-]{1,12}",
                "https://gitlab\\.com/[a-z]{1,8}/[a-z-]{1,12}",
                "https://[a-z]{1,8}\\.org/[a-z-]{1,12}",
            ],
            prop_oneof![Just(String::new()), Just("git".to_owned()), Just("hg".to_owned())],
            prop::collection::vec(prop_oneof![Just(String::new()), "https://[a-z]{1,8}"], 3)
        )
            .prop_map(|(url, vcs, overrides)| Repository {
                prefix: "pkg".to_owned(),
                url,
                vcs,
                source_urls: SourceUrls {
                    home: overrides[0].clone(),
                    dir:  overrides[1].clone(),
                    file: overrides[2].clone()
                },
                ..Repository::default()
            })
    }

    proptest! {
        #[test]
        fn resolution_is_idempotent(repository in arbitrary_repository()) {
            let once = resolve_repository(&repository);
            let twice = resolve_repository(&once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn resolution_never_leaves_empty_fields(repository in arbitrary_repository()) {
            let resolved = resolve_repository(&repository);
            prop_assert!(!resolved.vcs.is_empty());
            prop_assert!(!resolved.source_urls.home.is_empty());
            prop_assert!(!resolved.source_urls.dir.is_empty());
            prop_assert!(!resolved.source_urls.file.is_empty());
        }

        #[test]
        fn github_repositories_get_browsing_templates(
            owner in "[a-zA-Z0-9-]{1,16}",
            name in "[a-zA-Z0-9._-]{1,24}"
        ) {
            let url = format!("https://github.com/{owner}/{name}");
            let resolved = resolve_repository(&repository_with_url(&url));

            prop_assert_eq!(&resolved.source_urls.home, &url);
            prop_assert_eq!(resolved.source_urls.dir, format!("{url}/tree/master{{/dir}}"));
            prop_assert_eq!(
                resolved.source_urls.file,
                format!("{url}/blob/master{{/dir}}/{{file}}#L{{line}}")
            );
        }
    }

    #[test]
    fn detects_known_providers() {
        assert_eq!(Provider::detect("https://github.com/a/b"), Some(Provider::GitHub));
        assert_eq!(Provider::detect("https://gitlab.com/a/b"), Some(Provider::GitLab));
        assert_eq!(Provider::detect("http://github.com/a/b"), None);
        assert_eq!(Provider::detect("https://bitbucket.org/a/b"), None);
        assert_eq!(Provider::detect(""), None);
    }

    #[test]
    fn gitlab_defaults_mirror_github_layout() {
        let resolved = resolve_repository(&repository_with_url("https://gitlab.com/example/go-pkg1"));
        assert_eq!(resolved.vcs, "git");
        assert_eq!(resolved.source_urls.home, "https://gitlab.com/example/go-pkg1");
        assert_eq!(
            resolved.source_urls.dir,
            "https://gitlab.com/example/go-pkg1/tree/master{/dir}"
        );
        assert_eq!(
            resolved.source_urls.file,
            "https://gitlab.com/example/go-pkg1/blob/master{/dir}/{file}#L{line}"
        );
    }

    #[test]
    fn unknown_host_without_overrides_uses_sentinel() {
        let resolved = resolve_repository(&repository_with_url(""));
        assert_eq!(resolved.vcs, "git");
        assert_eq!(
            resolved.source_urls,
            SourceUrls {
                home: SENTINEL.to_owned(),
                dir:  SENTINEL.to_owned(),
                file: SENTINEL.to_owned()
            }
        );
    }

    #[test]
    fn explicit_overrides_win_over_provider_defaults() {
        let mut repository = repository_with_url("https://github.com/example/go-pkg1");
        repository.source_urls.dir = "https://github.com/example/go-pkg1/tree/branch{/dir}".to_owned();

        let resolved = resolve_repository(&repository);
        assert_eq!(resolved.source_urls.home, "https://github.com/example/go-pkg1");
        assert_eq!(
            resolved.source_urls.dir,
            "https://github.com/example/go-pkg1/tree/branch{/dir}"
        );
        assert_eq!(
            resolved.source_urls.file,
            "https://github.com/example/go-pkg1/blob/master{/dir}/{file}#L{line}"
        );
    }

    #[test]
    fn recognized_hosts_always_announce_git() {
        for url in ["https://github.com/a/b", "https://gitlab.com/a/b"] {
            let mut repository = repository_with_url(url);
            repository.vcs = "hg".to_owned();

            let resolved = resolve_repository(&repository);
            assert_eq!(resolved.vcs, "git", "unexpected vcs for {url}");
        }
    }

    #[test]
    fn explicit_overrides_on_unknown_host_fill_gaps_with_sentinel() {
        let mut repository = repository_with_url("https://git.example.com/pkg1");
        repository.vcs = "hg".to_owned();
        repository.source_urls.home = "https://code.example.com/pkg1".to_owned();

        let resolved = resolve_repository(&repository);
        assert_eq!(resolved.vcs, "hg");
        assert_eq!(resolved.source_urls.home, "https://code.example.com/pkg1");
        assert_eq!(resolved.source_urls.dir, "_");
        assert_eq!(resolved.source_urls.file, "_");
    }

    #[test]
    fn resolve_config_keeps_order_and_settings() {
        let config = Config {
            domain: "example.com".to_owned(),
            index: true,
            repositories: vec![
                repository_with_url("https://github.com/a/a"),
                Repository {
                    prefix: "zzz".to_owned(),
                    ..Repository::default()
                },
            ],
            ..Config::default()
        };

        let resolved = resolve_config(&config);
        assert_eq!(resolved.domain, "example.com");
        assert!(resolved.index);
        assert_eq!(resolved.repositories[0].prefix, "pkg1");
        assert_eq!(resolved.repositories[1].source_urls.home, "_");
    }

    #[test]
    fn home_url_prefers_website() {
        let mut repository = repository_with_url("");
        repository.website = Website {
            url: "https://www.example.com".to_owned()
        };
        assert_eq!(
            home_url(&repository, "example.com", "godocs.io", "pkg1/sub"),
            "https://www.example.com"
        );
    }

    #[test]
    fn home_url_uses_docs_domain() {
        let repository = repository_with_url("");
        assert_eq!(
            home_url(&repository, "example.com", "godocs.io", "pkg1/sub"),
            "https://godocs.io/example.com/pkg1/sub"
        );
    }

    #[test]
    fn home_url_defaults_to_pkg_go_dev() {
        let repository = repository_with_url("");
        assert_eq!(
            home_url(&repository, "example.com", "", "pkg1"),
            "https://pkg.go.dev/example.com/pkg1"
        );
    }
}
