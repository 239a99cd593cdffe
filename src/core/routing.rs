//! Host-based rewrites: each virtual host serves one page at its root.
//!
//! `titles.blowup.digital/` → `/titles`, `titles.blowup.digital/a/b` → `/titles/a/b`,
//! and the same for the tricks host.

use crate::core::config::Config;
use crate::core::page::Page;

/// Host that serves one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteRule {
    pub host: String,
    pub page: Page,
}

/// Ordered rewrite table; the first rule whose host matches wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    rules: Vec<RewriteRule>,
}

impl Router {
    pub fn new(rules: Vec<RewriteRule>) -> Self {
        Self { rules }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(vec![
            RewriteRule {
                host: config.titles_host.clone(),
                page: Page::Titles,
            },
            RewriteRule {
                host: config.tricks_host.clone(),
                page: Page::Tricks,
            },
        ])
    }

    pub fn rules(&self) -> &[RewriteRule] {
        &self.rules
    }

    /// Page served by `host` (port and ASCII case ignored).
    pub fn page_for_host(&self, host: &str) -> Option<Page> {
        let host = strip_port(host.trim());
        self.rules
            .iter()
            .find(|rule| rule.host.eq_ignore_ascii_case(host))
            .map(|rule| rule.page)
    }

    /// Rewritten path for a request, or `None` when the host has no rule.
    /// A query string is carried over unchanged.
    pub fn rewrite(&self, host: &str, path: &str) -> Option<String> {
        let page = self.page_for_host(host)?;
        let (path, query) = match path.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (path, None),
        };
        let mut target = page.route().to_string();
        let rest = path.trim_start_matches('/');
        if !rest.is_empty() {
            target.push('/');
            target.push_str(rest);
        }
        if let Some(q) = query {
            target.push('?');
            target.push_str(q);
        }
        Some(target)
    }
}

/// `example.org:8080` → `example.org`. Bracketed IPv6 literals keep their colons.
pub(crate) fn strip_port(host: &str) -> &str {
    match host.rsplit_once(':') {
        Some((name, port))
            if !port.is_empty()
                && port.bytes().all(|b| b.is_ascii_digit())
                && (!name.contains(':') || name.ends_with(']')) =>
        {
            name
        }
        _ => host,
    }
}
