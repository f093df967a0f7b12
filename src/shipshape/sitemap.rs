//! Sitemap generation.
//!
//! One `<url>` entry per included page; changefreq and priority come
//! from a static path-prefix table, longest prefix first. The page list
//! normally comes from the selector, but callers may hand in any list
//! of paths (e.g. the version-control tracked set) as an opaque input.

use chrono::Utc;
use std::path::Path;

/// (prefix, changefreq, priority), checked in order. First hit wins.
const PREFIX_TABLE: &[(&str, &str, &str)] = &[
    ("/index.html", "daily", "1.0"),
    ("/ships/", "weekly", "0.8"),
    ("/ports/", "weekly", "0.7"),
    ("/venues/", "weekly", "0.7"),
    ("/deals/", "daily", "0.9"),
];

const DEFAULT_CHANGEFREQ: &str = "monthly";
const DEFAULT_PRIORITY: &str = "0.5";

fn lookup(rel_url: &str) -> (&'static str, &'static str) {
    for (prefix, changefreq, priority) in PREFIX_TABLE {
        if rel_url.starts_with(prefix) {
            return (changefreq, priority);
        }
    }
    (DEFAULT_CHANGEFREQ, DEFAULT_PRIORITY)
}

/// Site-relative URL for a page path, with `index.html` collapsed to its
/// directory.
pub fn page_url(root: &Path, page: &Path) -> String {
    let rel = page.strip_prefix(root).unwrap_or(page);
    let mut url = format!("/{}", rel.to_string_lossy().replace('\\', "/"));
    if let Some(stripped) = url.strip_suffix("index.html") {
        url = stripped.to_string();
    }
    url
}

fn escape(url: &str) -> String {
    url.replace('&', "&amp;")
}

/// Render the whole sitemap document. `lastmod` is today for every
/// entry; the site is regenerated wholesale, so per-file mtimes carry
/// no meaning.
pub fn generate(base_url: &str, root: &Path, pages: &[impl AsRef<Path>]) -> String {
    let lastmod = Utc::now().format("%Y-%m-%d").to_string();
    let base = base_url.trim_end_matches('/');

    let mut xml = String::new();
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");

    for page in pages {
        let rel_url = page_url(root, page.as_ref());
        let (changefreq, priority) = lookup(&rel_url);
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}{}</loc>\n", escape(base), escape(&rel_url)));
        xml.push_str(&format!("    <lastmod>{}</lastmod>\n", lastmod));
        xml.push_str(&format!("    <changefreq>{}</changefreq>\n", changefreq));
        xml.push_str(&format!("    <priority>{}</priority>\n", priority));
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}
