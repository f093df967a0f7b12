use crate::commands::{CmdMessage, CmdResult};
use crate::config::SiteConfig;
use crate::error::Result;
use crate::select::SelectFilter;
use crate::sitemap;
use crate::store::ContentStore;
use std::path::{Path, PathBuf};

/// Regenerate sitemap.xml. Pages come from the selector by default, or
/// from an externally supplied newline-separated list (one path per
/// line, site-relative or absolute) when `pages_file` is given.
pub fn run<S: ContentStore>(
    store: &mut S,
    config: &SiteConfig,
    root: &Path,
    output: Option<PathBuf>,
    pages_file: Option<PathBuf>,
) -> Result<CmdResult> {
    let pages: Vec<PathBuf> = match pages_file {
        Some(list_path) => store
            .read(&list_path)?
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(|l| {
                let p = Path::new(l);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    root.join(p)
                }
            })
            .collect(),
        None => store.select(&SelectFilter::html(root, &config.excluded))?,
    };

    let xml = sitemap::generate(&config.base_url, root, &pages);
    let output = output.unwrap_or_else(|| root.join("sitemap.xml"));
    store.write(&output, &xml)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Wrote {} with {} page(s)",
        output.display(),
        pages.len()
    )));
    Ok(result)
}
