//! File selection: which content files a batch run is allowed to touch.
//!
//! Selection is fragment-based rather than glob-based: any path whose
//! string form contains an excluded fragment (e.g. `/vendors/`) is
//! dropped, regardless of depth. Stores sort the selected paths so that
//! run reports are reproducible across filesystems.

use std::path::{Path, PathBuf};

/// Extension + exclusion filter handed to [`crate::store::ContentStore::select`].
#[derive(Debug, Clone)]
pub struct SelectFilter {
    pub root: PathBuf,
    /// Extensions with leading dot, e.g. `.html`
    pub extensions: Vec<String>,
    /// Path fragments that disqualify a file, e.g. `/vendors/`
    pub excluded: Vec<String>,
}

impl SelectFilter {
    pub fn new(root: impl Into<PathBuf>, extensions: &[&str], excluded: &[String]) -> Self {
        Self {
            root: root.into(),
            extensions: extensions.iter().map(|e| normalize_ext(e)).collect(),
            // An empty fragment would match every path and wipe the run
            excluded: excluded.iter().filter(|f| !f.is_empty()).cloned().collect(),
        }
    }

    pub fn html(root: impl Into<PathBuf>, excluded: &[String]) -> Self {
        Self::new(root, &[".html"], excluded)
    }

    pub fn images(root: impl Into<PathBuf>, excluded: &[String]) -> Self {
        Self::new(root, &[".png", ".jpg", ".jpeg"], excluded)
    }

    /// True if `path` passes both the extension filter and the exclusion set.
    pub fn matches(&self, path: &Path) -> bool {
        let text = path_text(path);
        let has_ext = self
            .extensions
            .iter()
            .any(|ext| text.to_ascii_lowercase().ends_with(ext.as_str()));
        if !has_ext {
            return false;
        }
        !self.excluded.iter().any(|frag| text.contains(frag.as_str()))
    }
}

fn normalize_ext(ext: &str) -> String {
    if ext.starts_with('.') {
        ext.to_ascii_lowercase()
    } else {
        format!(".{}", ext.to_ascii_lowercase())
    }
}

// Exclusion fragments are written with forward slashes; normalize the
// path's separators so they match on every platform.
fn path_text(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
