use super::ContentStore;
use crate::error::{Result, ShipshapeError};
use crate::select::SelectFilter;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    files: BTreeMap<PathBuf, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContentStore for InMemoryStore {
    fn read(&self, path: &Path) -> Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| ShipshapeError::FileNotFound(path.to_path_buf()))
    }

    fn write(&mut self, path: &Path, content: &str) -> Result<()> {
        self.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn select(&self, filter: &SelectFilter) -> Result<Vec<PathBuf>> {
        // BTreeMap iteration is already path-sorted
        Ok(self
            .files
            .keys()
            .filter(|p| p.starts_with(&filter.root) && filter.matches(p))
            .cloned()
            .collect())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_file(mut self, path: &str, content: &str) -> Self {
            self.store.write(Path::new(path), content).unwrap();
            self
        }

        pub fn with_page(self, path: &str, head_extra: &str, body: &str) -> Self {
            let content = format!(
                "<!DOCTYPE html>\n<html>\n<head>\n<title>Page</title>\n{}</head>\n<body>\n{}\n</body>\n</html>\n",
                head_extra, body
            );
            self.with_file(path, &content)
        }
    }
}
