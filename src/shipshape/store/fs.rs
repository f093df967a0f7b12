use super::ContentStore;
use crate::error::{Result, ShipshapeError};
use crate::select::SelectFilter;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Production store over the real site tree.
#[derive(Debug, Default)]
pub struct FileStore;

impl FileStore {
    pub fn new() -> Self {
        Self
    }

    fn ensure_parent(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(ShipshapeError::Io)?;
            }
        }
        Ok(())
    }
}

impl ContentStore for FileStore {
    fn read(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(ShipshapeError::FileNotFound(path.to_path_buf()));
        }
        fs::read_to_string(path).map_err(ShipshapeError::Io)
    }

    fn write(&mut self, path: &Path, content: &str) -> Result<()> {
        self.ensure_parent(path)?;
        fs::write(path, content).map_err(ShipshapeError::Io)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn select(&self, filter: &SelectFilter) -> Result<Vec<PathBuf>> {
        if !filter.root.exists() {
            return Ok(Vec::new());
        }

        let mut paths: Vec<PathBuf> = WalkDir::new(&filter.root)
            .min_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.path().to_path_buf())
            .filter(|p| filter.matches(p))
            .collect();

        paths.sort();
        Ok(paths)
    }
}
