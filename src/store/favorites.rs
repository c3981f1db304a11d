use crate::domain::model::FavoriteEntry;
use crate::utils::error::Result;
use std::fs;
use std::path::PathBuf;

/// Flat-file favorites store: one JSON array, rewritten wholesale on every
/// mutation. The store owns the on-disk representation; callers only ever see
/// copies. Insertion order is the only defined order.
#[derive(Debug, Clone)]
pub struct FavoritesStore {
    path: PathBuf,
}

impl FavoritesStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Absent or unparseable file reads as empty, never as an error.
    pub fn load_all(&self) -> Vec<FavoriteEntry> {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(error = %e, "favorites file is corrupt, treating as empty");
                Vec::new()
            }
        }
    }

    pub fn append(&self, entry: FavoriteEntry) -> Result<()> {
        let mut entries = self.load_all();
        entries.push(entry);
        self.write_all(&entries)
    }

    pub fn clear(&self) -> Result<()> {
        self.write_all(&[])
    }

    /// Atomic replace: write a sibling temp file, then rename over the target.
    fn write_all(&self, entries: &[FavoriteEntry]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
