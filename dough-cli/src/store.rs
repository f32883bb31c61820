//! Custom recipes saved by the user, kept as a JSON array on disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use dough_core::{DoughStyle, ParameterSet};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// File name of the custom recipe collection.
pub const STORE_FILE: &str = "custom-recipes.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid recipe store {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no custom recipe with id '{0}'")]
    NotFound(String),

    #[error("recipe name must not be empty")]
    EmptyName,
}

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomRecipe {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub dough_style: DoughStyle,
    pub params: ParameterSet,
}

/// `<data dir>/dough-cli/custom-recipes.json`, or the working directory
/// when the platform has no data dir.
pub fn default_store_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("dough-cli")
        .join(STORE_FILE)
}

pub struct RecipeStore {
    path: PathBuf,
}

impl RecipeStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file is an empty collection.
    pub fn load(&self) -> StoreResult<Vec<CustomRecipe>> {
        let txt = match fs::read_to_string(&self.path) {
            Ok(txt) => txt,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        serde_json::from_str(&txt).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })
    }

    /// Like [`load`](Self::load), but a broken store reads as empty.
    pub fn load_or_empty(&self) -> Vec<CustomRecipe> {
        self.load().unwrap_or_else(|e| {
            warn!("Failed to load custom recipes: {e}");
            Vec::new()
        })
    }

    fn save_all(&self, recipes: &[CustomRecipe]) -> StoreResult<()> {
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(io_err)?;
        }
        let json = serde_json::to_string_pretty(recipes).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, json).map_err(io_err)?;
        debug!(path = %self.path.display(), count = recipes.len(), "saved custom recipes");
        Ok(())
    }

    /// Append a recipe; the id is the creation time in milliseconds.
    pub fn add(
        &self,
        name: &str,
        description: &str,
        params: &ParameterSet,
    ) -> StoreResult<CustomRecipe> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyName);
        }
        let mut recipes = self.load()?;

        let mut stamp = Utc::now().timestamp_millis();
        while recipes.iter().any(|r| r.id == stamp.to_string()) {
            stamp += 1;
        }

        let recipe = CustomRecipe {
            id: stamp.to_string(),
            name: name.to_string(),
            description: description.trim().to_string(),
            dough_style: params.dough_style,
            params: *params,
        };
        recipes.push(recipe.clone());
        self.save_all(&recipes)?;
        Ok(recipe)
    }

    pub fn delete(&self, id: &str) -> StoreResult<CustomRecipe> {
        let mut recipes = self.load()?;
        let idx = recipes
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        let removed = recipes.remove(idx);
        self.save_all(&recipes)?;
        Ok(removed)
    }

    /// Match by id first, then by case-insensitive name.
    pub fn find(&self, key: &str) -> Option<CustomRecipe> {
        let key = key.trim();
        let recipes = self.load_or_empty();
        recipes
            .iter()
            .find(|r| r.id == key)
            .or_else(|| recipes.iter().find(|r| r.name.eq_ignore_ascii_case(key)))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dough_core::{DoughMethod, PoolishParams};
    use tempfile::tempdir;

    fn poolish_buns() -> ParameterSet {
        ParameterSet {
            dough_style: DoughStyle::Buns,
            dough_method: DoughMethod::Poolish(PoolishParams {
                percentage: 20.0,
                hours: 10.0,
            }),
            sugar: 8.0,
            whole_eggs: 1,
            ..ParameterSet::default()
        }
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = RecipeStore::new(dir.path().join(STORE_FILE));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_add_then_load() {
        let dir = tempdir().unwrap();
        let store = RecipeStore::new(dir.path().join("nested").join(STORE_FILE));

        let a = store
            .add("  Sunday buns ", "with honey", &poolish_buns())
            .unwrap();
        let b = store
            .add("Plain", "", &ParameterSet::default())
            .unwrap();
        assert_eq!(a.name, "Sunday buns");
        assert_eq!(a.dough_style, DoughStyle::Buns);
        assert_ne!(a.id, b.id);

        let loaded = store.load().unwrap();
        assert_eq!(loaded, vec![a, b]);
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let dir = tempdir().unwrap();
        let store = RecipeStore::new(dir.path().join(STORE_FILE));
        let err = store.add("   ", "", &ParameterSet::default()).unwrap_err();
        assert!(matches!(err, StoreError::EmptyName));
        assert!(!store.path().exists());
    }

    #[test]
    fn test_delete() {
        let dir = tempdir().unwrap();
        let store = RecipeStore::new(dir.path().join(STORE_FILE));
        let a = store.add("One", "", &ParameterSet::default()).unwrap();

        let err = store.delete("nope").unwrap_err();
        assert_eq!(err.to_string(), "no custom recipe with id 'nope'");

        assert_eq!(store.delete(&a.id).unwrap(), a);
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_find_by_id_or_name() {
        let dir = tempdir().unwrap();
        let store = RecipeStore::new(dir.path().join(STORE_FILE));
        let a = store.add("Weekend Teglia", "", &ParameterSet::default()).unwrap();

        assert_eq!(store.find(&a.id), Some(a.clone()));
        assert_eq!(store.find("weekend teglia"), Some(a));
        assert_eq!(store.find("other"), None);
    }

    #[test]
    fn test_corrupt_store() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(STORE_FILE);
        fs::write(&path, "{ not json").unwrap();
        let store = RecipeStore::new(path);

        assert!(matches!(store.load(), Err(StoreError::Json { .. })));
        assert!(store.load_or_empty().is_empty());
        // writes refuse to clobber what they cannot read
        assert!(store.add("x", "", &ParameterSet::default()).is_err());
    }
}
