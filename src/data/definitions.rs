//! Definition Registry
//!
//! Loads and caches item and fluid definitions from TOML files. Each file
//! under `<data>/<kind>/` is a table of definitions keyed by id.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{info, warn};

use super::item_def::{FluidDefinition, ItemDefinition};
use crate::error::DataError;

/// A definition kind loaded from its own data subdirectory
pub trait Definition: Sized {
    type Raw: DeserializeOwned;
    const DIRECTORY: &'static str;

    fn from_raw(id: &str, raw: &Self::Raw) -> Self;
    fn id(&self) -> &str;
}

/// Registry for all definitions of one kind, ordered by id
pub struct DefinitionRegistry<D> {
    definitions: BTreeMap<String, D>,
}

pub type ItemRegistry = DefinitionRegistry<ItemDefinition>;
pub type FluidRegistry = DefinitionRegistry<FluidDefinition>;

impl<D: Definition> DefinitionRegistry<D> {
    pub fn new() -> Self {
        Self {
            definitions: BTreeMap::new(),
        }
    }

    /// Load all definitions from `<data_dir>/<D::DIRECTORY>`
    pub fn load_from_directory(&mut self, data_dir: &Path) -> Result<(), DataError> {
        let dir = data_dir.join(D::DIRECTORY);

        if !dir.exists() {
            warn!("{} directory does not exist: {:?}", D::DIRECTORY, dir);
            return Ok(());
        }

        let entries = std::fs::read_dir(&dir).map_err(|source| DataError::Io {
            path: dir.clone(),
            source,
        })?;

        for entry in entries {
            let entry = entry.map_err(|source| DataError::Io {
                path: dir.clone(),
                source,
            })?;
            let path = entry.path();

            if path.extension().is_some_and(|ext| ext == "toml") {
                let content = std::fs::read_to_string(&path).map_err(|source| DataError::Io {
                    path: path.clone(),
                    source,
                })?;

                let table: HashMap<String, D::Raw> =
                    toml::from_str(&content).map_err(|source| DataError::Parse {
                        path: path.clone(),
                        source,
                    })?;

                for (id, raw) in table {
                    if self.definitions.contains_key(&id) {
                        warn!("Duplicate {} ID '{}' in {:?}, overwriting", D::DIRECTORY, id, path);
                    }
                    let definition = D::from_raw(&id, &raw);
                    self.definitions.insert(id, definition);
                }
            }
        }

        info!("Loaded {} {} definitions", self.definitions.len(), D::DIRECTORY);

        Ok(())
    }

    /// Add a single definition, replacing any with the same id
    pub fn insert(&mut self, definition: D) {
        self.definitions
            .insert(definition.id().to_string(), definition);
    }

    pub fn get(&self, id: &str) -> Option<&D> {
        self.definitions.get(id)
    }

    /// All definitions in id order
    pub fn all(&self) -> impl Iterator<Item = &D> {
        self.definitions.values()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.definitions.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl<D: Definition> Default for DefinitionRegistry<D> {
    fn default() -> Self {
        Self::new()
    }
}
