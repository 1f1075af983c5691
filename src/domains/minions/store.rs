//! In-memory minion store.
//!
//! The store owns every minion keyed by name behind a single readers-writer
//! lock. Mutations take the write lock, reads take the read lock and
//! reshuffle every minion's tags in place before returning. Since that
//! shuffle happens under the shared lock, each tag list sits behind its own
//! mutex so two concurrent readers never permute the same list at once.

use rand::seq::SliceRandom;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Mutex, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info};

use super::error::MinionError;
use super::model::Minion;

/// A minion as held by the store.
#[derive(Debug)]
struct StoredMinion {
    name: String,
    description: String,
    tags: Mutex<Vec<String>>,
}

impl StoredMinion {
    fn shuffle_tags(&self) {
        let mut tags = self.tags.lock().unwrap_or_else(PoisonError::into_inner);
        tags.shuffle(&mut rand::rng());
    }

    fn snapshot(&self) -> Minion {
        let tags = self.tags.lock().unwrap_or_else(PoisonError::into_inner);
        Minion {
            name: self.name.clone(),
            description: self.description.clone(),
            tags: tags.clone(),
        }
    }
}

impl From<Minion> for StoredMinion {
    fn from(minion: Minion) -> Self {
        Self {
            name: minion.name,
            description: minion.description,
            tags: Mutex::new(minion.tags),
        }
    }
}

/// Concurrency-safe keeper of all minions.
#[derive(Debug, Default)]
pub struct MinionStore {
    minions: RwLock<HashMap<String, StoredMinion>>,
}

impl MinionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `seed`, keyed as given.
    pub fn from_seed(seed: HashMap<String, Minion>) -> Self {
        let minions = seed
            .into_iter()
            .map(|(name, minion)| (name, StoredMinion::from(minion)))
            .collect();
        Self {
            minions: RwLock::new(minions),
        }
    }

    /// Create a store from a JSON seed file mapping name to minion.
    pub fn from_seed_file(path: impl AsRef<Path>) -> Result<Self, MinionError> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)?;
        let seed: HashMap<String, Minion> = serde_json::from_str(&data)?;
        info!("Seeding store with {} minions from {}", seed.len(), path.display());
        Ok(Self::from_seed(seed))
    }

    /// Number of stored minions.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the store holds no minions.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// List every minion with the key it is stored under.
    ///
    /// Reshuffles all tag lists. Order of the returned entries is unspecified.
    pub fn list(&self) -> Vec<(String, Minion)> {
        let minions = self.read();
        shuffle_all(&minions);
        minions
            .iter()
            .map(|(name, stored)| (name.clone(), stored.snapshot()))
            .collect()
    }

    /// Fetch a single minion by name.
    ///
    /// Reshuffles all tag lists, like [`MinionStore::list`].
    pub fn get(&self, name: &str) -> Result<Minion, MinionError> {
        let minions = self.read();
        shuffle_all(&minions);
        minions
            .get(name)
            .map(StoredMinion::snapshot)
            .ok_or_else(|| MinionError::not_found(name))
    }

    /// Insert a new minion.
    pub fn create(&self, minion: Minion) -> Result<Minion, MinionError> {
        if minion.has_whitespace_name() {
            return Err(MinionError::invalid("malformed request with whitespaces"));
        }

        let mut minions = self.write();
        if minions.contains_key(&minion.name) {
            return Err(MinionError::conflict(&minion.name));
        }

        minions.insert(minion.name.clone(), StoredMinion::from(minion.clone()));
        info!("added minion: {}", minion.name);
        Ok(minion)
    }

    /// Replace the minion stored under `name`.
    ///
    /// The replacement's own `name` is stored as given, even when it differs
    /// from the key it is stored under.
    pub fn update(&self, name: &str, minion: Minion) -> Result<Minion, MinionError> {
        let mut minions = self.write();
        let Some(stored) = minions.get_mut(name) else {
            debug!("minion {} does not exist", name);
            return Err(MinionError::not_found(name));
        };

        *stored = StoredMinion::from(minion.clone());
        info!("updated minion: {}", minion.name);
        Ok(minion)
    }

    /// Remove the minion stored under `name`.
    pub fn delete(&self, name: &str) -> Result<(), MinionError> {
        let mut minions = self.write();
        if minions.remove(name).is_none() {
            return Err(MinionError::not_found(name));
        }

        info!("deleted minion: {}", name);
        Ok(())
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, StoredMinion>> {
        self.minions.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, StoredMinion>> {
        self.minions.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn shuffle_all(minions: &HashMap<String, StoredMinion>) {
    for stored in minions.values() {
        stored.shuffle_tags();
    }
}
