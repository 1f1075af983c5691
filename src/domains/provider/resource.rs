//! Lifecycle of a declarative minion resource.
//!
//! Maps create/read/update/delete/exists one to one onto [`MinionApi`]
//! calls. A "not found" answer on lookups means the resource is absent,
//! not that the operation failed.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{info, instrument, warn};

use super::error::ProviderError;
use crate::domains::client::MinionApi;
use crate::domains::minions::{Minion, contains_whitespace};

/// Declared state of a minion resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceState {
    /// Resource ID; equal to the name once created, `None` when absent.
    pub id: Option<String>,

    /// Minion name. Changing it forces a new resource.
    pub name: String,

    /// Minion description.
    pub description: String,

    /// Minion tags as an unordered set.
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

impl ResourceState {
    /// Declare a resource that has not been created yet.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        tags: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    fn to_minion(&self) -> Minion {
        Minion {
            name: self.name.clone(),
            description: self.description.clone(),
            tags: self.tags.iter().cloned().collect(),
        }
    }
}

impl From<Minion> for ResourceState {
    fn from(minion: Minion) -> Self {
        Self {
            id: Some(minion.name.clone()),
            name: minion.name,
            description: minion.description,
            tags: minion.tags.into_iter().collect(),
        }
    }
}

/// Reject names containing whitespace.
pub fn validate_name(name: &str) -> Result<(), ProviderError> {
    if contains_whitespace(name) {
        return Err(ProviderError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Drives minion resources through a [`MinionApi`].
#[derive(Debug, Clone)]
pub struct MinionResource<A> {
    api: A,
}

impl<A: MinionApi> MinionResource<A> {
    /// Wrap the given API.
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Create the resource and record its ID.
    #[instrument(skip_all, fields(name = %state.name))]
    pub async fn create(&self, state: &mut ResourceState) -> Result<(), ProviderError> {
        validate_name(&state.name)?;

        self.api.create(&state.to_minion()).await?;
        state.id = Some(state.name.clone());
        info!("created minion resource {}", state.name);
        Ok(())
    }

    /// Read the current state, `None` when the minion no longer exists.
    #[instrument(skip(self))]
    pub async fn read(&self, id: &str) -> Result<Option<ResourceState>, ProviderError> {
        match self.api.get_one(id).await {
            Ok(minion) => Ok(Some(ResourceState::from(minion))),
            Err(err) if err.is_not_found() => {
                info!("minion resource {} is gone", id);
                Ok(None)
            }
            Err(err) => {
                warn!("lookup of {} failed: {}", id, err);
                Err(ProviderError::Lookup(id.to_string()))
            }
        }
    }

    /// Push the declared state to the service.
    #[instrument(skip_all, fields(name = %state.name))]
    pub async fn update(&self, state: &ResourceState) -> Result<(), ProviderError> {
        validate_name(&state.name)?;

        self.api.update(&state.to_minion()).await?;
        Ok(())
    }

    /// Delete the resource and clear its ID.
    #[instrument(skip_all, fields(id = ?state.id))]
    pub async fn delete(&self, state: &mut ResourceState) -> Result<(), ProviderError> {
        let Some(id) = state.id.as_deref() else {
            return Ok(());
        };

        self.api.delete(id).await?;
        state.id = None;
        Ok(())
    }

    /// Whether a minion with this ID exists.
    #[instrument(skip(self))]
    pub async fn exists(&self, id: &str) -> Result<bool, ProviderError> {
        match self.api.get_one(id).await {
            Ok(_) => Ok(true),
            Err(err) if err.is_not_found() => Ok(false),
            Err(err) => Err(err.into()),
        }
    }
}
