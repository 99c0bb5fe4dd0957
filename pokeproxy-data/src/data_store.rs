use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    CreatureData,
    CreatureProfile,
    DataError,
    MoveData,
    TypeChart,
};

/// Loader contracts for all data the battle simulator consumes.
///
/// This trait can be implemented for different data sources, such as the public reference API or
/// in-memory fixtures for tests.
#[async_trait]
pub trait DataStore: Send + Sync {
    /// Loads a creature by name or ID.
    async fn load_creature(&self, name_or_id: &str) -> Result<CreatureData, DataError>;
    /// Loads a move by name or ID.
    async fn load_move(&self, name_or_id: &str) -> Result<MoveData, DataError>;
    /// Gets the type-effectiveness table.
    ///
    /// Implementations build the table lazily and reuse it for their lifetime.
    async fn get_type_chart(&self) -> Result<Arc<TypeChart>, DataError>;
}

/// An extension of [`DataStore`] for looking up full creature profiles.
#[async_trait]
pub trait ProfileDataStore: DataStore {
    /// Loads the full profile of a creature by name or ID.
    async fn load_profile(&self, name_or_id: &str) -> Result<CreatureProfile, DataError>;
}
