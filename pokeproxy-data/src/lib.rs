extern crate alloc;

mod creature;
mod data_store;
mod error;
mod moves;
mod stat;
mod type_chart;

pub use creature::{
    AbilitySlot,
    CreatureData,
    CreatureProfile,
    ResourceRef,
};
pub use data_store::{
    DataStore,
    ProfileDataStore,
};
pub use error::DataError;
pub use moves::{
    DamageClass,
    EffectEntry,
    MoveData,
};
pub use stat::{
    Stat,
    StatMap,
};
pub use type_chart::{
    TypeChart,
    TypeEffectiveness,
    TypeTable,
};
