mod cache;
mod client;
mod config;
mod raw;
mod type_chart;

pub use cache::{
    CacheOptions,
    ResponseCache,
};
pub use client::PokeApiDataStore;
pub use config::{
    DEFAULT_BASE_URL,
    UpstreamConfig,
};
pub use raw::{
    RawChainLink,
    RawEvolutionChain,
    RawMove,
    RawPokemon,
    RawSpecies,
    RawType,
    RawTypeList,
    flatten_evolution_chain,
    normalize_creature,
    normalize_move,
    normalize_profile,
};
pub use type_chart::build_type_chart;
