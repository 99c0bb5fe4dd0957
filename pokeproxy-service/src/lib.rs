//! # pokeproxy-service
//!
//! HTTP surface over creature data from the public reference API and the battle simulator.
//!
//! Routes:
//! - `GET /pokemon/{name_or_id}`: creature profile.
//! - `GET /pokemon/move/{name_or_id}`: move data.
//! - `POST /battle/simulate`: runs a battle simulation.
//! - `GET /.well-known/mcp-resources`: discovery manifest of the routes above.
mod config;
mod error;
mod manifest;
mod routes;

pub use config::ServiceConfig;
pub use error::{
    ErrorBody,
    ServiceError,
};
pub use manifest::{
    ResourceDescriptor,
    ResourceManifest,
    resource_manifest,
};
pub use routes::{
    AppState,
    router,
};
