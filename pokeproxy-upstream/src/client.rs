use std::sync::Arc;

use async_trait::async_trait;
use futures_util::{
    StreamExt,
    stream,
};
use log::{
    debug,
    warn,
};
use pokeproxy_data::{
    CreatureData,
    CreatureProfile,
    DataError,
    DataStore,
    MoveData,
    ProfileDataStore,
    TypeChart,
};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::OnceCell;

use crate::{
    ResponseCache,
    UpstreamConfig,
    build_type_chart,
    raw::{
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
    },
};

/// Maximum number of type records fetched at once while building the type chart.
const TYPE_FETCH_CONCURRENCY: usize = 8;

/// A [`DataStore`] backed by the public reference API.
///
/// Every upstream payload goes through the shared [`ResponseCache`]. The type chart is built on
/// first use and kept for the lifetime of the data store.
pub struct PokeApiDataStore {
    http: reqwest::Client,
    config: UpstreamConfig,
    cache: Arc<ResponseCache>,
    type_chart: OnceCell<Arc<TypeChart>>,
}

impl PokeApiDataStore {
    /// Creates a new data store.
    ///
    /// Fails if the HTTP client cannot be constructed.
    pub fn new(config: UpstreamConfig, cache: Arc<ResponseCache>) -> reqwest::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            http,
            config,
            cache,
            type_chart: OnceCell::new(),
        })
    }

    pub fn config(&self) -> &UpstreamConfig {
        &self.config
    }

    pub fn cache(&self) -> &Arc<ResponseCache> {
        &self.cache
    }

    /// Fetches the JSON payload at the given URL, reading through the cache.
    pub async fn fetch_json(&self, url: &str) -> Result<Arc<Value>, DataError> {
        if let Some(value) = self.cache.get(url).await {
            debug!("cache hit for {url}");
            return Ok(value);
        }

        debug!("GET {url}");
        let response = self.http.get(url).send().await.map_err(|err| {
            warn!("request to {url} failed: {err}");
            DataError::unavailable(url, err.to_string())
        })?;
        let status = response.status();
        if status != StatusCode::OK {
            warn!("request to {url} returned {status}");
            return Err(DataError::unavailable(
                url,
                format!("status {}", status.as_u16()),
            ));
        }
        // A body that cannot be read is a transport failure, not a bad payload.
        let body = response.bytes().await.map_err(|err| {
            warn!("reading body of {url} failed: {err}");
            DataError::unavailable(url, err.to_string())
        })?;
        let value = serde_json::from_slice::<Value>(&body)
            .map_err(|err| DataError::shape_mismatch(url, err.to_string()))?;
        let value = Arc::new(value);
        self.cache.insert(url.to_owned(), value.clone()).await;
        Ok(value)
    }

    async fn fetch<T>(&self, url: &str) -> Result<T, DataError>
    where
        T: DeserializeOwned,
    {
        let value = self.fetch_json(url).await?;
        T::deserialize(value.as_ref())
            .map_err(|err| DataError::shape_mismatch(url, err.to_string()))
    }

    async fn build_type_chart(&self) -> Result<Arc<TypeChart>, DataError> {
        let listing = self
            .fetch::<RawTypeList>(&self.config.type_list_url())
            .await?;
        let types = listing
            .results
            .iter()
            .map(|t| (t.name.clone(), t.url.clone()))
            .collect::<Vec<_>>();
        let records = stream::iter(types)
            .map(|(name, url)| async move {
                match self.fetch::<RawType>(&url).await {
                    Ok(record) => Some(record),
                    Err(err) => {
                        warn!("skipping type {name}: {err}");
                        None
                    }
                }
            })
            .buffered(TYPE_FETCH_CONCURRENCY)
            .filter_map(|record| async move { record })
            .collect::<Vec<_>>()
            .await;
        debug!(
            "built type chart from {} of {} types",
            records.len(),
            listing.results.len()
        );
        Ok(Arc::new(build_type_chart(&listing.results, &records)))
    }
}

#[async_trait]
impl DataStore for PokeApiDataStore {
    async fn load_creature(&self, name_or_id: &str) -> Result<CreatureData, DataError> {
        let url = self.config.resource_url("pokemon", name_or_id);
        let raw = self.fetch::<RawPokemon>(&url).await?;
        Ok(normalize_creature(raw))
    }

    async fn load_move(&self, name_or_id: &str) -> Result<MoveData, DataError> {
        let url = self.config.resource_url("move", name_or_id);
        let raw = self.fetch::<RawMove>(&url).await?;
        Ok(normalize_move(raw))
    }

    async fn get_type_chart(&self) -> Result<Arc<TypeChart>, DataError> {
        self.type_chart
            .get_or_try_init(|| self.build_type_chart())
            .await
            .cloned()
    }
}

#[async_trait]
impl ProfileDataStore for PokeApiDataStore {
    async fn load_profile(&self, name_or_id: &str) -> Result<CreatureProfile, DataError> {
        let url = self.config.resource_url("pokemon", name_or_id);
        let raw = self.fetch::<RawPokemon>(&url).await?;
        let species = self.fetch::<RawSpecies>(&raw.species.url).await?;
        let evolution_chain = match species.evolution_chain {
            Some(chain) => {
                let chain = self.fetch::<RawEvolutionChain>(&chain.url).await?;
                flatten_evolution_chain(&chain.chain)
            }
            None => Vec::new(),
        };
        Ok(normalize_profile(raw, evolution_chain))
    }
}
