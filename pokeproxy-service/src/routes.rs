use std::sync::Arc;

use axum::{
    Json,
    Router,
    extract::{
        Path,
        State,
    },
    routing::{
        get,
        post,
    },
};
use pokeproxy_data::{
    CreatureProfile,
    DataStore,
    MoveData,
    ProfileDataStore,
};
use pokeproxy_sim::{
    BattleOptions,
    BattleOutcome,
    simulate_battle,
};

use crate::{
    ResourceManifest,
    ServiceError,
    resource_manifest,
};

/// State shared by all routes.
#[derive(Clone)]
pub struct AppState {
    data: Arc<dyn ProfileDataStore>,
}

impl AppState {
    pub fn new(data: Arc<dyn ProfileDataStore>) -> Self {
        Self { data }
    }
}

/// Builds the router serving every route.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/pokemon/{name_or_id}", get(get_pokemon))
        .route("/pokemon/move/{name_or_id}", get(get_move))
        .route("/battle/simulate", post(simulate))
        .route("/.well-known/mcp-resources", get(list_resources))
        .with_state(state)
}

async fn get_pokemon(
    State(state): State<AppState>,
    Path(name_or_id): Path<String>,
) -> Result<Json<CreatureProfile>, ServiceError> {
    Ok(Json(state.data.load_profile(&name_or_id).await?))
}

async fn get_move(
    State(state): State<AppState>,
    Path(name_or_id): Path<String>,
) -> Result<Json<MoveData>, ServiceError> {
    Ok(Json(state.data.load_move(&name_or_id).await?))
}

async fn simulate(
    State(state): State<AppState>,
    Json(options): Json<BattleOptions>,
) -> Result<Json<BattleOutcome>, ServiceError> {
    Ok(Json(simulate_battle(state.data.as_ref(), &options).await?))
}

async fn list_resources() -> Json<ResourceManifest> {
    Json(resource_manifest())
}
