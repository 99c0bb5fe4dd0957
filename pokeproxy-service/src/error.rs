use axum::{
    Json,
    http::StatusCode,
    response::{
        IntoResponse,
        Response,
    },
};
use log::warn;
use pokeproxy_data::DataError;
use pokeproxy_sim::BattleError;
use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

/// An error returned by a route.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Data(#[from] DataError),
    #[error(transparent)]
    Battle(#[from] BattleError),
}

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Data(_) | Self::Battle(BattleError::Data(_)) => StatusCode::BAD_GATEWAY,
            Self::Battle(BattleError::InvalidOptions(_)) => StatusCode::BAD_REQUEST,
        }
    }
}

/// JSON body of an error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status == StatusCode::BAD_GATEWAY {
            warn!("request failed due to upstream error: {self}");
        }
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
