use pokeproxy_data::DataError;
use thiserror::Error;

/// Error that aborts a battle simulation before any turn is played.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BattleError {
    #[error(transparent)]
    Data(#[from] DataError),
    #[error("invalid battle options: {0}")]
    InvalidOptions(String),
}
