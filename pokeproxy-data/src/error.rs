use thiserror::Error;

/// An error that occurs while loading data from the reference data source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    /// The data source could not be reached, or it answered with a non-success status.
    #[error("upstream unavailable: {resource} ({reason})")]
    UpstreamUnavailable { resource: String, reason: String },
    /// The data source answered, but the payload is missing an expected field.
    #[error("unexpected upstream data for {resource}: {reason}")]
    UpstreamShapeMismatch { resource: String, reason: String },
}

impl DataError {
    pub fn unavailable<R, S>(resource: R, reason: S) -> Self
    where
        R: Into<String>,
        S: Into<String>,
    {
        Self::UpstreamUnavailable {
            resource: resource.into(),
            reason: reason.into(),
        }
    }

    pub fn shape_mismatch<R, S>(resource: R, reason: S) -> Self
    where
        R: Into<String>,
        S: Into<String>,
    {
        Self::UpstreamShapeMismatch {
            resource: resource.into(),
            reason: reason.into(),
        }
    }

    /// The upstream resource the error refers to.
    pub fn resource(&self) -> &str {
        match self {
            Self::UpstreamUnavailable { resource, .. }
            | Self::UpstreamShapeMismatch { resource, .. } => resource,
        }
    }
}
