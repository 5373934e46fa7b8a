use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A remote metadata fetch failed for the given asset identifier.
    ///
    /// Recoverable: the identifier stays unresolved and is retried by the
    /// next resolution pass that encounters it.
    #[error("metadata fetch failed for {asset_id}: {source}")]
    MetadataFetch {
        asset_id: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Submitting an offer to the network failed. Surfaced to the caller
    /// verbatim, never retried automatically.
    #[error("offer submission failed: {0}")]
    OfferSubmission(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build a `MetadataFetch` error from any underlying cause.
    pub fn metadata_fetch(
        asset_id: impl Into<String>,
        cause: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Error::MetadataFetch {
            asset_id: asset_id.into(),
            source: cause.into(),
        }
    }
}
