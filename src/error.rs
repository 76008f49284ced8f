use thiserror::Error;

#[derive(Debug, Error)]
pub enum PokedexError {
    #[error("malformed reference data: {0}")]
    SourceData(String),

    #[error("no catalogue label contains anchor `{anchor}`")]
    UnmatchedAnchor { anchor: String },

    #[error("could not resolve {0}")]
    Resolution(String),

    #[error("failed to fetch {resource}")]
    Gateway {
        resource: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("failed to parse dataset {name}")]
    Dataset {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read dataset {name}")]
    DatasetIo {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

impl PokedexError {
    pub fn gateway(
        resource: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Gateway {
            resource: resource.into(),
            source: source.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PokedexError>;
