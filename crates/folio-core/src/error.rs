//! Error taxonomy for folio.

use thiserror::Error;

/// Errors produced by the folio core.
///
/// Every failure is terminal for the current invocation: there are no
/// retries and no partial results.
#[derive(Debug, Error)]
pub enum FolioError {
    /// The record resource could not be read from disk.
    #[error("failed to read record source {path}")]
    SourceRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The record resource could not be fetched over HTTP.
    #[error("failed to fetch record source {url}")]
    SourceFetch {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The record resource is not a JSON array of project records.
    #[error("record source is not valid catalogue JSON")]
    MalformedData {
        #[source]
        source: serde_json::Error,
    },

    /// `folio.toml` exists but could not be loaded.
    #[error("config file {path} could not be loaded")]
    ConfigParse {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl FolioError {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::ConfigParse { .. } => "E1002",
            Self::SourceRead { .. } => "E1101",
            Self::SourceFetch { .. } => "E1102",
            Self::MalformedData { .. } => "E1103",
        }
    }

    /// Remediation hint surfaced to operators.
    #[must_use]
    pub const fn suggestion(&self) -> &'static str {
        match self {
            Self::ConfigParse { .. } => "Fix syntax in folio.toml and retry.",
            Self::SourceRead { .. } => "Check the source path or pass --source.",
            Self::SourceFetch { .. } => "Check the source URL and network connectivity.",
            Self::MalformedData { .. } => "The source must be a JSON array of project records.",
        }
    }
}
