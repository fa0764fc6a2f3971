use thiserror::Error;

/// Errors surfaced at the crate boundary.
///
/// The water chemistry itself never fails; these cover key lookups and the CLI adapter.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unknown {kind} '{key}'")]
    UnknownSpecies { kind: &'static str, key: String },

    #[error("Invalid batch volume {0} L: must be a positive number of liters")]
    InvalidVolume(f64),

    #[cfg(feature = "cli")]
    #[error("Error reading from stdin: {source}")]
    ReadStdin {
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Error reading file '{path}': {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Invalid JSON for --plan-json: {source}")]
    ParsePlanJson {
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Invalid JSON in plan document: {source}")]
    ParsePlanDocument {
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Could not serialize output to JSON: {source}")]
    SerializeOutput {
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Missing input data: provide --plan or --plan-json")]
    MissingInputData,
}
