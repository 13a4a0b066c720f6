/// Result type alias for the conversion core
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the conversion core
///
/// Every variant is fatal to the current conversion: no partial output is
/// produced and nothing is retried. The CLI layer translates these into exit
/// codes and messages.
#[derive(Debug)]
pub enum Error {
    /// Fetching or parsing the source document failed
    DocumentLoad { uri: String, message: String },
    /// A named schema fragment is not valid JSON or not schema-shaped
    Parse { model: String, message: String },
    /// A named schema fragment has no `properties` member
    MissingProperties { model: String },
    /// A response declares no `application/json` body
    MissingJsonBody { method: String, status: String },
    /// The output document could not be serialized
    Serialization(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::DocumentLoad { uri, message } => {
                write!(f, "failed to load document {}: {}", uri, message)
            }
            Error::Parse { model, message } => {
                write!(f, "malformed schema for model {}: {}", model, message)
            }
            Error::MissingProperties { model } => {
                write!(f, "schema for model {} has no properties", model)
            }
            Error::MissingJsonBody { method, status } => {
                write!(
                    f,
                    "{} response {} declares no application/json body",
                    method, status
                )
            }
            Error::Serialization(msg) => write!(f, "serialization error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(format!("JSON error: {}", err))
    }
}
