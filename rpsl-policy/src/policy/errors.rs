use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Error parsing incoming JSON context {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Error parsing incoming YAML context {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("I/O error when reading {0}")]
    IoError(#[from] std::io::Error),
    #[error("Illegal keys: {keys:?} in clause `{clause}`")]
    UnrecognizedClause { keys: Vec<String>, clause: String },
    #[error("Malformed `{field}` in clause `{clause}`: {reason}")]
    MalformedClause {
        field: String,
        clause: String,
        reason: String,
    },
    #[error("{0}")]
    IllegalArguments(String),
}
