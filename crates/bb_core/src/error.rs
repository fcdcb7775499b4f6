use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
    /// Input that does not deserialize into the required document
    /// shape (missing `roster`/`name`/`costs`/`forces`, or a type
    /// mismatch). Fatal: the run produces no partial output.
    #[error("malformed roster input: {0}")]
    MalformedInput(String),
}

impl From<serde_json::Error> for RosterError {
    fn from(err: serde_json::Error) -> Self {
        RosterError::MalformedInput(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
