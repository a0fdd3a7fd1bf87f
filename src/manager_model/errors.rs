use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("ModelError::Io: {0}")]
    Io(String),
    #[error("ModelError::Document: {0}")]
    Document(String),
    #[error("ModelError::SchemaMismatch: model expects {found:?}, features are {expected:?}")]
    SchemaMismatch { expected: Vec<String>, found: Vec<String> },
    #[error("ModelError::InvalidTree: tree {tree}: {msg}")]
    InvalidTree { tree: usize, msg: String },
    #[error("ModelError::Prediction: {0}")]
    Prediction(String),
}
impl From<std::io::Error> for ModelError {
    fn from(e: std::io::Error) -> ModelError {
        ModelError::Io(e.to_string())
    }
}
impl From<serde_json::Error> for ModelError {
    fn from(e: serde_json::Error) -> ModelError {
        ModelError::Document(format!("json document error: {}", e))
    }
}
