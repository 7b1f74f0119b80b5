use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("failed to load model {path}: {message}")]
    ModelLoad { path: String, message: String },

    #[error("model produced no output")]
    NoOutput,

    #[error("model produced {actual} scores but {expected} labels are configured")]
    LabelCountMismatch { expected: usize, actual: usize },

    #[error("inference failed: {0}")]
    Inference(String),
}
