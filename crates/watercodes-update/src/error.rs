use watercodes_common::error::CommonError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Common(#[from] CommonError),

    #[error("config error: {0}")]
    Config(String),

    #[error("invalid batch {path}: {source}")]
    Batch {
        path: String,
        source: serde_json::Error,
    },
}
