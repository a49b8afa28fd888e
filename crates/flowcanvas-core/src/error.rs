pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("duplicate step id: {id}")]
    DuplicateStepId { id: String },

    #[error("step id must not be empty (parent step: {parent})")]
    EmptyStepId { parent: String },

    #[error("invalid canvas config: {message}")]
    InvalidConfig { message: String },

    #[error("flow definition JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("flow definition YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
