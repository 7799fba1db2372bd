use scenegraft_common::SnoId;

/// Failures that abort generation. No world is produced.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("no world template with id {0}")]
    TemplateNotFound(SnoId),
    #[error("world {0} has no entrance tile to build a fallback room from")]
    NoEntranceTile(SnoId),
    #[error("scene template {0} not found")]
    SceneTemplateNotFound(SnoId),
}

/// Errors from loading generator configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
