#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("config ({context}): {detail}")]
    Config { context: &'static str, detail: String },

    #[error("input ({context}): {detail}")]
    Input { context: &'static str, detail: String },

    #[error("no fields selected (use --field or `fields` in the config file)")]
    NoFields,

    #[error("{0}")]
    Select(#[from] fieldpick_engine::SelectError),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}
