use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("report rendering failed: {0}")]
    Render(String),

    #[error("report template parse error: {0}")]
    TemplateParse(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<tera::Error> for ReportError {
    fn from(e: tera::Error) -> Self {
        ReportError::Render(e.to_string())
    }
}
