use thiserror::Error;

/// Everything that can end a run. Each variant maps to a distinct process
/// exit code so the external scheduler can tell failure classes apart.
#[derive(Debug, Error)]
pub enum RunError {
    /// A required secret or environment setting is absent or malformed.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// An upstream service answered, but without the data we need
    /// (no geocoding match, forecast missing required fields).
    #[error("upstream data error: {0}")]
    UpstreamData(String),

    /// The webhook rejected the message.
    #[error("publish failed with status {status}: {body}")]
    Publish { status: u16, body: String },

    /// Anything else: transport failures, timeouts, parse errors.
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl RunError {
    /// Process exit code for this failure class. 0 is reserved for success
    /// (including the weekend skip).
    pub fn exit_code(&self) -> i32 {
        match self {
            RunError::Configuration(_) => 2,
            RunError::UpstreamData(_) => 3,
            RunError::Publish { .. } => 4,
            RunError::Unexpected(_) => 1,
        }
    }
}

/// Cap an upstream response body for inclusion in an error message.
pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        let head: String = body.chars().take(MAX).collect();
        format!("{head}...")
    } else {
        body.to_string()
    }
}
