#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("no workspace folder found at {0}")]
    NoWorkspace(String),

    #[error("{0} is not a Git repository")]
    NotARepository(String),

    #[error("ollama could not be found, install it and try again")]
    ToolNotFound,

    #[error("model service is not reachable at {0}")]
    ServiceUnavailable(String),

    #[error("failed to run command `{command}`: {stderr}")]
    CommandFailed { command: String, stderr: String },

    #[error("no files changed, nothing to describe")]
    NoChanges,

    #[error("request to the model failed: {0}")]
    ModelRequest(String),

    #[error("model returned an empty response")]
    EmptyResponse,

    #[error("no commit message was generated")]
    NoCommitMessage,

    #[error("manual entry aborted, no {field} provided")]
    IncompleteManualEntry { field: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;
