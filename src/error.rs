use std::path::PathBuf;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Bad or missing command line input, detected before any I/O
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("could not fetch comments for video '{video_id}': {source}")]
    SourceUnavailable {
        video_id: String,
        #[source]
        source: BoxError,
    },

    #[error("failed to write '{}': {source}", .path.display())]
    OutputWriteFailure {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to classify comment '{comment_id}': {source}")]
    Processing {
        comment_id: String,
        #[source]
        source: comment_sentiment::ClassifyError,
    },
}

impl Error {
    /// Process exit status for this error. Each kind gets its own code.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::InvalidArgument(_) => 2,
            Error::SourceUnavailable { .. } => 3,
            Error::OutputWriteFailure { .. } => 4,
            Error::Processing { .. } => 5,
        }
    }
}
