//! Error types for the publishing pipeline.

use notepress_api::ApiError;

/// Error from a publish run.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    /// The blog API rejected a request or was unreachable.
    #[error("API error")]
    Api(#[from] ApiError),

    /// A referenced local image could not be read.
    #[error("failed to read image '{path}'")]
    Image {
        /// Image path as written in the note.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
