use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ViewerError>;

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("Cannot load {}.", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Cannot list {}.", .path.display())]
    ListFolder {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("{} contains no entries.", .path.display())]
    EmptyFolder { path: PathBuf },

    #[error("no image is loaded")]
    NoImage,

    #[error("model `{0}` is not configured")]
    UnknownModel(String),

    #[error("failed to start `{program}`: {source}")]
    ModelLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },
}
