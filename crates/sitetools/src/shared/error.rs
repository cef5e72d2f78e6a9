use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteToolsError {
    #[error("dist directory {0} does not exist, run the Vite build first")]
    DistNotFound(PathBuf),

    #[error(
        "manifest.json not found in {0} (checked .vite/manifest.json and manifest.json). \
         Make sure Vite is configured with build.manifest = true and run the build first."
    )]
    ManifestNotFound(PathBuf),

    #[error("invalid manifest {path}: {source}")]
    InvalidManifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot build the asset pattern: {0}")]
    AssetPattern(#[from] regex::Error),

    #[error("{0} not found, add it and rerun")]
    SourceNotFound(PathBuf),

    #[error("image {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("webp encoding failed for {path}: {message}")]
    Webp { path: PathBuf, message: String },

    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SiteToolsError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SiteToolsError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn image(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        SiteToolsError::Image {
            path: path.into(),
            source,
        }
    }
}
