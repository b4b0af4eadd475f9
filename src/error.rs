use std::{fmt, path::PathBuf};

#[derive(Debug)]
pub enum Image2cError {
    /// Wrong number of command line arguments.
    Usage { program: String },
    /// The input could not be opened or is not a supported image.
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
}

impl Image2cError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Image2cError::Usage { .. } => 1,
            Image2cError::Decode { .. } => 1,
        }
    }
}

impl fmt::Display for Image2cError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Image2cError::Usage { program } => write!(f, "Usage: {program} <image_file>"),
            Image2cError::Decode { path, source } => {
                write!(f, "failed to decode {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for Image2cError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Image2cError::Usage { .. } => None,
            Image2cError::Decode { source, .. } => Some(source),
        }
    }
}
