use std::path::PathBuf;

use thiserror::Error;

/// Error raised by a capture or detection backend.
pub type BackendError = Box<dyn std::error::Error + Send + Sync>;

/// Failures that prevent the capture loop from starting.
#[derive(Error, Debug)]
pub enum InitError {
    #[error("unable to access camera {index}: {source}")]
    Camera {
        index: i32,
        #[source]
        source: BackendError,
    },
    #[error("classifier definition {name} not found (searched: {searched})")]
    ClassifierNotFound { name: String, searched: String },
    #[error("failed to load classifier from {}: {source}", path.display())]
    Classifier {
        path: PathBuf,
        #[source]
        source: BackendError,
    },
}

/// The capture stream ended or failed mid-loop.
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("capture stream returned no frame")]
    EndOfStream,
    #[error("unable to read frame: {0}")]
    Backend(String),
}

/// Non-fatal framebuffer failures; the current frame is skipped.
#[derive(Error, Debug)]
pub enum DeviceError {
    #[error("framebuffer {} not found", .0.display())]
    Missing(PathBuf),
    #[error("failed to open framebuffer {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write framebuffer {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("encoded frame is {actual} bytes, expected {expected}")]
    FrameSize { expected: usize, actual: usize },
    #[error("cannot render frame: {0}")]
    InvalidFrame(String),
}
