//! Error types for the renderer.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A renderer setting is out of its valid range
    #[error("Invalid configuration: {name} must be at least 1, got {value}")]
    InvalidConfiguration { name: &'static str, value: u32 },

    /// Dedicated worker pool could not be created
    #[error("Failed to build render thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
