//! Error types raised while configuring and starting the rig.
//!
//! Nothing in the per-tick path returns these; geometric misses are handled
//! in place.

use std::path::PathBuf;

use thiserror::Error;

/// Startup and configuration failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("zoom range is empty: min {min} > max {max}")]
    EmptyZoomRange { min: f32, max: f32 },

    #[error("{field} must be finite and non-negative, got {value}")]
    InvalidScalar { field: &'static str, value: f32 },

    #[error("ground plane normal has no length")]
    DegeneratePlaneNormal,

    #[error("viewport must have a positive size, got {width}x{height}")]
    EmptyViewport { width: f32, height: f32 },

    #[error("near clip {near} must be positive and below far clip {far}")]
    InvalidClipRange { near: f32, far: f32 },

    #[error("there is more than one crosshair controller in the scene")]
    DuplicateController,
}

pub type Result<T> = std::result::Result<T, ConfigError>;
