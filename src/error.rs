use thiserror::Error;

/// Rejected [`PetConfig`](crate::PetConfig) values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("idle threshold must be positive, got {0} ms")]
    IdleThreshold(f64),
    #[error("animation timestep must be positive and finite, got {0} s")]
    Timestep(f64),
    #[error("wander period must be positive, got {0} s")]
    WanderPeriod(f64),
    #[error("damping must lie strictly between 0 and 1, got {0}")]
    Damping(f32),
    #[error("attraction must be positive, got {0}")]
    Attraction(f32),
    #[error("scale must be positive and finite, got {0}")]
    Scale(f32),
    #[error("margin must be non-negative and finite, got {0}")]
    Margin(f32),
    #[error("deadband must be non-negative and finite, got {0}")]
    Deadband(f32),
}

/// Reasons a pet could not be mounted. Mounting is cosmetic, so callers usually log these and
/// carry on.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MountError {
    #[error("invalid pet configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),
}

#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("failed to tessellate shape: {0:?}")]
    Tessellation(lyon::tessellation::TessellationError),
}

impl From<lyon::tessellation::TessellationError> for CanvasError {
    fn from(value: lyon::tessellation::TessellationError) -> Self {
        CanvasError::Tessellation(value)
    }
}
