use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("layout needs at least one instance")]
    EmptyLayout,
    #[error("layout supports at most {max} instances, got {count}")]
    TooManyInstances { count: usize, max: usize },
}

/// Failures reported by the engine side of the boundary (asset fetch/parse).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("failed to fetch model {path}: {reason}")]
    Fetch { path: String, reason: String },
    #[error("failed to parse model {path}: {reason}")]
    Parse { path: String, reason: String },
    #[error("model {path} contains no renderable geometry")]
    NoGeometry { path: String },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ControllerError {
    #[error("model load failed: {0}")]
    Load(#[from] EngineError),
    #[error(transparent)]
    Layout(#[from] LayoutError),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("min_instances must be at least 1")]
    ZeroMinimum,
    #[error("min_instances ({min}) exceeds max_instances ({max})")]
    MinAboveMax { min: usize, max: usize },
    #[error("layout spacing must be positive, got {0}")]
    NonPositiveSpacing(f32),
    #[error("billboard sizes must be positive")]
    NonPositiveMarkerSize,
    #[error("layout places at most {layout} instances, but max_instances is {max}")]
    LayoutTooSmall { layout: usize, max: usize },
    #[error("action bound to button {0}, but only {1} buttons are configured")]
    UnknownButton(u32, usize),
}
