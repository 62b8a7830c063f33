use thiserror::Error;

/// Errors that can occur while building cube geometry. Contract violations
/// (drawing a face twice, pulsing a face that was never drawn) are bugs in the
/// caller and panic instead.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("invalid geometry: cube size must be positive and finite, got {size}")]
    InvalidGeometry { size: f64 },
}
