use thiserror::Error;

/// Which value carried the rejected dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DimensionKind {
    /// Source image size.
    #[error("image")]
    Image,
    /// Requested output size.
    #[error("target")]
    Target,
}

/// Errors returned by cropping, analysis and publishing.
#[derive(Debug, Error)]
pub enum FocalCropError {
    /// An image or target size was zero, negative, NaN or infinite.
    #[error("{kind} dimensions must be positive and finite, got {width}x{height}")]
    InvalidDimensions {
        /// Whether the image or the target size was rejected.
        kind: DimensionKind,
        /// Rejected width.
        width: f64,
        /// Rejected height.
        height: f64,
    },

    /// The image bytes could not be decoded.
    #[error("failed to decode image: {0}")]
    DecodeError(String),

    /// The decoded image has zero width or height.
    #[error("image dimensions are zero")]
    ZeroDimensions,

    /// `max_analysis_dimension` was set to zero.
    #[error("max analysis dimension must be > 0")]
    InvalidMaxDimension,

    /// A detection model could not be read or parsed.
    #[error("failed to load face detection model: {0}")]
    ModelLoadError(String),

    /// The [`VersionHistory`](crate::VersionHistory) lookup failed.
    #[error("version history lookup failed: {0}")]
    History(String),
}
