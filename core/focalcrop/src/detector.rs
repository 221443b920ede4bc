use image::DynamicImage;
use thiserror::Error;

use crate::geometry::AreaOfInterest;

/// Why an area-of-interest detector could not produce a result.
///
/// Detection errors are recoverable: the analyzer logs them and falls back
/// to the image center.
#[derive(Debug, Error)]
pub enum DetectionError {
    /// The detector backend could not be reached or is not configured.
    #[error("detector unavailable: {0}")]
    Unavailable(String),

    /// The backend refused the request.
    #[error("detector rejected the image ({code}): {message}")]
    Rejected {
        /// Backend-specific error code.
        code: String,
        /// Human-readable description.
        message: String,
    },

    /// The backend answered with something that is not an area of interest.
    #[error("invalid detector response: {0}")]
    InvalidResponse(String),
}

/// Pluggable salient-region detection backend.
///
/// Implement this trait to call a cloud vision service, a local model, or
/// anything else that can locate the important part of an image, and pass
/// it to [`crate::FocalPointAnalyzer::detector`] or
/// [`crate::PublishHook::detector`].
pub trait AreaOfInterestDetector: Send + Sync {
    /// Locate the area of interest in `image`, in that image's pixels.
    ///
    /// Returns `Ok(None)` when the detector ran but found nothing.
    fn detect(&self, image: &DynamicImage) -> Result<Option<AreaOfInterest>, DetectionError>;
}
