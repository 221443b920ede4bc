//! Focal-point aware cropping for image assets.
//!
//! An image gets a focal point once, when it is published: a pluggable
//! [`AreaOfInterestDetector`] finds the salient region and the library stores
//! its center as percentages of the image size. At render time,
//! [`compute_crop`] turns that focal point into the largest crop of any
//! aspect ratio that stays centered on it, and [`CropQuery`] /
//! [`ResizedImageUrl`] serialize the crop for an image-resizing service.
//!
//! # Example
//!
//! ```
//! use focalcrop::{compute_crop, AreaOfInterest, CropRect, ImageSize, TargetSize};
//!
//! let crop = compute_crop(
//!     ImageSize::new(100.0, 50.0),
//!     AreaOfInterest::point(25.0, 25.0),
//!     TargetSize::new(50.0, 50.0),
//! )
//! .unwrap();
//! assert_eq!(crop, CropRect::new(0.0, 0.0, 50.0, 50.0));
//! ```
#![warn(missing_docs)]

mod analyze;
mod config;
mod crop;
/// Area-of-interest detection trait and error type.
pub mod detector;
mod error;
mod geometry;
mod publish;
mod query;
#[cfg(feature = "rustface")]
/// Built-in SeetaFace-based area-of-interest detector.
pub mod rustface_backend;

/// Focal point analysis of encoded images.
pub use analyze::{FocalAnalysis, FocalPointAnalyzer};
/// Publish-time settings.
pub use config::{Config, DEFAULT_MAX_ANALYSIS_DIMENSION};
/// Crop rectangle computation.
pub use crop::{compute_crop, compute_focal_crop, to_focal_point};
/// Detector trait and its recoverable error.
pub use detector::{AreaOfInterestDetector, DetectionError};
/// Error type returned by focalcrop operations.
pub use error::{DimensionKind, FocalCropError};
/// Geometry value types.
pub use geometry::{AreaOfInterest, CropRect, FocalPoint, ImageSize, TargetSize};
/// Pre-publish hook and the content model it works on.
pub use publish::{
    ContentId, FocalImage, PublishHook, PublishOutcome, PublishedVersion, SkipReason,
    VersionHistory,
};
/// Image-service URL parameters.
pub use query::{CropQuery, ResizedImageUrl};
#[cfg(feature = "rustface")]
/// Built-in detector that loads a SeetaFace model.
pub use rustface_backend::RustfaceDetector;
