use serde::{Deserialize, Serialize};

use crate::error::{DimensionKind, FocalCropError};

/// Pixel dimensions of a source image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageSize {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl ImageSize {
    /// Create a size from pixel dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width divided by height.
    pub fn ratio(&self) -> f64 {
        self.width / self.height
    }

    pub(crate) fn validate(&self) -> Result<(), FocalCropError> {
        validate_dimensions(DimensionKind::Image, self.width, self.height)
    }
}

impl From<(u32, u32)> for ImageSize {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width as f64, height as f64)
    }
}

/// Desired output size. Only the aspect ratio is used for cropping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetSize {
    /// Requested width.
    pub width: f64,
    /// Requested height.
    pub height: f64,
}

impl TargetSize {
    /// Create a target size. Any unit works; only the ratio matters.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width divided by height.
    pub fn ratio(&self) -> f64 {
        self.width / self.height
    }

    pub(crate) fn validate(&self) -> Result<(), FocalCropError> {
        validate_dimensions(DimensionKind::Target, self.width, self.height)
    }
}

impl From<(u32, u32)> for TargetSize {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width as f64, height as f64)
    }
}

fn validate_dimensions(kind: DimensionKind, width: f64, height: f64) -> Result<(), FocalCropError> {
    // `!(x > 0.0)` also rejects NaN
    if !(width > 0.0 && height > 0.0) || !width.is_finite() || !height.is_finite() {
        return Err(FocalCropError::InvalidDimensions {
            kind,
            width,
            height,
        });
    }
    Ok(())
}

/// Visually important location of an image, as a percentage of its width
/// and height. (0, 0) is the top-left corner, (100, 100) the bottom-right.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FocalPoint {
    /// Horizontal position, 0 to 100.
    pub x: f64,
    /// Vertical position, 0 to 100.
    pub y: f64,
}

impl FocalPoint {
    /// The middle of the image.
    pub const CENTER: FocalPoint = FocalPoint { x: 50.0, y: 50.0 };

    /// Create a focal point from percentages.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Degenerate area of interest located at this point in `image` pixels.
    pub fn to_area_of_interest(&self, image: ImageSize) -> AreaOfInterest {
        AreaOfInterest::point(self.x / 100.0 * image.width, self.y / 100.0 * image.height)
    }
}

impl Default for FocalPoint {
    fn default() -> Self {
        Self::CENTER
    }
}

/// Salient region of an image in pixel coordinates, typically produced by a
/// detector. A zero-sized area is treated as a single point.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AreaOfInterest {
    /// Left edge in pixels.
    pub x: f64,
    /// Top edge in pixels.
    pub y: f64,
    /// Width in pixels; may be zero.
    pub width: f64,
    /// Height in pixels; may be zero.
    pub height: f64,
}

impl AreaOfInterest {
    /// Create an area from its top-left corner and size.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Zero-sized area at `(x, y)`.
    pub fn point(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0, 0.0)
    }

    /// Zero-sized area at the middle of `image`. Used when detection fails.
    pub fn image_center(image: ImageSize) -> Self {
        Self::point(image.width / 2.0, image.height / 2.0)
    }

    /// Center of the area as `(x, y)`.
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Multiply every coordinate by the per-axis factors.
    pub fn scale(&self, scale_x: f64, scale_y: f64) -> Self {
        Self::new(
            self.x * scale_x,
            self.y * scale_y,
            self.width * scale_x,
            self.height * scale_y,
        )
    }
}

/// Crop rectangle in source image pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropRect {
    /// Left edge in pixels.
    pub x: f64,
    /// Top edge in pixels.
    pub y: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl CropRect {
    /// Create a rectangle from its top-left corner and size.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Center of the rectangle as `(x, y)`.
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}
