use std::fmt;

use crate::crop::compute_focal_crop;
use crate::error::FocalCropError;
use crate::geometry::{CropRect, FocalPoint, ImageSize, TargetSize};

/// Image-service query parameters for a focal crop.
///
/// Renders as `crop=X,Y,W,H&width=W'&height=H'`. The service crops to the
/// rectangle first and then resizes; `W'` is `W + X` while the crop offset is
/// smaller than the requested width and the requested width otherwise (same
/// rule for `H'` with `Y`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropQuery {
    /// Rectangle to cut from the source image.
    pub crop: CropRect,
    /// Width to resize the cropped image to.
    pub width: f64,
    /// Height to resize the cropped image to.
    pub height: f64,
}

impl CropQuery {
    /// Derive the output size for an already computed crop.
    pub fn new(crop: CropRect, target: TargetSize) -> Self {
        let width = if crop.x < target.width {
            crop.width + crop.x
        } else {
            target.width
        };
        let height = if crop.y < target.height {
            crop.height + crop.y
        } else {
            target.height
        };
        Self {
            crop,
            width,
            height,
        }
    }

    /// Compute the crop around `focal_point` and derive its query.
    pub fn for_focal_point(
        image: ImageSize,
        focal_point: FocalPoint,
        target: TargetSize,
    ) -> Result<Self, FocalCropError> {
        let crop = compute_focal_crop(image, focal_point, target)?;
        Ok(Self::new(crop, target))
    }
}

impl fmt::Display for CropQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let CropRect {
            x,
            y,
            width,
            height,
        } = self.crop;
        write!(
            f,
            "crop={x},{y},{width},{height}&width={}&height={}",
            self.width, self.height
        )
    }
}

/// Builder for an image-service URL that resizes, and optionally
/// focal-crops, an image.
///
/// ```
/// use focalcrop::{FocalPoint, ImageSize, ResizedImageUrl};
///
/// let url = ResizedImageUrl::new("/globalassets/cat.jpg")
///     .width(50)
///     .height(50)
///     .smart_crop(FocalPoint::new(25.0, 50.0), ImageSize::new(100.0, 50.0))
///     .build()
///     .unwrap();
/// assert_eq!(url, "/globalassets/cat.jpg?crop=0,0,50,50&width=50&height=50&mode=crop");
/// ```
#[derive(Debug, Clone)]
pub struct ResizedImageUrl<'a> {
    base_url: &'a str,
    width: Option<u32>,
    height: Option<u32>,
    smart_crop: Option<(FocalPoint, ImageSize)>,
}

impl<'a> ResizedImageUrl<'a> {
    /// Start from the URL of the original image.
    pub fn new(base_url: &'a str) -> Self {
        Self {
            base_url,
            width: None,
            height: None,
            smart_crop: None,
        }
    }

    /// Requested output width in pixels.
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Requested output height in pixels.
    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    /// Crop around `focal_point` of an image of `image` size. Only applied
    /// when both width and height are requested.
    pub fn smart_crop(mut self, focal_point: FocalPoint, image: ImageSize) -> Self {
        self.smart_crop = Some((focal_point, image));
        self
    }

    /// Render the URL. Returns `base_url` unchanged when no size was requested.
    ///
    /// Fails only when a smart crop carries invalid image or target dimensions.
    pub fn build(&self) -> Result<String, FocalCropError> {
        let mut parameters = Vec::new();

        match (self.width, self.height, self.smart_crop) {
            (Some(width), Some(height), Some((focal_point, image))) => {
                let target = TargetSize::from((width, height));
                let query = CropQuery::for_focal_point(image, focal_point, target)?;
                parameters.push(query.to_string());
            }
            _ => {
                if let Some(width) = self.width {
                    parameters.push(format!("width={width}"));
                }
                if let Some(height) = self.height {
                    parameters.push(format!("height={height}"));
                }
            }
        }

        if self.width.is_some() && self.height.is_some() {
            parameters.push("mode=crop".to_string());
        }

        if parameters.is_empty() {
            return Ok(self.base_url.to_string());
        }

        let separator = if self.base_url.contains('?') { '&' } else { '?' };
        Ok(format!("{}{separator}{}", self.base_url, parameters.join("&")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_without_offset_keeps_crop_size() {
        let query = CropQuery::new(CropRect::new(0.0, 0.0, 50.0, 50.0), TargetSize::new(50.0, 50.0));
        assert_eq!(query.to_string(), "crop=0,0,50,50&width=50&height=50");
    }

    #[test]
    fn small_offset_is_added_to_output_size() {
        // y=50 is not below the requested height 50, so height falls back to 50
        let query = CropQuery::new(CropRect::new(0.0, 50.0, 50.0, 50.0), TargetSize::new(50.0, 50.0));
        assert_eq!(query.width, 50.0);
        assert_eq!(query.height, 50.0);

        // y=10 is below the requested height 300, so height becomes 200 + 10
        let query = CropQuery::new(CropRect::new(0.0, 10.0, 400.0, 200.0), TargetSize::new(600.0, 300.0));
        assert_eq!(query.height, 210.0);
        assert_eq!(query.to_string(), "crop=0,10,400,200&width=400&height=210");
    }

    #[test]
    fn large_offset_uses_requested_size() {
        let query = CropQuery::new(CropRect::new(200.0, 0.0, 600.0, 600.0), TargetSize::new(100.0, 100.0));
        assert_eq!(query.width, 100.0);
        assert_eq!(query.height, 600.0);
    }

    #[test]
    fn fractional_values_are_rendered() {
        let query = CropQuery::new(CropRect::new(12.5, 0.0, 75.0, 50.0), TargetSize::new(3.0, 2.0));
        assert_eq!(query.to_string(), "crop=12.5,0,75,50&width=3&height=50");
    }

    #[test]
    fn query_for_focal_point() {
        // 800x600 centered, 4:3 target equals the image ratio → full image
        let query = CropQuery::for_focal_point(
            ImageSize::new(800.0, 600.0),
            FocalPoint::CENTER,
            TargetSize::new(400.0, 300.0),
        )
        .unwrap();
        assert_eq!(query.to_string(), "crop=0,0,800,600&width=800&height=600");
    }

    #[test]
    fn url_with_width_only() {
        let url = ResizedImageUrl::new("test_url").width(100).build().unwrap();
        assert_eq!(url, "test_url?width=100");
    }

    #[test]
    fn url_with_both_dimensions_without_smart_crop() {
        let url = ResizedImageUrl::new("test_url").width(100).height(80).build().unwrap();
        assert_eq!(url, "test_url?width=100&height=80&mode=crop");
    }

    #[test]
    fn url_smart_crop_needs_both_dimensions() {
        let url = ResizedImageUrl::new("test_url")
            .height(80)
            .smart_crop(FocalPoint::CENTER, ImageSize::new(800.0, 600.0))
            .build()
            .unwrap();
        assert_eq!(url, "test_url?height=80");
    }

    #[test]
    fn url_appends_to_existing_query() {
        let url = ResizedImageUrl::new("/img.png?v=2")
            .width(200)
            .height(100)
            .smart_crop(FocalPoint::CENTER, ImageSize::new(800.0, 600.0))
            .build()
            .unwrap();
        // 800x600 into 2:1 → full width, height 400, centered y = 300 - 200 = 100.
        // y is not below the requested height 100, so height stays 100.
        assert_eq!(
            url,
            "/img.png?v=2&crop=0,100,800,400&width=800&height=100&mode=crop"
        );
    }

    #[test]
    fn url_without_parameters_is_unchanged() {
        let url = ResizedImageUrl::new("test_url").build().unwrap();
        assert_eq!(url, "test_url");
    }

    #[test]
    fn url_rejects_invalid_image_size() {
        let result = ResizedImageUrl::new("test_url")
            .width(10)
            .height(10)
            .smart_crop(FocalPoint::CENTER, ImageSize::new(0.0, 0.0))
            .build();
        assert!(result.is_err());
    }
}
