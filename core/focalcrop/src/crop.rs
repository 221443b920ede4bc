use crate::error::FocalCropError;
use crate::geometry::{AreaOfInterest, CropRect, FocalPoint, ImageSize, TargetSize};

/// Calculate the largest crop of `target`'s aspect ratio that fits in `image`,
/// centered on `interest` as closely as the image bounds allow.
///
/// When the target is narrower than the image, the crop keeps the full height
/// and slides horizontally; otherwise it keeps the full width and slides
/// vertically. Equal ratios take the second branch and return the whole image.
/// A crop that would leave the image is pushed back against the nearest edge
/// along the sliding axis only.
pub fn compute_crop(
    image: ImageSize,
    interest: AreaOfInterest,
    target: TargetSize,
) -> Result<CropRect, FocalCropError> {
    image.validate()?;
    target.validate()?;

    let (center_x, center_y) = interest.center();

    // Ratios are compared and applied by cross-multiplication so that equal
    // ratios stay exact instead of drifting through a rounded quotient.
    let rect = if target.width * image.height < image.width * target.height {
        // Target is narrower than the source: full height, crop width
        let height = image.height;
        let width = (image.height * target.width / target.height).min(image.width);
        let x = clamp_offset(center_x - width / 2.0, width, image.width);
        CropRect::new(x, 0.0, width, height)
    } else {
        // Target is taller than (or equal to) the source: full width, crop height
        let width = image.width;
        let height = (image.width * target.height / target.width).min(image.height);
        let y = clamp_offset(center_y - height / 2.0, height, image.height);
        CropRect::new(0.0, y, width, height)
    };

    Ok(rect)
}

/// [`compute_crop`] for a stored percentage focal point.
pub fn compute_focal_crop(
    image: ImageSize,
    focal_point: FocalPoint,
    target: TargetSize,
) -> Result<CropRect, FocalCropError> {
    compute_crop(image, focal_point.to_area_of_interest(image), target)
}

/// Convert an area of interest into the percentage focal point at its center.
///
/// The result is clamped to `[0, 100]` on both axes, so an area that spills
/// past the image edge still yields a valid focal point.
pub fn to_focal_point(area: AreaOfInterest, image: ImageSize) -> Result<FocalPoint, FocalCropError> {
    image.validate()?;

    let (center_x, center_y) = area.center();
    Ok(FocalPoint::new(
        (100.0 * center_x / image.width).clamp(0.0, 100.0),
        (100.0 * center_y / image.height).clamp(0.0, 100.0),
    ))
}

/// Slide `offset` so that `[offset, offset + length]` lies within `[0, limit]`.
///
/// Expects `0 < length <= limit`.
fn clamp_offset(offset: f64, length: f64, limit: f64) -> f64 {
    let mut offset = offset;
    if offset < 0.0 {
        offset = 0.0;
    }
    if offset + length > limit {
        offset = (limit - length).max(0.0);
    }
    // `limit - length` can round up by one ulp; step down until the far edge fits.
    while offset > 0.0 && offset + length > limit {
        offset = f64::from_bits(offset.to_bits() - 1);
    }
    offset
}
