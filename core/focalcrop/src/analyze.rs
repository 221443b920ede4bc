use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};

use crate::config::{Config, DEFAULT_MAX_ANALYSIS_DIMENSION};
use crate::crop::to_focal_point;
use crate::detector::AreaOfInterestDetector;
use crate::error::FocalCropError;
use crate::geometry::{AreaOfInterest, FocalPoint, ImageSize};

/// Result of analyzing an image for its focal point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocalAnalysis {
    /// Dimensions of the decoded source image.
    pub image_size: ImageSize,

    /// Area of interest in source image pixels.
    pub area_of_interest: AreaOfInterest,

    /// Percentage focal point at the center of the area of interest.
    pub focal_point: FocalPoint,

    /// `false` when no detector was configured, it failed, or it found
    /// nothing, and the image center was used instead.
    pub detected: bool,
}

/// Builder for finding the focal point of an image.
///
/// Decodes the input on [`FocalPointAnalyzer::analyze`], runs the configured
/// detector on a downsized copy, and maps the result back to the source.
///
/// ```no_run
/// use focalcrop::FocalPointAnalyzer;
///
/// let bytes = std::fs::read("photo.jpg").unwrap();
/// let analysis = FocalPointAnalyzer::new(bytes).unwrap().analyze().unwrap();
/// println!("focal point: {:?}", analysis.focal_point);
/// ```
pub struct FocalPointAnalyzer {
    input: Vec<u8>,
    max_analysis_dimension: u32,
    detector: Option<Box<dyn AreaOfInterestDetector>>,
}

impl FocalPointAnalyzer {
    /// Create an analyzer from raw image bytes (JPEG, PNG, or WebP).
    pub fn new(input: Vec<u8>) -> Result<Self, FocalCropError> {
        detect_format(&input)?;

        Ok(Self {
            input,
            max_analysis_dimension: DEFAULT_MAX_ANALYSIS_DIMENSION,
            detector: None,
        })
    }

    /// Apply the analysis settings from `config`.
    pub fn config(mut self, config: &Config) -> Self {
        self.max_analysis_dimension = config.max_analysis_dimension;
        self
    }

    /// Longest side of the image passed to the detector (default: 1024).
    pub fn max_analysis_dimension(mut self, dimension: u32) -> Self {
        self.max_analysis_dimension = dimension;
        self
    }

    /// Detector used to find the area of interest. Without one, the focal
    /// point is the image center.
    pub fn detector(mut self, detector: Box<dyn AreaOfInterestDetector>) -> Self {
        self.detector = Some(detector);
        self
    }

    /// Decode, detect, and return the focal point. Detector failures fall
    /// back to the image center; decode failures are returned as errors.
    pub fn analyze(self) -> Result<FocalAnalysis, FocalCropError> {
        analyze_image(&self.input, self.max_analysis_dimension, self.detector.as_deref())
    }
}

/// Full analysis pipeline: decode → downsize → detect → scale back → focal point.
pub(crate) fn analyze_image(
    input: &[u8],
    max_analysis_dimension: u32,
    detector: Option<&dyn AreaOfInterestDetector>,
) -> Result<FocalAnalysis, FocalCropError> {
    if max_analysis_dimension == 0 {
        return Err(FocalCropError::InvalidMaxDimension);
    }

    let decoded = decode_image(input)?;
    if decoded.width() == 0 || decoded.height() == 0 {
        return Err(FocalCropError::ZeroDimensions);
    }
    let image_size = ImageSize::from((decoded.width(), decoded.height()));

    let analysis_image = downsize(&decoded, max_analysis_dimension);
    let detected = detector.and_then(|detector| {
        match detector.detect(&analysis_image) {
            Ok(area) => area,
            Err(err) => {
                tracing::warn!(error = %err, "area of interest detection failed, using image center");
                None
            }
        }
    });

    let (area_of_interest, detected) = match detected {
        Some(area) => {
            let scale_x = decoded.width() as f64 / analysis_image.width() as f64;
            let scale_y = decoded.height() as f64 / analysis_image.height() as f64;
            (area.scale(scale_x, scale_y), true)
        }
        None => (AreaOfInterest::image_center(image_size), false),
    };

    let focal_point = to_focal_point(area_of_interest, image_size)?;
    tracing::debug!(
        x = focal_point.x,
        y = focal_point.y,
        detected,
        "computed focal point"
    );

    Ok(FocalAnalysis {
        image_size,
        area_of_interest,
        focal_point,
        detected,
    })
}

/// Decode input bytes into a `DynamicImage`.
pub(crate) fn decode_image(input: &[u8]) -> Result<DynamicImage, FocalCropError> {
    image::load_from_memory(input).map_err(|e| FocalCropError::DecodeError(e.to_string()))
}

/// Detect the input image format from the raw bytes.
pub(crate) fn detect_format(input: &[u8]) -> Result<ImageFormat, FocalCropError> {
    image::guess_format(input).map_err(|e| FocalCropError::DecodeError(e.to_string()))
}

/// Dimensions with the longer side at `max_dimension`, aspect preserved.
/// Images already within the limit keep their size.
pub(crate) fn analysis_dimensions(width: u32, height: u32, max_dimension: u32) -> (u32, u32) {
    if width <= max_dimension && height <= max_dimension {
        return (width, height);
    }

    // u64 keeps width * max_dimension from overflowing on huge images
    if height > width {
        let w = (width as u64 * max_dimension as u64 / height as u64) as u32;
        (w.max(1), max_dimension)
    } else {
        let h = (height as u64 * max_dimension as u64 / width as u64) as u32;
        (max_dimension, h.max(1))
    }
}

fn downsize(image: &DynamicImage, max_dimension: u32) -> DynamicImage {
    let (width, height) = analysis_dimensions(image.width(), image.height(), max_dimension);
    if (width, height) == (image.width(), image.height()) {
        return image.clone();
    }
    image.resize_exact(width, height, FilterType::Triangle)
}
