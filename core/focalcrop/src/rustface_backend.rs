use std::io::Read;
use std::path::Path;

use image::DynamicImage;

use crate::detector::{AreaOfInterestDetector, DetectionError};
use crate::error::FocalCropError;
use crate::geometry::AreaOfInterest;

/// Area-of-interest detector backed by the `rustface` crate (SeetaFace engine).
///
/// Faces are the area of interest: the detector returns the bounding box of
/// every face it finds, or nothing when the image has no faces.
pub struct RustfaceDetector {
    model: rustface::Model,
    min_face_size: u32,
    score_thresh: f64,
    pyramid_scale_factor: f32,
    slide_window_step: (u32, u32),
}

impl RustfaceDetector {
    /// Load a SeetaFace model from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, FocalCropError> {
        let model = rustface::read_model(reader)
            .map_err(|e| FocalCropError::ModelLoadError(e.to_string()))?;
        Ok(Self {
            model,
            min_face_size: 20,
            score_thresh: 2.0,
            pyramid_scale_factor: 0.8,
            slide_window_step: (4, 4),
        })
    }

    /// Load a SeetaFace model file, e.g. `seeta_fd_frontal_v1.0.bin`.
    pub fn from_model_path(path: impl AsRef<Path>) -> Result<Self, FocalCropError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| {
            FocalCropError::ModelLoadError(format!("{}: {e}", path.display()))
        })?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Faces smaller than this many pixels are ignored (default: 20).
    pub fn min_face_size(mut self, size: u32) -> Self {
        self.min_face_size = size;
        self
    }

    /// Minimum detection score (default: 2.0). Higher values reduce false
    /// positives.
    pub fn score_thresh(mut self, thresh: f64) -> Self {
        self.score_thresh = thresh;
        self
    }

    /// Scale factor between detection pyramid levels (default: 0.8).
    pub fn pyramid_scale_factor(mut self, factor: f32) -> Self {
        self.pyramid_scale_factor = factor;
        self
    }

    /// Sliding window step in pixels (default: 4x4).
    pub fn slide_window_step(mut self, x: u32, y: u32) -> Self {
        self.slide_window_step = (x, y);
        self
    }
}

impl AreaOfInterestDetector for RustfaceDetector {
    fn detect(&self, image: &DynamicImage) -> Result<Option<AreaOfInterest>, DetectionError> {
        let gray = image.to_luma8();
        let (width, height) = gray.dimensions();

        let mut detector = rustface::create_detector_with_model(self.model.clone());
        detector.set_min_face_size(self.min_face_size);
        detector.set_score_thresh(self.score_thresh);
        detector.set_pyramid_scale_factor(self.pyramid_scale_factor);
        detector.set_slide_window_step(self.slide_window_step.0, self.slide_window_step.1);

        let faces = detector.detect(&rustface::ImageData::new(gray.as_raw(), width, height));
        tracing::debug!(faces = faces.len(), width, height, "rustface detection finished");

        let mut bounds: Option<(f64, f64, f64, f64)> = None;
        for face in &faces {
            let bbox = face.bbox();
            let left = bbox.x() as f64;
            let top = bbox.y() as f64;
            let right = left + bbox.width() as f64;
            let bottom = top + bbox.height() as f64;
            bounds = Some(match bounds {
                Some((l, t, r, b)) => (l.min(left), t.min(top), r.max(right), b.max(bottom)),
                None => (left, top, right, bottom),
            });
        }

        // Faces near the border can report boxes that start outside the image
        Ok(bounds.map(|(left, top, right, bottom)| {
            let left = left.max(0.0);
            let top = top.max(0.0);
            let right = right.min(width as f64);
            let bottom = bottom.min(height as f64);
            AreaOfInterest::new(left, top, right - left, bottom - top)
        }))
    }
}
