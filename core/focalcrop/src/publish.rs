use crate::analyze::{analyze_image, FocalAnalysis};
use crate::config::Config;
use crate::detector::AreaOfInterestDetector;
use crate::error::FocalCropError;
use crate::geometry::FocalPoint;

/// Identifier of a content item in the host's repository.
pub type ContentId = u64;

/// Image content item as seen by the publish hook.
#[derive(Debug, Clone)]
pub struct FocalImage {
    /// `None` for items that were never saved.
    pub id: Option<ContentId>,
    /// Display name, used in log events.
    pub name: String,
    /// Editors can turn automatic focal points off per image.
    pub smart_focal_point_enabled: bool,
    /// Stored focal point; `None` until analyzed or set by an editor.
    pub focal_point: Option<FocalPoint>,
    /// Source width in pixels, filled in on publish.
    pub original_width: Option<u32>,
    /// Source height in pixels, filled in on publish.
    pub original_height: Option<u32>,
    /// Encoded image bytes.
    pub data: Vec<u8>,
}

impl FocalImage {
    /// New unsaved image with smart focal point enabled and no focal point.
    pub fn new(name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            id: None,
            name: name.into(),
            smart_focal_point_enabled: true,
            focal_point: None,
            original_width: None,
            original_height: None,
            data,
        }
    }

    /// Mark the image as saved under `id`.
    pub fn with_id(mut self, id: ContentId) -> Self {
        self.id = Some(id);
        self
    }

    /// True when a focal point is expected but has not been computed yet.
    pub fn missing_focal_point(&self) -> bool {
        self.smart_focal_point_enabled && self.focal_point.is_none()
    }
}

/// The fields of the last published version the hook compares against.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishedVersion {
    /// Focal point at the time of publishing.
    pub focal_point: Option<FocalPoint>,
}

/// Read access to an item's publish history.
pub trait VersionHistory {
    /// Most recently published version of `id`, if it was ever published.
    fn last_published(&self, id: ContentId) -> Result<Option<PublishedVersion>, FocalCropError>;
}

/// Why the hook left an image alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Analysis is off globally or for this image.
    Disabled,
    /// An editor changed the focal point since the last publish.
    ManuallyEdited,
}

/// What [`PublishHook::on_publishing`] did to the image.
#[derive(Debug, Clone, PartialEq)]
pub enum PublishOutcome {
    /// The image was left untouched.
    Skipped(SkipReason),
    /// The image now carries the analyzed focal point and dimensions.
    Updated(FocalAnalysis),
}

/// Pre-publish hook that assigns a detected focal point to images.
///
/// Manual edits win: if the focal point differs from the last published
/// version, the hook keeps it.
pub struct PublishHook<H> {
    config: Config,
    history: H,
    detector: Option<Box<dyn AreaOfInterestDetector>>,
}

impl<H: VersionHistory> PublishHook<H> {
    /// Hook with the given settings and publish history, and no detector.
    pub fn new(config: Config, history: H) -> Self {
        Self {
            config,
            history,
            detector: None,
        }
    }

    /// Detector used during analysis. Without one, published images get the
    /// center focal point.
    pub fn detector(mut self, detector: Box<dyn AreaOfInterestDetector>) -> Self {
        self.detector = Some(detector);
        self
    }

    /// Whether the focal point was changed by hand since the last publish.
    ///
    /// Unsaved and never-published images count as unedited.
    pub fn was_edited(&self, image: &FocalImage) -> Result<bool, FocalCropError> {
        let Some(id) = image.id else {
            return Ok(false);
        };
        let edited = match self.history.last_published(id)? {
            Some(version) => version.focal_point != image.focal_point,
            None => false,
        };
        Ok(edited)
    }

    /// Run before `image` is published.
    pub fn on_publishing(&self, image: &mut FocalImage) -> Result<PublishOutcome, FocalCropError> {
        if !self.config.enabled || !image.smart_focal_point_enabled {
            return Ok(PublishOutcome::Skipped(SkipReason::Disabled));
        }
        if self.was_edited(image)? {
            tracing::debug!(name = %image.name, "focal point edited manually, keeping it");
            return Ok(PublishOutcome::Skipped(SkipReason::ManuallyEdited));
        }

        let analysis = analyze_image(
            &image.data,
            self.config.max_analysis_dimension,
            self.detector.as_deref(),
        )?;

        image.focal_point = Some(analysis.focal_point);
        image.original_width = Some(analysis.image_size.width as u32);
        image.original_height = Some(analysis.image_size.height as u32);
        tracing::debug!(
            name = %image.name,
            x = analysis.focal_point.x,
            y = analysis.focal_point.y,
            "assigned focal point on publish"
        );

        Ok(PublishOutcome::Updated(analysis))
    }
}
