use serde::Deserialize;

/// Longest side of the image handed to the detector. Cloud vision services
/// cap upload sizes, and saliency does not need full resolution.
pub const DEFAULT_MAX_ANALYSIS_DIMENSION: u32 = 1024;

/// Settings for focal point analysis on publish.
///
/// Deserializes from camelCase keys with every field optional, so a host can
/// load it from whatever settings store it has:
///
/// ```json
/// { "enabled": true, "maxAnalysisDimension": 800 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Master switch. When off, publishing never touches focal points.
    pub enabled: bool,

    /// Longest side, in pixels, of the downsized analysis image.
    pub max_analysis_dimension: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enabled: true,
            max_analysis_dimension: DEFAULT_MAX_ANALYSIS_DIMENSION,
        }
    }
}

impl Config {
    /// Enabled, with the default analysis size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn analysis on or off.
    pub fn set_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the longest side of the analysis image.
    pub fn set_max_analysis_dimension(mut self, dimension: u32) -> Self {
        self.max_analysis_dimension = dimension;
        self
    }
}
