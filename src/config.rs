use crate::{loading::validate_minimum_duration, SequenceResult, SequenceSpec};

/// Construction parameters for a scroll sequence, typically read from a
/// `sequence.toml` next to the frames.
///
/// `loading_min_ms` and `scroll_to_top` are optional; a missing
/// `loading_min_ms` means no loading screen.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SequenceConfig {
    pub frames: usize,
    pub pixels_per_frame: f64,
    pub path: String,
    pub loading_min_ms: Option<f64>,
    pub scroll_to_top: Option<bool>,
}

impl SequenceConfig {
    /// Parse a TOML document into `SequenceConfig`.
    ///
    /// Type mismatches (such as a non-numeric `loading_min_ms`) surface as
    /// configuration errors.
    #[cfg(feature = "toml")]
    pub fn from_toml_str(s: &str) -> SequenceResult<Self> {
        toml::from_str(s).map_err(|e| crate::SequenceError::config(e.to_string()))
    }

    /// Validate and build the sequence description.
    pub fn sequence_spec(&self) -> SequenceResult<SequenceSpec> {
        SequenceSpec::new(self.frames, self.pixels_per_frame, self.path.clone())
    }

    /// Validated minimum loading-screen duration, if one is configured.
    pub fn loading_min_ms(&self) -> SequenceResult<Option<f64>> {
        self.loading_min_ms
            .map(validate_minimum_duration)
            .transpose()
    }

    /// Whether the page scrolls back to the top once frames are ready. Defaults to `true`.
    pub fn scroll_to_top(&self) -> bool {
        self.scroll_to_top.unwrap_or(true)
    }
}
