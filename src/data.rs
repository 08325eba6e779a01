//! Core data structures describing an image sequence.

use crate::{SequenceError, SequenceResult};

/// Token in a path template that is replaced by the 1-based frame number.
pub const FRAME_PLACEHOLDER: &str = "NUMBER";

/// Metadata for a scroll-driven image sequence.
///
/// Immutable once constructed; every field is validated by [`SequenceSpec::new`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SequenceSpec {
    frame_count: usize,
    pixels_per_frame: f64,
    path_template: String,
}

impl SequenceSpec {
    /// Create a new sequence description.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use scroll_sequence::SequenceSpec;
    ///
    /// let spec = SequenceSpec::new(120, 15.0, "./sequence/image_NUMBER.png").unwrap();
    /// assert_eq!(spec.frame_path(1), "./sequence/image_1.png");
    /// assert_eq!(spec.frame_path(120), "./sequence/image_120.png");
    /// ```
    pub fn new(frame_count: usize, pixels_per_frame: f64, path_template: impl Into<String>) -> SequenceResult<Self> {
        let path_template = path_template.into();

        if frame_count == 0 {
            return Err(SequenceError::config("frame count must be at least 1"));
        }
        if !pixels_per_frame.is_finite() || pixels_per_frame <= 0.0 {
            return Err(SequenceError::config(format!(
                "pixels per frame must be a positive number, got {pixels_per_frame}"
            )));
        }
        if !path_template.contains(FRAME_PLACEHOLDER) {
            return Err(SequenceError::config(format!(
                "path template {path_template:?} has no {FRAME_PLACEHOLDER} placeholder"
            )));
        }

        Ok(Self {
            frame_count,
            pixels_per_frame,
            path_template,
        })
    }

    #[inline]
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    #[inline]
    pub fn pixels_per_frame(&self) -> f64 {
        self.pixels_per_frame
    }

    #[inline]
    pub fn path_template(&self) -> &str {
        &self.path_template
    }

    /// Path for a 1-based frame number.
    ///
    /// Only the first placeholder is substituted and no zero padding is applied.
    pub fn frame_path(&self, frame: usize) -> String {
        self.path_template
            .replacen(FRAME_PLACEHOLDER, &frame.to_string(), 1)
    }

    /// All frame paths in frame order (frame 1 first).
    pub fn frame_paths(&self) -> impl Iterator<Item = String> + '_ {
        (1..=self.frame_count).map(|frame| self.frame_path(frame))
    }

    /// Total scroll distance covered by the sequence, excluding the viewport buffer.
    #[inline]
    pub fn scroll_length(&self) -> f64 {
        self.frame_count as f64 * self.pixels_per_frame
    }
}
