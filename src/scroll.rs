//! Scroll offset to frame index mapping.

use crate::SequenceSpec;

/// Current scroll position and the frame it maps to.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    /// Last raw scroll offset seen, in CSS pixels
    pub raw_offset: f64,
    /// Frame index (0-based), always within `[0, frame_count - 1]`
    pub frame_index: usize,
}

/// Clamp a fractional frame index into `[0, frame_count - 1]`.
///
/// NaN and negative values map to 0.
#[inline]
pub fn clamp_frame_index(index: f64, frame_count: usize) -> usize {
    if index.is_nan() || index <= 0.0 {
        0
    } else {
        (index as usize).min(frame_count.saturating_sub(1))
    }
}

/// Maps scroll offsets inside the sequence container to frame indices.
///
/// The container is `frame_count * pixels_per_frame + viewport_height` tall so
/// that every `pixels_per_frame` of scroll advances one frame and the last
/// frame stays reachable.
///
/// ## Example
///
/// ```rust
/// use scroll_sequence::{ScrollMapper, SequenceSpec};
///
/// let spec = SequenceSpec::new(10, 15.0, "NUMBER.png").unwrap();
/// let mut mapper = ScrollMapper::new(&spec);
/// mapper.set_geometry(100.0, 800.0);
///
/// assert_eq!(mapper.container_height(), 950.0);
/// assert_eq!(mapper.map(100.0), None); // exactly at the top edge
/// assert_eq!(mapper.map(130.0), Some(2));
/// ```
#[derive(Clone, Debug)]
pub struct ScrollMapper {
    frame_count: usize,
    pixels_per_frame: f64,
    container_top: f64,
    viewport_height: f64,
}

impl ScrollMapper {
    pub fn new(spec: &SequenceSpec) -> Self {
        Self {
            frame_count: spec.frame_count(),
            pixels_per_frame: spec.pixels_per_frame(),
            container_top: 0.0,
            viewport_height: 0.0,
        }
    }

    /// Update the container's page offset and the viewport height.
    pub fn set_geometry(&mut self, container_top: f64, viewport_height: f64) {
        self.container_top = container_top;
        self.viewport_height = viewport_height;
    }

    #[inline]
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    #[inline]
    pub fn container_top(&self) -> f64 {
        self.container_top
    }

    /// Height the container must have for the whole sequence to be scrollable.
    #[inline]
    pub fn container_height(&self) -> f64 {
        self.frame_count as f64 * self.pixels_per_frame + self.viewport_height
    }

    /// Scroll offset of the container's bottom scrollable edge.
    #[inline]
    pub fn bottom_edge(&self) -> f64 {
        self.container_top + self.container_height() - self.viewport_height
    }

    /// Check whether an offset lies strictly inside the scrollable range.
    ///
    /// Both edges are excluded. A NaN offset is not excluded.
    #[inline]
    pub fn in_range(&self, raw_offset: f64) -> bool {
        !(raw_offset <= self.container_top || raw_offset >= self.bottom_edge())
    }

    /// Frame for an offset, ignoring the range check.
    pub fn frame_for_offset(&self, raw_offset: f64) -> usize {
        let index = ((raw_offset - self.container_top) / self.pixels_per_frame).round();
        clamp_frame_index(index, self.frame_count)
    }

    /// Frame for an offset, or `None` when the offset is outside the range.
    pub fn map(&self, raw_offset: f64) -> Option<usize> {
        self.in_range(raw_offset)
            .then(|| self.frame_for_offset(raw_offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper(frames: usize, ppf: f64, top: f64, viewport_height: f64) -> ScrollMapper {
        let spec = SequenceSpec::new(frames, ppf, "NUMBER.png").unwrap();
        let mut mapper = ScrollMapper::new(&spec);
        mapper.set_geometry(top, viewport_height);
        mapper
    }

    #[test]
    fn test_clamp_frame_index() {
        assert_eq!(clamp_frame_index(f64::NAN, 10), 0);
        assert_eq!(clamp_frame_index(-3.0, 10), 0);
        assert_eq!(clamp_frame_index(4.0, 10), 4);
        assert_eq!(clamp_frame_index(10.0, 10), 9);
        assert_eq!(clamp_frame_index(f64::INFINITY, 10), 9);
    }

    #[test]
    fn test_top_edge_is_exclusive() {
        let m = mapper(10, 15.0, 200.0, 600.0);
        assert_eq!(m.map(200.0), None);
        assert_eq!(m.map(199.0), None);
        assert_eq!(m.map(201.0), Some(0));
    }

    #[test]
    fn test_bottom_edge_is_exclusive() {
        let m = mapper(10, 15.0, 200.0, 600.0);
        assert_eq!(m.bottom_edge(), 350.0);
        assert_eq!(m.map(350.0), None);
        assert_eq!(m.map(349.0), Some(9));
    }

    #[test]
    fn test_past_the_end_clamps() {
        let m = mapper(10, 15.0, 200.0, 600.0);
        // (350 - 200) / 15 = 10, one past the last frame
        assert_eq!(m.frame_for_offset(350.0), 9);
        assert_eq!(m.frame_for_offset(10_000.0), 9);
        assert_eq!(m.frame_for_offset(0.0), 0);
    }

    #[test]
    fn test_rounding() {
        let m = mapper(10, 15.0, 0.0, 500.0);
        assert_eq!(m.map(7.0), Some(0));
        assert_eq!(m.map(8.0), Some(1));
        assert_eq!(m.map(22.0), Some(1));
        assert_eq!(m.map(23.0), Some(2));
    }

    #[test]
    fn test_nan_offset_maps_to_first_frame() {
        let m = mapper(10, 15.0, 0.0, 500.0);
        assert_eq!(m.map(f64::NAN), Some(0));
    }

    #[test]
    fn test_every_offset_maps_in_range() {
        for frames in [1, 2, 10, 120] {
            for ppf in [0.5, 1.0, 15.0, 33.3] {
                let m = mapper(frames, ppf, 37.0, 720.0);
                let mut offset = -500.0;
                while offset < m.bottom_edge() + 500.0 {
                    assert!(m.frame_for_offset(offset) < frames);
                    if let Some(index) = m.map(offset) {
                        assert!(index < frames);
                    }
                    offset += 3.7;
                }
            }
        }
    }
}
