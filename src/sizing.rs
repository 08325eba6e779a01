//! Layout calculations for fitting frames to the viewport.

/// Horizontal space trimmed from the canvas so it never triggers a
/// horizontal scrollbar.
pub const CANVAS_EDGE_INSET: f64 = 2.0;

/// Viewport dimensions in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Whether a sequence is fitted to the viewport width or height.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Height/width ratio below 1; fills the viewport width
    Wide,
    /// Height/width ratio of 1 or more; fills the viewport height
    Tall,
}

impl Orientation {
    pub fn from_aspect_ratio(aspect_ratio: f64) -> Self {
        if aspect_ratio < 1.0 {
            Orientation::Wide
        } else {
            Orientation::Tall
        }
    }
}

/// Height over width of a frame.
///
/// Returns `None` for degenerate (zero, negative or non-finite) dimensions.
pub fn aspect_ratio(width: f64, height: f64) -> Option<f64> {
    let ratio = height / width;
    (width > 0.0 && height > 0.0 && ratio.is_finite()).then_some(ratio)
}

/// Display size of every frame and of the canvas for one viewport.
///
/// ## Example
///
/// ```rust
/// use scroll_sequence::{FrameLayout, Orientation, Viewport};
///
/// // 1920x1080 footage in a 1000x800 viewport
/// let layout = FrameLayout::fit(1080.0 / 1920.0, Viewport::new(1000.0, 800.0));
/// assert_eq!(layout.orientation, Orientation::Wide);
/// assert_eq!(layout.image_width, 1000.0);
/// assert_eq!(layout.image_height, 562.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameLayout {
    pub orientation: Orientation,
    /// Display width applied to every frame
    pub image_width: f64,
    /// Display height applied to every frame
    pub image_height: f64,
    pub canvas_width: f64,
    pub canvas_height: f64,
}

impl FrameLayout {
    /// Fit frames with the given height/width ratio to the viewport.
    pub fn fit(aspect_ratio: f64, viewport: Viewport) -> Self {
        let orientation = Orientation::from_aspect_ratio(aspect_ratio);
        let canvas_width = (viewport.width - CANVAS_EDGE_INSET).max(0.0);

        match orientation {
            Orientation::Wide => {
                let image_height = viewport.width * aspect_ratio;
                Self {
                    orientation,
                    image_width: viewport.width,
                    image_height,
                    canvas_width,
                    canvas_height: image_height,
                }
            }
            // Tall frames keep the full-width canvas and are centered on it.
            Orientation::Tall => Self {
                orientation,
                image_width: viewport.height / aspect_ratio,
                image_height: viewport.height,
                canvas_width,
                canvas_height: viewport.height,
            },
        }
    }

    /// Top-left corner at which a frame is drawn so it is centered on the
    /// canvas (minus half the overflow in each dimension).
    #[inline]
    pub fn draw_origin(&self) -> (f64, f64) {
        (
            -(self.image_width - self.canvas_width) / 2.0,
            -(self.image_height - self.canvas_height) / 2.0,
        )
    }
}
