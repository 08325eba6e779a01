//! # scroll-sequence
//!
//! Scroll-driven image sequence playback ("scrubbing") for the browser.
//!
//! As the page scrolls, pre-rendered frames are drawn to a canvas so the
//! sequence plays like a video tied to the scroll position. A loading screen
//! with a minimum display time covers the preload.
//!
//! This crate provides platform-agnostic data structures and logic for:
//! - Describing a sequence and templating its frame paths
//! - Decoding every frame concurrently into an index-ordered frame set
//! - Mapping scroll offsets to frames and fitting frames to the viewport
//! - Coalescing redraws to one per repaint tick
//! - Timing a loading screen's minimum duration
//!
//! ## Features
//!
//! - `serde` - Enable serialization/deserialization for data structures
//! - `toml` - Read [`SequenceConfig`] from TOML
//! - `web` - Enable web/WASM canvas rendering support
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::rc::Rc;
//! use scroll_sequence::{SequenceSpec, web::{LoadingOverlay, MountOptions, ScrollSequence}};
//!
//! let spec = SequenceSpec::new(120, 15.0, "./sequence/image_NUMBER.png")?;
//!
//! // The caller owns the overlay and hands it to the sequence.
//! let overlay = LoadingOverlay::new(1000.0)?;
//! body.append_child(overlay.element())?;
//!
//! let sequence = ScrollSequence::mount_with_loading_screen(spec, MountOptions::default(), Rc::clone(&overlay), |err| {
//!     tracing::error!(%err, "sequence failed to load");
//! })?;
//! ```

mod config;
mod data;
mod error;
mod loader;
mod loading;
pub mod render;
mod scroll;
mod sizing;

pub use config::SequenceConfig;
pub use data::{SequenceSpec, FRAME_PLACEHOLDER};
pub use error::{SequenceError, SequenceResult};
pub use loader::{begin_loading, load_sequence, settle_loading, FrameDecoder, FrameSet, LoadResult, LoadingProgress};
pub use loading::{parse_minimum_duration, validate_minimum_duration, LoadingScreen, LoadingTimer, VisibilityChange};
pub use render::{DrawCommand, FrameImage, RedrawRequest, RendererPhase, ScrollRenderer};
pub use scroll::{clamp_frame_index, ScrollMapper, ScrollState};
pub use sizing::{aspect_ratio, FrameLayout, Orientation, Viewport, CANVAS_EDGE_INSET};

/// Browser bindings: image decoding, canvas drawing and the loading overlay.
#[cfg(feature = "web")]
pub mod web {
    pub use crate::loader::web::HtmlImageDecoder;
    pub use crate::loading::web::LoadingOverlay;
    pub use crate::render::web::{draw_to_canvas, MountOptions, ScrollSequence};
}
