//! Frame loading utilities and state management.
//!
//! Every frame of a sequence is decoded concurrently. Decoded frames land in a
//! pre-allocated [`FrameSet`] at their own index, so the completion order of
//! the individual decodes never affects the index-to-frame mapping.

use std::future::Future;

use futures::stream::{FuturesUnordered, StreamExt};
use tracing::{debug, trace, warn};

use crate::{SequenceError, SequenceResult, SequenceSpec};

/// Progress information for frame loading
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadingProgress {
    /// Number of frames decoded so far
    pub loaded: usize,
    /// Total number of frames to decode
    pub total: usize,
}

impl LoadingProgress {
    /// Create a progress tracker for `total` frames
    pub fn new(total: usize) -> Self {
        Self { loaded: 0, total }
    }

    /// Get loading percentage (0-100)
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            0
        } else {
            ((self.loaded as f32 / self.total as f32) * 100.0) as u8
        }
    }

    /// Check if every frame has been decoded
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.loaded >= self.total
    }

    /// Format a loading message
    pub fn message(&self) -> String {
        if self.total > 0 {
            format!(
                "Loading frames... {} / {} ({}%)",
                self.loaded,
                self.total,
                self.percent()
            )
        } else {
            "Loading frames...".to_string()
        }
    }
}

/// Ordered, pre-allocated collection of decoded frames.
///
/// Slot `i` holds frame number `i + 1` of the path template.
#[derive(Clone, Debug)]
pub struct FrameSet<T> {
    slots: Vec<Option<T>>,
    loaded: usize,
}

impl<T> FrameSet<T> {
    /// Create an empty set with one slot per frame.
    pub fn with_frame_count(frame_count: usize) -> Self {
        let mut slots = Vec::with_capacity(frame_count);
        slots.resize_with(frame_count, || None);
        Self { slots, loaded: 0 }
    }

    /// Store a decoded frame at its 0-based index.
    ///
    /// Returns `false` if the index is out of range.
    pub fn insert(&mut self, index: usize, frame: T) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) => {
                if slot.replace(frame).is_none() {
                    self.loaded += 1;
                }
                true
            }
            None => false,
        }
    }

    /// Get the frame at the given 0-based index
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(|slot| slot.as_ref())
    }

    /// The first frame of the sequence, if decoded
    pub fn first(&self) -> Option<&T> {
        self.get(0)
    }

    /// Number of slots (the sequence frame count)
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of slots holding a decoded frame
    #[inline]
    pub fn loaded(&self) -> usize {
        self.loaded
    }

    /// Check whether every slot holds a decoded frame
    #[inline]
    pub fn is_complete(&self) -> bool {
        !self.slots.is_empty() && self.loaded == self.slots.len()
    }
}

/// Result type for frame decode operations
pub type LoadResult<T> = Result<T, String>;

/// Trait for async frame decoders.
///
/// Implement this trait to decode frames with your specific I/O mechanism
/// (browser image elements, fetch API, filesystem, etc.)
///
/// No `Send` bounds — works in both native and WASM (single-threaded) contexts.
pub trait FrameDecoder {
    /// Decoded frame handle
    type Frame;

    /// Decode one frame. `frame` is the 1-based frame number substituted into `path`.
    fn decode(&self, frame: usize, path: &str) -> impl Future<Output = LoadResult<Self::Frame>>;
}

/// Decode every frame of the sequence concurrently.
///
/// Resolves once, after every frame decoded successfully. `on_progress` is
/// called after each decode completes (in completion order). A failed decode
/// aborts the load with [`SequenceError::FrameLoad`]; a decode that never
/// completes keeps the whole load pending.
pub async fn load_sequence<D, F>(decoder: &D, spec: &SequenceSpec, mut on_progress: F) -> SequenceResult<FrameSet<D::Frame>> where D: FrameDecoder, F: FnMut(&LoadingProgress) {
    let total = spec.frame_count();
    let mut frames = FrameSet::with_frame_count(total);
    let mut progress = LoadingProgress::new(total);

    debug!(frames = total, template = spec.path_template(), "loading image sequence");

    let mut pending: FuturesUnordered<_> = spec
        .frame_paths()
        .enumerate()
        .map(|(index, path)| async move {
            let result = decoder.decode(index + 1, &path).await;
            (index, path, result)
        })
        .collect();

    while let Some((index, path, result)) = pending.next().await {
        match result {
            Ok(frame) => {
                frames.insert(index, frame);
                progress.loaded = frames.loaded();
                trace!(frame = index + 1, loaded = progress.loaded, "frame decoded");
                on_progress(&progress);
            }
            Err(reason) => {
                warn!(frame = index + 1, %path, %reason, "frame failed to load");
                return Err(SequenceError::FrameLoad {
                    frame: index + 1,
                    path,
                    reason,
                });
            }
        }
    }

    debug!(frames = total, "image sequence loaded");
    Ok(frames)
}

/// Invoke `on_loading_start` synchronously, then return the load future.
///
/// The caller awaits the future and runs its own "finished" handling once it
/// resolves; the future completes at most once.
pub fn begin_loading<'a, D, S>(decoder: &'a D, spec: &'a SequenceSpec, on_loading_start: S) -> impl Future<Output = SequenceResult<FrameSet<D::Frame>>> + 'a where D: FrameDecoder, D::Frame: 'a, S: FnOnce() {
    on_loading_start();
    load_sequence(decoder, spec, ignore_progress)
}

fn ignore_progress(_: &LoadingProgress) {}

/// Route a finished load to exactly one of the caller's callbacks.
///
/// On success `on_loading_finished` runs and the frames are handed back; on
/// failure `on_loading_failed` receives the error.
pub fn settle_loading<T, F, E>(result: SequenceResult<FrameSet<T>>, on_loading_finished: F, on_loading_failed: E) -> Option<FrameSet<T>> where F: FnOnce(), E: FnOnce(SequenceError) {
    match result {
        Ok(frames) => {
            on_loading_finished();
            Some(frames)
        }
        Err(err) => {
            on_loading_failed(err);
            None
        }
    }
}

/// Web-specific frame decoding.
#[cfg(feature = "web")]
pub mod web {
    use std::future::Future;

    use wasm_bindgen_futures::JsFuture;
    use web_sys::HtmlImageElement;

    use super::{FrameDecoder, LoadResult};

    /// Decodes frames into `HtmlImageElement`s using `HTMLImageElement.decode()`.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct HtmlImageDecoder;

    impl FrameDecoder for HtmlImageDecoder {
        type Frame = HtmlImageElement;

        fn decode(&self, _frame: usize, path: &str) -> impl Future<Output = LoadResult<HtmlImageElement>> {
            let path = path.to_owned();
            async move {
                let image = HtmlImageElement::new().map_err(|e| format!("failed to create image: {e:?}"))?;
                image.set_src(&path);
                JsFuture::from(image.decode())
                    .await
                    .map_err(|e| format!("decode rejected: {e:?}"))?;
                Ok(image)
            }
        }
    }
}
