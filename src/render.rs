//! Scroll-driven frame renderer.

use tracing::{trace, warn};

use crate::sizing::aspect_ratio;
use crate::{FrameLayout, FrameSet, ScrollMapper, ScrollState, SequenceError, SequenceResult, SequenceSpec, Viewport};

/// Natural pixel size of a decoded frame.
pub trait FrameImage {
    fn natural_size(&self) -> (f64, f64);
}

/// Renderer lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RendererPhase {
    /// Frames are still loading; scroll and resize events are ignored
    Preloading,
    /// Frames are loaded and drawing follows the scroll position
    Ready,
}

/// Outcome of a scroll or resize event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedrawRequest {
    /// Nothing to draw (not ready, or offset outside the container)
    Ignored,
    /// Schedule a redraw on the next repaint tick
    Schedule,
    /// A redraw is already scheduled for this tick
    Coalesced,
}

/// Platform-agnostic description of one frame draw.
///
/// Each consumer can interpret this for its rendering backend.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DrawCommand {
    /// 0-based index into the frame set
    pub frame_index: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub canvas_width: f64,
    pub canvas_height: f64,
}

/// Maps scroll position to frames and produces draw commands.
///
/// Owns the decoded frames once ready. The host calls [`on_scroll`] and
/// [`on_resize`] from its listeners, schedules a repaint when they return
/// [`RedrawRequest::Schedule`], and calls [`redraw`] on that repaint tick.
///
/// [`on_scroll`]: ScrollRenderer::on_scroll
/// [`on_resize`]: ScrollRenderer::on_resize
/// [`redraw`]: ScrollRenderer::redraw
#[derive(Debug)]
pub struct ScrollRenderer<T> {
    mapper: ScrollMapper,
    frames: Option<FrameSet<T>>,
    aspect_ratio: f64,
    layout: Option<FrameLayout>,
    state: ScrollState,
    redraw_pending: bool,
}

impl<T: FrameImage> ScrollRenderer<T> {
    pub fn new(spec: &SequenceSpec) -> Self {
        Self {
            mapper: ScrollMapper::new(spec),
            frames: None,
            aspect_ratio: 1.0,
            layout: None,
            state: ScrollState::default(),
            redraw_pending: false,
        }
    }

    pub fn phase(&self) -> RendererPhase {
        if self.frames.is_some() {
            RendererPhase::Ready
        } else {
            RendererPhase::Preloading
        }
    }

    /// Take ownership of the loaded frames and switch to [`RendererPhase::Ready`].
    ///
    /// The aspect ratio of the first frame is applied to the whole sequence.
    /// A second call is ignored and returns `Ok(false)`.
    pub fn ready(&mut self, frames: FrameSet<T>) -> SequenceResult<bool> {
        if self.frames.is_some() {
            warn!("renderer is already ready; ignoring frame set");
            return Ok(false);
        }

        let expected = self.mapper.frame_count();
        if !frames.is_complete() || frames.len() != expected {
            return Err(SequenceError::IncompleteFrames {
                loaded: frames.loaded(),
                expected,
            });
        }

        let (width, height) = frames
            .first()
            .map(FrameImage::natural_size)
            .unwrap_or((0.0, 0.0));
        self.aspect_ratio = aspect_ratio(width, height).ok_or(SequenceError::InvalidFrameSize { width, height })?;
        self.frames = Some(frames);
        Ok(true)
    }

    /// Handle a scroll event at `raw_offset`.
    pub fn on_scroll(&mut self, raw_offset: f64) -> RedrawRequest {
        if self.frames.is_none() {
            return RedrawRequest::Ignored;
        }
        self.state.raw_offset = raw_offset;
        match self.mapper.map(raw_offset) {
            Some(frame_index) => {
                self.state.frame_index = frame_index;
                self.request_redraw()
            }
            None => RedrawRequest::Ignored,
        }
    }

    /// Handle a viewport resize.
    ///
    /// Recomputes container height and layout, re-maps the last scroll offset
    /// and requests a redraw.
    pub fn on_resize(&mut self, viewport: Viewport, container_top: f64) -> RedrawRequest {
        if self.frames.is_none() {
            return RedrawRequest::Ignored;
        }
        self.mapper.set_geometry(container_top, viewport.height);
        self.layout = Some(FrameLayout::fit(self.aspect_ratio, viewport));
        if let Some(frame_index) = self.mapper.map(self.state.raw_offset) {
            self.state.frame_index = frame_index;
        }
        self.request_redraw()
    }

    fn request_redraw(&mut self) -> RedrawRequest {
        if self.redraw_pending {
            RedrawRequest::Coalesced
        } else {
            self.redraw_pending = true;
            RedrawRequest::Schedule
        }
    }

    /// Drop a pending redraw request whose repaint could not be scheduled,
    /// so the next event asks for a new one.
    pub fn cancel_redraw(&mut self) {
        self.redraw_pending = false;
    }

    /// Produce the draw for the current frame and clear the pending request.
    ///
    /// Returns `None` until the renderer is ready and has a layout. Calling it
    /// repeatedly without state changes returns the same command.
    pub fn redraw(&mut self) -> Option<DrawCommand> {
        self.redraw_pending = false;
        let layout = self.layout?;
        self.frames.as_ref()?;

        let (x, y) = layout.draw_origin();
        let command = DrawCommand {
            frame_index: self.state.frame_index,
            x,
            y,
            width: layout.image_width,
            height: layout.image_height,
            canvas_width: layout.canvas_width,
            canvas_height: layout.canvas_height,
        };
        trace!(frame = command.frame_index, "redraw");
        Some(command)
    }

    /// Get the frame at the given 0-based index.
    pub fn frame(&self, index: usize) -> Option<&T> {
        self.frames.as_ref().and_then(|frames| frames.get(index))
    }

    #[inline]
    pub fn scroll_state(&self) -> ScrollState {
        self.state
    }

    #[inline]
    pub fn layout(&self) -> Option<&FrameLayout> {
        self.layout.as_ref()
    }

    #[inline]
    pub fn container_height(&self) -> f64 {
        self.mapper.container_height()
    }

    #[inline]
    pub fn is_redraw_pending(&self) -> bool {
        self.redraw_pending
    }
}

/// Web-specific rendering implementation.
#[cfg(feature = "web")]
pub mod web {
    use std::cell::RefCell;
    use std::rc::Rc;

    use tracing::{debug, trace, warn};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{CanvasRenderingContext2d, EventTarget, HtmlCanvasElement, HtmlElement, HtmlImageElement, Window};

    use super::*;
    use crate::loader::web::HtmlImageDecoder;
    use crate::loading::web::LoadingOverlay;
    use crate::{load_sequence, settle_loading, SequenceError, SequenceResult};

    impl FrameImage for HtmlImageElement {
        fn natural_size(&self) -> (f64, f64) {
            (self.natural_width() as f64, self.natural_height() as f64)
        }
    }

    /// Options for [`ScrollSequence::mount`].
    #[derive(Clone, Debug)]
    pub struct MountOptions {
        /// Container for the canvas; a new full-width `div` appended to the
        /// body when `None`
        pub parent: Option<HtmlElement>,
        /// Target for scroll and resize listeners; the window when `None`
        pub scroll_source: Option<EventTarget>,
        /// Scroll the page back to the top once frames are ready
        pub scroll_to_top: bool,
    }

    impl Default for MountOptions {
        fn default() -> Self {
            Self {
                parent: None,
                scroll_source: None,
                scroll_to_top: true,
            }
        }
    }

    fn window() -> SequenceResult<Window> {
        web_sys::window().ok_or_else(|| SequenceError::host("no window available"))
    }

    fn body() -> SequenceResult<HtmlElement> {
        window()?
            .document()
            .and_then(|d| d.body())
            .ok_or_else(|| SequenceError::host("no document body available"))
    }

    fn set_style(element: &HtmlElement, name: &str, value: &str) -> SequenceResult<()> {
        element
            .style()
            .set_property(name, value)
            .map_err(|e| SequenceError::host(format!("failed to set {name}: {e:?}")))
    }

    fn viewport() -> SequenceResult<Viewport> {
        let height = window()?
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .ok_or_else(|| SequenceError::host("viewport height unavailable"))?;
        Ok(Viewport::new(body()?.client_width() as f64, height))
    }

    fn scroll_offset() -> f64 {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }

    fn context_2d(canvas: &HtmlCanvasElement) -> SequenceResult<CanvasRenderingContext2d> {
        canvas
            .get_context("2d")
            .map_err(|_| SequenceError::host("failed to get 2d context"))?
            .ok_or_else(|| SequenceError::host("no 2d context available"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SequenceError::host("failed to cast to CanvasRenderingContext2d"))
    }

    /// Draw a frame to the canvas, resizing the canvas only when the command asks for a new size.
    pub fn draw_to_canvas(canvas: &HtmlCanvasElement, ctx: &CanvasRenderingContext2d, image: &HtmlImageElement, command: &DrawCommand) -> SequenceResult<()> {
        let width = command.canvas_width.round() as u32;
        let height = command.canvas_height.round() as u32;
        if canvas.width() != width {
            canvas.set_width(width);
        }
        if canvas.height() != height {
            canvas.set_height(height);
        }

        ctx.draw_image_with_html_image_element_and_dw_and_dh(image, command.x, command.y, command.width, command.height)
            .map_err(|e| SequenceError::host(format!("failed to draw frame: {e:?}")))
    }

    /// A mounted scroll sequence: container, sticky canvas and renderer state.
    pub struct ScrollSequence {
        container: HtmlElement,
        canvas: HtmlCanvasElement,
        ctx: CanvasRenderingContext2d,
        renderer: RefCell<ScrollRenderer<HtmlImageElement>>,
        repaint: RefCell<Option<Closure<dyn FnMut()>>>,
    }

    impl ScrollSequence {
        /// Create the canvas, start loading every frame and wire listeners once loaded.
        ///
        /// `on_loading_start` runs before this returns. Exactly one of
        /// `on_loading_finished` (after every frame decoded) or
        /// `on_loading_failed` (first failed frame) runs later; after a failure
        /// the sequence stays in the preloading phase.
        pub fn mount<S, F, E>(spec: SequenceSpec, options: MountOptions, on_loading_start: S, on_loading_finished: F, on_loading_failed: E) -> SequenceResult<Rc<Self>> where S: FnOnce(), F: FnOnce() + 'static, E: FnOnce(SequenceError) + 'static {
            let window = window()?;
            let document = window
                .document()
                .ok_or_else(|| SequenceError::host("no document available"))?;
            let body = body()?;

            let container = match options.parent.clone() {
                Some(parent) => parent,
                None => {
                    let div = document
                        .create_element("div")
                        .map_err(|_| SequenceError::host("failed to create container"))?
                        .dyn_into::<HtmlElement>()
                        .map_err(|_| SequenceError::host("container is not an HtmlElement"))?;
                    body.append_child(&div)
                        .map_err(|_| SequenceError::host("failed to attach container"))?;
                    div
                }
            };

            let canvas = document
                .create_element("canvas")
                .map_err(|_| SequenceError::host("failed to create canvas element"))?
                .dyn_into::<HtmlCanvasElement>()
                .map_err(|_| SequenceError::host("failed to cast element to HtmlCanvasElement"))?;
            container
                .append_child(&canvas)
                .map_err(|_| SequenceError::host("failed to attach canvas"))?;

            set_style(&container, "width", &format!("{}px", body.client_width()))?;
            set_style(&container, "position", "relative")?;
            set_style(&canvas, "position", "sticky")?;
            set_style(&canvas, "top", "0")?;
            let initial = viewport()?;
            canvas.set_width(initial.width.max(0.0) as u32);
            canvas.set_height(initial.height.max(0.0) as u32);

            let ctx = context_2d(&canvas)?;
            let sequence = Rc::new(Self {
                container,
                canvas,
                ctx,
                renderer: RefCell::new(ScrollRenderer::new(&spec)),
                repaint: RefCell::new(None),
            });

            on_loading_start();

            let mounted = Rc::clone(&sequence);
            wasm_bindgen_futures::spawn_local(async move {
                let decoder = HtmlImageDecoder;
                let loaded = load_sequence(&decoder, &spec, |progress| {
                    trace!(loaded = progress.loaded, total = progress.total, "loading progress");
                })
                .await;
                let Some(frames) = settle_loading(loaded, on_loading_finished, on_loading_failed) else {
                    return;
                };
                if let Err(err) = mounted.become_ready(frames, &options) {
                    warn!(%err, "scroll sequence failed to start");
                }
            });

            Ok(sequence)
        }

        /// Mount with a caller-owned loading overlay: shown on start, hidden
        /// (after its minimum duration) once frames are loaded. On a load
        /// failure the overlay is hidden the same way, page scrolling comes
        /// back, and the error is passed to `on_loading_failed`.
        pub fn mount_with_loading_screen<E>(spec: SequenceSpec, options: MountOptions, overlay: Rc<LoadingOverlay>, on_loading_failed: E) -> SequenceResult<Rc<Self>> where E: FnOnce(SequenceError) + 'static {
            let on_start = {
                let overlay = Rc::clone(&overlay);
                move || {
                    if let Err(err) = overlay.set_visible(true) {
                        warn!(%err, "failed to show loading screen");
                    }
                }
            };
            let on_finished = {
                let overlay = Rc::clone(&overlay);
                move || {
                    if let Err(err) = overlay.set_visible(false) {
                        warn!(%err, "failed to hide loading screen");
                    }
                }
            };
            let on_failed = move |load_err: SequenceError| {
                warn!(err = %load_err, "scroll sequence failed to load");
                if let Err(err) = overlay.set_visible(false) {
                    warn!(%err, "failed to hide loading screen");
                }
                on_loading_failed(load_err);
            };
            Self::mount(spec, options, on_start, on_finished, on_failed)
        }

        /// The container element sized to the scroll range.
        pub fn container(&self) -> &HtmlElement {
            &self.container
        }

        fn become_ready(self: &Rc<Self>, frames: FrameSet<HtmlImageElement>, options: &MountOptions) -> SequenceResult<()> {
            self.renderer.borrow_mut().ready(frames)?;
            let window = window()?;
            if options.scroll_to_top {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            debug!("scroll sequence ready");

            self.handle_resize()?;

            let source: EventTarget = options
                .scroll_source
                .clone()
                .unwrap_or_else(|| window.clone().into());

            let sequence = Rc::clone(self);
            let on_scroll = Closure::<dyn FnMut()>::new(move || sequence.handle_scroll());
            source
                .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
                .map_err(|e| SequenceError::host(format!("failed to attach scroll listener: {e:?}")))?;
            on_scroll.forget();

            let sequence = Rc::clone(self);
            let on_resize = Closure::<dyn FnMut()>::new(move || {
                if let Err(err) = sequence.handle_resize() {
                    warn!(%err, "resize failed");
                }
            });
            source
                .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
                .map_err(|e| SequenceError::host(format!("failed to attach resize listener: {e:?}")))?;
            on_resize.forget();

            Ok(())
        }

        fn handle_scroll(self: &Rc<Self>) {
            let request = self.renderer.borrow_mut().on_scroll(scroll_offset());
            if request == RedrawRequest::Schedule {
                self.schedule_repaint();
            }
        }

        fn handle_resize(self: &Rc<Self>) -> SequenceResult<()> {
            let viewport = viewport()?;
            let container_top = self.container.offset_top() as f64;
            let (resized, scrolled, height) = {
                let mut renderer = self.renderer.borrow_mut();
                let resized = renderer.on_resize(viewport, container_top);
                let scrolled = renderer.on_scroll(scroll_offset());
                (resized, scrolled, renderer.container_height())
            };
            if resized == RedrawRequest::Schedule || scrolled == RedrawRequest::Schedule {
                self.schedule_repaint();
            }
            set_style(&self.container, "height", &format!("{height}px"))
        }

        fn schedule_repaint(self: &Rc<Self>) {
            let Some(window) = web_sys::window() else {
                self.renderer.borrow_mut().cancel_redraw();
                return;
            };
            let mut slot = self.repaint.borrow_mut();
            let callback = slot.get_or_insert_with(|| {
                let sequence = Rc::downgrade(self);
                Closure::<dyn FnMut()>::new(move || {
                    if let Some(sequence) = sequence.upgrade() {
                        if let Err(err) = sequence.repaint() {
                            warn!(%err, "redraw failed");
                        }
                    }
                })
            });
            if let Err(e) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                warn!(error = ?e, "failed to request animation frame");
                self.renderer.borrow_mut().cancel_redraw();
            }
        }

        fn repaint(&self) -> SequenceResult<()> {
            let mut renderer = self.renderer.borrow_mut();
            let Some(command) = renderer.redraw() else {
                return Ok(());
            };
            match renderer.frame(command.frame_index) {
                Some(image) => draw_to_canvas(&self.canvas, &self.ctx, image, &command),
                None => Ok(()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct TestFrame {
        width: f64,
        height: f64,
    }

    impl FrameImage for TestFrame {
        fn natural_size(&self) -> (f64, f64) {
            (self.width, self.height)
        }
    }

    fn frames(count: usize, width: f64, height: f64) -> FrameSet<TestFrame> {
        let mut set = FrameSet::with_frame_count(count);
        for i in 0..count {
            set.insert(i, TestFrame { width, height });
        }
        set
    }

    fn ready_renderer() -> ScrollRenderer<TestFrame> {
        let spec = SequenceSpec::new(10, 15.0, "NUMBER.png").unwrap();
        let mut renderer = ScrollRenderer::new(&spec);
        assert_eq!(renderer.ready(frames(10, 1920.0, 1080.0)), Ok(true));
        renderer.on_resize(Viewport::new(1000.0, 800.0), 100.0);
        renderer.redraw();
        renderer
    }

    #[test]
    fn test_preloading_ignores_events() {
        let spec = SequenceSpec::new(10, 15.0, "NUMBER.png").unwrap();
        let mut renderer: ScrollRenderer<TestFrame> = ScrollRenderer::new(&spec);
        assert_eq!(renderer.phase(), RendererPhase::Preloading);
        assert_eq!(renderer.on_scroll(150.0), RedrawRequest::Ignored);
        assert_eq!(renderer.on_resize(Viewport::new(1000.0, 800.0), 0.0), RedrawRequest::Ignored);
        assert_eq!(renderer.redraw(), None);
    }

    #[test]
    fn test_ready_transitions_once() {
        let spec = SequenceSpec::new(2, 15.0, "NUMBER.png").unwrap();
        let mut renderer = ScrollRenderer::new(&spec);
        assert_eq!(renderer.ready(frames(2, 100.0, 50.0)), Ok(true));
        assert_eq!(renderer.phase(), RendererPhase::Ready);
        assert_eq!(renderer.ready(frames(2, 10.0, 500.0)), Ok(false));
    }

    #[test]
    fn test_ready_rejects_incomplete_frames() {
        let spec = SequenceSpec::new(3, 15.0, "NUMBER.png").unwrap();
        let mut renderer = ScrollRenderer::new(&spec);
        let mut set = FrameSet::with_frame_count(3);
        set.insert(0, TestFrame { width: 10.0, height: 10.0 });
        assert_eq!(
            renderer.ready(set),
            Err(SequenceError::IncompleteFrames { loaded: 1, expected: 3 })
        );
        assert_eq!(renderer.phase(), RendererPhase::Preloading);
    }

    #[test]
    fn test_ready_rejects_zero_sized_first_frame() {
        let spec = SequenceSpec::new(1, 15.0, "NUMBER.png").unwrap();
        let mut renderer = ScrollRenderer::new(&spec);
        assert!(matches!(
            renderer.ready(frames(1, 0.0, 0.0)),
            Err(SequenceError::InvalidFrameSize { .. })
        ));
    }

    #[test]
    fn test_scroll_maps_and_clamps() {
        let mut renderer = ready_renderer();
        // container top 100, 10 frames of 15px, bottom edge at 250
        assert_eq!(renderer.on_scroll(100.0), RedrawRequest::Ignored);
        assert_eq!(renderer.on_scroll(250.0), RedrawRequest::Ignored);

        assert_eq!(renderer.on_scroll(145.0), RedrawRequest::Schedule);
        assert_eq!(renderer.redraw().unwrap().frame_index, 3);

        assert_eq!(renderer.on_scroll(249.0), RedrawRequest::Schedule);
        assert_eq!(renderer.redraw().unwrap().frame_index, 9);
    }

    #[test]
    fn test_ignored_scroll_keeps_previous_frame() {
        let mut renderer = ready_renderer();
        renderer.on_scroll(160.0);
        renderer.redraw();
        renderer.on_scroll(5000.0);
        assert_eq!(renderer.scroll_state().frame_index, 4);
        assert_eq!(renderer.scroll_state().raw_offset, 5000.0);
    }

    #[test]
    fn test_redraws_coalesce_per_tick() {
        let mut renderer = ready_renderer();
        assert_eq!(renderer.on_scroll(120.0), RedrawRequest::Schedule);
        assert_eq!(renderer.on_scroll(130.0), RedrawRequest::Coalesced);
        assert_eq!(renderer.on_scroll(140.0), RedrawRequest::Coalesced);
        assert!(renderer.is_redraw_pending());

        // last write wins
        assert_eq!(renderer.redraw().unwrap().frame_index, 3);
        assert!(!renderer.is_redraw_pending());
        assert_eq!(renderer.on_scroll(150.0), RedrawRequest::Schedule);
    }

    #[test]
    fn test_cancelled_redraw_allows_new_request() {
        let mut renderer = ready_renderer();
        assert_eq!(renderer.on_resize(Viewport::new(1000.0, 800.0), 100.0), RedrawRequest::Schedule);
        assert_eq!(renderer.on_scroll(160.0), RedrawRequest::Coalesced);

        // repaint never ran
        renderer.cancel_redraw();
        assert!(!renderer.is_redraw_pending());
        assert_eq!(renderer.on_scroll(200.0), RedrawRequest::Schedule);
        assert_eq!(renderer.redraw().unwrap().frame_index, 7);
    }

    #[test]
    fn test_redraw_is_idempotent() {
        let mut renderer = ready_renderer();
        renderer.on_scroll(175.0);
        let first = renderer.redraw();
        let second = renderer.redraw();
        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn test_resize_sets_container_and_layout() {
        let mut renderer = ready_renderer();
        assert_eq!(renderer.container_height(), 150.0 + 800.0);

        let command = renderer.redraw().unwrap();
        assert_eq!(command.width, 1000.0);
        assert_eq!(command.height, 562.5);
        assert_eq!(command.canvas_width, 998.0);
        assert_eq!((command.x, command.y), (-1.0, 0.0));

        assert_eq!(renderer.on_resize(Viewport::new(500.0, 400.0), 100.0), RedrawRequest::Schedule);
        assert_eq!(renderer.container_height(), 150.0 + 400.0);
        let command = renderer.redraw().unwrap();
        assert_eq!(command.width, 500.0);
        assert_eq!(command.height, 281.25);
    }

    #[test]
    fn test_resize_remaps_last_offset() {
        let mut renderer = ready_renderer();
        renderer.on_scroll(130.0);
        renderer.redraw();
        assert_eq!(renderer.scroll_state().frame_index, 2);

        // container moved down the page; same offset is now frame 1
        renderer.on_resize(Viewport::new(1000.0, 800.0), 115.0);
        assert_eq!(renderer.redraw().unwrap().frame_index, 1);
    }

    #[test]
    fn test_tall_sequence_layout() {
        let spec = SequenceSpec::new(4, 20.0, "NUMBER.png").unwrap();
        let mut renderer = ScrollRenderer::new(&spec);
        renderer.ready(frames(4, 1080.0, 1920.0)).unwrap();
        renderer.on_resize(Viewport::new(1000.0, 800.0), 0.0);
        let layout = renderer.layout().unwrap();
        assert_eq!(layout.orientation, crate::Orientation::Tall);
        assert_eq!(layout.image_height, 800.0);
    }

    #[test]
    fn test_frame_lookup() {
        let renderer = ready_renderer();
        assert!(renderer.frame(9).is_some());
        assert!(renderer.frame(10).is_none());
    }
}
