//! Loading screen timing.
//!
//! The screen stays visible for at least a minimum duration so that fast
//! loads still show feedback briefly. Timing is platform-agnostic: callers
//! pass the current time in milliseconds and act on the returned
//! [`VisibilityChange`].

use tracing::debug;

use crate::{SequenceError, SequenceResult};

/// Check that a minimum duration is a finite, positive number of milliseconds.
pub fn validate_minimum_duration(minimum_duration_ms: f64) -> SequenceResult<f64> {
    if minimum_duration_ms.is_finite() && minimum_duration_ms > 0.0 {
        Ok(minimum_duration_ms)
    } else {
        Err(SequenceError::config(format!(
            "minimum loading duration must be a positive number of milliseconds, got {minimum_duration_ms}"
        )))
    }
}

/// Parse a minimum duration from text.
///
/// ```rust
/// use scroll_sequence::parse_minimum_duration;
///
/// assert_eq!(parse_minimum_duration("1000").unwrap(), 1000.0);
/// assert!(parse_minimum_duration("abc").is_err());
/// ```
pub fn parse_minimum_duration(s: &str) -> SequenceResult<f64> {
    let value = s
        .trim()
        .parse::<f64>()
        .map_err(|_| SequenceError::config(format!("minimum loading duration {s:?} is not a number")))?;
    validate_minimum_duration(value)
}

/// Start time and minimum duration of a loading screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoadingTimer {
    started_at_ms: f64,
    minimum_duration_ms: f64,
}

impl LoadingTimer {
    pub fn new(minimum_duration_ms: f64, started_at_ms: f64) -> SequenceResult<Self> {
        Ok(Self {
            started_at_ms,
            minimum_duration_ms: validate_minimum_duration(minimum_duration_ms)?,
        })
    }

    #[inline]
    pub fn minimum_duration_ms(&self) -> f64 {
        self.minimum_duration_ms
    }

    #[inline]
    pub fn elapsed_ms(&self, now_ms: f64) -> f64 {
        now_ms - self.started_at_ms
    }

    /// Time left before the minimum duration is satisfied (0 once it is).
    pub fn remaining_ms(&self, now_ms: f64) -> f64 {
        (self.minimum_duration_ms - self.elapsed_ms(now_ms)).max(0.0)
    }
}

/// What the host should do after a visibility request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VisibilityChange {
    /// Show immediately and suspend page scrolling
    Show,
    /// Hide immediately and restore page scrolling
    Hide,
    /// Hide once the given number of milliseconds has passed, then call
    /// [`LoadingScreen::finish_deferred_hide`]
    HideAfter(f64),
}

/// Visibility state machine for a loading screen.
#[derive(Clone, Debug)]
pub struct LoadingScreen {
    timer: LoadingTimer,
    visible: bool,
    hide_pending: bool,
}

impl LoadingScreen {
    /// Create a loading screen, visible from construction.
    ///
    /// Fails with [`SequenceError::Config`] if `minimum_duration_ms` is not a
    /// positive number.
    pub fn new(minimum_duration_ms: f64, now_ms: f64) -> SequenceResult<Self> {
        Ok(Self {
            timer: LoadingTimer::new(minimum_duration_ms, now_ms)?,
            visible: true,
            hide_pending: false,
        })
    }

    #[inline]
    pub fn timer(&self) -> &LoadingTimer {
        &self.timer
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[inline]
    pub fn is_hide_pending(&self) -> bool {
        self.hide_pending
    }

    /// Request a visibility change.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use scroll_sequence::{LoadingScreen, VisibilityChange};
    ///
    /// let mut screen = LoadingScreen::new(1000.0, 0.0).unwrap();
    /// assert_eq!(screen.set_visible(false, 200.0), VisibilityChange::HideAfter(800.0));
    /// ```
    pub fn set_visible(&mut self, visible: bool, now_ms: f64) -> VisibilityChange {
        if visible {
            self.visible = true;
            self.hide_pending = false;
            debug!("loading screen shown");
            return VisibilityChange::Show;
        }

        let remaining = self.timer.remaining_ms(now_ms);
        if remaining > 0.0 {
            self.hide_pending = true;
            debug!(remaining_ms = remaining, "loading screen hide deferred");
            VisibilityChange::HideAfter(remaining)
        } else {
            self.visible = false;
            self.hide_pending = false;
            debug!("loading screen hidden");
            VisibilityChange::Hide
        }
    }

    /// Apply a hide that was deferred by [`VisibilityChange::HideAfter`].
    ///
    /// Returns `false` when the hide was cancelled by a later `set_visible(true)`.
    pub fn finish_deferred_hide(&mut self) -> bool {
        if !self.hide_pending {
            return false;
        }
        self.hide_pending = false;
        self.visible = false;
        debug!("loading screen hidden after minimum duration");
        true
    }
}

/// Web-specific loading overlay.
#[cfg(feature = "web")]
pub mod web {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::HtmlElement;

    use super::{LoadingScreen, VisibilityChange};
    use crate::{SequenceError, SequenceResult};

    fn now_ms() -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or(0.0)
    }

    fn set_style(element: &HtmlElement, name: &str, value: &str) -> SequenceResult<()> {
        element
            .style()
            .set_property(name, value)
            .map_err(|e| SequenceError::host(format!("failed to set {name}: {e:?}")))
    }

    /// Full-page loading overlay (`div.loadingScreen` holding a `div.loadingCircle`).
    ///
    /// Styling is left to the page's stylesheet.
    pub struct LoadingOverlay {
        root: HtmlElement,
        body: HtmlElement,
        screen: RefCell<LoadingScreen>,
    }

    impl LoadingOverlay {
        /// Create the overlay and suspend page scrolling.
        ///
        /// The caller attaches [`LoadingOverlay::element`] to the page.
        pub fn new(minimum_duration_ms: f64) -> SequenceResult<Rc<Self>> {
            let screen = LoadingScreen::new(minimum_duration_ms, now_ms())?;

            let window = web_sys::window().ok_or_else(|| SequenceError::host("no window available"))?;
            let document = window
                .document()
                .ok_or_else(|| SequenceError::host("no document available"))?;
            let body = document
                .body()
                .ok_or_else(|| SequenceError::host("no document body available"))?;

            let root = document
                .create_element("div")
                .map_err(|_| SequenceError::host("failed to create loading screen element"))?
                .dyn_into::<HtmlElement>()
                .map_err(|_| SequenceError::host("loading screen element is not an HtmlElement"))?;
            root.set_class_name("loadingScreen");

            let circle = document
                .create_element("div")
                .map_err(|_| SequenceError::host("failed to create loading circle element"))?;
            circle.set_class_name("loadingCircle");
            root.append_child(&circle)
                .map_err(|_| SequenceError::host("failed to attach loading circle"))?;

            set_style(&body, "overflow", "hidden")?;

            Ok(Rc::new(Self {
                root,
                body,
                screen: RefCell::new(screen),
            }))
        }

        /// Root element for the caller to attach to the page.
        pub fn element(&self) -> &HtmlElement {
            &self.root
        }

        /// Show or hide the overlay, honouring the minimum duration.
        pub fn set_visible(self: &Rc<Self>, visible: bool) -> SequenceResult<()> {
            let change = self.screen.borrow_mut().set_visible(visible, now_ms());
            match change {
                VisibilityChange::Show => self.show(),
                VisibilityChange::Hide => self.hide(),
                VisibilityChange::HideAfter(delay_ms) => self.schedule_hide(delay_ms),
            }
        }

        fn show(&self) -> SequenceResult<()> {
            set_style(&self.root, "display", "block")?;
            set_style(&self.body, "overflow", "hidden")
        }

        fn hide(&self) -> SequenceResult<()> {
            set_style(&self.root, "display", "none")?;
            set_style(&self.body, "overflow", "visible")
        }

        fn schedule_hide(self: &Rc<Self>, delay_ms: f64) -> SequenceResult<()> {
            let window = web_sys::window().ok_or_else(|| SequenceError::host("no window available"))?;
            let overlay = Rc::clone(self);
            let callback = Closure::once_into_js(move || {
                if overlay.screen.borrow_mut().finish_deferred_hide() {
                    if let Err(err) = overlay.hide() {
                        tracing::warn!(%err, "failed to hide loading screen");
                    }
                }
            });
            window
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    callback.unchecked_ref(),
                    delay_ms.ceil() as i32,
                )
                .map_err(|e| SequenceError::host(format!("failed to schedule hide: {e:?}")))?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hide_deferred_until_minimum() {
        let mut screen = LoadingScreen::new(1000.0, 0.0).unwrap();
        assert!(screen.is_visible());

        let change = screen.set_visible(false, 200.0);
        assert_eq!(change, VisibilityChange::HideAfter(800.0));
        assert!(screen.is_visible());
        assert!(screen.is_hide_pending());

        assert!(screen.finish_deferred_hide());
        assert!(!screen.is_visible());
    }

    #[test]
    fn test_hide_immediate_after_minimum() {
        let mut screen = LoadingScreen::new(1000.0, 0.0).unwrap();
        assert_eq!(screen.set_visible(false, 1500.0), VisibilityChange::Hide);
        assert!(!screen.is_visible());
        assert!(!screen.finish_deferred_hide());
    }

    #[test]
    fn test_hide_exactly_at_minimum_is_immediate() {
        let mut screen = LoadingScreen::new(1000.0, 50.0).unwrap();
        assert_eq!(screen.set_visible(false, 1050.0), VisibilityChange::Hide);
    }

    #[test]
    fn test_show_cancels_deferred_hide() {
        let mut screen = LoadingScreen::new(1000.0, 0.0).unwrap();
        screen.set_visible(false, 100.0);
        assert_eq!(screen.set_visible(true, 300.0), VisibilityChange::Show);
        assert!(!screen.finish_deferred_hide());
        assert!(screen.is_visible());
    }

    #[test]
    fn test_rejects_invalid_duration() {
        for bad in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                LoadingScreen::new(bad, 0.0),
                Err(SequenceError::Config(_))
            ));
        }
    }

    #[test]
    fn test_parse_minimum_duration() {
        assert_eq!(parse_minimum_duration(" 250 ").unwrap(), 250.0);
        assert!(matches!(
            parse_minimum_duration("abc"),
            Err(SequenceError::Config(_))
        ));
        assert!(parse_minimum_duration("-1").is_err());
    }

    #[test]
    fn test_timer_remaining() {
        let timer = LoadingTimer::new(1000.0, 100.0).unwrap();
        assert_eq!(timer.elapsed_ms(400.0), 300.0);
        assert_eq!(timer.remaining_ms(400.0), 700.0);
        assert_eq!(timer.remaining_ms(5000.0), 0.0);
    }
}
