//! Browser frame loop for the [`Animator`].
//!
//! `AnimationLoop` owns everything the animator needs from the page: the
//! `requestAnimationFrame` callback, a `ResizeObserver` on the content element
//! (page height grows as sections are revealed, which a window `resize`
//! never reports), and a window `resize` listener for width changes.
//!
//! Callbacks hold only a `Weak` reference to the loop state, so dropping the
//! `AnimationLoop` is enough to tear everything down. `stop` cancels the
//! pending frame synchronously and detaches every observer.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlCanvasElement, ResizeObserver, Window};

use crate::engine::Animator;

/// A running particle animation attached to a canvas element.
pub struct AnimationLoop {
    inner: Rc<LoopInner>,
}

struct LoopInner {
    window: Window,
    observed: Element,
    animator: RefCell<Animator>,
    raf_id: Cell<Option<i32>>,
    stopped: Cell<bool>,
    on_frame: RefCell<Option<Closure<dyn FnMut(f64)>>>,
    on_resize: RefCell<Option<Closure<dyn FnMut()>>>,
    observer: RefCell<Option<ResizeObserver>>,
}

impl AnimationLoop {
    /// Start animating `canvas`, sized to track `observed`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if there is no window, the canvas has no 2D context, or
    /// the observers cannot be attached.
    pub fn start(canvas: HtmlCanvasElement, observed: Element) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let seed = js_sys::Date::now().to_bits();
        let animator = Animator::new(canvas, seed)?;

        let inner = Rc::new(LoopInner {
            window,
            observed,
            animator: RefCell::new(animator),
            raf_id: Cell::new(None),
            stopped: Cell::new(false),
            on_frame: RefCell::new(None),
            on_resize: RefCell::new(None),
            observer: RefCell::new(None),
        });
        inner.measure();

        let weak = Rc::downgrade(&inner);
        let on_frame = Closure::wrap(Box::new(move |_ts: f64| {
            if let Some(inner) = Weak::upgrade(&weak) {
                inner.frame();
            }
        }) as Box<dyn FnMut(f64)>);
        *inner.on_frame.borrow_mut() = Some(on_frame);

        let weak = Rc::downgrade(&inner);
        let on_resize = Closure::wrap(Box::new(move || {
            if let Some(inner) = Weak::upgrade(&weak) {
                inner.measure();
            }
        }) as Box<dyn FnMut()>);

        let observer = ResizeObserver::new(on_resize.as_ref().unchecked_ref())?;
        observer.observe(&inner.observed);
        inner
            .window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
        *inner.observer.borrow_mut() = Some(observer);
        *inner.on_resize.borrow_mut() = Some(on_resize);

        inner.schedule();
        Ok(Self { inner })
    }

    /// Cancel the pending frame and detach all observers. Idempotent.
    pub fn stop(&self) {
        self.inner.stop();
    }

    /// Number of particles currently in the scene.
    #[must_use]
    pub fn particle_count(&self) -> usize {
        self.inner.animator.borrow().core.field.len()
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.inner.stop();
    }
}

impl LoopInner {
    fn measure(&self) {
        let width = self
            .window
            .document()
            .and_then(|doc| doc.document_element())
            .map_or(0, |el| el.client_width());
        let height = self.observed.scroll_height();
        let dpr = self.window.device_pixel_ratio();
        self.animator
            .borrow_mut()
            .set_viewport(f64::from(width), f64::from(height), dpr);
    }

    fn frame(&self) {
        self.raf_id.set(None);
        if self.stopped.get() {
            return;
        }
        if let Err(err) = self.animator.borrow_mut().frame() {
            log::warn!("particle frame failed: {err:?}");
        }
        self.schedule();
    }

    fn schedule(&self) {
        if self.stopped.get() {
            return;
        }
        let on_frame = self.on_frame.borrow();
        let Some(cb) = on_frame.as_ref() else {
            return;
        };
        match self.window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => self.raf_id.set(Some(id)),
            Err(err) => log::warn!("requestAnimationFrame failed: {err:?}"),
        }
    }

    fn stop(&self) {
        if self.stopped.replace(true) {
            return;
        }
        if let Some(id) = self.raf_id.take() {
            if let Err(err) = self.window.cancel_animation_frame(id) {
                log::warn!("cancelAnimationFrame failed: {err:?}");
            }
        }
        if let Some(observer) = self.observer.borrow_mut().take() {
            observer.disconnect();
        }
        if let Some(cb) = self.on_resize.borrow_mut().take() {
            if let Err(err) = self
                .window
                .remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref())
            {
                log::warn!("removing resize listener failed: {err:?}");
            }
        }
        self.on_frame.borrow_mut().take();
        log::debug!("particle animation stopped");
    }
}
