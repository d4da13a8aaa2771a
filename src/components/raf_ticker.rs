use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::state::Ticker;

type FrameFn = Box<dyn FnMut(f64) -> bool>;

struct RafInner {
    window: web_sys::Window,
    raf_id: Cell<Option<i32>>,
    running: Cell<bool>,
    on_frame: RefCell<Option<FrameFn>>,
    closure: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl RafInner {
    fn request(&self) {
        if self.raf_id.get().is_some() {
            return;
        }
        if let Some(cb) = self.closure.borrow().as_ref() {
            if let Ok(id) = self.window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                self.raf_id.set(Some(id));
            }
        }
    }

    fn cancel(&self) {
        if let Some(id) = self.raf_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
    }
}

/// `requestAnimationFrame` clock. Frames go to the callback set with
/// [`RafTicker::set_on_frame`] until it returns false or the ticker stops.
pub struct RafTicker {
    inner: Rc<RafInner>,
}

impl RafTicker {
    /// `None` outside a browser window.
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let inner = Rc::new(RafInner {
            window,
            raf_id: Cell::new(None),
            running: Cell::new(false),
            on_frame: RefCell::new(None),
            closure: RefCell::new(None),
        });
        // Weak so the closure does not keep its own owner alive.
        let weak = Rc::downgrade(&inner);
        let closure = Closure::wrap(Box::new(move |timestamp: f64| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.raf_id.set(None);
            if !inner.running.get() {
                return;
            }
            let keep = match inner.on_frame.borrow_mut().as_mut() {
                Some(f) => f(timestamp),
                None => false,
            };
            if keep && inner.running.get() {
                inner.request();
            } else {
                inner.running.set(false);
            }
        }) as Box<dyn FnMut(f64)>);
        *inner.closure.borrow_mut() = Some(closure);
        Some(Self { inner })
    }

    pub fn set_on_frame(&self, f: impl FnMut(f64) -> bool + 'static) {
        *self.inner.on_frame.borrow_mut() = Some(Box::new(f));
    }
}

impl Ticker for RafTicker {
    fn start(&mut self) {
        self.inner.running.set(true);
        self.inner.request();
    }

    fn stop(&mut self) {
        self.inner.running.set(false);
        self.inner.cancel();
    }

    fn dispose(&mut self) {
        self.stop();
        self.inner.on_frame.borrow_mut().take();
        self.inner.closure.borrow_mut().take();
    }

    fn is_running(&self) -> bool {
        self.inner.running.get()
    }
}
