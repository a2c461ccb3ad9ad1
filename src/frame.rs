use crate::core::{FrameCallback, FrameScheduler};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `requestAnimationFrame` scheduling through one persistent trampoline.
///
/// The trampoline closure lives as long as the scheduler and runs whatever
/// callback sits in the pending slot, so no closure is created or dropped
/// per frame. One request may be outstanding at a time; a new request
/// replaces the pending callback.
pub struct RafScheduler {
    window: web::Window,
    pending: Rc<RefCell<Option<FrameCallback>>>,
    trampoline: Closure<dyn FnMut(f64)>,
}

impl RafScheduler {
    pub fn new(window: web::Window) -> Self {
        let pending: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
        let slot = pending.clone();
        let trampoline = Closure::wrap(Box::new(move |now_ms: f64| {
            // release the slot before running: the callback re-requests
            let callback = slot.borrow_mut().take();
            if let Some(callback) = callback {
                callback(now_ms);
            }
        }) as Box<dyn FnMut(f64)>);
        Self {
            window,
            pending,
            trampoline,
        }
    }
}

impl FrameScheduler for RafScheduler {
    type Request = Option<i32>;

    fn request_frame(&self, callback: FrameCallback) -> Option<i32> {
        *self.pending.borrow_mut() = Some(callback);
        match self
            .window
            .request_animation_frame(self.trampoline.as_ref().unchecked_ref::<js_sys::Function>())
        {
            Ok(id) => Some(id),
            Err(e) => {
                log::error!("[frame] requestAnimationFrame failed: {:?}", e);
                self.pending.borrow_mut().take();
                None
            }
        }
    }

    fn cancel_frame(&self, request: Option<i32>) {
        if let Some(id) = request {
            _ = self.window.cancel_animation_frame(id);
        }
        let dropped = self.pending.borrow_mut().take();
        drop(dropped);
    }
}
