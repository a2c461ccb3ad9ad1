use crate::constants::{EVENT_LEAVE_DOCUMENT, EVENT_MOVE, EVENT_OUT, EVENT_OVER};
use crate::core::{InputEvent, InputHandler, InputKind, InputSource, PointerSample};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Global mouse input from the window, plus `mouseleave` on the document
/// element to notice the pointer leaving the page.
pub struct DomInputSource {
    window: web::Window,
    document_element: Option<web::Element>,
}

/// A live DOM listener. The closure is dropped on `unlisten`, after it has
/// been detached.
pub struct DomListener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::MouseEvent)>,
}

impl DomInputSource {
    pub fn new(window: web::Window, document: &web::Document) -> Self {
        Self {
            window,
            document_element: document.document_element(),
        }
    }

    fn binding(&self, kind: InputKind) -> (web::EventTarget, &'static str) {
        let window: web::EventTarget = self.window.clone().into();
        match kind {
            InputKind::Move => (window, EVENT_MOVE),
            InputKind::Over => (window, EVENT_OVER),
            InputKind::Out => (window, EVENT_OUT),
            InputKind::LeaveDocument => match &self.document_element {
                Some(el) => (el.clone().into(), EVENT_LEAVE_DOCUMENT),
                None => (window, EVENT_LEAVE_DOCUMENT),
            },
        }
    }
}

impl InputSource for DomInputSource {
    type Target = web::Element;
    type Listener = DomListener;

    fn listen(
        &mut self,
        kind: InputKind,
        mut handler: InputHandler<web::Element>,
    ) -> DomListener {
        let (target, event) = self.binding(kind);
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            handler(to_input_event(kind, &ev));
        }) as Box<dyn FnMut(_)>);
        if let Err(e) =
            target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            log::warn!("[events] failed to listen for {}: {:?}", event, e);
        }
        DomListener {
            target,
            event,
            closure,
        }
    }

    fn unlisten(&mut self, listener: DomListener) {
        _ = listener.target.remove_event_listener_with_callback(
            listener.event,
            listener.closure.as_ref().unchecked_ref(),
        );
    }
}

#[inline]
fn event_element(ev: &web::MouseEvent) -> Option<web::Element> {
    ev.target().and_then(|t| t.dyn_into::<web::Element>().ok())
}

fn to_input_event(kind: InputKind, ev: &web::MouseEvent) -> InputEvent<web::Element> {
    match kind {
        InputKind::Move => InputEvent::Move(PointerSample::new(
            ev.client_x() as f32,
            ev.client_y() as f32,
            ev.time_stamp(),
        )),
        InputKind::Over => InputEvent::Over(event_element(ev)),
        InputKind::Out => InputEvent::Out(event_element(ev)),
        InputKind::LeaveDocument => InputEvent::LeaveDocument,
    }
}
