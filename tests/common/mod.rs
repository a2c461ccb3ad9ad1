// In-memory host fakes shared by the host-side tests.

#![allow(dead_code)]

use cursor_trail::core::{
    CursorFrame, CursorSurface, FrameCallback, FrameScheduler, HostCapabilities, InputEvent,
    InputHandler, InputKind, InputSource, PointerSample, TargetNode,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

// ---------------- Page elements ----------------

#[derive(Debug)]
struct NodeData {
    tag: String,
    classes: Vec<String>,
    parent: Option<FakeNode>,
}

#[derive(Clone, Debug)]
pub struct FakeNode(Rc<NodeData>);

impl FakeNode {
    pub fn new(tag: &str, classes: &[&str], parent: Option<&FakeNode>) -> Self {
        FakeNode(Rc::new(NodeData {
            tag: tag.to_uppercase(), // browsers report upper-case tag names
            classes: classes.iter().map(|c| c.to_string()).collect(),
            parent: parent.cloned(),
        }))
    }

    pub fn is(&self, other: &FakeNode) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl TargetNode for FakeNode {
    fn has_tag(&self, tag: &str) -> bool {
        self.0.tag.eq_ignore_ascii_case(tag)
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.classes.iter().any(|c| c == class)
    }

    fn parent(&self) -> Option<Self> {
        self.0.parent.clone()
    }
}

// ---------------- Input ----------------

#[derive(Default)]
pub struct Bus {
    next_id: usize,
    handlers: Vec<(usize, InputKind, InputHandler<FakeNode>)>,
    pub subscribe_calls: usize,
    pub unsubscribe_calls: usize,
}

/// Test-side handle on the fake input bus.
#[derive(Clone, Default)]
pub struct FakeInput(pub Rc<RefCell<Bus>>);

impl FakeInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listener_count(&self) -> usize {
        self.0.borrow().handlers.len()
    }

    pub fn kinds(&self) -> Vec<InputKind> {
        self.0
            .borrow()
            .handlers
            .iter()
            .map(|(_, k, _)| *k)
            .collect()
    }

    pub fn subscribe_calls(&self) -> usize {
        self.0.borrow().subscribe_calls
    }

    pub fn unsubscribe_calls(&self) -> usize {
        self.0.borrow().unsubscribe_calls
    }

    /// Deliver an event to every handler subscribed to its kind.
    pub fn dispatch(&self, event: InputEvent<FakeNode>) {
        let kind = event.kind();
        // take the handlers out so they can run without the bus borrowed
        let mut handlers = std::mem::take(&mut self.0.borrow_mut().handlers);
        for (_, k, handler) in handlers.iter_mut() {
            if *k == kind {
                handler(event.clone());
            }
        }
        let mut bus = self.0.borrow_mut();
        handlers.append(&mut bus.handlers);
        bus.handlers = handlers;
    }

    pub fn move_to(&self, x: f32, y: f32, timestamp_ms: f64) {
        self.dispatch(InputEvent::Move(PointerSample::new(x, y, timestamp_ms)));
    }

    pub fn over(&self, target: &FakeNode) {
        self.dispatch(InputEvent::Over(Some(target.clone())));
    }

    pub fn out(&self, target: &FakeNode) {
        self.dispatch(InputEvent::Out(Some(target.clone())));
    }
}

impl InputSource for FakeInput {
    type Target = FakeNode;
    type Listener = usize;

    fn listen(&mut self, kind: InputKind, handler: InputHandler<FakeNode>) -> usize {
        let mut bus = self.0.borrow_mut();
        bus.subscribe_calls += 1;
        bus.next_id += 1;
        let id = bus.next_id;
        bus.handlers.push((id, kind, handler));
        id
    }

    fn unlisten(&mut self, listener: usize) {
        let mut bus = self.0.borrow_mut();
        bus.unsubscribe_calls += 1;
        bus.handlers.retain(|(id, _, _)| *id != listener);
    }
}

// ---------------- Frames ----------------

#[derive(Default)]
struct Queue {
    next_id: u32,
    pending: Vec<(u32, FrameCallback)>,
    requested: usize,
    cancelled: usize,
}

/// Manual frame clock: nothing runs until the test calls `run_frame`.
#[derive(Clone, Default)]
pub struct FakeScheduler(Rc<RefCell<Queue>>);

impl FakeScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.0.borrow().pending.len()
    }

    pub fn requested(&self) -> usize {
        self.0.borrow().requested
    }

    pub fn cancelled(&self) -> usize {
        self.0.borrow().cancelled
    }

    /// Run every callback pending at call time with `now_ms`.
    pub fn run_frame(&self, now_ms: f64) {
        let due = std::mem::take(&mut self.0.borrow_mut().pending);
        for (_, callback) in due {
            callback(now_ms);
        }
    }

    /// Run frames every `step_ms` from `from_ms` up to and including `to_ms`.
    pub fn run_frames(&self, from_ms: f64, to_ms: f64, step_ms: f64) {
        let mut t = from_ms;
        while t <= to_ms + 1e-9 {
            self.run_frame(t);
            t += step_ms;
        }
    }
}

impl FrameScheduler for FakeScheduler {
    type Request = u32;

    fn request_frame(&self, callback: FrameCallback) -> u32 {
        let mut q = self.0.borrow_mut();
        q.next_id += 1;
        q.requested += 1;
        let id = q.next_id;
        q.pending.push((id, callback));
        id
    }

    fn cancel_frame(&self, request: u32) {
        let mut q = self.0.borrow_mut();
        q.cancelled += 1;
        q.pending.retain(|(id, _)| *id != request);
    }
}

// ---------------- Surface ----------------

#[derive(Default)]
struct Recording {
    frames: Vec<CursorFrame>,
    torn_down: bool,
}

/// Surface that keeps every presented frame.
#[derive(Clone, Default)]
pub struct RecordingSurface(Rc<RefCell<Recording>>);

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame_count(&self) -> usize {
        self.0.borrow().frames.len()
    }

    pub fn last(&self) -> Option<CursorFrame> {
        self.0.borrow().frames.last().cloned()
    }

    pub fn torn_down(&self) -> bool {
        self.0.borrow().torn_down
    }
}

impl CursorSurface for RecordingSurface {
    fn present(&mut self, frame: &CursorFrame) {
        self.0.borrow_mut().frames.push(frame.clone());
    }

    fn teardown(&mut self) {
        self.0.borrow_mut().torn_down = true;
    }
}

// ---------------- Capabilities ----------------

pub struct FakeCaps {
    pub coarse: Cell<bool>,
    pub queried: Cell<usize>,
}

impl FakeCaps {
    pub fn mouse() -> Self {
        Self {
            coarse: Cell::new(false),
            queried: Cell::new(0),
        }
    }

    pub fn touch() -> Self {
        Self {
            coarse: Cell::new(true),
            queried: Cell::new(0),
        }
    }
}

impl HostCapabilities for FakeCaps {
    fn coarse_pointer(&self) -> bool {
        self.queried.set(self.queried.get() + 1);
        self.coarse.get()
    }
}
