//! Seams between the cursor and whatever hosts it.
//!
//! The browser glue implements these on top of `web-sys`; tests implement
//! them with in-memory fakes and drive time by hand.

use crate::core::hover::TargetNode;
use crate::core::tracker::PointerSample;
use crate::core::trail::CursorFrame;

/// The four document-scope listeners the cursor installs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputKind {
    Move,
    Over,
    Out,
    LeaveDocument,
}

impl InputKind {
    pub const ALL: [InputKind; 4] = [
        InputKind::Move,
        InputKind::Over,
        InputKind::Out,
        InputKind::LeaveDocument,
    ];
}

/// A normalized input event. `Over`/`Out` carry the event target when it is
/// an element.
#[derive(Clone, Debug)]
pub enum InputEvent<T> {
    Move(PointerSample),
    Over(Option<T>),
    Out(Option<T>),
    LeaveDocument,
}

impl<T> InputEvent<T> {
    pub fn kind(&self) -> InputKind {
        match self {
            InputEvent::Move(_) => InputKind::Move,
            InputEvent::Over(_) => InputKind::Over,
            InputEvent::Out(_) => InputKind::Out,
            InputEvent::LeaveDocument => InputKind::LeaveDocument,
        }
    }
}

pub type InputHandler<T> = Box<dyn FnMut(InputEvent<T>)>;

/// Subscription interface for global pointer input.
pub trait InputSource {
    type Target: TargetNode + Clone + 'static;
    type Listener;

    fn listen(&mut self, kind: InputKind, handler: InputHandler<Self::Target>) -> Self::Listener;
    fn unlisten(&mut self, listener: Self::Listener);
}

/// Runs once before the next repaint with the host time in milliseconds.
pub type FrameCallback = Box<dyn FnOnce(f64)>;

/// Request-next-frame scheduling with cancellation. A request fires at most
/// once; callers re-request every tick to keep a loop going.
pub trait FrameScheduler {
    type Request: 'static;

    fn request_frame(&self, callback: FrameCallback) -> Self::Request;
    fn cancel_frame(&self, request: Self::Request);
}

/// Where composed frames end up.
pub trait CursorSurface {
    fn present(&mut self, frame: &CursorFrame);
    /// Remove everything the surface has put on screen.
    fn teardown(&mut self);
}

pub trait HostCapabilities {
    /// True for touch-first (coarse pointer) environments.
    fn coarse_pointer(&self) -> bool;
}
