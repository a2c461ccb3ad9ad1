use crate::core::constants::OFFSCREEN_SENTINEL;
use crate::core::host::InputEvent;
use crate::core::hover::{self, Selector, TargetNode};
use glam::Vec2;

/// One raw pointer position in viewport pixels with its host timestamp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub position: Vec2,
    pub timestamp_ms: f64,
}

impl PointerSample {
    pub fn new(x: f32, y: f32, timestamp_ms: f64) -> Self {
        Self {
            position: Vec2::new(x, y),
            timestamp_ms,
        }
    }
}

/// Raw position, hover and visibility signals fed by input events.
#[derive(Clone, Debug)]
pub struct InputTracker {
    current: Option<PointerSample>,
    hover: bool,
    visible: bool,
    selectors: Vec<Selector>,
}

impl InputTracker {
    pub fn new(selectors: Vec<Selector>) -> Self {
        Self {
            current: None,
            hover: false,
            visible: false,
            selectors,
        }
    }

    /// Apply one event. Returns the new sample for move events so the
    /// caller can hand the same value to every downstream consumer.
    pub fn handle<T: TargetNode + Clone>(&mut self, event: InputEvent<T>) -> Option<PointerSample> {
        match event {
            InputEvent::Move(sample) => {
                if !sample.position.is_finite() || !sample.timestamp_ms.is_finite() {
                    return None;
                }
                if !self.visible {
                    log::debug!("[tracker] first move, cursor active");
                }
                self.current = Some(sample);
                self.visible = true;
                return Some(sample);
            }
            InputEvent::Over(Some(target)) => {
                if hover::is_interactive(&target, &self.selectors) {
                    self.hover = true;
                }
            }
            InputEvent::Out(Some(target)) => {
                if hover::is_interactive(&target, &self.selectors) {
                    self.hover = false;
                }
            }
            InputEvent::LeaveDocument => self.hover = false,
            InputEvent::Over(None) | InputEvent::Out(None) => {}
        }
        None
    }

    pub fn current(&self) -> Option<PointerSample> {
        self.current
    }

    /// Latest raw position, or the off-screen sentinel before any input.
    pub fn position(&self) -> Vec2 {
        self.current.map_or(OFFSCREEN_SENTINEL, |s| s.position)
    }

    pub fn is_hovering(&self) -> bool {
        self.hover
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn selectors(&self) -> &[Selector] {
        &self.selectors
    }
}
