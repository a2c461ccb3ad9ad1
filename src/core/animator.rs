use crate::core::constants::OFFSCREEN_SENTINEL;
use crate::core::host::{
    CursorSurface, FrameScheduler, HostCapabilities, InputEvent, InputKind, InputSource,
};
use crate::core::hover::{Selector, TargetNode};
use crate::core::palette::Palette;
use crate::core::reactor::HoverReactor;
use crate::core::spring::MotionSmoother;
use crate::core::tracker::InputTracker;
use crate::core::trail::{FrameView, TrailRenderer, TrailVariant};
use crate::core::velocity::VelocityEstimator;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Options chosen by the embedding page.
#[derive(Clone, Debug)]
pub struct CursorConfig {
    pub variant: TrailVariant,
    pub dark: bool,
    pub selectors: Vec<Selector>,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            variant: TrailVariant::default(),
            dark: false,
            selectors: Selector::defaults(),
        }
    }
}

/// Everything the input and frame callbacks share.
struct CursorState {
    tracker: InputTracker,
    velocity: VelocityEstimator,
    smoother: MotionSmoother,
    reactor: HoverReactor,
    renderer: Box<dyn TrailRenderer>,
    palette: Palette,
    surface: Box<dyn CursorSurface>,
    last_frame_ms: Option<f64>,
}

impl CursorState {
    fn on_input<T: TargetNode + Clone>(&mut self, event: InputEvent<T>) {
        if let Some(sample) = self.tracker.handle(event) {
            self.velocity.observe(sample);
            self.renderer.record(sample);
        }
    }

    fn frame(&mut self, now_ms: f64) {
        let dt_sec = match self.last_frame_ms.replace(now_ms) {
            Some(prev) => ((now_ms - prev) / 1000.0).max(0.0) as f32,
            None => 0.0,
        };
        if !self.tracker.is_visible() {
            return;
        }
        let hovering = self.tracker.is_hovering();
        self.smoother.step(self.tracker.position(), dt_sec);
        self.reactor.step(hovering, dt_sec);

        let view = FrameView {
            now_ms,
            smoother: &self.smoother,
            hovering,
            reactor: &self.reactor,
            motion: self.velocity.motion(now_ms),
            palette: self.palette,
        };
        let frame = self.renderer.compose(&view);
        // a corrupted transform is worse than a skipped frame
        if frame.is_finite() {
            self.surface.present(&frame);
        }
    }
}

struct FrameLoop<R> {
    pending: RefCell<Option<R>>,
    cancelled: Cell<bool>,
}

fn request_next<F: FrameScheduler + 'static>(
    scheduler: &Rc<F>,
    frame_loop: &Rc<FrameLoop<F::Request>>,
    state: &Rc<RefCell<CursorState>>,
) {
    if frame_loop.cancelled.get() {
        return;
    }
    let scheduler_tick = scheduler.clone();
    let loop_tick = frame_loop.clone();
    let state_tick = state.clone();
    let request = scheduler.request_frame(Box::new(move |now_ms| {
        loop_tick.pending.borrow_mut().take();
        if loop_tick.cancelled.get() {
            return;
        }
        state_tick.borrow_mut().frame(now_ms);
        request_next(&scheduler_tick, &loop_tick, &state_tick);
    }));
    *frame_loop.pending.borrow_mut() = Some(request);
}

struct Mounted<I: InputSource, F: FrameScheduler> {
    input: I,
    listeners: Vec<I::Listener>,
    scheduler: Rc<F>,
    frame_loop: Rc<FrameLoop<F::Request>>,
    state: Rc<RefCell<CursorState>>,
}

/// A custom pointer overlay bound to one host for its mounted lifetime.
///
/// Typical usage:
/// - `PointerTrailAnimator::mount(config, &caps, input, scheduler, surface)`
/// - `set_dark` when the page theme flips
/// - `unmount()` (or drop) to remove listeners, stop the frame loop and
///   clear the overlay
///
/// On coarse-pointer hosts `mount` returns an inert animator: it subscribes
/// to nothing, schedules nothing and draws nothing.
pub struct PointerTrailAnimator<I: InputSource, F: FrameScheduler + 'static> {
    mounted: Option<Mounted<I, F>>,
}

impl<I, F> PointerTrailAnimator<I, F>
where
    I: InputSource,
    F: FrameScheduler + 'static,
{
    pub fn mount<C, S>(
        config: CursorConfig,
        caps: &C,
        mut input: I,
        scheduler: F,
        surface: S,
    ) -> Self
    where
        C: HostCapabilities + ?Sized,
        S: CursorSurface + 'static,
    {
        if caps.coarse_pointer() {
            log::info!("[cursor] coarse pointer detected, cursor disabled");
            return Self { mounted: None };
        }

        let renderer = config.variant.renderer();
        log::info!(
            "[cursor] mount variant={} dark={} selectors={}",
            renderer.name(),
            config.dark,
            config.selectors.len()
        );
        let smoother = MotionSmoother::new(&renderer.springs(), OFFSCREEN_SENTINEL);
        let state = Rc::new(RefCell::new(CursorState {
            tracker: InputTracker::new(config.selectors),
            velocity: VelocityEstimator::new(),
            smoother,
            reactor: HoverReactor::default(),
            renderer,
            palette: Palette::new(config.dark),
            surface: Box::new(surface),
            last_frame_ms: None,
        }));

        let listeners = InputKind::ALL
            .iter()
            .map(|&kind| {
                let state = state.clone();
                input.listen(
                    kind,
                    Box::new(move |event: InputEvent<I::Target>| {
                        state.borrow_mut().on_input(event);
                    }),
                )
            })
            .collect();

        let scheduler = Rc::new(scheduler);
        let frame_loop = Rc::new(FrameLoop {
            pending: RefCell::new(None),
            cancelled: Cell::new(false),
        });
        request_next(&scheduler, &frame_loop, &state);

        Self {
            mounted: Some(Mounted {
                input,
                listeners,
                scheduler,
                frame_loop,
                state,
            }),
        }
    }

    /// False for the inert animator of a coarse-pointer host, and after
    /// unmount.
    pub fn is_active(&self) -> bool {
        self.mounted.is_some()
    }

    /// True once the pointer has moved; never reverts.
    pub fn is_visible(&self) -> bool {
        self.mounted
            .as_ref()
            .is_some_and(|m| m.state.borrow().tracker.is_visible())
    }

    pub fn is_hovering(&self) -> bool {
        self.mounted
            .as_ref()
            .is_some_and(|m| m.state.borrow().tracker.is_hovering())
    }

    pub fn set_dark(&self, dark: bool) {
        if let Some(m) = &self.mounted {
            m.state.borrow_mut().palette = Palette::new(dark);
        }
    }

    pub fn unmount(mut self) {
        self.teardown();
    }

    fn teardown(&mut self) {
        let Some(mut m) = self.mounted.take() else {
            return;
        };
        for listener in m.listeners.drain(..) {
            m.input.unlisten(listener);
        }
        m.frame_loop.cancelled.set(true);
        let pending = m.frame_loop.pending.borrow_mut().take();
        if let Some(request) = pending {
            m.scheduler.cancel_frame(request);
        }
        m.state.borrow_mut().surface.teardown();
        log::info!("[cursor] unmounted");
    }
}

impl<I, F> Drop for PointerTrailAnimator<I, F>
where
    I: InputSource,
    F: FrameScheduler + 'static,
{
    fn drop(&mut self) {
        self.teardown();
    }
}
