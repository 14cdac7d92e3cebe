//! View-triggered count-up animation
//!
//! A [`CountUp`] run animates a displayed integer from `start` to `target`
//! once its host element has been seen. Frames are driven by the host's
//! display-refresh clock through the [`FrameScheduler`] seam: the browser
//! implementation wraps `requestAnimationFrame`, tests use a mock.
//!
//! ```text
//! Idle --on_visible--> Running --p reaches 1--> Done
//! ```
//!
//! The run owns its scheduler and at most one pending frame. Dropping the run
//! cancels that frame, so no callback can write into a torn-down component.

use super::motion::{ease_out_quart, progress};
use super::visibility::{ViewportMargin, VisibilityLatch};

/// Default animation length
pub const DEFAULT_DURATION_SECS: f64 = 1.2;

/// Default shrink of the viewport before a counter counts as visible
pub const DEFAULT_VIEWPORT_INSET_PERCENT: u8 = 20;

/// Opaque token identifying one scheduled frame callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Host primitive that invokes the run's frame callback on the next paint
pub trait FrameScheduler {
    /// Schedule the next frame. `None` means the host could not schedule one.
    fn request_frame(&mut self) -> Option<FrameHandle>;

    /// Cancel a frame previously returned by `request_frame`
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Parameters of one count-up animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountUpParams {
    pub target: i64,
    pub start: i64,
    pub duration_secs: f64,
}

impl CountUpParams {
    pub fn new(target: i64) -> Self {
        Self {
            target,
            start: 0,
            duration_secs: DEFAULT_DURATION_SECS,
        }
    }

    pub fn start(mut self, start: i64) -> Self {
        self.start = start;
        self
    }

    pub fn duration_secs(mut self, duration_secs: f64) -> Self {
        self.duration_secs = duration_secs;
        self
    }

    fn duration_ms(&self) -> f64 {
        self.duration_secs * 1000.0
    }

    /// Eased value at normalized progress `p`, floored for display
    pub fn value_at(&self, p: f64) -> i64 {
        // In f64: the i64 difference overflows for spans wider than i64::MAX
        let span = self.target as f64 - self.start as f64;
        let raw = (self.start as f64 + span * ease_out_quart(p)).floor() as i64;
        if self.target >= self.start {
            raw.clamp(self.start, self.target)
        } else {
            raw
        }
    }
}

/// Component-level options; the parameters plus the visibility margin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountUpOptions {
    pub start: i64,
    pub duration_secs: f64,
    pub margin: ViewportMargin,
}

impl Default for CountUpOptions {
    fn default() -> Self {
        Self {
            start: 0,
            duration_secs: DEFAULT_DURATION_SECS,
            margin: ViewportMargin::vertical_inset(DEFAULT_VIEWPORT_INSET_PERCENT),
        }
    }
}

impl CountUpOptions {
    pub fn params(&self, target: i64) -> CountUpParams {
        CountUpParams::new(target)
            .start(self.start)
            .duration_secs(self.duration_secs)
    }
}

/// Lifecycle phase of a run
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// Not seen yet; showing `start`
    Idle,
    /// Animating; `started_at` is the host clock reading in milliseconds
    Running { started_at: f64 },
    /// Holding at `target`
    Done,
}

/// One count-up animation, exclusively owned by the component that shows it
#[derive(Debug)]
pub struct CountUp<S: FrameScheduler> {
    params: CountUpParams,
    phase: Phase,
    latch: VisibilityLatch,
    current: i64,
    pending: Option<FrameHandle>,
    scheduler: S,
}

impl<S: FrameScheduler> CountUp<S> {
    pub fn new(params: CountUpParams, scheduler: S) -> Self {
        Self {
            params,
            phase: Phase::Idle,
            latch: VisibilityLatch::new(),
            current: params.start,
            pending: None,
            scheduler,
        }
    }

    pub fn params(&self) -> CountUpParams {
        self.params
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn value(&self) -> i64 {
        self.current
    }

    pub fn is_triggered(&self) -> bool {
        self.latch.has_fired()
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    pub fn has_pending_frame(&self) -> bool {
        self.pending.is_some()
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Host element entered the viewport at clock reading `now_ms`.
    ///
    /// Returns `true` if this started the run. Later reports are ignored.
    pub fn on_visible(&mut self, now_ms: f64) -> bool {
        if !self.latch.fire() {
            return false;
        }
        self.begin(now_ms);
        true
    }

    /// A scheduled frame fired at clock reading `now_ms`.
    ///
    /// Returns the value to display.
    pub fn on_frame(&mut self, now_ms: f64) -> i64 {
        // The frame that called us is no longer pending.
        self.pending = None;

        let Phase::Running { started_at } = self.phase else {
            return self.current;
        };

        let p = progress(now_ms - started_at, self.params.duration_ms());
        let value = self.params.value_at(p);
        if value > self.current || self.params.target < self.params.start {
            self.current = value;
        }

        if p >= 1.0 {
            self.finish();
        } else {
            self.schedule();
        }
        self.current
    }

    /// Replace the parameters.
    ///
    /// Any pending frame is cancelled. If the element has already been seen
    /// the animation restarts from the new `start` at `now_ms`.
    ///
    /// Returns `false`, touching nothing, when `params` equal the current ones.
    pub fn retarget(&mut self, params: CountUpParams, now_ms: f64) -> bool {
        if params == self.params {
            return false;
        }
        self.cancel_pending();
        self.params = params;
        self.current = params.start;
        if self.latch.has_fired() {
            self.begin(now_ms);
        } else {
            self.phase = Phase::Idle;
        }
        true
    }

    fn begin(&mut self, now_ms: f64) {
        self.phase = Phase::Running { started_at: now_ms };
        self.schedule();
    }

    fn schedule(&mut self) {
        debug_assert!(self.pending.is_none(), "one frame in flight per run");
        match self.scheduler.request_frame() {
            Some(handle) => self.pending = Some(handle),
            // Without a refresh clock the run cannot progress; show the end state.
            None => self.finish(),
        }
    }

    fn finish(&mut self) {
        self.current = self.params.target;
        self.phase = Phase::Done;
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
    }
}

impl<S: FrameScheduler> Drop for CountUp<S> {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

/// In-memory scheduler for driving runs from tests with a simulated clock
#[cfg(test)]
pub(crate) mod testing {
    use super::{FrameHandle, FrameScheduler};
    use std::cell::RefCell;
    use std::collections::BTreeSet;
    use std::rc::Rc;

    #[derive(Debug, Default)]
    pub struct MockFrames {
        next_id: i32,
        pub outstanding: BTreeSet<i32>,
        pub requested: usize,
        pub cancelled: usize,
        pub refuse: bool,
    }

    /// Cloneable handle; clones share the same frame bookkeeping
    #[derive(Debug, Clone, Default)]
    pub struct MockScheduler(pub Rc<RefCell<MockFrames>>);

    impl MockScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        /// A scheduler whose host never grants a frame
        pub fn refusing() -> Self {
            let scheduler = Self::default();
            scheduler.0.borrow_mut().refuse = true;
            scheduler
        }

        pub fn outstanding(&self) -> usize {
            self.0.borrow().outstanding.len()
        }

        pub fn requested(&self) -> usize {
            self.0.borrow().requested
        }

        pub fn cancelled(&self) -> usize {
            self.0.borrow().cancelled
        }

        /// Deliver the pending frame, as the host does on the next paint.
        ///
        /// Returns `false` if nothing was pending.
        pub fn fire(&self) -> bool {
            let mut frames = self.0.borrow_mut();
            match frames.outstanding.iter().next().copied() {
                Some(id) => {
                    frames.outstanding.remove(&id);
                    true
                }
                None => false,
            }
        }
    }

    impl FrameScheduler for MockScheduler {
        fn request_frame(&mut self) -> Option<FrameHandle> {
            let mut frames = self.0.borrow_mut();
            if frames.refuse {
                return None;
            }
            frames.next_id += 1;
            let id = frames.next_id;
            frames.outstanding.insert(id);
            frames.requested += 1;
            Some(FrameHandle(id))
        }

        fn cancel_frame(&mut self, handle: FrameHandle) {
            let mut frames = self.0.borrow_mut();
            if frames.outstanding.remove(&handle.0) {
                frames.cancelled += 1;
            }
        }
    }
}
