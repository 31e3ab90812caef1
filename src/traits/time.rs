//! Abstraction over time sources and the capped per-frame delta.
//! Implementations: SystemClock (production), ManualClock (testing).

/// Ceiling on the per-frame delta in seconds. This is a correctness
/// requirement, not a smoothing tweak: the spawner's threshold check and
/// the window-crossing logic assume at most one interval crossing per
/// step, which a host stall (tab backgrounded, debugger pause) would
/// otherwise break.
pub const MAX_FRAME_DELTA: f32 = 0.016;

/// Monotonic time source.
pub trait Clock {
    /// Seconds from an arbitrary epoch.
    fn now_secs(&self) -> f64;
}

/// System clock backed by `std::time::Instant`.
pub struct SystemClock {
    start: std::time::Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: std::time::Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_secs(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

/// Hand-driven clock for deterministic tests.
pub struct ManualClock {
    now: std::cell::Cell<f64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: std::cell::Cell::new(0.0),
        }
    }

    pub fn set(&self, secs: f64) {
        self.now.set(secs);
    }

    pub fn advance(&self, secs: f64) {
        self.now.set(self.now.get() + secs);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now_secs(&self) -> f64 {
        self.now.get()
    }
}

/// Derives the simulation delta from successive clock readings, capped
/// at [`MAX_FRAME_DELTA`].
#[derive(Debug, Default)]
pub struct FrameTimer {
    last: Option<f64>,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delta since the previous tick, capped. The first tick yields zero.
    pub fn tick(&mut self, clock: &dyn Clock) -> f32 {
        let now = clock.now_secs();
        let dt = match self.last {
            Some(last) => (now - last) as f32,
            None => 0.0,
        };
        self.last = Some(now);
        dt.clamp(0.0, MAX_FRAME_DELTA)
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}
