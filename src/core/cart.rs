use rand::prelude::*;

// Cart crossing tuning. One cart at most, crossing the whole stage on a
// randomized cadence measured from the end of the previous crossing.

pub const MIN_INTERVAL_MS: f64 = 60_000.0;
pub const EXTRA_RANDOM_MS: f64 = 25_000.0;
pub const TRAVEL_MS: f64 = 26_000.0;

// The cart sprite is wider than a walker, so it needs a larger off-screen
// margin beyond the side frame (px).
pub const HIDE_MARGIN: f64 = 260.0;

/// Ease-out cubic: fast start, gentle stop.
#[inline]
pub fn ease_out_cubic(p: f64) -> f64 {
    1.0 - (1.0 - p).powi(3)
}

/// One in-flight crossing. All fields are fixed at trigger time; position is
/// a pure function of the caller-supplied clock.
#[derive(Clone, Copy, Debug)]
pub struct Traversal {
    pub dir: f64,
    pub start_x: f64,
    pub end_x: f64,
    pub t0_ms: f64,
    pub duration_ms: f64,
}

impl Traversal {
    pub fn progress(&self, now_ms: f64) -> f64 {
        ((now_ms - self.t0_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn position(&self, now_ms: f64) -> f64 {
        let eased = ease_out_cubic(self.progress(now_ms));
        self.start_x + (self.end_x - self.start_x) * eased
    }

    pub fn finished(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    /// Horizontal mirror factor so the cart always faces its travel
    /// direction; the source art faces left.
    pub fn flip_x(&self) -> f64 {
        if self.dir > 0.0 {
            -1.0
        } else {
            1.0
        }
    }
}

/// Singleton scheduler for the cart crossing. Millisecond timestamps come
/// from the caller (`performance.now()` on the page, a simulated clock in
/// tests), so the scheduler itself never touches a real clock.
pub struct CartScheduler {
    running: bool,
    next_due_ms: f64,
    rng: StdRng,
}

impl CartScheduler {
    pub fn new(now_ms: f64, seed: u64) -> Self {
        let mut sched = Self {
            running: false,
            next_due_ms: 0.0,
            rng: StdRng::seed_from_u64(seed),
        };
        // The first crossing follows the same randomized cadence as every
        // later one.
        sched.schedule_next(now_ms);
        sched
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn next_due_ms(&self) -> f64 {
        self.next_due_ms
    }

    /// Recompute the due time. Called once at construction and exactly once
    /// after each completed crossing, never while one is in flight.
    pub fn schedule_next(&mut self, now_ms: f64) {
        self.next_due_ms = now_ms + MIN_INTERVAL_MS + self.rng.gen_range(0.0..EXTRA_RANDOM_MS);
    }

    /// Begin a crossing if one is due and none is running. Start and end sit
    /// just outside the visible band on opposite sides.
    pub fn try_start(&mut self, now_ms: f64, viewport_w: f64) -> Option<Traversal> {
        if self.running || now_ms < self.next_due_ms {
            return None;
        }
        self.running = true;

        let hide = side_frame_w(viewport_w) + HIDE_MARGIN;
        let dir = if self.rng.gen_bool(0.5) { -1.0 } else { 1.0 };
        let (start_x, end_x) = if dir < 0.0 {
            (viewport_w + hide, -hide)
        } else {
            (-hide, viewport_w + hide)
        };
        Some(Traversal {
            dir,
            start_x,
            end_x,
            t0_ms: now_ms,
            duration_ms: TRAVEL_MS,
        })
    }

    /// Mark the crossing finished. The next due time is measured from the
    /// completion timestamp, so crossings can never stack.
    pub fn finish(&mut self, now_ms: f64) {
        self.running = false;
        self.schedule_next(now_ms);
    }
}

// Same responsive side-frame formula the walker scene uses; duplicated here
// so this module stays self-contained for host-side tests.
#[inline]
fn side_frame_w(viewport_w: f64) -> f64 {
    (viewport_w / 2.0 - 520.0).max(0.0)
}
