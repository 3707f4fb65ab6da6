use rand::prelude::*;

// Walker tuning. Two fixed lanes; the front lane is closer to the viewer so
// it moves faster, renders larger and stacks above the back lane.

pub const NUM_WALKERS: usize = 4;
pub const MIN_VISIBLE: usize = 2;
pub const WALKER_VARIANTS: usize = 5;

// px/s
pub const SPEED_BACK: f64 = 46.0;
pub const SPEED_FRONT: f64 = 60.0;

pub const SCALE_BACK: f64 = 0.97;
pub const SCALE_FRONT: f64 = 1.27;

// px from the bottom of the stage
pub const LANE_BOTTOM_BACK: f64 = 100.0;
pub const LANE_BOTTOM_FRONT: f64 = 28.0;

pub const Z_BACK: i32 = 170;
pub const Z_FRONT: i32 = 320;

// Base sprite box before lane scaling (px)
pub const WALKER_BASE_W: f64 = 120.0;
pub const WALKER_BASE_H: f64 = 190.0;

// Off-screen margins beyond the side frame (px)
pub const SPAWN_HIDE_MARGIN: f64 = 160.0;
pub const EXIT_HIDE_MARGIN: f64 = 220.0;
pub const VISIBLE_SLACK: f64 = 80.0;

// Inset used when a walker is forced inside the band (px)
pub const INSIDE_LEFT_INSET: f64 = 20.0;
pub const INSIDE_RIGHT_INSET: f64 = 160.0;

/// Responsive side frame width; matches the page CSS `calc(50vw - 520px)`.
/// Recomputed from the live viewport width on every call, never cached.
#[inline]
pub fn frame_w(viewport_w: f64) -> f64 {
    (viewport_w / 2.0 - 520.0).max(0.0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lane {
    Back,
    Front,
}

impl Lane {
    pub fn speed(self) -> f64 {
        match self {
            Lane::Back => SPEED_BACK,
            Lane::Front => SPEED_FRONT,
        }
    }

    pub fn scale(self) -> f64 {
        match self {
            Lane::Back => SCALE_BACK,
            Lane::Front => SCALE_FRONT,
        }
    }

    pub fn bottom_px(self) -> f64 {
        match self {
            Lane::Back => LANE_BOTTOM_BACK,
            Lane::Front => LANE_BOTTOM_FRONT,
        }
    }

    pub fn z_index(self) -> i32 {
        match self {
            Lane::Back => Z_BACK,
            Lane::Front => Z_FRONT,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// One pooled sprite. Never destroyed: when it leaves the visible band it is
/// repositioned off-screen and walks back in. The sprite variant is rolled
/// once at pool construction and kept across respawns, so each pool slot has
/// a stable character identity.
#[derive(Clone, Debug)]
pub struct Walker {
    pub lane: Lane,
    pub x: f64,
    pub dir: f64,
    pub speed: f64,
    pub variant: usize,
}

pub struct Scene {
    pub walkers: Vec<Walker>,
    rng: StdRng,
}

impl Scene {
    /// Build the fixed pool: lanes alternate back/front, each walker starts
    /// off-screen on a random side, and slots 0 and 1 are then pulled inside
    /// the band so the scene is populated on first paint.
    pub fn new(seed: u64, viewport_w: f64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut walkers = Vec::with_capacity(NUM_WALKERS);
        for i in 0..NUM_WALKERS {
            let lane = if i % 2 == 0 { Lane::Back } else { Lane::Front };
            walkers.push(Walker {
                lane,
                x: 0.0,
                dir: 1.0,
                speed: lane.speed(),
                variant: rng.gen_range(0..WALKER_VARIANTS),
            });
        }
        let mut scene = Self { walkers, rng };
        for i in 0..NUM_WALKERS {
            let side = if scene.rng.gen_bool(0.5) {
                Side::Left
            } else {
                Side::Right
            };
            scene.spawn(i, side, viewport_w);
        }
        scene.force_spawn_inside(0, Side::Left, viewport_w);
        scene.force_spawn_inside(1, Side::Right, viewport_w);
        scene
    }

    /// Place walker `i` just outside the visible band on `side`, heading
    /// toward the opposite side.
    pub fn spawn(&mut self, i: usize, side: Side, viewport_w: f64) {
        let hide = frame_w(viewport_w) + SPAWN_HIDE_MARGIN;
        let w = &mut self.walkers[i];
        w.speed = w.lane.speed();
        match side {
            Side::Left => {
                w.dir = 1.0;
                w.x = -hide;
            }
            Side::Right => {
                w.dir = -1.0;
                w.x = viewport_w + hide;
            }
        }
    }

    /// Spawn variant for initialization and resize recovery: the walker lands
    /// just inside the band edge instead of fully off-screen, so the scene is
    /// never empty right after a layout change.
    pub fn force_spawn_inside(&mut self, i: usize, side: Side, viewport_w: f64) {
        self.spawn(i, side, viewport_w);
        let open_left = frame_w(viewport_w);
        let open_right = viewport_w - frame_w(viewport_w);
        let w = &mut self.walkers[i];
        match side {
            Side::Left => {
                w.x = open_left + INSIDE_LEFT_INSET;
                w.dir = 1.0;
            }
            Side::Right => {
                w.x = open_right - INSIDE_RIGHT_INSET;
                w.dir = -1.0;
            }
        }
    }

    /// Advance every walker by `dir * speed * dt`, respawn any that fully
    /// crossed the far edge, then repair the minimum-visible invariant.
    pub fn tick(&mut self, dt_secs: f64, viewport_w: f64) {
        let hide = frame_w(viewport_w) + EXIT_HIDE_MARGIN;
        for i in 0..self.walkers.len() {
            let (dir, x) = {
                let w = &mut self.walkers[i];
                w.x += w.dir * w.speed * dt_secs;
                (w.dir, w.x)
            };
            // A walker exiting right walked in from the left, so it re-enters
            // from the left again; entry side and direction stay consistent.
            if dir > 0.0 && x > viewport_w + hide {
                self.spawn(i, Side::Left, viewport_w);
            } else if dir < 0.0 && x < -hide {
                self.spawn(i, Side::Right, viewport_w);
            }
        }

        // Degenerate configurations (e.g. every walker off-screen after a long
        // background-tab freeze) get repaired within one tick.
        if self.count_visible(viewport_w) < MIN_VISIBLE {
            self.force_spawn_inside(0, Side::Left, viewport_w);
            self.force_spawn_inside(1, Side::Right, viewport_w);
        }
    }

    pub fn count_visible(&self, viewport_w: f64) -> usize {
        self.walkers
            .iter()
            .filter(|w| w.x > -VISIBLE_SLACK && w.x < viewport_w + VISIBLE_SLACK)
            .count()
    }
}
