// Host-side tests for the walker scene.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod scene {
    include!("../src/core/scene.rs");
}

use scene::*;

const VIEW_W: f64 = 2000.0;

#[test]
fn frame_w_matches_responsive_formula() {
    // width: calc(50vw - 520px), floored at zero
    assert_eq!(frame_w(2000.0), 480.0);
    assert_eq!(frame_w(1040.0), 0.0);
    assert_eq!(frame_w(900.0), 0.0);
}

#[test]
fn pool_has_fixed_size_and_alternating_lanes() {
    let scene = Scene::new(7, VIEW_W);
    assert_eq!(scene.walkers.len(), NUM_WALKERS);
    for (i, w) in scene.walkers.iter().enumerate() {
        let expected = if i % 2 == 0 { Lane::Back } else { Lane::Front };
        assert_eq!(w.lane, expected);
        assert_eq!(w.speed, w.lane.speed());
        assert!(w.variant < WALKER_VARIANTS);
    }
}

#[test]
fn scene_starts_with_minimum_visible() {
    for seed in 0..20 {
        let scene = Scene::new(seed, VIEW_W);
        assert!(
            scene.count_visible(VIEW_W) >= MIN_VISIBLE,
            "seed {seed}: scene empty on first paint"
        );
    }
}

#[test]
fn spawn_places_walker_off_screen_heading_inward() {
    let mut scene = Scene::new(1, VIEW_W);
    let hide = frame_w(VIEW_W) + SPAWN_HIDE_MARGIN;

    scene.spawn(2, Side::Left, VIEW_W);
    assert_eq!(scene.walkers[2].x, -hide);
    assert_eq!(scene.walkers[2].dir, 1.0);

    scene.spawn(2, Side::Right, VIEW_W);
    assert_eq!(scene.walkers[2].x, VIEW_W + hide);
    assert_eq!(scene.walkers[2].dir, -1.0);
}

#[test]
fn force_spawn_inside_lands_within_the_band() {
    let mut scene = Scene::new(1, VIEW_W);
    let open_left = frame_w(VIEW_W);
    let open_right = VIEW_W - frame_w(VIEW_W);

    scene.force_spawn_inside(3, Side::Left, VIEW_W);
    assert_eq!(scene.walkers[3].x, open_left + INSIDE_LEFT_INSET);
    assert_eq!(scene.walkers[3].dir, 1.0);

    scene.force_spawn_inside(3, Side::Right, VIEW_W);
    assert_eq!(scene.walkers[3].x, open_right - INSIDE_RIGHT_INSET);
    assert_eq!(scene.walkers[3].dir, -1.0);
}

#[test]
fn tick_advances_by_direction_speed_elapsed() {
    let mut scene = Scene::new(3, VIEW_W);
    scene.force_spawn_inside(0, Side::Left, VIEW_W);
    let x0 = scene.walkers[0].x;
    let speed = scene.walkers[0].speed;
    scene.tick(0.5, VIEW_W);
    assert!((scene.walkers[0].x - (x0 + speed * 0.5)).abs() < 1e-9);
}

#[test]
fn rightward_exit_respawns_entering_from_the_left() {
    let mut scene = Scene::new(9, VIEW_W);
    let exit_hide = frame_w(VIEW_W) + EXIT_HIDE_MARGIN;
    let spawn_hide = frame_w(VIEW_W) + SPAWN_HIDE_MARGIN;

    // Keep the rest of the pool visible so the minimum-visible repair does
    // not interfere with the walker under test.
    scene.walkers[0].x = VIEW_W / 2.0;
    scene.walkers[2].x = VIEW_W / 2.0;
    scene.walkers[3].x = VIEW_W / 2.0;

    // Front-lane walker one pixel past the far-right margin, moving right.
    scene.walkers[1].dir = 1.0;
    scene.walkers[1].x = VIEW_W + exit_hide + 1.0;
    scene.tick(1e-6, VIEW_W);

    let w = &scene.walkers[1];
    assert!((w.x - -spawn_hide).abs() < 1.0, "x = {}", w.x);
    assert_eq!(w.dir, 1.0, "entry direction must match entry side");
}

#[test]
fn leftward_exit_respawns_entering_from_the_right() {
    let mut scene = Scene::new(9, VIEW_W);
    let exit_hide = frame_w(VIEW_W) + EXIT_HIDE_MARGIN;

    scene.walkers[0].x = VIEW_W / 2.0;
    scene.walkers[1].x = VIEW_W / 2.0;
    scene.walkers[3].x = VIEW_W / 2.0;

    scene.walkers[2].dir = -1.0;
    scene.walkers[2].x = -(exit_hide + 1.0);
    scene.tick(1e-6, VIEW_W);

    assert!(scene.walkers[2].x > VIEW_W);
    assert_eq!(scene.walkers[2].dir, -1.0);
}

#[test]
fn minimum_visible_is_repaired_within_one_tick() {
    let mut scene = Scene::new(5, VIEW_W);
    // Degenerate configuration: everyone far off-screen, all walking away.
    for w in &mut scene.walkers {
        w.x = -10_000.0;
        w.dir = -1.0;
    }
    assert_eq!(scene.count_visible(VIEW_W), 0);

    scene.tick(1e-6, VIEW_W);
    assert!(scene.count_visible(VIEW_W) >= MIN_VISIBLE);
}

#[test]
fn variant_is_stable_across_respawns() {
    let mut scene = Scene::new(11, VIEW_W);
    let before: Vec<usize> = scene.walkers.iter().map(|w| w.variant).collect();
    for _ in 0..10_000 {
        scene.tick(0.25, VIEW_W);
    }
    let after: Vec<usize> = scene.walkers.iter().map(|w| w.variant).collect();
    assert_eq!(before, after);
}

#[test]
fn lane_parameters_are_fixed() {
    assert_eq!(Lane::Back.speed(), 46.0);
    assert_eq!(Lane::Front.speed(), 60.0);
    assert!(Lane::Front.scale() > Lane::Back.scale());
    assert!(Lane::Front.z_index() > Lane::Back.z_index());
}
