// Host-side tests for hover, click ripple and pointer proximity.

use field_core::constants::{BASE_FILL, CLICK_FILL, HOVER_FILL};
use field_core::*;
use glam::Vec2;
use std::time::Duration;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

fn color_approx(a: Rgba, b: Rgba) -> bool {
    approx(a.r, b.r) && approx(a.g, b.g) && approx(a.b, b.b) && approx(a.a, b.a)
}

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn field_with(centers: &[(f32, f32)]) -> Field {
    let mut field = Field::default();
    field.scene.elements = centers
        .iter()
        .map(|&(x, y)| Element::new(Vec2::new(x, y), 10.0))
        .collect();
    field
}

#[test]
fn scale_factor_follows_inverse_distance() {
    assert!(approx(scale_factor(200.0), 1.5));
    assert!(approx(scale_factor(1000.0), 1.1));
    assert!(approx(scale_factor(100.0), 2.0));
    assert_eq!(scale_factor(50.0), 2.0);
}

#[test]
fn scale_factor_is_clamped_at_zero_distance() {
    let sf = scale_factor(0.0);
    assert_eq!(sf, 2.0);
    assert!(sf.is_finite());
    assert_eq!(scale_factor(f32::NAN), 2.0);
    assert_eq!(scale_factor(f32::MIN_POSITIVE), 2.0);
}

#[test]
fn proximity_fill_interpolates_between_palette_ends() {
    assert_eq!(proximity_fill(1.0), BASE_FILL);
    assert!(color_approx(proximity_fill(2.0), HOVER_FILL));
    assert_eq!(proximity_fill(0.5), BASE_FILL);
    let mid = proximity_fill(1.5);
    assert!(approx(mid.r, 187.0));
    assert!(approx(mid.a, 0.6));
}

#[test]
fn ripple_targets_are_strictly_within_100px() {
    let field = field_with(&[(100.0, 100.0), (150.0, 100.0), (200.0, 100.0), (170.0, 170.0)]);
    // (200,100) is exactly 100 away, (170,170) is ~98.99 away
    let targets = ripple_targets(&field.scene, 0, 100.0);
    assert_eq!(targets, vec![0, 1, 3]);
    assert!(ripple_targets(&field.scene, 9, 100.0).is_empty());
}

#[test]
fn click_ripples_neighbour_to_one_and_a_half_radius() {
    let mut field = field_with(&[(100.0, 100.0), (150.0, 100.0), (400.0, 100.0)]);
    let targets = field.click(0);
    assert_eq!(targets, vec![0, 1]);

    field.tick(ms(500));
    let near = &field.scene.elements[1];
    assert!(approx(near.radius, 15.0));
    assert!(color_approx(near.fill, HOVER_FILL));

    let far = &field.scene.elements[2];
    assert_eq!(far.radius, 10.0);
    assert_eq!(far.fill, BASE_FILL);
    assert!(!field.animator.is_animating(2, Property::Radius));
}

#[test]
fn clicked_circle_pulses_to_double_radius_and_back() {
    let mut field = field_with(&[(100.0, 100.0)]);
    field.click(0);

    field.tick(ms(350));
    assert!(approx(field.scene.elements[0].radius, 20.0));

    field.tick(ms(350));
    let el = &field.scene.elements[0];
    assert!(approx(el.radius, 10.0));
    assert!(color_approx(el.fill, CLICK_FILL));
    assert_eq!(field.animator.active_count(), 0);
}

#[test]
fn click_out_of_range_is_a_no_op() {
    let mut field = field_with(&[(100.0, 100.0)]);
    assert!(field.click(3).is_empty());
    assert_eq!(field.animator.active_count(), 0);
}

#[test]
fn hover_in_and_out_round_trip() {
    let mut field = field_with(&[(40.0, 40.0)]);
    field.hover_in(0);
    field.tick(ms(500));
    let el = &field.scene.elements[0];
    assert!(approx(el.scale, 1.8));
    assert!(approx(el.rotation_deg, 45.0));
    assert!(color_approx(el.fill, HOVER_FILL));
    assert_eq!(el.radius, 10.0);

    field.hover_out(0);
    field.tick(ms(500));
    let el = &field.scene.elements[0];
    assert!(approx(el.scale, 1.0));
    assert!(approx(el.rotation_deg, 0.0));
    assert!(color_approx(el.fill, BASE_FILL));
}

#[test]
fn hover_out_supersedes_hover_in_mid_flight() {
    let mut field = field_with(&[(40.0, 40.0)]);
    field.hover_in(0);
    field.tick(ms(250));
    let partial = field.scene.elements[0].scale;
    assert!(partial > 1.0 && partial < 1.8);

    field.hover_out(0);
    field.tick(ms(1));
    assert!(field.scene.elements[0].scale <= partial);
    field.tick(ms(600));
    assert!(approx(field.scene.elements[0].scale, 1.0));
    assert_eq!(field.animator.active_count(), 0);
}

#[test]
fn pointer_on_center_grows_to_cap() {
    let mut field = field_with(&[(100.0, 100.0)]);
    field.pointer_move(Vec2::new(100.0, 100.0));
    field.tick(ms(100));
    let el = &field.scene.elements[0];
    assert!(approx(el.radius, 18.0));
    assert!(color_approx(el.fill, HOVER_FILL));
    assert_eq!(el.center, Vec2::new(100.0, 100.0));
}

#[test]
fn pointer_moves_ratchet_radius_but_never_past_cap() {
    let mut field = field_with(&[(1000.0, 0.0)]);
    field.pointer_move(Vec2::ZERO);
    field.tick(ms(100));
    assert!(approx(field.scene.elements[0].radius, 11.0));

    field.pointer_move(Vec2::ZERO);
    field.tick(ms(100));
    assert!(approx(field.scene.elements[0].radius, 12.1));

    for _ in 0..40 {
        field.pointer_move(Vec2::ZERO);
        field.tick(ms(100));
        assert!(field.scene.elements[0].radius <= 18.0 + 1e-3);
    }
    assert!(approx(field.scene.elements[0].radius, 18.0));
}

#[test]
fn pointer_move_on_empty_scene_is_harmless() {
    let mut field = Field::default();
    field.rebuild(Viewport::new(20.0, 20.0));
    field.pointer_move(Vec2::new(5.0, 5.0));
    assert!(!field.tick(ms(16)));
}

#[test]
fn rebuild_drops_in_flight_tweens() {
    let mut field = Field::default();
    field.rebuild(Viewport::new(800.0, 600.0));
    field.hover_in(3);
    field.pointer_move(Vec2::new(400.0, 300.0));
    assert!(field.animator.active_count() > 0);

    let gen = field.generation();
    field.rebuild(Viewport::new(800.0, 600.0));
    assert_eq!(field.animator.active_count(), 0);
    assert_eq!(field.generation(), gen + 1);
    assert!(field.scene.elements.iter().all(|e| e.radius == 10.0));
}

#[test]
fn click_on_full_grid_hits_orthogonal_and_diagonal_neighbours() {
    let mut field = Field::default();
    field.rebuild(Viewport::new(800.0, 600.0));
    assert_eq!(field.scene.len(), 165);

    // (40,40): right/down neighbours at 50px, diagonal at ~70.7px, next at 100px
    let mut targets = field.click(0);
    targets.sort_unstable();
    assert_eq!(targets, vec![0, 1, 15, 16]);

    field.tick(ms(500));
    for i in [1, 15, 16] {
        assert!(approx(field.scene.elements[i].radius, 15.0), "element {i}");
    }
    assert_eq!(field.scene.elements[2].radius, 10.0);
    assert_eq!(field.scene.elements[30].radius, 10.0);
}
