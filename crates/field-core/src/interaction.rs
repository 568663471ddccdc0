//! Hover, click and pointer-proximity behaviors for the circle grid.

use crate::anim::{Animator, Property, TweenSpec};
use crate::color::Rgba;
use crate::constants::*;
use crate::easing::Easing;
use crate::grid::{GridLayout, GridParams, Viewport};
use crate::scene::Scene;
use glam::Vec2;
use std::time::Duration;

/// Interaction thresholds and timings, defaulting to the values in `constants`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractionTuning {
    pub hover_scale: f32,
    pub hover_rotation_deg: f32,
    pub hover_duration: Duration,
    pub pulse_peak_multiplier: f32,
    pub pulse_duration: Duration,
    pub ripple_radius_px: f32,
    pub ripple_radius_multiplier: f32,
    pub ripple_duration: Duration,
    pub proximity_reach_px: f32,
    pub scale_factor_max: f32,
    pub pointer_max_scale: f32,
    pub pointer_duration: Duration,
}

impl Default for InteractionTuning {
    fn default() -> Self {
        Self {
            hover_scale: HOVER_SCALE,
            hover_rotation_deg: HOVER_ROTATION_DEG,
            hover_duration: HOVER_DURATION,
            pulse_peak_multiplier: PULSE_PEAK_MULTIPLIER,
            pulse_duration: PULSE_DURATION,
            ripple_radius_px: RIPPLE_RADIUS_PX,
            ripple_radius_multiplier: RIPPLE_RADIUS_MULTIPLIER,
            ripple_duration: RIPPLE_DURATION,
            proximity_reach_px: PROXIMITY_REACH_PX,
            scale_factor_max: SCALE_FACTOR_MAX,
            pointer_max_scale: POINTER_MAX_SCALE,
            pointer_duration: POINTER_DURATION,
        }
    }
}

#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Pointer proximity multiplier: `min(2, 1 + 100 / d)`.
///
/// A zero (or otherwise degenerate) distance yields the maximum, never
/// NaN or infinity.
#[inline]
pub fn scale_factor(d: f32) -> f32 {
    scale_factor_with(d, PROXIMITY_REACH_PX, SCALE_FACTOR_MAX)
}

#[inline]
pub fn scale_factor_with(d: f32, reach: f32, max: f32) -> f32 {
    if d.is_nan() || d <= 0.0 {
        return max;
    }
    let sf = 1.0 + reach / d;
    if sf.is_finite() {
        sf.min(max)
    } else {
        max
    }
}

/// Fill for a given scale factor: base teal at 1, hover white at 2 and above.
#[inline]
pub fn proximity_fill(scale_factor: f32) -> Rgba {
    BASE_FILL.lerp(HOVER_FILL, (scale_factor - 1.0).clamp(0.0, 1.0))
}

/// Indices of elements strictly closer than `radius` to element `origin`,
/// the origin itself included. Empty if `origin` is out of range.
pub fn ripple_targets(scene: &Scene, origin: usize, radius: f32) -> Vec<usize> {
    let Some(center) = scene.get(origin).map(|e| e.center) else {
        return Vec::new();
    };
    scene
        .elements
        .iter()
        .enumerate()
        .filter(|(_, e)| distance(e.center, center) < radius)
        .map(|(i, _)| i)
        .collect()
}

/// Scene plus its animator: the state every event handler mutates.
#[derive(Debug, Default)]
pub struct Field {
    pub scene: Scene,
    pub animator: Animator,
    pub tuning: InteractionTuning,
}

impl Field {
    pub fn new(params: GridParams, tuning: InteractionTuning) -> Self {
        Self {
            scene: Scene::new(params),
            animator: Animator::new(),
            tuning,
        }
    }

    /// Full destroy-and-recreate for `viewport`. In-flight tweens are dropped
    /// with the elements they targeted.
    pub fn rebuild(&mut self, viewport: Viewport) -> GridLayout {
        self.animator.clear();
        self.scene.rebuild(viewport)
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.scene.generation
    }

    pub fn hover_in(&mut self, index: usize) {
        let t = &self.tuning;
        let spec = TweenSpec::new(t.hover_duration, Easing::InOutQuad)
            .from_to(Property::Scale, 1.0_f32, t.hover_scale)
            .to(Property::Rotation, t.hover_rotation_deg)
            .to(Property::Fill, HOVER_FILL);
        self.animator.animate(&self.scene.elements, index, &spec);
    }

    pub fn hover_out(&mut self, index: usize) {
        let spec = TweenSpec::new(self.tuning.hover_duration, Easing::InOutQuad)
            .to(Property::Scale, 1.0_f32)
            .to(Property::Rotation, 0.0_f32)
            .to(Property::Fill, BASE_FILL);
        self.animator.animate(&self.scene.elements, index, &spec);
    }

    /// Ripple outwards from `index`, then pulse the clicked circle itself.
    /// Returns the ripple target indices.
    pub fn click(&mut self, index: usize) -> Vec<usize> {
        if index >= self.scene.len() {
            return Vec::new();
        }
        let t = self.tuning;
        let r = self.scene.params.element_radius;

        let targets = ripple_targets(&self.scene, index, t.ripple_radius_px);
        let ripple = TweenSpec::new(t.ripple_duration, Easing::InOutCubic)
            .to(Property::Radius, r * t.ripple_radius_multiplier)
            .to(Property::Fill, HOVER_FILL);
        for &j in &targets {
            self.animator.animate(&self.scene.elements, j, &ripple);
        }

        // started last so it owns the clicked circle's radius and fill
        let pulse = TweenSpec::new(t.pulse_duration, Easing::InOutQuad)
            .keyframes(Property::Radius, r, [r * t.pulse_peak_multiplier, r])
            .to(Property::Fill, CLICK_FILL);
        self.animator.animate(&self.scene.elements, index, &pulse);

        log::debug!("[click] element {} rippled {} circles", index, targets.len());
        targets
    }

    /// React to the cursor at `cursor` (viewport pixels).
    pub fn pointer_move(&mut self, cursor: Vec2) {
        let t = self.tuning;
        let cap = t.pointer_max_scale * self.scene.params.element_radius;
        for i in 0..self.scene.elements.len() {
            let el = &self.scene.elements[i];
            let sf = scale_factor_with(
                distance(cursor, el.center),
                t.proximity_reach_px,
                t.scale_factor_max,
            );
            // compounds against the live radius; only the cap bounds it
            let radius = (el.radius * sf).min(cap);
            let spec = TweenSpec::new(t.pointer_duration, Easing::InOutCirc)
                .to(Property::Radius, radius)
                .to(Property::Fill, proximity_fill(sf));
            self.animator.animate(&self.scene.elements, i, &spec);
        }
    }

    /// Advance animations by `dt`. Returns true if anything changed.
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.animator.tick(dt, &mut self.scene.elements)
    }
}
