//! Minimal tween scheduler for circle attributes.
//!
//! Callers only start tweens; the frame loop drives them with `tick`. At most
//! one tween exists per `(element, property)` pair: starting another one on
//! the same pair replaces the in-flight tween, which continues from whatever
//! value the element currently holds.

use crate::color::Rgba;
use crate::easing::Easing;
use crate::scene::Element;
use fnv::FnvHashMap;
use smallvec::SmallVec;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Property {
    Radius,
    Scale,
    Rotation,
    Fill,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    Scalar(f32),
    Color(Rgba),
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Scalar(v)
    }
}

impl From<Rgba> for Value {
    fn from(c: Rgba) -> Self {
        Value::Color(c)
    }
}

impl Value {
    fn lerp(self, to: Value, t: f32) -> Value {
        match (self, to) {
            (Value::Scalar(a), Value::Scalar(b)) => Value::Scalar(a + (b - a) * t),
            (Value::Color(a), Value::Color(b)) => Value::Color(a.lerp(b, t)),
            // mismatched kinds snap to the target
            (_, b) => b,
        }
    }
}

impl Property {
    fn read(self, el: &Element) -> Value {
        match self {
            Property::Radius => Value::Scalar(el.radius),
            Property::Scale => Value::Scalar(el.scale),
            Property::Rotation => Value::Scalar(el.rotation_deg),
            Property::Fill => Value::Color(el.fill),
        }
    }

    fn write(self, el: &mut Element, value: Value) {
        match (self, value) {
            (Property::Radius, Value::Scalar(v)) => el.radius = v,
            (Property::Scale, Value::Scalar(v)) => el.scale = v,
            (Property::Rotation, Value::Scalar(v)) => el.rotation_deg = v,
            (Property::Fill, Value::Color(c)) => el.fill = c,
            (p, v) => log::trace!("[anim] ignoring {:?} value for {:?}", v, p),
        }
    }
}

/// Target description for one property inside a [`TweenSpec`].
#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    pub property: Property,
    /// Explicit start value; `None` starts from the element's current value.
    pub from: Option<Value>,
    /// One or more targets, evenly spaced over the duration.
    pub keyframes: SmallVec<[Value; 3]>,
}

/// A set of property targets sharing one duration and easing.
#[derive(Clone, Debug, PartialEq)]
pub struct TweenSpec {
    pub tracks: SmallVec<[Track; 4]>,
    pub duration: Duration,
    pub easing: Easing,
}

impl TweenSpec {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            tracks: SmallVec::new(),
            duration,
            easing,
        }
    }

    pub fn to(self, property: Property, target: impl Into<Value>) -> Self {
        self.track(property, None, [target.into()])
    }

    pub fn from_to(
        self,
        property: Property,
        from: impl Into<Value>,
        target: impl Into<Value>,
    ) -> Self {
        self.track(property, Some(from.into()), [target.into()])
    }

    /// Start at `from` and pass through every keyframe in order.
    pub fn keyframes<I>(self, property: Property, from: impl Into<Value>, frames: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.track(property, Some(from.into()), frames.into_iter().map(Into::<Value>::into))
    }

    fn track<I>(mut self, property: Property, from: Option<Value>, frames: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        let keyframes: SmallVec<[Value; 3]> = frames.into_iter().collect();
        if keyframes.is_empty() {
            return self;
        }
        self.tracks.retain(|t| t.property != property);
        self.tracks.push(Track {
            property,
            from,
            keyframes,
        });
        self
    }
}

#[derive(Clone, Debug)]
struct Tween {
    points: SmallVec<[Value; 4]>,
    started_at: Duration,
    duration: Duration,
    easing: Easing,
}

impl Tween {
    fn progress(&self, now: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    fn sample(&self, progress: f32) -> Value {
        let segments = self.points.len() - 1;
        if progress >= 1.0 {
            return self.points[segments];
        }
        let pos = self.easing.apply(progress) * segments as f32;
        let seg = (pos.floor() as usize).min(segments - 1);
        let local = pos - seg as f32;
        self.points[seg].lerp(self.points[seg + 1], local)
    }
}

/// Drives every in-flight tween against the scene's elements.
#[derive(Debug, Default)]
pub struct Animator {
    clock: Duration,
    tweens: FnvHashMap<(usize, Property), Tween>,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the animator's clock.
    pub fn now(&self) -> Duration {
        self.clock
    }

    /// Start `spec` on element `index`. Out-of-range indices are ignored.
    pub fn animate(&mut self, elements: &[Element], index: usize, spec: &TweenSpec) {
        let Some(el) = elements.get(index) else {
            log::trace!("[anim] no element {index}, tween dropped");
            return;
        };
        for track in &spec.tracks {
            let mut points: SmallVec<[Value; 4]> = SmallVec::new();
            points.push(track.from.unwrap_or_else(|| track.property.read(el)));
            points.extend(track.keyframes.iter().copied());
            self.tweens.insert(
                (index, track.property),
                Tween {
                    points,
                    started_at: self.clock,
                    duration: spec.duration,
                    easing: spec.easing,
                },
            );
        }
    }

    /// Advance the clock by `dt` and write interpolated values into `elements`.
    /// Returns true if any element changed.
    pub fn tick(&mut self, dt: Duration, elements: &mut [Element]) -> bool {
        self.clock += dt;
        let now = self.clock;
        let mut touched = false;
        self.tweens.retain(|&(index, property), tween| {
            let Some(el) = elements.get_mut(index) else {
                return false;
            };
            let progress = tween.progress(now);
            property.write(el, tween.sample(progress));
            touched = true;
            progress < 1.0
        });
        touched
    }

    pub fn is_animating(&self, index: usize, property: Property) -> bool {
        self.tweens.contains_key(&(index, property))
    }

    pub fn active_count(&self) -> usize {
        self.tweens.len()
    }

    pub fn clear(&mut self) {
        self.tweens.clear();
    }
}
