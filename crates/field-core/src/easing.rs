use std::str::FromStr;

/// Easing curves understood by the tween scheduler.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    #[default]
    InOutQuad,
    InOutCubic,
    InOutCirc,
}

impl Easing {
    /// Map linear progress `t` to eased progress. Input is clamped to `[0, 1]`.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::InOutCirc => {
                if t < 0.5 {
                    (1.0 - (1.0 - (2.0 * t).powi(2)).max(0.0).sqrt()) / 2.0
                } else {
                    ((1.0 - (-2.0 * t + 2.0).powi(2)).max(0.0).sqrt() + 1.0) / 2.0
                }
            }
        }
    }
}

impl FromStr for Easing {
    type Err = ();

    // Accepts the anime.js / d3 spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" | "easeLinear" => Ok(Easing::Linear),
            "easeInOutQuad" | "easeQuadInOut" => Ok(Easing::InOutQuad),
            "easeInOutCubic" | "easeCubicInOut" | "easeCubic" => Ok(Easing::InOutCubic),
            "easeInOutCirc" | "easeCircleInOut" | "easeCircle" => Ok(Easing::InOutCirc),
            _ => Err(()),
        }
    }
}
