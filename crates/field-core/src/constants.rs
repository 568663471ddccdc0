use crate::color::Rgba;
use std::time::Duration;

// Shared layout/interaction tuning constants used by the web frontend.

// Grid layout (CSS pixels)
pub const PADDING: f32 = 30.0; // gap between circles and between grid and viewport edge
pub const ELEMENT_RADIUS: f32 = 10.0; // idle circle radius
pub const MAX_GRID_AXIS: usize = 1024; // cells per axis; ~51k px at the default pitch

// Hover transform
pub const HOVER_SCALE: f32 = 1.8;
pub const HOVER_ROTATION_DEG: f32 = 45.0;
pub const HOVER_DURATION: Duration = Duration::from_millis(500);

// Click pulse and ripple
pub const PULSE_PEAK_MULTIPLIER: f32 = 2.0; // r -> 2r -> r
pub const PULSE_DURATION: Duration = Duration::from_millis(700);
pub const RIPPLE_RADIUS_PX: f32 = 100.0; // strict: elements at exactly this distance are skipped
pub const RIPPLE_RADIUS_MULTIPLIER: f32 = 1.5;
pub const RIPPLE_DURATION: Duration = Duration::from_millis(500);

// Pointer proximity
pub const PROXIMITY_REACH_PX: f32 = 100.0; // scale_factor = 1 + reach / distance
pub const SCALE_FACTOR_MAX: f32 = 2.0;
pub const POINTER_MAX_SCALE: f32 = 1.8; // radius never grows past this * ELEMENT_RADIUS
pub const POINTER_DURATION: Duration = Duration::from_millis(100);

// Palette
pub const BASE_FILL: Rgba = Rgba::new(147.0, 207.0, 192.0, 0.5); // translucent teal
pub const HOVER_FILL: Rgba = Rgba::new(227.0, 255.0, 248.0, 0.7); // translucent near-white
pub const CLICK_FILL: Rgba = Rgba::new(199.0, 237.0, 228.0, 0.8); // translucent pale

// Captions
pub const CAPTION_PRIMARY: &str = "Where every point touches, a new path begins.";
pub const CAPTION_SECONDARY: &str = "We move together, forever intertwined.";
pub const CAPTION_PRIMARY_FILL: Rgba = Rgba::new(255.0, 255.0, 255.0, 0.8);
pub const CAPTION_SECONDARY_FILL: Rgba = Rgba::new(255.0, 255.0, 255.0, 0.6);
pub const CAPTION_PRIMARY_Y_DIVISOR: f32 = 2.3;
pub const CAPTION_SECONDARY_Y_DIVISOR: f32 = 2.0;
pub const CAPTION_FONT_FAMILY: &str = "Inter, sans-serif";
pub const CAPTION_FONT_SIZE_PX: f32 = 20.0;
