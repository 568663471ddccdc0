use field_core::{Element, Viewport};

/// SVG `transform` for an element's hover scale/rotation, both about its
/// centre. `None` when the transform is the identity.
pub fn transform_attr(el: &Element) -> Option<String> {
    if el.scale == 1.0 && el.rotation_deg == 0.0 {
        return None;
    }
    let (cx, cy) = (el.center.x, el.center.y);
    Some(format!(
        "rotate({} {} {}) translate({} {}) scale({}) translate({} {})",
        el.rotation_deg, cx, cy, cx, cy, el.scale, -cx, -cy
    ))
}

#[inline]
pub fn font_size_attr(px: f32) -> String {
    format!("{}px", px)
}

/// Integer pixel size for the `<svg>` width/height attributes.
#[inline]
pub fn viewport_attr(v: f32) -> String {
    format!("{}", v.max(0.0).floor() as u32)
}

#[inline]
pub fn viewport_from_inner(width: f64, height: f64) -> Viewport {
    let clean = |v: f64| if v.is_finite() { v.max(0.0) as f32 } else { 0.0 };
    Viewport::new(clean(width), clean(height))
}
