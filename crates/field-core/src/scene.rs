//! Scene model: the live circle set plus captions for one viewport size.
//!
//! Elements carry no id of their own. An element is addressed by its index
//! within the current `generation`; both are replaced wholesale on rebuild.

use crate::color::Rgba;
use crate::constants::*;
use crate::grid::{GridLayout, GridParams, Viewport};
use glam::Vec2;

/// One circle in the grid.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub center: Vec2,
    pub radius: f32,
    pub fill: Rgba,
    pub scale: f32,
    pub rotation_deg: f32,
}

impl Element {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self {
            center,
            radius,
            fill: BASE_FILL,
            scale: 1.0,
            rotation_deg: 0.0,
        }
    }
}

/// Horizontal text anchor, named after SVG `text-anchor` values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_svg(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Caption {
    pub text: &'static str,
    pub position: Vec2,
    pub fill: Rgba,
    pub font_family: &'static str,
    pub font_size_px: f32,
    pub anchor: TextAnchor,
}

impl Caption {
    /// The two captions for a viewport. Both start at the horizontal midpoint,
    /// so the text sits to the right of centre.
    pub fn pair_for(viewport: Viewport) -> [Caption; 2] {
        let x = viewport.center().x;
        let make = |text, y, fill| Caption {
            text,
            position: Vec2::new(x, y),
            fill,
            font_family: CAPTION_FONT_FAMILY,
            font_size_px: CAPTION_FONT_SIZE_PX,
            anchor: TextAnchor::Start,
        };
        [
            make(
                CAPTION_PRIMARY,
                viewport.height / CAPTION_PRIMARY_Y_DIVISOR,
                CAPTION_PRIMARY_FILL,
            ),
            make(
                CAPTION_SECONDARY,
                viewport.height / CAPTION_SECONDARY_Y_DIVISOR,
                CAPTION_SECONDARY_FILL,
            ),
        ]
    }
}

#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub viewport: Viewport,
    pub params: GridParams,
    pub layout: Option<GridLayout>,
    pub elements: Vec<Element>,
    pub captions: Vec<Caption>,
    pub generation: u64,
}

impl Scene {
    pub fn new(params: GridParams) -> Self {
        Self {
            params,
            ..Default::default()
        }
    }

    /// Drop every element and caption and lay out a fresh grid for `viewport`.
    pub fn rebuild(&mut self, viewport: Viewport) -> GridLayout {
        let layout = GridLayout::compute(viewport, self.params);
        let radius = self.params.element_radius;

        self.elements.clear();
        self.elements
            .extend(layout.centers().map(|c| Element::new(c, radius)));
        self.captions.clear();
        self.captions.extend(Caption::pair_for(viewport));

        self.viewport = viewport;
        self.layout = Some(layout);
        self.generation = self.generation.wrapping_add(1);

        if layout.is_empty() {
            log::debug!(
                "[grid] viewport {}x{} too small for a single cell",
                viewport.width,
                viewport.height
            );
        }
        layout
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Element> {
        self.elements.get(index)
    }
}
