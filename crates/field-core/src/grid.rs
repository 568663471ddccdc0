//! Row/column layout that tiles a viewport with fixed-size circles.
//!
//! A cell is `2R + P` pixels wide. The grid starts `P` pixels in from the
//! top-left corner, and the last column/row must still leave room for the
//! trailing padding, hence the `W - P` in the column count.

use crate::constants::{ELEMENT_RADIUS, MAX_GRID_AXIS, PADDING};
use crate::error::ParamsError;
use glam::Vec2;

/// Viewport size in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Fixed padding and radius shared by every cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridParams {
    pub padding: f32,
    pub element_radius: f32,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            padding: PADDING,
            element_radius: ELEMENT_RADIUS,
        }
    }
}

impl GridParams {
    pub fn new(padding: f32, element_radius: f32) -> Result<Self, ParamsError> {
        if !padding.is_finite() {
            return Err(ParamsError::NonFinite("padding"));
        }
        if !element_radius.is_finite() {
            return Err(ParamsError::NonFinite("element_radius"));
        }
        if padding < 0.0 {
            return Err(ParamsError::NegativePadding(padding));
        }
        if element_radius <= 0.0 {
            return Err(ParamsError::NonPositiveRadius(element_radius));
        }
        Ok(Self {
            padding,
            element_radius,
        })
    }

    /// Distance between neighbouring centres.
    #[inline]
    pub fn pitch(&self) -> f32 {
        2.0 * self.element_radius + self.padding
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayout {
    pub cols: usize,
    pub rows: usize,
    pub params: GridParams,
}

impl GridLayout {
    pub fn compute(viewport: Viewport, params: GridParams) -> Self {
        let pitch = params.pitch();
        Self {
            cols: fit_count(viewport.width, params.padding, pitch),
            rows: fit_count(viewport.height, params.padding, pitch),
            params,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cols.saturating_mul(self.rows)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn cell_center(&self, row: usize, col: usize) -> Vec2 {
        let p = self.params;
        let pitch = p.pitch();
        Vec2::new(
            col as f32 * pitch + p.element_radius + p.padding,
            row as f32 * pitch + p.element_radius + p.padding,
        )
    }

    /// Cell centres in row-major order.
    pub fn centers(&self) -> impl Iterator<Item = Vec2> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| self.cell_center(row, col)))
    }
}

// floor((extent - padding) / pitch), with degenerate inputs collapsing to 0
// and oversized extents capped at MAX_GRID_AXIS
#[inline]
fn fit_count(extent: f32, padding: f32, pitch: f32) -> usize {
    let n = ((extent - padding) / pitch).floor();
    if n.is_finite() && n > 0.0 {
        n.min(MAX_GRID_AXIS as f32) as usize
    } else {
        0
    }
}
