//! Layout, interaction and animation logic for the circle field.
//!
//! Nothing here touches web APIs; the wasm front-end owns the DOM and feeds
//! viewport sizes, pointer positions and frame deltas into a [`Field`].

pub mod anim;
pub mod color;
pub mod constants;
pub mod easing;
pub mod error;
pub mod grid;
pub mod interaction;
pub mod scene;

pub use anim::{Animator, Property, TweenSpec, Value};
pub use color::Rgba;
pub use easing::Easing;
pub use error::ParamsError;
pub use grid::{GridLayout, GridParams, Viewport};
pub use interaction::*;
pub use scene::*;
