pub mod pointer;
pub mod resize;

pub use pointer::{bind_element, wire_pointer_move};
pub use resize::{rebuild_grid, wire_resize};
