use crate::constants::EV_RESIZE;
use crate::dom;
use crate::svg::SvgSurface;
use field_core::Field;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Lay the grid out again for the current window size and regenerate nodes.
pub fn rebuild_grid(field: &Rc<RefCell<Field>>, surface: &Rc<RefCell<SvgSurface>>) {
    let viewport = dom::viewport_size();
    let layout = field.borrow_mut().rebuild(viewport);
    log::info!(
        "[grid] {}x{} -> {} cols x {} rows ({} circles)",
        viewport.width,
        viewport.height,
        layout.cols,
        layout.rows,
        layout.len()
    );
    if let Err(e) = surface.borrow_mut().rebuild(field) {
        log::error!("[grid] rebuild failed: {:?}", e);
    }
}

pub fn wire_resize(field: Rc<RefCell<Field>>, surface: Rc<RefCell<SvgSurface>>) {
    if let Some(window) = web::window() {
        dom::add_persistent_listener(&window, EV_RESIZE, move |_ev: web::Event| {
            rebuild_grid(&field, &surface);
        });
    }
}
