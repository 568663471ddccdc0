#![cfg(target_arch = "wasm32")]
use field_core::{Field, GridParams, InteractionTuning};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod attrs;
mod constants;
mod dom;
mod events;
mod frame;
mod svg;

use constants::SVG_CANVAS_ID;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("circle-field starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no window document"))?;
    let root = document
        .get_element_by_id(SVG_CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", SVG_CANVAS_ID))?;

    let field = Rc::new(RefCell::new(Field::new(
        GridParams::default(),
        InteractionTuning::default(),
    )));
    let surface = Rc::new(RefCell::new(svg::SvgSurface::new(document.clone(), root)));

    events::rebuild_grid(&field, &surface);
    events::wire_resize(field.clone(), surface.clone());
    events::wire_pointer_move(&document, field.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(field, surface)));
    frame::start_loop(frame_ctx);
    Ok(())
}
