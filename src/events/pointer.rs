use crate::constants::{EV_CLICK, EV_ENTER, EV_LEAVE, EV_MOUSEMOVE};
use crate::dom::{self, Listener};
use field_core::Field;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Document-wide cursor tracking. Attached once; every event reads the
/// live element set, so it survives rebuilds untouched.
pub fn wire_pointer_move(document: &web::Document, field: Rc<RefCell<Field>>) {
    dom::add_persistent_listener(document, EV_MOUSEMOVE, move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let cursor = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        field.borrow_mut().pointer_move(cursor);
    });
}

/// Hover and click handlers for circle `index` of scene `generation`.
///
/// Handlers from an older generation find a newer scene and do nothing;
/// normally they are detached before that can happen.
pub fn bind_element(
    node: &web::Element,
    field: &Rc<RefCell<Field>>,
    index: usize,
    generation: u64,
) -> Vec<Listener> {
    let on = |event: &'static str, action: fn(&mut Field, usize)| {
        let field = field.clone();
        Listener::attach(node, event, move |_ev: web::MouseEvent| {
            let mut f = field.borrow_mut();
            if f.generation() != generation {
                log::warn!("[{}] stale handler for element {}", event, index);
                return;
            }
            action(&mut f, index);
        })
    };

    vec![
        on(EV_ENTER, Field::hover_in),
        on(EV_LEAVE, Field::hover_out),
        on(EV_CLICK, click),
    ]
}

fn click(field: &mut Field, index: usize) {
    field.click(index);
}
