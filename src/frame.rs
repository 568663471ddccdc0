use crate::constants::MAX_FRAME_DT_MS;
use crate::svg::SvgSurface;
use field_core::Field;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub field: Rc<RefCell<Field>>,
    pub surface: Rc<RefCell<SvgSurface>>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn new(field: Rc<RefCell<Field>>, surface: Rc<RefCell<SvgSurface>>) -> Self {
        Self {
            field,
            surface,
            last_instant: Instant::now(),
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).min(Duration::from_millis(MAX_FRAME_DT_MS));
        self.last_instant = now;

        let mut field = self.field.borrow_mut();
        if field.tick(dt) {
            self.surface.borrow().sync(&field.scene);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
