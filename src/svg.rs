use crate::attrs;
use crate::constants::{CAPTION_CLASS, CIRCLE_CLASS};
use crate::dom::{self, Listener};
use crate::events;
use field_core::{Element, Field, Scene};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// One `<circle>` and the handlers bound to it for a single generation.
struct CircleNode {
    node: web::Element,
    _listeners: Vec<Listener>,
}

/// The `<svg>` rendering surface: owns every node generated from the scene.
pub struct SvgSurface {
    document: web::Document,
    root: web::Element,
    circles: Vec<CircleNode>,
    captions: Vec<web::Element>,
}

impl SvgSurface {
    pub fn new(document: web::Document, root: web::Element) -> Self {
        Self {
            document,
            root,
            circles: Vec::new(),
            captions: Vec::new(),
        }
    }

    /// Replace every node with fresh ones for the field's current scene.
    /// Old listeners detach as their nodes are dropped.
    pub fn rebuild(&mut self, field: &Rc<RefCell<Field>>) -> anyhow::Result<()> {
        self.clear();

        let f = field.borrow();
        let scene = &f.scene;
        dom::set_attr(&self.root, "width", &attrs::viewport_attr(scene.viewport.width));
        dom::set_attr(&self.root, "height", &attrs::viewport_attr(scene.viewport.height));

        self.circles.reserve(scene.len());
        for (i, el) in scene.elements.iter().enumerate() {
            let node = dom::create_svg_element(&self.document, "circle")?;
            dom::set_attr(&node, "cx", &el.center.x.to_string());
            dom::set_attr(&node, "cy", &el.center.y.to_string());
            dom::set_attr(&node, "class", CIRCLE_CLASS);
            write_circle(&node, el);
            _ = self.root.append_child(&node);
            let listeners = events::bind_element(&node, field, i, scene.generation);
            self.circles.push(CircleNode {
                node,
                _listeners: listeners,
            });
        }

        self.append_captions(scene)?;
        Ok(())
    }

    fn append_captions(&mut self, scene: &Scene) -> anyhow::Result<()> {
        for cap in &scene.captions {
            let node = dom::create_svg_element(&self.document, "text")?;
            dom::set_attr(&node, "x", &cap.position.x.to_string());
            dom::set_attr(&node, "y", &cap.position.y.to_string());
            dom::set_attr(&node, "text-anchor", cap.anchor.as_svg());
            dom::set_attr(&node, "font-family", cap.font_family);
            dom::set_attr(&node, "font-size", &attrs::font_size_attr(cap.font_size_px));
            dom::set_attr(&node, "fill", &cap.fill.to_css());
            dom::set_attr(&node, "class", CAPTION_CLASS);
            node.set_text_content(Some(cap.text));
            _ = self.root.append_child(&node);
            self.captions.push(node);
        }
        Ok(())
    }

    /// Write animated attributes (radius, fill, transform) for every circle.
    pub fn sync(&self, scene: &Scene) {
        for (node, el) in self.circles.iter().zip(&scene.elements) {
            write_circle(&node.node, el);
        }
    }

    fn clear(&mut self) {
        for CircleNode { node, _listeners } in self.circles.drain(..) {
            drop(_listeners);
            node.remove();
        }
        for t in self.captions.drain(..) {
            t.remove();
        }
    }
}

fn write_circle(node: &web::Element, el: &Element) {
    dom::set_attr(node, "r", &el.radius.to_string());
    dom::set_attr(node, "fill", &el.fill.to_css());
    match attrs::transform_attr(el) {
        Some(t) => dom::set_attr(node, "transform", &t),
        None => {
            _ = node.remove_attribute("transform");
        }
    }
}
