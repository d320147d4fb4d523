//! Backdrop DOM tree (wasm32)
//!
//! Owns the fixed render tree: base fill container, gradient overlay, one
//! absolutely-positioned node per element, three glow blobs. The container
//! sits behind all page content and never intercepts pointer events.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

use super::markup;
use crate::consts::BACKDROP_OPACITY;
use crate::sim::{DecorativeElementSpec, Measure, Rect, SceneState, TickInput, element_transform};
use crate::theme;
use crate::tuning::MotionTuning;

pub struct BackdropDom {
    container: HtmlElement,
    nodes: Vec<HtmlElement>,
}

impl BackdropDom {
    /// Build the backdrop tree and attach it to `<body>`
    pub fn mount(document: &Document, specs: &[DecorativeElementSpec]) -> Result<Self, JsValue> {
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;

        let container: HtmlElement = document.create_element("div")?.dyn_into()?;
        container.set_attribute(
            "style",
            &format!(
                "position:fixed;inset:0;width:100%;height:100%;z-index:-1;\
                 pointer-events:none;overflow:hidden;opacity:{BACKDROP_OPACITY};\
                 background:{base}",
                base = theme::BASE,
            ),
        )?;

        let gradient: HtmlElement = document.create_element("div")?.dyn_into()?;
        gradient.set_attribute("style", &markup::gradient_layer())?;
        container.append_child(&gradient)?;

        let mut nodes = Vec::with_capacity(specs.len());
        for spec in specs {
            let node: HtmlElement = document.create_element("div")?.dyn_into()?;
            node.set_attribute(
                "style",
                &format!(
                    "position:absolute;left:{x}%;top:{y}%;opacity:0;\
                     transform-origin:center center",
                    x = spec.home.x,
                    y = spec.home.y,
                ),
            )?;
            node.set_inner_html(&markup::element_markup(spec));
            container.append_child(&node)?;
            nodes.push(node);
        }

        for style in markup::glow_styles() {
            let glow: HtmlElement = document.create_element("div")?.dyn_into()?;
            glow.set_attribute("style", &style)?;
            container.append_child(&glow)?;
        }

        body.append_child(&container)?;
        log::info!("Backdrop mounted with {} elements", nodes.len());
        Ok(Self { container, nodes })
    }

    /// Push current transforms and opacities into the DOM.
    ///
    /// Per-node style failures are ignored; a node that cannot be styled
    /// simply keeps its last frame.
    pub fn apply(&self, scene: &SceneState, input: &TickInput, tuning: &MotionTuning) {
        for (index, node) in self.nodes.iter().enumerate() {
            let t = element_transform(scene, index, input, tuning);
            let style = node.style();
            let _ = style.set_property(
                "transform",
                &format!(
                    "translate3d({x:.2}px,{y:.2}px,0) rotate({rot:.2}deg) scale({scale:.3})",
                    x = t.offset.x,
                    y = t.offset.y,
                    rot = t.rotation,
                    scale = t.scale,
                ),
            );
            let _ = style.set_property("opacity", &format!("{:.3}", t.opacity));
        }
    }

    /// Detach the whole tree from the document
    pub fn unmount(&self) {
        self.container.remove();
        log::info!("Backdrop unmounted");
    }
}

impl Measure for BackdropDom {
    fn measure(&self, index: usize) -> Option<Rect> {
        let node = self.nodes.get(index)?;
        let rect = node.get_bounding_client_rect();
        // Zero-sized means not laid out yet: neutral no-repulsion state
        if rect.width() <= 0.0 && rect.height() <= 0.0 {
            return None;
        }
        Some(Rect {
            x: rect.x() as f32,
            y: rect.y() as f32,
            width: rect.width() as f32,
            height: rect.height() as f32,
        })
    }
}
