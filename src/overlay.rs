use crate::constants::{OVERLAY_ID, OVERLAY_Z_INDEX, SVG_NS};
use crate::core::{CursorFrame, CursorSurface, Glyph, GlyphShape, TrailDot, TrailStroke};
use std::fmt::Write as _;
use web_sys as web;

const STROKE_LAYER: &str =
    "position:fixed;top:0;left:0;width:100vw;height:100vh;overflow:visible";

fn create(document: &web::Document, tag: &str) -> anyhow::Result<web::Element> {
    document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create <{}>: {:?}", tag, e))
}

fn create_svg(document: &web::Document, tag: &str) -> anyhow::Result<web::Element> {
    document
        .create_element_ns(Some(SVG_NS), tag)
        .map_err(|e| anyhow::anyhow!("create svg <{}>: {:?}", tag, e))
}

/// Fixed, click-through overlay that draws `CursorFrame`s with plain DOM
/// nodes: one div per trail dot, an SVG polyline for the stroke, and one
/// element for the glyph.
///
/// Nothing touches the page until the first frame is presented.
pub struct DomSurface {
    document: web::Document,
    root: web::Element,
    dots: Vec<web::Element>,
    stroke_svg: web::Element,
    polyline: web::Element,
    glyph: web::Element,
    glyph_markup: String,
    attached: bool,
}

impl DomSurface {
    pub fn new(document: &web::Document) -> anyhow::Result<Self> {
        let root = create(document, "div")?;
        root.set_id(OVERLAY_ID);
        _ = root.set_attribute(
            "style",
            &format!(
                "position:fixed;top:0;left:0;width:0;height:0;pointer-events:none;z-index:{}",
                OVERLAY_Z_INDEX
            ),
        );
        _ = root.set_attribute("aria-hidden", "true");

        let stroke_svg = create_svg(document, "svg")?;
        _ = stroke_svg.set_attribute("style", &format!("{STROKE_LAYER};display:none"));
        let polyline = create_svg(document, "polyline")?;
        _ = polyline.set_attribute("fill", "none");
        _ = polyline.set_attribute("stroke-linecap", "round");
        _ = polyline.set_attribute("stroke-linejoin", "round");
        _ = stroke_svg.append_child(&polyline);
        _ = root.append_child(&stroke_svg);

        let glyph = create(document, "div")?;
        _ = root.append_child(&glyph);

        Ok(Self {
            document: document.clone(),
            root,
            dots: Vec::new(),
            stroke_svg,
            polyline,
            glyph,
            glyph_markup: String::new(),
            attached: false,
        })
    }

    fn attach(&mut self) {
        if self.attached {
            return;
        }
        match self.document.body() {
            Some(body) => {
                _ = body.append_child(&self.root);
                self.attached = true;
            }
            None => log::warn!("[overlay] no <body> to attach to"),
        }
    }

    fn sync_dot_count(&mut self, wanted: usize) {
        while self.dots.len() < wanted {
            let Ok(dot) = create(&self.document, "div") else {
                return;
            };
            // dots sit under the glyph
            _ = self.root.insert_before(&dot, Some(&self.glyph));
            self.dots.push(dot);
        }
        while self.dots.len() > wanted {
            if let Some(dot) = self.dots.pop() {
                dot.remove();
            }
        }
    }

    fn draw_dots(&mut self, dots: &[TrailDot], blend: &str) {
        self.sync_dot_count(dots.len());
        for (el, dot) in self.dots.iter().zip(dots) {
            let style = format!(
                "position:fixed;top:0;left:0;width:{s}px;height:{s}px;border-radius:50%;\
                 background:{c};opacity:{o};filter:blur({b}px);mix-blend-mode:{blend};\
                 transform:translate({x}px,{y}px) translate(-50%,-50%) scale({k})",
                s = dot.size,
                c = dot.color,
                o = dot.opacity,
                b = dot.blur_px,
                x = dot.position.x,
                y = dot.position.y,
                k = dot.scale,
            );
            _ = el.set_attribute("style", &style);
        }
    }

    fn draw_stroke(&self, stroke: Option<&TrailStroke>, blend: &str) {
        let Some(stroke) = stroke else {
            _ = self.polyline.set_attribute("points", "");
            _ = self
                .stroke_svg
                .set_attribute("style", &format!("{STROKE_LAYER};display:none"));
            return;
        };
        let mut points = String::with_capacity(stroke.points.len() * 12);
        for p in &stroke.points {
            _ = write!(points, "{:.1},{:.1} ", p.x, p.y);
        }
        _ = self.polyline.set_attribute("points", points.trim_end());
        _ = self.polyline.set_attribute("stroke", &stroke.color.to_string());
        _ = self.polyline.set_attribute("stroke-width", &stroke.width.to_string());
        _ = self.polyline.set_attribute("stroke-opacity", &stroke.opacity.to_string());
        _ = self
            .stroke_svg
            .set_attribute("style", &format!("{STROKE_LAYER};mix-blend-mode:{blend}"));
    }

    fn draw_glyph(&mut self, glyph: &Glyph) {
        let (markup, style) = match &glyph.shape {
            GlyphShape::Arrow {
                path,
                view_box,
                size,
                fill,
                outline,
                outline_width,
                glow_px,
            } => (
                format!(
                    "<svg width=\"{size}\" height=\"{size}\" viewBox=\"0 0 {vb} {vb}\" \
                     fill=\"none\" xmlns=\"{ns}\"><path d=\"{path}\" fill=\"{fill}\" \
                     stroke=\"{outline}\" stroke-width=\"{w}\" stroke-linejoin=\"round\"/></svg>",
                    vb = view_box,
                    ns = SVG_NS,
                    w = outline_width,
                ),
                format!(
                    "position:fixed;top:0;left:0;width:{size}px;height:{size}px;\
                     filter:drop-shadow(0 0 {glow_px}px {outline});\
                     transform:translate({x}px,{y}px) rotate({r}deg) scale({sx},{sy})",
                    x = glyph.position.x,
                    y = glyph.position.y,
                    r = glyph.rotation_deg,
                    sx = glyph.scale.x,
                    sy = glyph.scale.y,
                ),
            ),
            GlyphShape::Capsule {
                width,
                height,
                corner_radius,
                fill,
                outline,
            } => (
                String::new(),
                format!(
                    "position:fixed;top:0;left:0;width:{width}px;height:{height}px;\
                     border-radius:{corner_radius}px;background:{fill};border:2px solid {outline};\
                     box-sizing:border-box;\
                     transform:translate({x}px,{y}px) translate(-50%,-50%) \
                     rotate({r}deg) scale({sx},{sy})",
                    x = glyph.position.x,
                    y = glyph.position.y,
                    r = glyph.rotation_deg,
                    sx = glyph.scale.x,
                    sy = glyph.scale.y,
                ),
            ),
        };
        // markup only changes with theme, so skip the reparse on most frames
        if markup != self.glyph_markup {
            self.glyph.set_inner_html(&markup);
            self.glyph_markup = markup;
        }
        _ = self.glyph.set_attribute("style", &style);
    }
}

impl CursorSurface for DomSurface {
    fn present(&mut self, frame: &CursorFrame) {
        self.attach();
        let blend = frame.blend.as_css();
        self.draw_dots(&frame.dots, blend);
        self.draw_stroke(frame.stroke.as_ref(), blend);
        self.draw_glyph(&frame.glyph);
    }

    fn teardown(&mut self) {
        self.root.remove();
        self.attached = false;
    }
}
