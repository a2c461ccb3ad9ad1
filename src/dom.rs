use crate::constants::COARSE_POINTER_QUERY;
use crate::core::{HostCapabilities, TargetNode};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

/// Capability queries answered by the browser window.
pub struct BrowserCaps {
    window: web::Window,
}

impl BrowserCaps {
    pub fn new(window: web::Window) -> Self {
        Self { window }
    }
}

impl HostCapabilities for BrowserCaps {
    fn coarse_pointer(&self) -> bool {
        self.window
            .match_media(COARSE_POINTER_QUERY)
            .ok()
            .flatten()
            .map(|m| m.matches())
            .unwrap_or(false)
    }
}

impl TargetNode for web::Element {
    fn has_tag(&self, tag: &str) -> bool {
        self.tag_name().eq_ignore_ascii_case(tag)
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn parent(&self) -> Option<Self> {
        self.parent_element()
    }
}
