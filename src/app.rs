use crate::core::{CursorConfig, PointerTrailAnimator, Selector, TrailVariant};
use crate::dom;
use crate::events::DomInputSource;
use crate::frame::RafScheduler;
use crate::overlay::DomSurface;
use wasm_bindgen::prelude::*;

type DomCursor = PointerTrailAnimator<DomInputSource, RafScheduler>;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("cursor-trail loaded");
    Ok(())
}

/// JS-side handle to a mounted cursor. Dropping it from JS (`free()`) also
/// unmounts.
#[wasm_bindgen]
pub struct CursorHandle {
    cursor: Option<DomCursor>,
}

#[wasm_bindgen]
impl CursorHandle {
    /// Switch the glyph and trail palette to match the page theme.
    pub fn set_dark(&self, dark: bool) {
        if let Some(c) = &self.cursor {
            c.set_dark(dark);
        }
    }

    /// False on touch devices and after `unmount`.
    pub fn is_active(&self) -> bool {
        self.cursor.as_ref().is_some_and(|c| c.is_active())
    }

    pub fn unmount(&mut self) {
        if let Some(c) = self.cursor.take() {
            c.unmount();
        }
    }
}

/// Mount the cursor overlay on the current page.
///
/// `variant` is `"dots"` or `"polyline"`; `selectors` optionally replaces the
/// comma-separated list of elements that trigger the hover pose.
#[wasm_bindgen]
pub fn mount_cursor(
    variant: &str,
    dark: bool,
    selectors: Option<String>,
) -> Result<CursorHandle, JsValue> {
    match mount(variant, dark, selectors.as_deref()) {
        Ok(cursor) => Ok(CursorHandle {
            cursor: Some(cursor),
        }),
        Err(e) => {
            log::error!("mount error: {:?}", e);
            Err(JsValue::from_str(&format!("{:#}", e)))
        }
    }
}

fn mount(variant: &str, dark: bool, selectors: Option<&str>) -> anyhow::Result<DomCursor> {
    let variant: TrailVariant = variant.parse()?;
    let (window, document) =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no window or document"))?;
    let selectors = match selectors {
        Some(list) => Selector::parse_list(list),
        None => Selector::defaults(),
    };
    if selectors.is_empty() {
        log::warn!("[cursor] no usable hover selectors, hover pose disabled");
    }

    let caps = dom::BrowserCaps::new(window.clone());
    let surface = DomSurface::new(&document)?;
    let input = DomInputSource::new(window.clone(), &document);
    let scheduler = RafScheduler::new(window);
    Ok(PointerTrailAnimator::mount(
        CursorConfig {
            variant,
            dark,
            selectors,
        },
        &caps,
        input,
        scheduler,
        surface,
    ))
}
