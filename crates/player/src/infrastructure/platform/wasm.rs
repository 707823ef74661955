//! WASM platform implementation
//!
//! Talks to the browser document through `web-sys`.

use crate::ports::outbound::PlatformPort;

#[derive(Clone, Default)]
pub struct WasmPlatform;

impl WasmPlatform {
    pub fn new() -> Self {
        Self
    }
}

pub fn create_platform() -> WasmPlatform {
    WasmPlatform::new()
}

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

impl PlatformPort for WasmPlatform {
    fn set_page_title(&self, title: &str) {
        if let Some(doc) = document() {
            doc.set_title(title);
        }
    }

    fn set_scroll_locked(&self, locked: bool) {
        let Some(body) = document().and_then(|d| d.body()) else {
            return;
        };
        let overflow = if locked { "hidden" } else { "" };
        if let Err(e) = body.style().set_property("overflow", overflow) {
            tracing::warn!("Failed to set body overflow: {:?}", e);
        }
    }
}
