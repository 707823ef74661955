//! Desktop platform implementation
//!
//! The title goes to the native window; the body style is changed by a
//! script run in the webview. Both need a live Dioxus runtime.

use crate::ports::outbound::PlatformPort;

#[derive(Clone, Default)]
pub struct DesktopPlatform;

impl DesktopPlatform {
    pub fn new() -> Self {
        Self
    }
}

pub fn create_platform() -> DesktopPlatform {
    DesktopPlatform::new()
}

fn overflow_script(locked: bool) -> String {
    let overflow = if locked { "hidden" } else { "" };
    format!("document.body.style.overflow = '{}';", overflow)
}

impl PlatformPort for DesktopPlatform {
    fn set_page_title(&self, title: &str) {
        dioxus::desktop::window().set_title(title);
    }

    fn set_scroll_locked(&self, locked: bool) {
        let script = overflow_script(locked);
        if let Err(e) = dioxus::desktop::window().webview.evaluate_script(&script) {
            tracing::warn!("Failed to set body overflow: {:?}", e);
        }
    }
}
