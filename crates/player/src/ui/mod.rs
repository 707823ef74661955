use crate::ports::outbound::PlatformPort;
use dioxus::prelude::*;
use std::sync::Arc;

pub mod presentation;

use presentation::services::{use_catalog, use_catalog_limit};
use presentation::state::{CatalogState, PagePointer};
use presentation::views::TrainerForm;

/// Document title of the registration page
pub const PAGE_TITLE: &str = "Pokémon Registration";

/// Shell variant for UI layout selection.
/// This is passed via Dioxus context from the runner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ShellKind {
    #[default]
    Desktop,
    Mobile,
}

/// Type alias for the platform port used throughout the UI
pub type Platform = Arc<dyn PlatformPort>;

/// Hook to access the Platform from Dioxus context
pub fn use_platform() -> Platform {
    use_context::<Platform>()
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Provided by the composition root (see `crates/player/src/runner.rs`).
    let shell = use_context::<ShellKind>();
    let platform = use_platform();
    let catalog_port = use_catalog();
    let catalog_limit = use_catalog_limit();

    // Must be created inside an active Dioxus runtime.
    let catalog = use_context_provider(CatalogState::new);
    use_context_provider(PagePointer::new);

    use_hook(move || {
        platform.set_page_title(PAGE_TITLE);
        spawn(catalog.load(catalog_port, catalog_limit));
    });

    rsx! {
        document::Stylesheet {
            href: asset!("assets/css/output.css"),
        }

        {
            match shell {
                ShellKind::Desktop => rsx! {
                    DesktopShell {
                        RegistrationPage {}
                    }
                },
                ShellKind::Mobile => rsx! {
                    MobileShell {
                        RegistrationPage {}
                    }
                },
            }
        }
    }
}

#[component]
fn RegistrationPage() -> Element {
    let pointer = use_context::<PagePointer>();

    rsx! {
        div {
            class: "min-h-screen bg-luna-background py-8",
            onmousedown: move |_| pointer.press(),
            main { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                TrainerForm {}
            }
        }
    }
}

/// The document body stays the scroll container in both shells, so the
/// dialog's body scroll lock covers the whole page.
const DESKTOP_SHELL_STYLE: &str = "width: 100%; min-height: 100vh;";
const MOBILE_SHELL_STYLE: &str = "width: 100%; min-height: 100vh; overflow-x: hidden;";

#[component]
fn DesktopShell(children: Element) -> Element {
    rsx! {
        div {
            style: DESKTOP_SHELL_STYLE,
            {children}
        }
    }
}

#[component]
fn MobileShell(children: Element) -> Element {
    rsx! {
        // Same page, without the outer gutter.
        div {
            class: "text-sm",
            style: MOBILE_SHELL_STYLE,
            {children}
        }
    }
}
