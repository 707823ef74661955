//! Modal dialog
//!
//! Render it only while it should be visible. Mounting locks body scrolling
//! and unmounting releases the lock, whichever way the dialog was closed.

use dioxus::prelude::*;

use crate::presentation::effects::use_scroll_lock;

#[derive(Props, Clone, PartialEq)]
pub struct ModalProps {
    #[props(into)]
    pub title: String,
    pub on_close: EventHandler<()>,
    pub children: Element,
    #[props(default, into)]
    pub class: String,
}

#[component]
pub fn Modal(props: ModalProps) -> Element {
    use_scroll_lock();

    rsx! {
        div {
            class: "fixed inset-0 z-50 flex items-center justify-center outline-none",
            tabindex: "-1",
            onmounted: move |e| async move {
                // keyboard focus is needed for Escape to reach the dialog
                if let Err(err) = e.set_focus(true).await {
                    tracing::debug!(error = ?err, "Could not focus dialog");
                }
            },
            onkeydown: move |e| {
                if e.key() == Key::Escape {
                    props.on_close.call(());
                }
            },

            div {
                class: "fixed inset-0 bg-black bg-opacity-50 transition-opacity",
                onclick: move |_| props.on_close.call(()),
            }

            div {
                class: "bg-white rounded-lg shadow-xl z-10 max-w-md w-full mx-4 overflow-hidden {props.class}",
                role: "dialog",
                onclick: |e| e.stop_propagation(),

                div { class: "flex items-center justify-between p-4 border-b",
                    h2 { class: "text-xl font-semibold", "{props.title}" }
                    button {
                        r#type: "button",
                        class: "text-gray-500 hover:text-gray-700 text-2xl leading-none",
                        aria_label: "Close",
                        onclick: move |_| props.on_close.call(()),
                        "×"
                    }
                }

                div { class: "p-4", {props.children} }
            }
        }
    }
}
