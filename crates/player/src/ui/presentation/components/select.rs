//! Searchable multi-select
//!
//! Controlled component: the selection arrives in `value` and every change is
//! reported through `on_change`. Visibility and the search term live in a
//! local [`SelectState`].
//!
//! The list closes on a second click on the control, on Escape while focus
//! is anywhere inside the component, and on a press anywhere else on the
//! page (see [`PagePointer`]). That press still reaches its own target.

use dioxus::prelude::*;

use pokeform_domain::{option_state, SelectOption, SelectionLimit, SelectionSet};

use crate::presentation::state::{PagePointer, SelectClick, SelectState};

#[derive(Props, Clone, PartialEq)]
pub struct SelectProps {
    /// Every option the list can show
    pub options: Vec<SelectOption>,
    /// Current selection, owned by the parent
    pub value: SelectionSet,
    pub on_change: EventHandler<SelectionSet>,
    #[props(default = "Select...".to_string(), into)]
    pub placeholder: String,
    #[props(default)]
    pub limit: SelectionLimit,
    /// Shows a spinner and ignores clicks on the control
    #[props(default = false)]
    pub is_loading: bool,
    #[props(default = false)]
    pub disabled: bool,
    /// Switches the control to its error styling
    #[props(default)]
    pub error: Option<String>,
    #[props(default, into)]
    pub class: String,
}

#[component]
pub fn Select(props: SelectProps) -> Element {
    let mut state = use_signal(SelectState::new);

    let page_pointer = try_use_context::<PagePointer>();
    use_effect(move || {
        if let Some(pointer) = page_pointer {
            let presses = pointer.presses();
            state.write().observe_page_presses(presses);
        }
    });

    let interactive = !props.disabled && !props.is_loading;
    let is_open = state.read().is_open();
    let search_term = state.read().search_term().to_string();
    let has_search = state.read().has_search();
    let visible = state.read().visible_options(&props.options);
    let counter = props.value.counter_label(props.limit);

    let control_class = {
        let mut class = String::from(
            "flex flex-wrap items-center border rounded-lg p-2 cursor-pointer",
        );
        if is_open {
            class.push_str(" border-luna-primary ring-1 ring-luna-primary");
        } else {
            class.push_str(" border-gray-300");
        }
        if props.error.is_some() {
            class.push_str(" border-luna-error ring-1 ring-luna-error");
        }
        if props.disabled {
            class.push_str(" bg-gray-100 cursor-not-allowed");
        } else {
            class.push_str(" bg-white");
        }
        class
    };

    let chevron_class = if is_open {
        "w-5 h-5 text-gray-500 transition-transform rotate-180"
    } else {
        "w-5 h-5 text-gray-500 transition-transform"
    };

    let limit = props.limit;
    let on_change = props.on_change;

    rsx! {
        div {
            class: "relative z-10 outline-none {props.class}",
            tabindex: "-1",
            // presses inside never count as outside
            onmousedown: move |e| e.stop_propagation(),
            onkeydown: move |e| {
                if e.key() == Key::Escape {
                    state.write().press_escape();
                }
            },

            div {
                class: "{control_class}",
                onclick: {
                    let current = props.value.clone();
                    move |_| {
                        state.write().click(SelectClick::Control, &current, limit, interactive);
                    }
                },

                if props.value.is_empty() {
                    span { class: "text-gray-500", "{props.placeholder}" }
                } else {
                    div { class: "flex flex-wrap gap-1",
                        for option in props.value.iter().cloned() {
                            Chip {
                                key: "{option.value()}",
                                option: option.clone(),
                                on_remove: {
                                    let current = props.value.clone();
                                    move |value: String| {
                                        let next = state.write().click(
                                            SelectClick::RemoveChip(&value),
                                            &current,
                                            limit,
                                            interactive,
                                        );
                                        if let Some(next) = next {
                                            on_change.call(next);
                                        }
                                    }
                                },
                            }
                        }
                    }
                }

                div { class: "ml-auto flex items-center",
                    if props.is_loading {
                        div { class: "animate-spin w-5 h-5 border-2 border-luna-primary border-t-transparent rounded-full" }
                    } else {
                        span { class: "{chevron_class}", "▾" }
                    }
                }
            }

            if is_open {
                div {
                    class: "absolute z-10 w-full mt-1 bg-white border border-gray-300 rounded-lg shadow-lg",

                    div { class: "flex items-center p-2 border-b",
                        span { class: "w-5 h-5 text-gray-400", "⌕" }
                        input {
                            r#type: "text",
                            class: "w-full px-2 py-1 outline-none",
                            placeholder: "Search...",
                            value: "{search_term}",
                            oninput: move |e| state.write().set_search(e.value()),
                        }
                        if has_search {
                            button {
                                r#type: "button",
                                class: "w-5 h-5 text-gray-400 cursor-pointer",
                                onclick: move |_| state.write().clear_search(),
                                "×"
                            }
                        }
                    }

                    div { class: "max-h-60 overflow-y-auto",
                        if visible.is_empty() {
                            div { class: "p-3 text-center text-gray-500", "No options found" }
                        } else {
                            for option in visible.into_iter() {
                                OptionRow {
                                    key: "{option.value()}",
                                    option: option.clone(),
                                    value: props.value.clone(),
                                    limit,
                                    on_pick: {
                                        let current = props.value.clone();
                                        move |picked: SelectOption| {
                                            let next = state.write().click(
                                                SelectClick::Option(&picked),
                                                &current,
                                                limit,
                                                interactive,
                                            );
                                            if let Some(next) = next {
                                                on_change.call(next);
                                            }
                                        }
                                    },
                                }
                            }
                        }
                    }

                    if let Some(counter) = counter {
                        div { class: "p-2 text-sm text-gray-500 border-t", "{counter}" }
                    }
                }
            }
        }
    }
}

#[component]
fn Chip(option: SelectOption, on_remove: EventHandler<String>) -> Element {
    let value = option.value().to_string();

    rsx! {
        div { class: "flex items-center gap-1 bg-luna-primary/10 text-luna-primary rounded-md px-2 py-1",
            if let Some(image) = option.image() {
                img { class: "w-5 h-5", src: "{image}", alt: "{option.label()}" }
            }
            span { "{option.label()}" }
            button {
                r#type: "button",
                class: "w-4 h-4 leading-none cursor-pointer",
                aria_label: "Remove {option.label()}",
                // the control behind the chip would toggle the list
                onclick: move |e| {
                    e.stop_propagation();
                    on_remove.call(value.clone());
                },
                "×"
            }
        }
    }
}

#[component]
fn OptionRow(
    option: SelectOption,
    value: SelectionSet,
    limit: SelectionLimit,
    on_pick: EventHandler<SelectOption>,
) -> Element {
    let row = option_state(&value, &option, limit);

    let mut class = String::from("flex items-center gap-2 px-3 py-2 cursor-pointer");
    if row.selected {
        class.push_str(" bg-luna-primary/10");
    }
    if row.disabled {
        class.push_str(" opacity-50 cursor-not-allowed");
    } else {
        class.push_str(" hover:bg-gray-100");
    }

    rsx! {
        div {
            class: "{class}",
            onclick: {
                let option = option.clone();
                move |_| on_pick.call(option.clone())
            },
            if let Some(image) = option.image() {
                img { class: "w-6 h-6", src: "{image}", alt: "{option.label()}" }
            }
            span { "{option.label()}" }
            if row.selected {
                div { class: "ml-auto w-4 h-4 bg-luna-primary rounded-full" }
            }
        }
    }
}
