use dioxus::prelude::*;

use crate::presentation::utils::category_color_class;

/// Colored pill for one creature category
#[component]
pub fn CategoryBadge(category: String) -> Element {
    let color = category_color_class(&category);

    rsx! {
        span {
            class: "{color} text-white text-xs px-2 py-1 rounded-full capitalize",
            "{category}"
        }
    }
}
