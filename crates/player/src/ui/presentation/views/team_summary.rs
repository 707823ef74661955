//! Team summary dialog shown after a successful submission

use dioxus::prelude::*;

use crate::application::dto::CreatureDetail;
use crate::application::TeamSummary;
use crate::presentation::components::{CategoryBadge, Modal};

#[derive(Props, Clone, PartialEq)]
pub struct TeamSummaryDialogProps {
    pub summary: TeamSummary,
    pub on_close: EventHandler<()>,
}

#[component]
pub fn TeamSummaryDialog(props: TeamSummaryDialogProps) -> Element {
    let trainer = props.summary.trainer_name.clone();

    rsx! {
        Modal {
            title: "Your Pokémon Team",
            on_close: props.on_close,

            div { class: "space-y-4",
                div { class: "text-center mb-4",
                    h3 { class: "text-lg font-medium", "Trainer: {trainer}" }
                    p { class: "text-gray-600", "Ready for Battle!" }
                }

                div { class: "grid grid-cols-2 gap-4",
                    for member in props.summary.members.iter().cloned() {
                        MemberCard { key: "{member.id}", member }
                    }
                }

                div { class: "pt-4 text-center",
                    button {
                        r#type: "button",
                        class: "py-2 px-6 bg-luna-primary hover:bg-luna-secondary text-white rounded-lg transition-colors",
                        onclick: move |_| props.on_close.call(()),
                        "Close"
                    }
                }
            }
        }
    }
}

#[component]
fn MemberCard(member: CreatureDetail) -> Element {
    let name = member.display_name();
    let categories: Vec<String> = member.categories().into_iter().map(String::from).collect();

    rsx! {
        div { class: "bg-white border rounded-lg p-3 flex flex-col items-center",
            if let Some(sprite) = member.sprite_url() {
                img { class: "w-20 h-20", src: "{sprite}", alt: "{member.name}" }
            }
            h4 { class: "font-medium", "{name}" }
            div { class: "flex gap-1 mt-1",
                for category in categories {
                    CategoryBadge { key: "{category}", category: category.clone() }
                }
            }
        }
    }
}
