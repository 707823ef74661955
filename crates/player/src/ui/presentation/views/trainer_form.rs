//! Trainer registration form
//!
//! Names plus a team of exactly four picked from the catalog. Submitting a
//! valid form fetches every member's detail record and then opens the
//! team summary.

use dioxus::prelude::*;

use pokeform_domain::{FormField, FormState, SelectionSet};

use crate::application::RegistrationForm;
use crate::presentation::components::Select;
use crate::presentation::services::use_team_details_service;
use crate::presentation::state::CatalogState;
use crate::presentation::views::TeamSummaryDialog;

const INPUT_CLASS: &str = "w-full px-3 py-2 border rounded-lg";

fn input_class(error: Option<&str>) -> String {
    match error {
        Some(_) => format!("{INPUT_CLASS} border-luna-error"),
        None => format!("{INPUT_CLASS} border-gray-300"),
    }
}

#[component]
pub fn TrainerForm() -> Element {
    let catalog = use_context::<CatalogState>();
    let team_details = use_team_details_service();
    let mut registration = use_signal(RegistrationForm::new);

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        let ticket = match registration.write().begin_submit() {
            Ok(ticket) => ticket,
            Err(_) => return,
        };
        tracing::info!(generation = ticket.generation(), "Fetching team details");
        let team_details = team_details.clone();
        spawn(async move {
            let details = team_details.fetch_team(ticket.team()).await;
            registration.write().complete_submit(ticket, details);
        });
    };

    let reg = registration.read();
    let first_name = reg.form().first_name.clone();
    let last_name = reg.form().last_name.clone();
    let team = reg.team().clone();
    let first_name_error = reg.error(FormField::FirstName).map(str::to_string);
    let last_name_error = reg.error(FormField::LastName).map(str::to_string);
    let team_error = reg.error(FormField::Team).map(str::to_string);
    let is_submitting = reg.is_submitting();
    let summary = reg.summary().cloned();
    drop(reg);
    let catalog_error = catalog.error.read().clone();

    let submit_class = if is_submitting {
        "w-full py-2 px-4 rounded-lg text-white font-medium bg-luna-primary/70 transition-colors"
    } else {
        "w-full py-2 px-4 rounded-lg text-white font-medium bg-luna-primary hover:bg-luna-secondary transition-colors"
    };

    rsx! {
        div { class: "w-full max-w-lg mx-auto p-6",
            div { class: "bg-white rounded-lg shadow-md p-6",
                h1 { class: "text-2xl font-bold text-center mb-6", "Pokémon Registration" }

                form {
                    novalidate: true,
                    onsubmit: on_submit,

                    div { class: "space-y-4",
                        div {
                            label { r#for: "firstName", class: "block mb-1 font-medium", "First Name" }
                            input {
                                id: "firstName",
                                r#type: "text",
                                placeholder: "Enter your first name",
                                class: input_class(first_name_error.as_deref()),
                                value: "{first_name}",
                                oninput: move |e| registration.write().set_first_name(e.value()),
                            }
                            if let Some(ref message) = first_name_error {
                                p { class: "mt-1 text-sm text-luna-error", "{message}" }
                            }
                        }

                        div {
                            label { r#for: "lastName", class: "block mb-1 font-medium", "Last Name" }
                            input {
                                id: "lastName",
                                r#type: "text",
                                placeholder: "Enter your last name",
                                class: input_class(last_name_error.as_deref()),
                                value: "{last_name}",
                                oninput: move |e| registration.write().set_last_name(e.value()),
                            }
                            if let Some(ref message) = last_name_error {
                                p { class: "mt-1 text-sm text-luna-error", "{message}" }
                            }
                        }

                        div {
                            label { r#for: "pokemonTeam", class: "block mb-1 font-medium", "Select Your Team (4 Pokémon)" }
                            Select {
                                options: catalog.options.read().clone(),
                                value: team,
                                on_change: move |next: SelectionSet| registration.write().set_team(next),
                                placeholder: "Search for Pokémon...",
                                limit: FormState::team_limit(),
                                is_loading: *catalog.loading.read(),
                                error: team_error.clone(),
                                class: "w-full",
                            }
                            if let Some(message) = team_error {
                                p { class: "mt-1 text-sm text-luna-error", "{message}" }
                            }
                            if let Some(message) = catalog_error {
                                p { class: "mt-1 text-sm text-luna-error", "{message}" }
                            }
                        }

                        div { class: "pt-4",
                            button {
                                r#type: "submit",
                                disabled: is_submitting,
                                class: submit_class,
                                if is_submitting {
                                    div { class: "flex items-center justify-center",
                                        div { class: "w-5 h-5 border-2 border-white border-t-transparent rounded-full animate-spin mr-2" }
                                        "Submitting..."
                                    }
                                } else {
                                    "View My Team"
                                }
                            }
                        }
                    }
                }
            }

            if let Some(summary) = summary {
                TeamSummaryDialog {
                    summary,
                    on_close: move |_| registration.write().close_summary(),
                }
            }
        }
    }
}
