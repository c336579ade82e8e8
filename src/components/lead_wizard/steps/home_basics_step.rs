//! Home Basics Step
//!
//! Bed and bath count selects. Counts stay strings end to end, including
//! the "9+" sentinel.

use leptos::prelude::*;

use crate::services::lead_form::{use_lead_form_context, FormField};

use super::{FIELD_CLASS, PRIMARY_BUTTON_CLASS, SECONDARY_BUTTON_CLASS};

const BED_OPTIONS: &[&str] = &["1", "2", "3", "4", "5", "6", "7", "8", "9+"];

const BATH_OPTIONS: &[&str] = &[
    "1", "1.5", "2", "2.5", "3", "3.5", "4", "4.5", "6", "6.5", "7", "7.5", "8", "8.5", "9+",
];

#[component]
pub fn HomeBasicsStep() -> impl IntoView {
    let ctx = use_lead_form_context();

    view! {
        <div>
            <div class="space-y-4">
                <div>
                    <label for="beds" class="block text-sm font-medium text-gray-700 mb-1">
                        "Beds"
                    </label>
                    <select
                        id="beds"
                        class=FIELD_CLASS
                        prop:value=move || ctx.form.with(|f| f.beds.clone())
                        on:change=move |ev| ctx.update_field(FormField::Beds, event_target_value(&ev))
                    >
                        <option value="" disabled>"Select number of beds"</option>
                        {BED_OPTIONS.iter().map(|opt| view! {
                            <option value=*opt>{*opt}</option>
                        }).collect_view()}
                    </select>
                </div>

                <div>
                    <label for="baths" class="block text-sm font-medium text-gray-700 mb-1">
                        "Baths"
                    </label>
                    <select
                        id="baths"
                        class=FIELD_CLASS
                        prop:value=move || ctx.form.with(|f| f.baths.clone())
                        on:change=move |ev| ctx.update_field(FormField::Baths, event_target_value(&ev))
                    >
                        <option value="" disabled>"Select number of baths"</option>
                        {BATH_OPTIONS.iter().map(|opt| view! {
                            <option value=*opt>{*opt}</option>
                        }).collect_view()}
                    </select>
                </div>
            </div>

            <div class="mt-8 flex flex-col sm:flex-row gap-4">
                <button
                    type="button"
                    class=SECONDARY_BUTTON_CLASS
                    on:click=move |_| ctx.retreat()
                >
                    "Previous"
                </button>
                <button
                    type="button"
                    class=PRIMARY_BUTTON_CLASS
                    on:click=move |_| ctx.advance()
                >
                    "Next"
                </button>
            </div>
        </div>
    }
}
