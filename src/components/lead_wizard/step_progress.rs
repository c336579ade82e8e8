//! Step Progress Header
//!
//! Shows which of the three field groups is on screen.

use leptos::prelude::*;

use crate::services::lead_form::{use_lead_form_context, WizardStep};

#[component]
pub fn StepProgress() -> impl IntoView {
    let ctx = use_lead_form_context();

    view! {
        <div class="mb-6">
            <h2 class="text-xl font-semibold text-gray-800">
                {move || {
                    let step = ctx.current_step.get();
                    format!("Step {}: {}", step.number(), step.label())
                }}
            </h2>

            <div class="mt-3 flex gap-2">
                {WizardStep::all().into_iter().map(|step| {
                    let is_reached = move || ctx.current_step.get().index() >= step.index();
                    view! {
                        <div class=move || format!(
                            "h-1 flex-1 rounded-full transition-colors {}",
                            if is_reached() { "bg-green-600" } else { "bg-gray-200" }
                        ) />
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
