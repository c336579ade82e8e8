//! Wizard Shell Component
//!
//! Owns the form element and renders exactly one step group at a time.
//! Step transitions are pure button clicks; no network calls happen while
//! stepping. Submission happens on the final step only.

use leptos::ev;
use leptos::prelude::*;

use crate::services::lead_form::{
    provide_lead_form_context, use_lead_form_context, WizardStep,
};

use super::step_progress::StepProgress;
use super::steps::{AddressStep, ContactStep, HomeBasicsStep};

/// The three-step lead capture form.
#[component]
pub fn LeadWizard() -> impl IntoView {
    provide_lead_form_context();
    let ctx = use_lead_form_context();

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        ctx.submit();
    };

    view! {
        <form on:submit=handle_submit class="space-y-6">
            <StepProgress />

            {move || match ctx.current_step.get() {
                WizardStep::ConfirmAddress => view! { <AddressStep /> }.into_any(),
                WizardStep::HomeBasics => view! { <HomeBasicsStep /> }.into_any(),
                WizardStep::ContactInfo => view! { <ContactStep /> }.into_any(),
            }}
        </form>
    }
}
