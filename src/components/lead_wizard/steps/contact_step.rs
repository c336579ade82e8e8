//! Contact Info Step
//!
//! Contact fields plus the submit button. The `required` markers are the
//! only validation in the wizard, and the browser enforces them, not us.

use leptos::prelude::*;

use crate::services::lead_form::{use_lead_form_context, FormField};

use super::{FIELD_CLASS, PRIMARY_BUTTON_CLASS, SECONDARY_BUTTON_CLASS};

#[component]
pub fn ContactStep() -> impl IntoView {
    let ctx = use_lead_form_context();

    view! {
        <div>
            <div class="space-y-4">
                <div>
                    <label for="first_name" class="block text-sm font-medium text-gray-700 mb-1">
                        "First Name"
                    </label>
                    <input
                        id="first_name"
                        type="text"
                        class=FIELD_CLASS
                        placeholder="Enter first name"
                        required
                        prop:value=move || ctx.form.with(|f| f.first_name.clone())
                        on:input=move |ev| ctx.update_field(FormField::FirstName, event_target_value(&ev))
                    />
                </div>

                <div>
                    <label for="last_name" class="block text-sm font-medium text-gray-700 mb-1">
                        "Last Name"
                    </label>
                    <input
                        id="last_name"
                        type="text"
                        class=FIELD_CLASS
                        placeholder="Enter last name"
                        required
                        prop:value=move || ctx.form.with(|f| f.last_name.clone())
                        on:input=move |ev| ctx.update_field(FormField::LastName, event_target_value(&ev))
                    />
                </div>

                <div>
                    <label for="phone" class="block text-sm font-medium text-gray-700 mb-1">
                        "Phone"
                    </label>
                    <input
                        id="phone"
                        type="tel"
                        class=FIELD_CLASS
                        placeholder="Enter phone number"
                        required
                        prop:value=move || ctx.form.with(|f| f.phone.clone())
                        on:input=move |ev| ctx.update_field(FormField::Phone, event_target_value(&ev))
                    />
                </div>

                <div>
                    <label for="email" class="block text-sm font-medium text-gray-700 mb-1">
                        "Email"
                    </label>
                    <input
                        id="email"
                        type="email"
                        class=FIELD_CLASS
                        placeholder="Enter email address"
                        required
                        prop:value=move || ctx.form.with(|f| f.email.clone())
                        on:input=move |ev| ctx.update_field(FormField::Email, event_target_value(&ev))
                    />
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
                <button type="submit" class=PRIMARY_BUTTON_CLASS>
                    "Submit"
                </button>
            </div>
        </div>
    }
}
