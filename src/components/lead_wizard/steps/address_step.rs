//! Confirm Address Step
//!
//! Six free-form text inputs. Nothing here is required or validated; the
//! user can click straight through with empty fields.

use leptos::prelude::*;

use crate::services::lead_form::{use_lead_form_context, FormField};

use super::{FIELD_CLASS, PRIMARY_BUTTON_CLASS};

#[component]
pub fn AddressStep() -> impl IntoView {
    let ctx = use_lead_form_context();

    view! {
        <div>
            <div class="space-y-4">
                <div>
                    <label for="street_address" class="block text-sm font-medium text-gray-700 mb-1">
                        "Street Address"
                    </label>
                    <input
                        id="street_address"
                        type="text"
                        class=FIELD_CLASS
                        placeholder="Enter street address"
                        prop:value=move || ctx.form.with(|f| f.street_address.clone())
                        on:input=move |ev| ctx.update_field(FormField::StreetAddress, event_target_value(&ev))
                    />
                </div>

                <div>
                    <label for="unit_number" class="block text-sm font-medium text-gray-700 mb-1">
                        "Unit Number"
                    </label>
                    <input
                        id="unit_number"
                        type="text"
                        class=FIELD_CLASS
                        placeholder="Enter unit number"
                        prop:value=move || ctx.form.with(|f| f.unit_number.clone())
                        on:input=move |ev| ctx.update_field(FormField::UnitNumber, event_target_value(&ev))
                    />
                </div>

                <div>
                    <label for="city" class="block text-sm font-medium text-gray-700 mb-1">
                        "City"
                    </label>
                    <input
                        id="city"
                        type="text"
                        class=FIELD_CLASS
                        placeholder="Enter city"
                        prop:value=move || ctx.form.with(|f| f.city.clone())
                        on:input=move |ev| ctx.update_field(FormField::City, event_target_value(&ev))
                    />
                </div>

                <div>
                    <label for="state" class="block text-sm font-medium text-gray-700 mb-1">
                        "State"
                    </label>
                    <input
                        id="state"
                        type="text"
                        class=FIELD_CLASS
                        placeholder="Enter state"
                        prop:value=move || ctx.form.with(|f| f.state.clone())
                        on:input=move |ev| ctx.update_field(FormField::State, event_target_value(&ev))
                    />
                </div>

                <div>
                    <label for="country" class="block text-sm font-medium text-gray-700 mb-1">
                        "Country"
                    </label>
                    <input
                        id="country"
                        type="text"
                        class=FIELD_CLASS
                        placeholder="Enter country"
                        prop:value=move || ctx.form.with(|f| f.country.clone())
                        on:input=move |ev| ctx.update_field(FormField::Country, event_target_value(&ev))
                    />
                </div>

                <div>
                    <label for="zipcode" class="block text-sm font-medium text-gray-700 mb-1">
                        "Zipcode"
                    </label>
                    <input
                        id="zipcode"
                        type="text"
                        class=FIELD_CLASS
                        placeholder="Enter zipcode"
                        prop:value=move || ctx.form.with(|f| f.zipcode.clone())
                        on:input=move |ev| ctx.update_field(FormField::Zipcode, event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="mt-8 flex justify-end">
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
