#![cfg(target_arch = "wasm32")]

//! Browser mount smoke tests. Run with `wasm-pack test --headless --chrome`.

use leptos::prelude::*;
use wasm_bindgen_test::*;

use home_value_frontend::components::address_autocomplete::AddressAutocomplete;
use home_value_frontend::components::hero_section::HeroSection;
use home_value_frontend::components::lead_wizard::LeadWizard;
use home_value_frontend::services::places::PlaceDetail;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn lead_wizard_mounts() {
    // The wizard provides its own form context; mounting and rendering the
    // first step must not panic.
    leptos::mount::mount_to_body(|| view! { <LeadWizard /> });
}

#[wasm_bindgen_test]
fn address_autocomplete_mounts() {
    let on_select = Callback::new(|(_, _): (String, Option<PlaceDetail>)| {});
    leptos::mount::mount_to_body(move || {
        view! {
            <AddressAutocomplete on_select=on_select placeholder="Enter your home address" />
        }
    });
}

#[wasm_bindgen_test]
fn hero_section_mounts() {
    leptos::mount::mount_to_body(|| view! { <HeroSection /> });
}
