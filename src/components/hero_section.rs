//! Hero Section
//!
//! Landing pitch with the address autocomplete front and center. Submission
//! here only acknowledges the selection; the wizard page does the real
//! hand-off to the results view.

use leptos::ev;
use leptos::prelude::*;

use crate::components::address_autocomplete::AddressAutocomplete;
use crate::services::places::PlaceDetail;

const REPORT_BULLETS: &[&str] = &[
    "What's My Home Worth Today?",
    "How Is the Market Affecting My Property Value?",
    "What could I walk away with if I sold it on the Market?",
    "Will my home profit as a rental?",
    "What Would a Cash Offer Look Like?",
];

#[component]
pub fn HeroSection() -> impl IntoView {
    let selected_address = RwSignal::new(String::new());

    let handle_select = Callback::new(move |(address, detail): (String, Option<PlaceDetail>)| {
        log::info!("selected address: {address}");
        if let Some(detail) = detail {
            log::info!("place details: {detail:?}");
        }
        selected_address.set(address);
    });

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let address = selected_address.get_untracked();
        let message = if address.is_empty() {
            "Please select an address first".to_string()
        } else {
            format!("Processing request for: {address}")
        };
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(&message);
        }
    };

    view! {
        <section class="bg-[#767676] min-h-[80vh] flex items-center justify-center px-6 py-20">
            <div class="bg-white rounded-2xl p-12 max-w-2xl w-full text-center shadow-lg">
                <h1 class="text-2xl font-bold text-gray-900 mb-8">
                    "Get Your FREE Report to find out:"
                </h1>

                <ul class="text-left text-gray-700 space-y-2 mb-10 max-w-lg mx-auto text-base leading-relaxed">
                    {REPORT_BULLETS.iter().map(|bullet| view! {
                        <li>{format!("\u{2022} {bullet}")}</li>
                    }).collect_view()}
                </ul>

                <form on:submit=handle_submit class="flex flex-col sm:flex-row gap-3 max-w-lg mx-auto">
                    <AddressAutocomplete
                        on_select=handle_select
                        placeholder="Enter your home address"
                        class="flex-1 h-12 px-4 text-base border border-gray-300 rounded focus:outline-none focus:ring-2 focus:ring-[#0f6c0c] focus:border-transparent"
                    />
                    <button
                        type="submit"
                        class="bg-[#0f6c0c] hover:bg-[#0d5a0a] text-white h-12 px-8 rounded font-medium whitespace-nowrap"
                    >
                        "Submit"
                    </button>
                </form>
            </div>
        </section>
    }
}
