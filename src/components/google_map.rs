//! Map Embed
//!
//! Static map frame shown above the wizard. Uses the keyless embed URL so
//! the frame still renders when no API key is configured.

use leptos::prelude::*;

const EMBED_ADDRESS: &str = "2159 Point Mallard Dr, Henderson, NV";

#[component]
pub fn GoogleMap() -> impl IntoView {
    let src = format!(
        "https://maps.google.com/maps?q={}&output=embed",
        EMBED_ADDRESS.replace(' ', "+")
    );

    view! {
        <iframe
            src=src
            class="w-full h-full border-0"
            referrerpolicy="no-referrer-when-downgrade"
            title="Property map"
            {..leptos::attr::loading("lazy")}
        />
    }
}
