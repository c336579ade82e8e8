//! Address Autocomplete Component
//!
//! Text input with a suggestion dropdown fed by the places service, falling
//! back to demo suggestions while (or if) the library never loads. Fires on
//! every keystroke at three or more characters; there is no debounce and no
//! request cancellation, so responses apply in the order they resolve.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::services::places::{
    self, AddressSuggestion, PlaceDetail, MAX_SUGGESTIONS, MIN_QUERY_LEN,
};

/// How long the dropdown lingers after blur so a click on a suggestion can
/// land before the panel disappears.
const BLUR_HIDE_DELAY_MS: u32 = 200;

/// Address input with autocomplete suggestions.
///
/// `on_select` fires once with the bare address on every selection; for
/// live-sourced suggestions it fires a second time with the place detail
/// if (and only if) the detail lookup succeeds.
#[component]
pub fn AddressAutocomplete(
    on_select: Callback<(String, Option<PlaceDetail>)>,
    #[prop(default = "Enter your home address".to_string(), into)] placeholder: String,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let input_value = RwSignal::new(String::new());
    let suggestions = RwSignal::new(Vec::<AddressSuggestion>::new());
    let show_suggestions = RwSignal::new(false);
    let is_loading = RwSignal::new(false);

    // Availability flips true at most once, when the maps script finishes
    // loading. Searches before that use the demo path.
    let places_available = RwSignal::new(false);
    places::watch_places_availability(places_available);

    let run_search = move |query: String| {
        if !places::should_search(&query) {
            suggestions.set(Vec::new());
            show_suggestions.set(false);
            return;
        }

        is_loading.set(true);

        if places_available.get_untracked() {
            let issued = places::live_predictions(&query, move |found| {
                show_suggestions.set(!found.is_empty());
                suggestions.set(found);
                is_loading.set(false);
            });
            if let Err(e) = issued {
                log::error!("address prediction request failed: {e}");
                suggestions.set(Vec::new());
                show_suggestions.set(false);
                is_loading.set(false);
            }
        } else {
            let found = places::demo_suggestions(&query);
            show_suggestions.set(!found.is_empty());
            suggestions.set(found);
            is_loading.set(false);
        }
    };

    let handle_select = move |suggestion: AddressSuggestion| {
        input_value.set(suggestion.description.clone());
        suggestions.set(Vec::new());
        show_suggestions.set(false);

        on_select.run((suggestion.description.clone(), None));

        // Demo ids have no backing place record; the address-only report
        // above is final for them.
        if !suggestion.is_demo() {
            let description = suggestion.description.clone();
            let issued = places::live_details(&suggestion.place_id, move |detail| {
                if let Some(detail) = detail {
                    on_select.run((description, Some(detail)));
                }
            });
            if let Err(e) = issued {
                log::error!("place detail request failed: {e}");
            }
        }
    };

    view! {
        <div class="relative w-full">
            <input
                type="text"
                class=class
                placeholder=placeholder
                autocomplete="off"
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    input_value.set(value.clone());
                    run_search(value);
                }
                on:blur=move |_| {
                    // Delay hiding so a click on a suggestion lands first.
                    spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(BLUR_HIDE_DELAY_MS).await;
                        show_suggestions.set(false);
                    });
                }
                on:focus=move |_| {
                    if suggestions.with_untracked(|s| !s.is_empty()) {
                        show_suggestions.set(true);
                    }
                }
            />

            {move || {
                let current = suggestions.get();
                (show_suggestions.get() && !current.is_empty()).then(|| view! {
                    <div class="absolute top-full left-0 right-0 bg-white border border-gray-300 rounded-md shadow-lg z-50 mt-1">
                        {current.into_iter().take(MAX_SUGGESTIONS).map(|suggestion| {
                            let for_click = suggestion.clone();
                            view! {
                                <div
                                    class="px-4 py-3 hover:bg-gray-100 cursor-pointer border-b border-gray-100 last:border-b-0 text-sm text-gray-700"
                                    on:click=move |_| handle_select(for_click.clone())
                                >
                                    {suggestion.description}
                                </div>
                            }
                        }).collect_view()}
                    </div>
                })
            }}

            {move || {
                (is_loading.get() && input_value.get().len() >= MIN_QUERY_LEN).then(|| view! {
                    <div class="absolute top-full left-0 right-0 bg-white border border-gray-300 rounded-md shadow-lg z-50 mt-1">
                        <div class="px-4 py-3 text-sm text-gray-500">
                            "Searching addresses..."
                        </div>
                    </div>
                })
            }}
        </div>
    }
}
