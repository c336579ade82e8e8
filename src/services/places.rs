//! Address Suggestion Provider
//!
//! Wraps the Google Places autocomplete library with a deterministic demo
//! fallback. Until the places library finishes loading (or if it never
//! does), searches are answered from `demo_suggestions`. Selection of a
//! live suggestion triggers a second lookup for the full place record;
//! demo ids skip that lookup entirely.

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::bindings;

/// Queries shorter than this never hit either path.
pub const MIN_QUERY_LEN: usize = 3;
/// Hard cap on rendered suggestions, live and demo alike.
pub const MAX_SUGGESTIONS: usize = 4;

const AVAILABILITY_POLL_MS: u32 = 200;
const AVAILABILITY_POLL_ATTEMPTS: u32 = 25;

/// A candidate address offered while the user types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressSuggestion {
    pub description: String,
    pub place_id: String,
}

impl AddressSuggestion {
    /// Demo suggestions carry synthetic `demo*` ids; selecting one must not
    /// trigger a place-detail lookup.
    pub fn is_demo(&self) -> bool {
        self.place_id.starts_with("demo")
    }
}

/// Prediction as returned by `getPlacePredictions`.
#[derive(Debug, Clone, Deserialize)]
struct PlacePrediction {
    description: String,
    place_id: String,
}

impl From<PlacePrediction> for AddressSuggestion {
    fn from(prediction: PlacePrediction) -> Self {
        AddressSuggestion {
            description: prediction.description,
            place_id: prediction.place_id,
        }
    }
}

/// The slice of a place record the app cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceDetail {
    pub place_id: String,
    pub formatted_address: Option<String>,
    pub name: Option<String>,
}

impl PlaceDetail {
    /// Pull the interesting fields out of a raw `PlaceResult`. The full
    /// record carries nested objects with methods, so field-by-field
    /// reflection beats wholesale deserialization here.
    fn from_js(place: &JsValue) -> Option<Self> {
        let get = |key: &str| {
            js_sys::Reflect::get(place, &JsValue::from_str(key))
                .ok()
                .and_then(|v| v.as_string())
        };
        Some(PlaceDetail {
            place_id: get("place_id")?,
            formatted_address: get("formatted_address"),
            name: get("name"),
        })
    }
}

/// Queries below the minimum length clear the panel instead of searching.
pub fn should_search(query: &str) -> bool {
    query.len() >= MIN_QUERY_LEN
}

const DEMO_VARIANTS: &[(&str, &str)] = &[
    ("Street", "Los Angeles"),
    ("Avenue", "San Diego"),
    ("Boulevard", "San Francisco"),
    ("Drive", "Sacramento"),
];

/// Synthesize fallback candidates from the raw query.
///
/// The contains-filter mirrors the live path's behavior of only offering
/// matches, even though the query is always a substring of the synthesized
/// text.
pub fn demo_suggestions(query: &str) -> Vec<AddressSuggestion> {
    let needle = query.to_lowercase();
    DEMO_VARIANTS
        .iter()
        .enumerate()
        .map(|(i, (road, city))| AddressSuggestion {
            description: format!("{query} {road}, {city}, CA, USA"),
            place_id: format!("demo{}", i + 1),
        })
        .filter(|s| s.description.to_lowercase().contains(&needle))
        .take(MAX_SUGGESTIONS)
        .collect()
}

/// Request live predictions, restricted to US addresses.
///
/// `callback` always runs exactly once: with at most [`MAX_SUGGESTIONS`]
/// suggestions on an `"OK"` status, or with an empty list on any other
/// status or payload. An `Err` return means the request was never issued
/// (service construction or serialization failed, or the call threw).
pub fn live_predictions<F>(query: &str, callback: F) -> Result<(), String>
where
    F: FnOnce(Vec<AddressSuggestion>) + 'static,
{
    let service = bindings::AutocompleteService::new()
        .map_err(|e| format!("AutocompleteService unavailable: {e:?}"))?;

    let request = serde_wasm_bindgen::to_value(&bindings::PredictionRequest {
        input: query,
        types: vec!["address"],
        component_restrictions: bindings::ComponentRestrictions { country: "us" },
    })
    .map_err(|e| format!("failed to serialize prediction request: {e}"))?;

    let on_result = Closure::once_into_js(move |predictions: JsValue, status: JsValue| {
        let ok = status.as_string().is_some_and(|s| s == "OK");
        let suggestions = if ok {
            serde_wasm_bindgen::from_value::<Vec<PlacePrediction>>(predictions)
                .map(|predictions| {
                    predictions
                        .into_iter()
                        .take(MAX_SUGGESTIONS)
                        .map(AddressSuggestion::from)
                        .collect()
                })
                .unwrap_or_default()
        } else {
            Vec::new()
        };
        callback(suggestions);
    });

    service
        .get_place_predictions(&request, on_result.unchecked_ref())
        .map_err(|e| format!("getPlacePredictions threw: {e:?}"))
}

/// Fetch the full place record for a chosen live suggestion.
///
/// `callback` runs once with `Some` detail on `"OK"` and `None` otherwise.
pub fn live_details<F>(place_id: &str, callback: F) -> Result<(), String>
where
    F: FnOnce(Option<PlaceDetail>) + 'static,
{
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "document unavailable".to_string())?;
    // PlacesService wants a node to hang attributions on; it never renders.
    let container = document
        .create_element("div")
        .map_err(|e| format!("failed to create attribution container: {e:?}"))?;

    let service = bindings::PlacesService::new(&container)
        .map_err(|e| format!("PlacesService unavailable: {e:?}"))?;

    let request = serde_wasm_bindgen::to_value(&bindings::DetailsRequest { place_id })
        .map_err(|e| format!("failed to serialize details request: {e}"))?;

    let on_result = Closure::once_into_js(move |place: JsValue, status: JsValue| {
        let ok = status.as_string().is_some_and(|s| s == "OK");
        let detail = if ok { PlaceDetail::from_js(&place) } else { None };
        callback(detail);
    });

    service
        .get_details(&request, on_result.unchecked_ref())
        .map_err(|e| format!("getDetails threw: {e:?}"))
}

/// Poll for the places library and flip `available` once it shows up.
///
/// The maps `<script>` loads asynchronously, so availability is probed for
/// a few seconds after mount. Searches issued before the flag flips use the
/// demo path; that is expected degradation, not an error.
pub fn watch_places_availability(available: RwSignal<bool>) {
    spawn_local(async move {
        for _ in 0..AVAILABILITY_POLL_ATTEMPTS {
            if bindings::places_library_loaded() {
                available.set(true);
                return;
            }
            gloo_timers::future::TimeoutFuture::new(AVAILABILITY_POLL_MS).await;
        }
        log::info!("Google Places library not available, using demo suggestions");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_suggestions_shape() {
        let suggestions = demo_suggestions("500 Las Vegas");
        assert_eq!(suggestions.len(), 4);
        assert_eq!(
            suggestions[0].description,
            "500 Las Vegas Street, Los Angeles, CA, USA"
        );
        assert_eq!(
            suggestions[1].description,
            "500 Las Vegas Avenue, San Diego, CA, USA"
        );
        assert_eq!(
            suggestions[2].description,
            "500 Las Vegas Boulevard, San Francisco, CA, USA"
        );
        assert_eq!(
            suggestions[3].description,
            "500 Las Vegas Drive, Sacramento, CA, USA"
        );
        assert_eq!(suggestions[0].place_id, "demo1");
        assert_eq!(suggestions[3].place_id, "demo4");
    }

    #[test]
    fn test_demo_suggestions_contain_query() {
        for query in ["123 Main", "Oak Ridge", "42"] {
            let suggestions = demo_suggestions(query);
            assert!(suggestions.len() <= MAX_SUGGESTIONS);
            for suggestion in &suggestions {
                assert!(
                    suggestion
                        .description
                        .to_lowercase()
                        .contains(&query.to_lowercase()),
                    "{:?} should contain {:?}",
                    suggestion.description,
                    query
                );
            }
        }
    }

    #[test]
    fn test_demo_ids_skip_detail_lookup() {
        for suggestion in demo_suggestions("500 Las Vegas") {
            assert!(suggestion.is_demo());
        }
        let live = AddressSuggestion {
            description: "500 Las Vegas Blvd, Las Vegas, NV, USA".to_string(),
            place_id: "ChIJ0X31pIK3voARo3mz1ebVzDo".to_string(),
        };
        assert!(!live.is_demo());
    }
}
