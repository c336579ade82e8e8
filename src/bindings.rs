//! Google Maps Places JS Interop
//!
//! Thin wasm-bindgen bindings over the `google.maps.places` browser library.
//! The library is loaded by a `<script>` tag in `index.html` and may not be
//! present at all (missing key, blocked network); callers must treat any
//! constructor failure or absent global as "service unavailable".

use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// `google.maps.places.AutocompleteService`
    #[wasm_bindgen(js_namespace = ["google", "maps", "places"])]
    pub type AutocompleteService;

    #[wasm_bindgen(catch, constructor)]
    pub fn new() -> Result<AutocompleteService, JsValue>;

    /// Callback receives `(predictions: PlacePrediction[] | null, status: string)`.
    #[wasm_bindgen(method, catch, js_name = getPlacePredictions)]
    pub fn get_place_predictions(
        this: &AutocompleteService,
        request: &JsValue,
        callback: &js_sys::Function,
    ) -> Result<(), JsValue>;
}

#[wasm_bindgen]
extern "C" {
    /// `google.maps.places.PlacesService`
    #[wasm_bindgen(js_namespace = ["google", "maps", "places"])]
    pub type PlacesService;

    /// The constructor requires an attribution container element.
    #[wasm_bindgen(catch, constructor)]
    pub fn new(container: &web_sys::Element) -> Result<PlacesService, JsValue>;

    /// Callback receives `(place: PlaceResult | null, status: string)`.
    #[wasm_bindgen(method, catch, js_name = getDetails)]
    pub fn get_details(
        this: &PlacesService,
        request: &JsValue,
        callback: &js_sys::Function,
    ) -> Result<(), JsValue>;
}

/// Prediction request payload for `getPlacePredictions`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRequest<'a> {
    pub input: &'a str,
    pub types: Vec<&'a str>,
    pub component_restrictions: ComponentRestrictions<'a>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComponentRestrictions<'a> {
    pub country: &'a str,
}

/// Detail request payload for `getDetails`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailsRequest<'a> {
    pub place_id: &'a str,
}

/// Check whether the places library global has finished loading.
///
/// The maps script loads asynchronously, so this is polled after mount
/// rather than checked once.
pub fn places_library_loaded() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let mut current: JsValue = window.into();
    for key in ["google", "maps", "places"] {
        match js_sys::Reflect::get(&current, &JsValue::from_str(key)) {
            Ok(value) if !value.is_undefined() && !value.is_null() => current = value,
            _ => return false,
        }
    }
    true
}
