//! Lead Form State Management
//!
//! Reactive state for the three-step home value wizard. Uses Leptos signals
//! and the context provider pattern for component tree access.
//!
//! The form is a flat record of free-form strings; nothing is validated or
//! trimmed before submission. Submission serializes a fixed projection of
//! the record into query parameters and hands off to the results page with
//! a plain browser navigation.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Wizard step - one of three mutually exclusive field groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    ConfirmAddress,
    HomeBasics,
    ContactInfo,
}

impl WizardStep {
    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::ConfirmAddress => "Confirm Address",
            WizardStep::HomeBasics => "Home Basics",
            WizardStep::ContactInfo => "Confirm Your Information",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            WizardStep::ConfirmAddress => 0,
            WizardStep::HomeBasics => 1,
            WizardStep::ContactInfo => 2,
        }
    }

    /// 1-based step number for display.
    pub fn number(&self) -> usize {
        self.index() + 1
    }

    pub fn all() -> Vec<Self> {
        vec![
            WizardStep::ConfirmAddress,
            WizardStep::HomeBasics,
            WizardStep::ContactInfo,
        ]
    }

    pub fn next(&self) -> Option<Self> {
        match self {
            WizardStep::ConfirmAddress => Some(WizardStep::HomeBasics),
            WizardStep::HomeBasics => Some(WizardStep::ContactInfo),
            WizardStep::ContactInfo => None,
        }
    }

    pub fn previous(&self) -> Option<Self> {
        match self {
            WizardStep::ConfirmAddress => None,
            WizardStep::HomeBasics => Some(WizardStep::ConfirmAddress),
            WizardStep::ContactInfo => Some(WizardStep::HomeBasics),
        }
    }
}

/// Field names of the lead form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    StreetAddress,
    UnitNumber,
    City,
    State,
    Country,
    Zipcode,
    Beds,
    Baths,
    FirstName,
    LastName,
    Phone,
    Email,
}

/// Flat record of everything the wizard collects. All values stay free-form
/// strings, including the "9+" sentinel for beds and baths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LeadForm {
    pub street_address: String,
    pub unit_number: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zipcode: String,
    pub beds: String,
    pub baths: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
}

impl LeadForm {
    /// Set one field. No validation; always succeeds.
    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::StreetAddress => self.street_address = value,
            FormField::UnitNumber => self.unit_number = value,
            FormField::City => self.city = value,
            FormField::State => self.state = value,
            FormField::Country => self.country = value,
            FormField::Zipcode => self.zipcode = value,
            FormField::Beds => self.beds = value,
            FormField::Baths => self.baths = value,
            FormField::FirstName => self.first_name = value,
            FormField::LastName => self.last_name = value,
            FormField::Phone => self.phone = value,
            FormField::Email => self.email = value,
        }
    }

    /// Street address with the unit number appended after a single space,
    /// only when the unit number is non-empty. No trimming.
    pub fn address_line(&self) -> String {
        if self.unit_number.is_empty() {
            self.street_address.clone()
        } else {
            format!("{} {}", self.street_address, self.unit_number)
        }
    }

    /// The fixed projection handed to the results page. Empty fields
    /// serialize as empty values; URL-encoding happens at submit time.
    pub fn results_query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("first_name", self.first_name.clone()),
            ("address", self.address_line()),
            ("city", self.city.clone()),
            ("state", self.state.clone()),
            ("zipcode", self.zipcode.clone()),
            ("beds", self.beds.clone()),
            ("baths", self.baths.clone()),
            ("email", self.email.clone()),
            ("phone", self.phone.clone()),
        ]
    }
}

/// Reactive context for the lead wizard.
#[derive(Clone, Copy)]
pub struct LeadFormContext {
    /// The form record, mutated field-by-field on input.
    pub form: RwSignal<LeadForm>,
    /// Currently visible step.
    pub current_step: RwSignal<WizardStep>,
}

impl LeadFormContext {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(LeadForm::default()),
            current_step: RwSignal::new(WizardStep::ConfirmAddress),
        }
    }

    pub fn update_field(&self, field: FormField, value: String) {
        self.form.update(|form| form.set(field, value));
    }

    /// Advance one step; no-op on the last step.
    pub fn advance(&self) {
        if let Some(next) = self.current_step.get_untracked().next() {
            self.current_step.set(next);
        }
    }

    /// Go back one step; no-op on the first step.
    pub fn retreat(&self) {
        if let Some(previous) = self.current_step.get_untracked().previous() {
            self.current_step.set(previous);
        }
    }

    pub fn can_advance(&self) -> bool {
        self.current_step.get().next().is_some()
    }

    pub fn can_retreat(&self) -> bool {
        self.current_step.get().previous().is_some()
    }

    /// Serialize the projection and navigate to the results page. Pure
    /// client-side redirect; there is no response to handle.
    pub fn submit(&self) {
        let pairs = self.form.get_untracked().results_query();

        let params = match web_sys::UrlSearchParams::new() {
            Ok(params) => params,
            Err(e) => {
                log::error!("failed to build query params: {e:?}");
                return;
            }
        };
        for (key, value) in &pairs {
            params.append(key, value);
        }

        let target = format!("/results?{}", String::from(params.to_string()));
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(&target) {
                log::error!("results navigation failed: {e:?}");
            }
        }
    }
}

impl Default for LeadFormContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide the lead form context to the component tree.
pub fn provide_lead_form_context() {
    provide_context(LeadFormContext::new());
}

/// Use the lead form context from anywhere in the tree.
pub fn use_lead_form_context() -> LeadFormContext {
    expect_context::<LeadFormContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_navigation() {
        assert_eq!(
            WizardStep::ConfirmAddress.next(),
            Some(WizardStep::HomeBasics)
        );
        assert_eq!(WizardStep::HomeBasics.next(), Some(WizardStep::ContactInfo));
        assert_eq!(WizardStep::ContactInfo.next(), None);
        assert_eq!(WizardStep::ConfirmAddress.previous(), None);
        assert_eq!(
            WizardStep::ContactInfo.previous(),
            Some(WizardStep::HomeBasics)
        );
    }

    #[test]
    fn test_step_numbers_stay_in_range() {
        for step in WizardStep::all() {
            assert!((1..=3).contains(&step.number()));
        }
    }

    #[test]
    fn test_advance_is_noop_past_last_step() {
        // Four Next clicks from step 1 with no intervening input.
        let ctx = LeadFormContext::new();
        for _ in 0..4 {
            ctx.advance();
        }
        assert_eq!(ctx.current_step.get_untracked(), WizardStep::ContactInfo);

        ctx.retreat();
        ctx.retreat();
        ctx.retreat();
        assert_eq!(ctx.current_step.get_untracked(), WizardStep::ConfirmAddress);
    }

    #[test]
    fn test_address_line_unit_handling() {
        let mut form = LeadForm::default();
        form.set(FormField::StreetAddress, "123 Main St".to_string());
        assert_eq!(form.address_line(), "123 Main St");

        form.set(FormField::UnitNumber, "4B".to_string());
        assert_eq!(form.address_line(), "123 Main St 4B");
    }

    #[test]
    fn test_results_query_projection() {
        let mut form = LeadForm::default();
        form.set(FormField::FirstName, "Ada".to_string());
        form.set(FormField::StreetAddress, "123 Main St".to_string());
        form.set(FormField::Beds, "9+".to_string());

        let pairs = form.results_query();
        let keys: Vec<&str> = pairs.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            vec![
                "first_name",
                "address",
                "city",
                "state",
                "zipcode",
                "beds",
                "baths",
                "email",
                "phone"
            ]
        );
        // last_name, country, unit_number are collected but never projected
        assert!(!keys.contains(&"last_name"));

        assert_eq!(pairs[0].1, "Ada");
        assert_eq!(pairs[1].1, "123 Main St");
        assert_eq!(pairs[5].1, "9+");
        // Empty fields serialize as empty values, not omitted.
        assert_eq!(pairs[2].1, "");
    }

    #[test]
    fn test_update_field_touches_only_target() {
        let ctx = LeadFormContext::new();
        ctx.update_field(FormField::Email, "ada@example.com".to_string());
        let form = ctx.form.get_untracked();
        assert_eq!(form.email, "ada@example.com");
        assert_eq!(form, {
            let mut expected = LeadForm::default();
            expected.email = "ada@example.com".to_string();
            expected
        });
    }
}
