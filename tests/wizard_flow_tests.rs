//! Flow tests over the public service API: stepping through the wizard,
//! building the results projection, and the suggestion search gate.

use leptos::prelude::GetUntracked;

use home_value_frontend::services::lead_form::{FormField, LeadFormContext, WizardStep};
use home_value_frontend::services::places::{demo_suggestions, should_search, MAX_SUGGESTIONS};

#[test]
fn test_short_queries_never_search() {
    assert!(!should_search(""));
    assert!(!should_search("5"));
    assert!(!should_search("50"));
    assert!(should_search("500"));
    assert!(should_search("500 Las Vegas"));
}

#[test]
fn test_step_never_leaves_range() {
    let ctx = LeadFormContext::new();
    assert_eq!(ctx.current_step.get_untracked(), WizardStep::ConfirmAddress);

    // Retreating on the first step is a no-op.
    ctx.retreat();
    assert_eq!(ctx.current_step.get_untracked(), WizardStep::ConfirmAddress);

    // Advancing past the last step is a no-op.
    for _ in 0..10 {
        ctx.advance();
    }
    assert_eq!(ctx.current_step.get_untracked(), WizardStep::ContactInfo);
}

#[test]
fn test_full_wizard_flow_projection() {
    let ctx = LeadFormContext::new();

    ctx.update_field(FormField::StreetAddress, "123 Main St".to_string());
    ctx.update_field(FormField::UnitNumber, "4B".to_string());
    ctx.update_field(FormField::City, "Las Vegas".to_string());
    ctx.update_field(FormField::State, "NV".to_string());
    ctx.update_field(FormField::Country, "USA".to_string());
    ctx.update_field(FormField::Zipcode, "89101".to_string());
    ctx.advance();

    ctx.update_field(FormField::Beds, "3".to_string());
    ctx.update_field(FormField::Baths, "2.5".to_string());
    ctx.advance();

    ctx.update_field(FormField::FirstName, "Ada".to_string());
    ctx.update_field(FormField::LastName, "Lovelace".to_string());
    ctx.update_field(FormField::Phone, "702-555-0100".to_string());
    ctx.update_field(FormField::Email, "ada@example.com".to_string());

    assert_eq!(ctx.current_step.get_untracked(), WizardStep::ContactInfo);

    let pairs = ctx.form.get_untracked().results_query();
    assert_eq!(pairs[0], ("first_name", "Ada".to_string()));
    assert_eq!(pairs[1], ("address", "123 Main St 4B".to_string()));
    assert_eq!(pairs[2], ("city", "Las Vegas".to_string()));
    assert_eq!(pairs[3], ("state", "NV".to_string()));
    assert_eq!(pairs[4], ("zipcode", "89101".to_string()));
    assert_eq!(pairs[5], ("beds", "3".to_string()));
    assert_eq!(pairs[6], ("baths", "2.5".to_string()));
    assert_eq!(pairs[7], ("email", "ada@example.com".to_string()));
    assert_eq!(pairs[8], ("phone", "702-555-0100".to_string()));
}

#[test]
fn test_demo_fallback_scenario() {
    // "500 Las Vegas" with the live service unavailable: exactly the four
    // synthesized candidates, in road-type order.
    let suggestions = demo_suggestions("500 Las Vegas");
    assert_eq!(suggestions.len(), MAX_SUGGESTIONS);

    let roads: Vec<&str> = suggestions
        .iter()
        .map(|s| {
            s.description
                .strip_prefix("500 Las Vegas ")
                .and_then(|rest| rest.split(',').next())
                .unwrap()
        })
        .collect();
    assert_eq!(roads, vec!["Street", "Avenue", "Boulevard", "Drive"]);

    for suggestion in &suggestions {
        assert!(suggestion.is_demo());
    }
}
