pub mod address_autocomplete;
pub mod estimate_page;
pub mod google_map;
pub mod hero_section;
pub mod lead_wizard;
