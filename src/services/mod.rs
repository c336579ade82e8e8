pub mod backend;
pub mod lead_form;
pub mod places;
