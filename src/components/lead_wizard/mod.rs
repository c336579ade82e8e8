//! Lead Wizard Components
//!
//! Three-step form collecting the address, home basics, and contact info
//! before handing off to the results page.

mod step_progress;
mod wizard_shell;

pub mod steps;

pub use step_progress::StepProgress;
pub use wizard_shell::LeadWizard;
