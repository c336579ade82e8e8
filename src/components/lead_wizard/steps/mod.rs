//! Wizard Step Components
//!
//! One component per field group, each rendering its own navigation row.

mod address_step;
mod contact_step;
mod home_basics_step;

pub use address_step::AddressStep;
pub use contact_step::ContactStep;
pub use home_basics_step::HomeBasicsStep;

/// Shared styling for text inputs and selects.
pub(crate) const FIELD_CLASS: &str = "w-full px-3 py-2 bg-white border border-gray-300 rounded-md text-gray-800 \
     placeholder-gray-400 focus:border-green-600 focus:ring-1 focus:ring-green-600 focus:outline-none";

/// Shared styling for the primary (Next/Submit) button.
pub(crate) const PRIMARY_BUTTON_CLASS: &str =
    "bg-green-600 hover:bg-green-700 text-white px-8 py-2 rounded w-full sm:w-auto";

/// Shared styling for the secondary (Previous) button.
pub(crate) const SECONDARY_BUTTON_CLASS: &str =
    "border border-gray-300 text-gray-700 hover:bg-gray-50 px-8 py-2 rounded w-full sm:w-auto";
