//! Contact form: client-side validation and Formspree submission.

pub mod api;
pub mod validation;
pub mod view;

pub use view::init_form_validation;
