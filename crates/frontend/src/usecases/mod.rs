pub mod u101_contact_form;
pub mod u102_ai_assessment;
