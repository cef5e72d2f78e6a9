//! AI readiness assessment (approach page).

pub mod model;
pub mod view;

pub use view::init_assessment;
