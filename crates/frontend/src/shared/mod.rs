pub mod a11y;
pub mod accordion;
pub mod analytics;
pub mod dom;
pub mod reveal;
pub mod skin;
pub mod storage;
pub mod theme;
