pub mod active_nav;
pub mod mobile_menu;
pub mod sticky;

pub use active_nav::highlight_active_nav;
pub use mobile_menu::init_mobile_menu;
pub use sticky::init_sticky_header;
