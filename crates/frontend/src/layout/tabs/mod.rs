//! Services tab strip
//!
//! Содержит:
//! - `navigator` - чистое состояние (выбранный и сфокусированный таб)
//! - `controller` - операции над состоянием и проекция через `TabView`
//! - `hash` - чтение/запись deep-link `#services?t=<id>`
//! - `dom_view` - проекция на DOM страницы и подписка на события

pub mod controller;
pub mod dom_view;
pub mod hash;
pub mod navigator;

pub use controller::{TabController, TabView};
pub use dom_view::init_service_tabs;
pub use navigator::{NavKey, TabError, TabNavigator};
