//! Page chrome: header behaviour and the services tab strip.

pub mod header;
pub mod tabs;
