pub mod favicons;
pub mod images;
pub mod postbuild;
pub mod sitemap;
