pub mod product;
pub mod site_page;

pub use product::Product;
pub use site_page::SitePage;
