pub mod scan_menu;
pub mod scan_product;
