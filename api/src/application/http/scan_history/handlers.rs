pub mod get_scan;
pub mod get_scans;
