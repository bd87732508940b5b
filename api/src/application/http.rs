pub mod allergy;
pub mod authentication;
pub mod dashboard;
pub mod health;
pub mod recommendation;
pub mod scan;
pub mod scan_history;
pub mod server;
