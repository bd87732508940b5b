pub mod allergy;
pub mod analysis;
pub mod authentication;
pub mod common;
pub mod dashboard;
pub mod ocr;
pub mod recommendation;
pub mod scan;
pub mod scan_history;

#[cfg(test)]
pub(crate) mod test_utils;
