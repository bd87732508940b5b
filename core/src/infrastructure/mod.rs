pub mod allergy;
pub mod llm;
pub mod ocr;
pub mod scan_history;
pub mod supabase;
