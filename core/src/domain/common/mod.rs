use std::time::Duration;

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct AllergyScanConfig {
    pub supabase: SupabaseConfig,
    pub llm: LLMConfig,
    pub ocr: OcrConfig,
}

#[derive(Clone, Debug)]
pub struct SupabaseConfig {
    pub url: String,
    pub anon_key: String,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
}

#[derive(Clone, Debug)]
pub struct OcrConfig {
    pub tesseract_path: String,
    pub language: String,
    pub timeout: Duration,
}
