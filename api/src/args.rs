use std::time::Duration;

use allergyscan_core::{
    domain::common::{AllergyScanConfig, LLMConfig, OcrConfig, SupabaseConfig},
    infrastructure::llm::gemini_client::DEFAULT_GEMINI_BASE_URL,
};
use clap::{Args as ClapArgs, Parser};

#[derive(Debug, Clone, Parser)]
#[command(name = "allergyscan", version, about = "AllergyScan API server")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub supabase: SupabaseArgs,

    #[command(flatten)]
    pub llm: LLMArgs,

    #[command(flatten)]
    pub ocr: OcrArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long, env = "PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix every route is mounted under, e.g. `/api`.
    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct SupabaseArgs {
    #[arg(long = "supabase-url", env = "SUPABASE_URL")]
    pub url: String,

    #[arg(long = "supabase-anon-key", env = "SUPABASE_ANON_KEY", hide_env_values = true)]
    pub anon_key: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LLMArgs {
    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: String,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = "gemini-1.5-flash")]
    pub gemini_model: String,

    #[arg(long = "gemini-base-url", env = "GEMINI_BASE_URL", default_value = DEFAULT_GEMINI_BASE_URL)]
    pub gemini_base_url: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct OcrArgs {
    #[arg(long = "tesseract-path", env = "TESSERACT_PATH", default_value = "tesseract")]
    pub tesseract_path: String,

    #[arg(long = "ocr-language", env = "OCR_LANGUAGE", default_value = "eng")]
    pub language: String,

    #[arg(long = "ocr-timeout-secs", env = "OCR_TIMEOUT_SECS", default_value_t = 60)]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for AllergyScanConfig {
    fn from(args: Args) -> Self {
        Self {
            supabase: SupabaseConfig {
                url: args.supabase.url,
                anon_key: args.supabase.anon_key,
            },
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                gemini_base_url: args.llm.gemini_base_url,
            },
            ocr: OcrConfig {
                tesseract_path: args.ocr.tesseract_path,
                language: args.ocr.language,
                timeout: Duration::from_secs(args.ocr.timeout_secs),
            },
        }
    }
}
