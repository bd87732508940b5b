#![allow(dead_code)]

pub mod backend;

use std::{fs, os::unix::fs::PermissionsExt, path::Path, sync::Arc};

use allergyscan_api::{
    application::http::server::http_server::{router, state},
    args::{Args, LLMArgs, LogArgs, OcrArgs, ServerArgs, SupabaseArgs},
};
use axum::http::StatusCode;
use axum_test::{
    TestServer,
    multipart::{MultipartForm, Part},
};
use serde_json::{Value, json};
use tempfile::TempDir;
use test_context::AsyncTestContext;

use backend::{ANON_KEY, GEMINI_KEY, SharedBackend, spawn_backend};

pub const PASSWORD: &str = "correct-horse-battery";

/// The API under test wired to the stub backend and a scripted OCR engine.
pub struct TestApp {
    pub server: TestServer,
    pub backend: SharedBackend,
    ocr_dir: TempDir,
}

impl AsyncTestContext for TestApp {
    async fn setup() -> TestApp {
        TestApp::spawn().await
    }
}

/// Shell script standing in for the tesseract binary: it checks that an image
/// file was handed over and prints whatever `ocr.txt` holds.
fn write_fake_tesseract(dir: &Path) -> String {
    let script = dir.join("tesseract");
    fs::write(
        &script,
        format!(
            "#!/bin/sh\n\
             [ -s \"$1\" ] || exit 2\n\
             [ \"$2\" = stdout ] || exit 3\n\
             if [ -f '{dir}/fail' ]; then echo 'Error in pixReadMem' >&2; exit 1; fi\n\
             cat '{dir}/ocr.txt' 2>/dev/null\n\
             exit 0\n",
            dir = dir.display()
        ),
    )
    .unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

    script.display().to_string()
}

impl TestApp {
    pub async fn spawn() -> Self {
        let backend = SharedBackend::default();
        let base_url = spawn_backend(backend.clone()).await;
        let ocr_dir = tempfile::tempdir().unwrap();

        let args = Args {
            server: ServerArgs {
                port: 0,
                root_path: String::new(),
                allowed_origins: vec!["http://localhost:5173".to_string()],
            },
            supabase: SupabaseArgs {
                url: base_url.clone(),
                anon_key: ANON_KEY.to_string(),
            },
            llm: LLMArgs {
                gemini_api_key: GEMINI_KEY.to_string(),
                gemini_model: "gemini-1.5-flash".to_string(),
                gemini_base_url: base_url,
            },
            ocr: OcrArgs {
                tesseract_path: write_fake_tesseract(ocr_dir.path()),
                language: "eng".to_string(),
                timeout_secs: 30,
            },
            log: LogArgs {
                filter: "info".to_string(),
                json: false,
            },
        };

        let app_state = state(Arc::new(args)).unwrap();
        let server = TestServer::new(router(app_state).unwrap()).unwrap();

        Self {
            server,
            backend,
            ocr_dir,
        }
    }

    pub fn set_ocr_text(&self, text: &str) {
        fs::write(self.ocr_dir.path().join("ocr.txt"), text).unwrap();
    }

    pub fn fail_ocr(&self) {
        fs::write(self.ocr_dir.path().join("fail"), "").unwrap();
    }

    pub fn set_llm_reply(&self, reply: &str) {
        self.backend.lock().unwrap().llm_reply = reply.to_string();
    }

    pub fn fail_llm(&self) {
        self.backend.lock().unwrap().llm_down = true;
    }

    pub fn prompts(&self) -> Vec<String> {
        self.backend.lock().unwrap().prompts.clone()
    }

    pub fn stored_scans(&self) -> Vec<Value> {
        self.backend.lock().unwrap().rows("scan_history")
    }

    /// Signs a new account up and returns its access token.
    pub async fn register(&self, email: &str) -> String {
        let response = self
            .server
            .post("/auth/signup")
            .json(&json!({"email": email, "password": PASSWORD}))
            .await;
        response.assert_status(StatusCode::CREATED);

        response.json::<Value>()["access_token"]
            .as_str()
            .unwrap()
            .to_string()
    }

    pub async fn add_allergy(&self, token: &str, name: &str, severity: &str) -> Value {
        let response = self
            .server
            .post("/allergies")
            .authorization_bearer(token)
            .json(&json!({"name": name, "severity": severity}))
            .await;
        response.assert_status(StatusCode::CREATED);

        response.json::<Value>()
    }
}

pub fn image_form(label_field: &str, label: Option<&str>) -> MultipartForm {
    let image = Part::bytes(b"\x89PNG\r\n\x1a\n fake label photo".to_vec())
        .file_name("label.png")
        .mime_type("image/png");

    let form = MultipartForm::new().add_part("image", image);
    match label {
        Some(label) => form.add_text(label_field, label.to_string()),
        None => form,
    }
}
