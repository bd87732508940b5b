use std::{io, process::Stdio, time::Duration};

use bytes::Bytes;
use tokio::process::Command;
use tracing::{debug, error};

use crate::domain::{
    common::{OcrConfig, entities::app_errors::CoreError},
    ocr::ports::TextExtractor,
};

/// Tesseract engine driven through its command line.
///
/// Every call writes the image to its own temporary file and spawns a fresh
/// process. Both are released when the call returns: the file is removed when
/// the handle drops and the child is killed if its future is dropped.
#[derive(Debug, Clone)]
pub struct TesseractOcr {
    binary: String,
    language: String,
    timeout: Duration,
}

impl TesseractOcr {
    pub fn new(config: &OcrConfig) -> Self {
        Self {
            binary: config.tesseract_path.clone(),
            language: config.language.clone(),
            timeout: config.timeout,
        }
    }

    async fn run(&self, image: &[u8]) -> io::Result<std::process::Output> {
        let input = tempfile::Builder::new()
            .prefix("allergyscan-ocr-")
            .tempfile()?;
        tokio::fs::write(input.path(), image).await?;

        let child = Command::new(&self.binary)
            .arg(input.path())
            .arg("stdout")
            .arg("-l")
            .arg(&self.language)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()?;

        let output = child.wait_with_output().await?;
        drop(input);

        Ok(output)
    }
}

impl TextExtractor for TesseractOcr {
    async fn extract_text(&self, image: Bytes) -> Result<String, CoreError> {
        if image.is_empty() {
            return Err(CoreError::Invalid("Image is empty".to_string()));
        }

        debug!(bytes = image.len(), language = %self.language, "running OCR");

        let output = tokio::time::timeout(self.timeout, self.run(&image))
            .await
            .map_err(|_| {
                error!("Tesseract timed out after {:?}", self.timeout);
                CoreError::OcrFailed
            })?
            .map_err(|e| {
                error!("Failed to run tesseract at {}: {}", self.binary, e);
                CoreError::OcrFailed
            })?;

        if !output.status.success() {
            error!(
                "Tesseract exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
            return Err(CoreError::OcrFailed);
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
