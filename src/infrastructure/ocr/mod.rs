use std::fs;
use std::path::Path;
use std::process::Command;

use uuid::Uuid;

use crate::domain::error::{AppError, Result};

/// Extracts text from uploaded screenshot bytes by decoding them with the
/// `image` crate and shelling out to the `tesseract` binary. One service
/// instance is shared across requests; it holds no mutable state.
pub struct OcrService {
    languages: String,
}

impl OcrService {
    pub fn new(languages: String) -> Self {
        let languages = if languages.trim().is_empty() {
            "eng".to_string()
        } else {
            languages
        };
        Self { languages }
    }

    fn new_tesseract_command() -> Command {
        let tesseract_cmd =
            std::env::var("TESSERACT_CMD").unwrap_or_else(|_| "tesseract".to_string());
        let mut command = Command::new(tesseract_cmd);
        if let Ok(tessdata_prefix) = std::env::var("TESSDATA_PREFIX") {
            command.env("TESSDATA_PREFIX", tessdata_prefix);
        }
        command
    }

    pub fn extract_text(&self, image_bytes: &[u8]) -> Result<String> {
        let img = image::load_from_memory(image_bytes)
            .map_err(|err| AppError::ParseError(format!("Failed to decode image: {}", err)))?;

        // Tesseract reads from disk, so round-trip through a temp PNG.
        let temp_path = std::env::temp_dir().join(format!("casegen-ocr-{}.png", Uuid::new_v4()));
        img.to_rgb8()
            .save(&temp_path)
            .map_err(|err| AppError::IoError(format!("Failed to write temp image: {}", err)))?;

        let result = self.run_tesseract(&temp_path);
        let _ = fs::remove_file(&temp_path);
        result
    }

    fn run_tesseract(&self, image_path: &Path) -> Result<String> {
        let output = Self::new_tesseract_command()
            .arg(image_path.as_os_str())
            .arg("stdout")
            .arg("-l")
            .arg(&self.languages)
            .output()
            .map_err(|err| AppError::Internal(format!("Tesseract failed to start: {}", err)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::Internal(format!(
                "Tesseract failed: {}",
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
