use actix_cors::Cors;
use actix_web::{dev::Server, get, post, web, App, HttpResponse, HttpServer, Responder, Scope};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::{Arc, Mutex};

use crate::application::GenerateUseCase;
use crate::domain::llm_config::GenerationMode;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::ocr::OcrService;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LogEntry {
    pub time: String,
    pub level: String,
    pub source: String,
    pub message: String,
}

pub struct HttpState {
    pub generate_use_case: Arc<GenerateUseCase>,
    pub ocr: Arc<OcrService>,
    pub logs: Arc<Mutex<Vec<LogEntry>>>,
}

#[derive(Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default = "default_num_cases")]
    pub num_cases: usize,
    #[serde(default)]
    pub mode: GenerationMode,
    #[serde(default)]
    pub model: Option<String>,
    /// Base64-encoded screenshot images, OCR'd independently.
    #[serde(default)]
    pub images: Vec<String>,
}

fn default_num_cases() -> usize {
    GenerateUseCase::default_num_cases()
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

#[post("/generate-testcases")]
async fn generate(data: web::Data<HttpState>, req: web::Json<GenerateRequest>) -> impl Responder {
    let req = req.into_inner();
    add_log(
        &data.logs,
        "INFO",
        "HttpApi",
        &format!(
            "Generating test cases (num_cases={} mode={:?} images={})",
            req.num_cases,
            req.mode,
            req.images.len()
        ),
    );

    let mut ocr_texts: Vec<String> = Vec::new();
    for (index, encoded) in req.images.iter().enumerate() {
        let bytes = match BASE64.decode(encoded.trim()) {
            Ok(bytes) => bytes,
            Err(err) => {
                add_log(
                    &data.logs,
                    "WARN",
                    "Ocr",
                    &format!("Skipping image {}: invalid base64: {}", index, err),
                );
                continue;
            }
        };

        let ocr = data.ocr.clone();
        match web::block(move || ocr.extract_text(&bytes)).await {
            Ok(Ok(text)) if !text.is_empty() => ocr_texts.push(text),
            Ok(Ok(_)) => {}
            Ok(Err(err)) => {
                add_log(
                    &data.logs,
                    "WARN",
                    "Ocr",
                    &format!("Skipping image {}: {}", index, err),
                );
            }
            Err(err) => {
                add_log(
                    &data.logs,
                    "WARN",
                    "Ocr",
                    &format!("Skipping image {}: blocking task failed: {}", index, err),
                );
            }
        }
    }

    let mut parts: Vec<String> = Vec::new();
    if let Some(prompt) = req.prompt {
        if !prompt.is_empty() {
            parts.push(prompt);
        }
    }
    parts.extend(ocr_texts);
    let source = parts.join("\n\n");

    let response = data
        .generate_use_case
        .execute(&source, req.num_cases, req.mode, req.model)
        .await;

    HttpResponse::Ok().json(response)
}

#[get("/logs")]
async fn get_logs(data: web::Data<HttpState>) -> impl Responder {
    let logs = data.logs.lock().unwrap();
    HttpResponse::Ok().json(&*logs)
}

pub fn add_log_entry(
    logs: &Mutex<Vec<LogEntry>>,
    level: &str,
    source: &str,
    message: &str,
) -> LogEntry {
    let entry = LogEntry {
        time: Local::now().format("%H:%M:%S").to_string(),
        level: level.to_string(),
        source: source.to_string(),
        message: message.to_string(),
    };
    let mut logs = logs.lock().unwrap();
    logs.push(entry.clone());
    if logs.len() > 100 {
        logs.remove(0);
    }
    entry
}

pub fn add_log(logs: &Mutex<Vec<LogEntry>>, level: &str, source: &str, message: &str) {
    add_log_entry(logs, level, source, message);
}

pub fn api_scope() -> Scope {
    web::scope("/api")
        .service(health)
        .service(generate)
        .service(get_logs)
}

pub fn start_server(config: &AppConfig, state: web::Data<HttpState>) -> std::io::Result<Server> {
    let server = HttpServer::new(move || {
        let cors = Cors::permissive(); // Allow all origins for local tool

        App::new()
            .wrap(cors)
            .app_data(state.clone())
            .service(api_scope())
    })
    .bind((config.host.as_str(), config.port))?
    .run();

    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::llm_config::LLMConfig;
    use crate::domain::test_case::GenerateResponse;
    use crate::infrastructure::llm_clients::openai::OpenAIClient;
    use actix_web::test;

    fn test_state() -> web::Data<HttpState> {
        web::Data::new(HttpState {
            generate_use_case: Arc::new(GenerateUseCase::new(
                Arc::new(OpenAIClient::new()),
                LLMConfig::default(),
            )),
            ocr: Arc::new(OcrService::new("eng".to_string())),
            logs: Arc::new(Mutex::new(Vec::new())),
        })
    }

    #[actix_web::test]
    async fn test_health_endpoint() {
        let app =
            test::init_service(App::new().app_data(test_state()).service(api_scope())).await;
        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "ok");
    }

    #[actix_web::test]
    async fn test_generate_prompt_only_local() {
        let app =
            test::init_service(App::new().app_data(test_state()).service(api_scope())).await;
        let req = test::TestRequest::post()
            .uri("/api/generate-testcases")
            .set_json(json!({
                "prompt": "Login feature: user enters valid credentials to access dashboard.",
                "num_cases": 6,
                "mode": "local",
            }))
            .to_request();
        let body: GenerateResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.test_cases.len(), 6);
        let first = &body.test_cases[0];
        assert!(first.id.starts_with("TC-"));
        assert!(!first.steps.is_empty());
        assert!(!first.expected_result.is_empty());
        assert_eq!(first.title, "Functional Happy Path: Login");
    }

    #[actix_web::test]
    async fn test_generate_defaults_apply() {
        let app =
            test::init_service(App::new().app_data(test_state()).service(api_scope())).await;
        let req = test::TestRequest::post()
            .uri("/api/generate-testcases")
            .set_json(json!({ "prompt": "Search feature" }))
            .to_request();
        let body: GenerateResponse = test::call_and_read_body_json(&app, req).await;
        // No key configured, so auto resolves to local with the default count.
        assert_eq!(body.test_cases.len(), 8);
    }

    #[actix_web::test]
    async fn test_generate_skips_bad_images() {
        let app =
            test::init_service(App::new().app_data(test_state()).service(api_scope())).await;
        let req = test::TestRequest::post()
            .uri("/api/generate-testcases")
            .set_json(json!({
                "prompt": "",
                "num_cases": 3,
                "mode": "local",
                "images": ["!!!not-base64!!!", BASE64.encode(b"not an image either")],
            }))
            .to_request();
        let body: GenerateResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.test_cases.len(), 3);
    }

    #[actix_web::test]
    async fn test_logs_endpoint_records_requests() {
        let state = test_state();
        let app =
            test::init_service(App::new().app_data(state.clone()).service(api_scope())).await;
        let req = test::TestRequest::post()
            .uri("/api/generate-testcases")
            .set_json(json!({ "prompt": "Login", "num_cases": 1, "mode": "local" }))
            .to_request();
        let _: GenerateResponse = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::get().uri("/api/logs").to_request();
        let logs: Vec<LogEntry> = test::call_and_read_body_json(&app, req).await;
        assert!(!logs.is_empty());
        assert_eq!(logs[0].source, "HttpApi");
    }
}
