use std::sync::{Arc, Mutex};

use actix_web::web;
use tracing::info;

use casegen::application::GenerateUseCase;
use casegen::infrastructure::config::AppConfig;
use casegen::infrastructure::llm_clients::openai::OpenAIClient;
use casegen::infrastructure::ocr::OcrService;
use casegen::interfaces::http::{start_server, HttpState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();

    let config = AppConfig::load()
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidInput, err.to_string()))?;

    let state = web::Data::new(HttpState {
        generate_use_case: Arc::new(GenerateUseCase::new(
            Arc::new(OpenAIClient::new()),
            config.llm_config(),
        )),
        ocr: Arc::new(OcrService::new(config.ocr_languages.clone())),
        logs: Arc::new(Mutex::new(Vec::new())),
    });

    info!(host = %config.host, port = config.port, "Starting test case generator");
    start_server(&config, state)?.await
}
