pub mod config;
pub mod llm_clients;
pub mod ocr;
pub mod response;
