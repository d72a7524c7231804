use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum CaseType {
    Functional,
    Negative,
    Boundary,
    Performance,
    Security,
    Accessibility,
    Usability,
    Other,
}

impl CaseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseType::Functional => "Functional",
            CaseType::Negative => "Negative",
            CaseType::Boundary => "Boundary",
            CaseType::Performance => "Performance",
            CaseType::Security => "Security",
            CaseType::Accessibility => "Accessibility",
            CaseType::Usability => "Usability",
            CaseType::Other => "Other",
        }
    }
}

/// One generated test case. Constructed per request and never persisted.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TestCase {
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub objective: Option<String>,
    #[serde(default)]
    pub preconditions: Vec<String>,
    pub steps: Vec<String>,
    pub expected_result: String,
    pub priority: Priority,
    #[serde(rename = "type")]
    pub case_type: CaseType,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GenerateResponse {
    pub summary: String,
    #[serde(default)]
    pub source_summary: Option<String>,
    pub test_cases: Vec<TestCase>,
}

/// Test case ids are "TC-" plus 8 hex chars from a v4 UUID. Uniqueness only
/// needs to hold within a single response.
pub fn new_case_id() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("TC-{}", &hex[..8])
}
