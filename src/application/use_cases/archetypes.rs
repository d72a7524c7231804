use crate::domain::test_case::{CaseType, Priority};

/// One test-scenario archetype. The catalog below is immutable, process-wide
/// configuration; the synthesizer cycles through it by index.
pub struct Archetype {
    pub name: &'static str,
    pub priority: Priority,
    pub case_type: CaseType,
}

pub const ARCHETYPES: [Archetype; 8] = [
    Archetype {
        name: "Functional Happy Path",
        priority: Priority::High,
        case_type: CaseType::Functional,
    },
    Archetype {
        name: "Negative Validation",
        priority: Priority::High,
        case_type: CaseType::Negative,
    },
    Archetype {
        name: "Boundary Condition",
        priority: Priority::Medium,
        case_type: CaseType::Boundary,
    },
    Archetype {
        name: "Error Handling",
        priority: Priority::Medium,
        case_type: CaseType::Functional,
    },
    Archetype {
        name: "Security",
        priority: Priority::High,
        case_type: CaseType::Security,
    },
    Archetype {
        name: "Performance",
        priority: Priority::Medium,
        case_type: CaseType::Performance,
    },
    Archetype {
        name: "Accessibility",
        priority: Priority::Low,
        case_type: CaseType::Accessibility,
    },
    Archetype {
        name: "Edge Case",
        priority: Priority::Medium,
        case_type: CaseType::Functional,
    },
];
