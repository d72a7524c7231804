pub(crate) fn build_generation_system_prompt() -> String {
    "You are a senior QA engineer. Generate high-quality, actionable test cases in JSON.\n\
     Output JSON with fields: summary, source_summary, test_cases[]. Each test case fields: \n\
     id, title, objective, preconditions, steps, expected_result, priority, type, tags.\n\
     priority must be one of: High, Medium, Low. type must be one of: Functional, Negative, \
     Boundary, Performance, Security, Accessibility, Usability, Other."
        .to_string()
}

pub(crate) fn build_generation_user_prompt(source_text: &str, num_cases: usize) -> String {
    format!(
        "Create {} distinct test cases based on the following context.\n\n\
         Context:\n{}\n\n\
         Return only valid JSON.",
        num_cases, source_text
    )
}
