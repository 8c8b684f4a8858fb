// Cross-cutting prompt fragments.
// Each service that calls the LLM keeps its own prompts.rs alongside it.

/// Appended to every system instruction.
pub const JSON_ONLY_INSTRUCTION: &str = "You MUST respond with a single valid JSON object only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Joins a list for a prompt, substituting a placeholder when empty.
pub fn join_or(items: &[String], placeholder: &str) -> String {
    if items.is_empty() {
        placeholder.to_string()
    } else {
        items.join(", ")
    }
}

/// Returns the value, or the placeholder when absent or blank.
pub fn or_placeholder<'a>(value: Option<&'a str>, placeholder: &'a str) -> &'a str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => placeholder,
    }
}

/// A role instruction followed by the JSON-only rule.
pub fn json_system(role_instruction: &str) -> String {
    format!("{role_instruction} {JSON_ONLY_INSTRUCTION}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_or_placeholder_when_empty() {
        assert_eq!(join_or(&[], "none"), "none");
        assert_eq!(join_or(&["a".to_string(), "b".to_string()], "none"), "a, b");
    }

    #[test]
    fn test_or_placeholder_treats_blank_as_absent() {
        assert_eq!(or_placeholder(None, "n/a"), "n/a");
        assert_eq!(or_placeholder(Some(""), "n/a"), "n/a");
        assert_eq!(or_placeholder(Some("bio"), "n/a"), "bio");
    }

    #[test]
    fn test_json_system_appends_rule() {
        let system = json_system("You are an expert.");
        assert!(system.starts_with("You are an expert."));
        assert!(system.ends_with(JSON_ONLY_INSTRUCTION));
    }
}
