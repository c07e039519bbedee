use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

#[cfg(test)]
mod tests {
    use pomo_core::enums::{PomodoroStatus, TransitionPolicy};

    use super::parse_enum;

    #[test]
    fn parses_snake_case_enum() {
        let policy: TransitionPolicy =
            parse_enum("permissive", "policy").expect("policy should parse");
        assert_eq!(policy, TransitionPolicy::Permissive);
    }

    #[test]
    fn parses_hyphenated_alias() {
        let status: PomodoroStatus =
            parse_enum("Work-Done", "status").expect("status should parse");
        assert_eq!(status, PomodoroStatus::WorkDone);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<TransitionPolicy>("lenient", "policy").expect_err("should fail");
        assert!(err.to_string().contains("invalid policy 'lenient'"));
    }
}
