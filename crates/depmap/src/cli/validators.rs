//! CLI input validation functions.
//!
//! These validators are used by clap's `value_parser` attribute to validate
//! user input at parse time, providing immediate feedback for invalid values.

/// Validate a service name argument.
///
/// Service names are opaque, but an empty or whitespace-only name can never
/// match a registered service, so it is rejected here. Surrounding
/// whitespace is trimmed.
pub fn validate_service_name(s: &str) -> Result<String, String> {
    let trimmed = s.trim();

    if trimmed.is_empty() {
        return Err("Service name cannot be empty".to_string());
    }

    if trimmed.chars().any(char::is_control) {
        return Err("Service name cannot contain control characters".to_string());
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("api", "api")]
    #[case("  payments-db ", "payments-db")]
    #[case("orders.v2", "orders.v2")]
    fn test_valid_service_names(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(validate_service_name(input).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("api\u{7}")]
    fn test_invalid_service_names(#[case] input: &str) {
        assert!(validate_service_name(input).is_err());
    }
}
