// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use trade_discipline_core::errors::CoreError;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn invalid_input() {
        let err = CoreError::InvalidInput("risk_percent must be a positive fraction, got 0".into());
        assert_eq!(
            err.to_string(),
            "Invalid input: risk_percent must be a positive fraction, got 0"
        );
    }

    #[test]
    fn invalid_input_empty_message() {
        let err = CoreError::InvalidInput(String::new());
        assert_eq!(err.to_string(), "Invalid input: ");
    }

    #[test]
    fn validation_error() {
        let err = CoreError::ValidationError("'from' date must not be after 'to' date".into());
        assert_eq!(
            err.to_string(),
            "Validation failed: 'from' date must not be after 'to' date"
        );
    }

    #[test]
    fn account_unavailable() {
        assert_eq!(
            CoreError::AccountUnavailable.to_string(),
            "Account data is not available"
        );
    }

    #[test]
    fn goal_not_found() {
        let err = CoreError::GoalNotFound("123e4567-e89b-12d3-a456-426614174000".into());
        assert_eq!(
            err.to_string(),
            "Goal not found: 123e4567-e89b-12d3-a456-426614174000"
        );
    }

    #[test]
    fn source() {
        let err = CoreError::Source {
            name: "rest-account".into(),
            message: "timeout".into(),
        };
        assert_eq!(err.to_string(), "Collaborator error (rest-account): timeout");
    }

    #[test]
    fn serialization() {
        let err = CoreError::Serialization("unexpected EOF".into());
        assert_eq!(err.to_string(), "Serialization error: unexpected EOF");
    }
}

// ── From impls ──────────────────────────────────────────────────────

mod conversions {
    use super::*;

    #[test]
    fn serde_json_error_becomes_serialization() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: CoreError = json_err.into();
        assert!(matches!(err, CoreError::Serialization(_)));
        assert!(err.to_string().starts_with("Serialization error:"));
    }
}

// ── Error trait ─────────────────────────────────────────────────────

mod error_trait {
    use super::*;

    #[test]
    fn implements_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&CoreError::AccountUnavailable);
    }

    #[test]
    fn debug_formatting_names_the_variant() {
        let err = CoreError::GoalNotFound("x".into());
        assert!(format!("{err:?}").contains("GoalNotFound"));
    }
}
