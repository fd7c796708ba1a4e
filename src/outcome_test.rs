use super::*;
use crate::constants::header;

mod display {
    use super::*;

    #[test]
    fn should_start_each_message_with_its_summary_when_rendered_then_keep_stable_prefix() {
        let cases = [
            (DenialReason::NotCorsRequest, "not a CORS request"),
            (
                DenialReason::OriginNotAllowed {
                    origin: "https://evil.com".into(),
                },
                "origin not allowed",
            ),
            (DenialReason::PreflightWouldFail, "preflight would fail"),
            (DenialReason::CredentialsNotAllowed, "credentials not allowed"),
            (DenialReason::WildcardWithCredentials, "invalid configuration"),
        ];

        for (reason, prefix) in cases {
            let message = reason.to_string();
            assert!(
                message.starts_with(prefix),
                "{message:?} should start with {prefix:?}"
            );
        }
    }

    #[test]
    fn should_name_the_origin_when_origin_rejected_then_include_value() {
        let reason = DenialReason::OriginNotAllowed {
            origin: "https://evil.com".into(),
        };

        assert!(reason.to_string().contains("https://evil.com"));
    }
}

mod response_header {
    use super::*;

    #[test]
    fn should_lookup_case_insensitively_when_name_mixed_case_then_return_value() {
        // Arrange
        let mut outcome = Outcome::default();
        outcome
            .response_headers
            .insert(header::VARY.to_string(), "Origin".to_string());

        // Act
        let value = outcome.response_header("Vary");

        // Assert
        assert_eq!(value, Some("Origin"));
    }

    #[test]
    fn should_return_none_when_header_missing_then_skip() {
        let outcome = Outcome::default();

        assert_eq!(outcome.response_header("vary"), None);
    }
}

mod reason_messages {
    use super::*;

    #[test]
    fn should_render_in_order_when_multiple_reasons_then_preserve_sequence() {
        let outcome = Outcome {
            reasons: vec![
                DenialReason::PreflightWouldFail,
                DenialReason::CredentialsNotAllowed,
            ],
            ..Outcome::default()
        };

        let messages = outcome.reason_messages();

        assert_eq!(messages.len(), 2);
        assert!(messages[0].starts_with("preflight would fail"));
        assert!(messages[1].starts_with("credentials not allowed"));
    }
}

#[cfg(feature = "serde")]
mod serde_support {
    use super::*;

    #[test]
    fn should_tag_reasons_by_kind_when_serialized_then_emit_snake_case() {
        let value = serde_json::to_value(DenialReason::OriginNotAllowed {
            origin: "https://evil.com".into(),
        })
        .expect("reason serializes");

        assert_eq!(
            value,
            serde_json::json!({ "kind": "origin_not_allowed", "origin": "https://evil.com" })
        );
    }

    #[test]
    fn should_restore_outcome_when_deserialized_then_equal_original() {
        let mut outcome = Outcome {
            is_cors_request: true,
            reasons: vec![DenialReason::NotCorsRequest],
            ..Outcome::default()
        };
        outcome
            .response_headers
            .insert(header::VARY.to_string(), "Origin".to_string());

        let json = serde_json::to_string(&outcome).expect("outcome serializes");
        let restored: Outcome = serde_json::from_str(&json).expect("outcome deserializes");

        assert_eq!(restored, outcome);
    }
}
