//! Decoding of the harness result payload.

use serde::Deserialize;
use serde_json::Value;

use super::types::{RunOutcome, Stats, Suite};

#[derive(Deserialize)]
struct ResultPayload {
    suites: Vec<Suite>,
    stats: Stats,
}

/// Parse captured browser output into a [`RunOutcome`].
///
/// An `error` string wins over any results in the same object. Everything
/// that is neither an error nor a complete result becomes `ParseFailure`.
pub fn parse(raw: &str) -> RunOutcome {
    let value: Value = match serde_json::from_str(raw.trim()) {
        Ok(value) => value,
        Err(e) => {
            return RunOutcome::ParseFailure {
                reason: format!("Cannot decode Jasmine result: {}", e),
            };
        }
    };

    let Value::Object(map) = &value else {
        return RunOutcome::ParseFailure {
            reason: "Jasmine result is not a JSON object".to_string(),
        };
    };

    if let Some(Value::String(message)) = map.get("error") {
        return RunOutcome::ServerError {
            message: message.clone(),
        };
    }

    let payload = match ResultPayload::deserialize(&value) {
        Ok(payload) => payload,
        Err(e) => {
            return RunOutcome::ParseFailure {
                reason: format!("Unexpected Jasmine result: {}", e),
            };
        }
    };

    if let Err(reason) = validate_stats(&payload.stats) {
        return RunOutcome::ParseFailure { reason };
    }

    RunOutcome::SpecResult {
        suites: payload.suites,
        stats: payload.stats,
    }
}

fn validate_stats(stats: &Stats) -> Result<(), String> {
    if stats.failures > stats.total_specs {
        return Err(format!(
            "Unexpected Jasmine result: {} failures reported for {} specs",
            stats.failures, stats.total_specs
        ));
    }
    if !stats.elapsed_seconds.is_finite() || stats.elapsed_seconds < 0.0 {
        return Err(format!(
            "Unexpected Jasmine result: invalid run time {}",
            stats.elapsed_seconds
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::types::SpecCase;

    #[test]
    fn test_error_payload() {
        let outcome = parse(r#"{ "error": "Cannot request Jasmine specs" }"#);
        assert_eq!(
            outcome,
            RunOutcome::ServerError {
                message: "Cannot request Jasmine specs".to_string()
            }
        );
    }

    #[test]
    fn test_error_takes_precedence_over_results() {
        let outcome = parse(
            r#"{"error": "boom", "suites": [], "stats": {"specs": 1, "failures": 0, "time": 0.1}}"#,
        );
        assert_eq!(outcome.kind(), crate::runner::OutcomeKind::ServerError);
    }

    #[test]
    fn test_failure_payload() {
        let raw = r#"
            {
              "suites": [
                {
                  "description": "FailureTest",
                  "filter": "?spec=FailureTest",
                  "specs": [
                    {
                      "description": "FailureTest tests something.",
                      "error_message": "Expected undefined to be defined."
                    },
                    { "description": "FailureTest passes." }
                  ]
                }
              ],
              "stats": { "specs": 4, "failures": 1, "time": 0.007 }
            }
        "#;
        match parse(raw) {
            RunOutcome::SpecResult { suites, stats } => {
                assert_eq!(suites.len(), 1);
                assert_eq!(suites[0].filter, "?spec=FailureTest");
                assert_eq!(
                    suites[0].specs[0],
                    SpecCase {
                        description: "FailureTest tests something.".to_string(),
                        error_message: Some("Expected undefined to be defined.".to_string()),
                    }
                );
                assert!(suites[0].specs[1].passed());
                assert_eq!(stats.total_specs, 4);
                assert_eq!(stats.failures, 1);
                assert_eq!(stats.elapsed_seconds, 0.007);
            }
            other => panic!("expected spec result, got {:?}", other),
        }
    }

    #[test]
    fn test_success_payload_with_integer_time() {
        let outcome = parse(r#"{"suites": [], "stats": {"specs": 4, "failures": 0, "time": 2}}"#);
        match outcome {
            RunOutcome::SpecResult { suites, stats } => {
                assert!(suites.is_empty());
                assert_eq!(stats.elapsed_seconds, 2.0);
            }
            other => panic!("expected spec result, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_payloads() {
        for raw in [
            "",
            "ReferenceError: Can't find variable: jasmine",
            "[]",
            r#"{"error": 42}"#,
            r#"{"suites": []}"#,
            r#"{"stats": {"specs": 1, "failures": 0, "time": 0.1}}"#,
            r#"{"suites": {}, "stats": {"specs": 1, "failures": 0, "time": 0.1}}"#,
            r#"{"suites": [], "stats": {"specs": -1, "failures": 0, "time": 0.1}}"#,
            r#"{"suites": [], "stats": {"specs": 1, "failures": 2, "time": 0.1}}"#,
            r#"{"suites": [], "stats": {"specs": 1, "failures": 0, "time": -0.5}}"#,
        ] {
            assert_eq!(
                parse(raw).kind(),
                crate::runner::OutcomeKind::ParseFailure,
                "payload should be rejected: {:?}",
                raw
            );
        }
    }
}
