use crate::client::models::generation::{
    DiagramPaths, DiagramUrlField, ErrorBody, GenerateResponse, GenerationResult, Mode,
};
use crate::common::error::GenerationError;

/// Builds an absolute image URL from the server origin and a path fragment.
pub fn join_origin(origin: &str, fragment: &str) -> String {
    let origin = origin.trim_end_matches('/');
    if fragment.starts_with('/') {
        format!("{}{}", origin, fragment)
    } else {
        format!("{}/{}", origin, fragment)
    }
}

/// Extracts the fields `mode` requires from a successful `/generate` body.
pub fn parse_generation_response(
    body: &[u8],
    mode: Mode,
    origin: &str,
) -> Result<GenerationResult, GenerationError> {
    let response: GenerateResponse = serde_json::from_slice(body)
        .map_err(|e| GenerationError::UnexpectedResponse(format!("invalid JSON body: {}", e)))?;

    let field = response
        .diagram_url
        .ok_or_else(|| unexpected("missing diagram_url"))?;

    match (mode, field) {
        (Mode::Base, DiagramUrlField::Fragment(fragment)) => {
            let fragment = non_empty(Some(fragment), "diagram_url")?;
            Ok(GenerationResult::Base { diagram: join_origin(origin, &fragment) })
        }
        (Mode::Base, DiagramUrlField::Paths(DiagramPaths { diagram_url, .. })) => {
            let fragment = non_empty(diagram_url, "diagram_url.diagram_url")?;
            Ok(GenerationResult::Base { diagram: join_origin(origin, &fragment) })
        }
        (Mode::Enhanced, DiagramUrlField::Paths(paths)) => {
            let base = non_empty(paths.base_diagram_url, "diagram_url.base_diagram_url")?;
            let enhanced =
                non_empty(paths.enhanced_diagram_url, "diagram_url.enhanced_diagram_url")?;
            Ok(GenerationResult::Enhanced {
                base: join_origin(origin, &base),
                enhanced: join_origin(origin, &enhanced),
            })
        }
        (Mode::Enhanced, DiagramUrlField::Fragment(_)) => {
            Err(unexpected("expected base and enhanced diagram urls, got a single url"))
        }
    }
}

/// Pulls `detail` out of an error body when there is one. Non-string details
/// (FastAPI validation errors are lists) are kept as compact JSON.
pub fn error_detail(body: &[u8]) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_slice(body).ok()?;
    match parsed.detail? {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Null => None,
        other => Some(other.to_string()),
    }
}

fn non_empty(value: Option<String>, field: &str) -> Result<String, GenerationError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(unexpected(&format!("missing {}", field))),
    }
}

fn unexpected(reason: &str) -> GenerationError {
    GenerationError::UnexpectedResponse(reason.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "http://localhost:8000";
    const BOTH_URLS: &str =
        r#"{"diagram_url":{"base_diagram_url":"/img/a.png","enhanced_diagram_url":"/img/b.png"}}"#;

    fn is_unexpected(outcome: Result<GenerationResult, GenerationError>) -> bool {
        matches!(outcome, Err(GenerationError::UnexpectedResponse(_)))
    }

    fn parse(body: &str, mode: Mode) -> Result<GenerationResult, GenerationError> {
        parse_generation_response(body.as_bytes(), mode, ORIGIN)
    }

    #[test]
    fn enhanced_mode_builds_both_urls() {
        assert_eq!(
            parse(BOTH_URLS, Mode::Enhanced).unwrap(),
            GenerationResult::Enhanced {
                base: "http://localhost:8000/img/a.png".into(),
                enhanced: "http://localhost:8000/img/b.png".into(),
            }
        );
    }

    #[test]
    fn base_mode_reads_nested_url() {
        let body = r#"{"diagram_url":{"diagram_url":"/diagrams/garage.png"}}"#;
        assert_eq!(
            parse(body, Mode::Base).unwrap(),
            GenerationResult::Base { diagram: "http://localhost:8000/diagrams/garage.png".into() }
        );
    }

    #[test]
    fn base_mode_accepts_legacy_flat_url() {
        let body = r#"{"diagram_url":"/diagrams/library.png"}"#;
        assert_eq!(
            parse(body, Mode::Base).unwrap(),
            GenerationResult::Base { diagram: "http://localhost:8000/diagrams/library.png".into() }
        );
    }

    #[test]
    fn enhanced_mode_requires_both_fields() {
        let only_base = r#"{"diagram_url":{"base_diagram_url":"/img/a.png"}}"#;
        assert!(is_unexpected(parse(only_base, Mode::Enhanced)));

        let only_enhanced = r#"{"diagram_url":{"enhanced_diagram_url":"/img/b.png"}}"#;
        assert!(is_unexpected(parse(only_enhanced, Mode::Enhanced)));

        let flat = r#"{"diagram_url":"/img/a.png"}"#;
        assert!(is_unexpected(parse(flat, Mode::Enhanced)));
    }

    #[test]
    fn mode_mismatch_is_unexpected() {
        // A mode 2 body does not satisfy mode 1.
        assert!(is_unexpected(parse(BOTH_URLS, Mode::Base)));
    }

    #[test]
    fn empty_or_missing_payloads_are_unexpected() {
        let bodies = [
            "{}",
            r#"{"diagram_url":null}"#,
            r#"{"diagram_url":{"diagram_url":""}}"#,
            "not json",
            r#"{"diagram_url":42}"#,
        ];
        for body in bodies {
            assert!(is_unexpected(parse(body, Mode::Base)), "body {:?} should be rejected", body);
        }
    }

    #[test]
    fn join_handles_slashes() {
        assert_eq!(join_origin("http://localhost:8000/", "/a.png"), "http://localhost:8000/a.png");
        assert_eq!(
            join_origin("http://localhost:8000", "diagrams/a.png"),
            "http://localhost:8000/diagrams/a.png"
        );
    }

    #[test]
    fn error_detail_variants() {
        assert_eq!(error_detail(br#"{"detail":"boom"}"#).as_deref(), Some("boom"));
        assert_eq!(
            error_detail(br#"{"detail":[{"loc":["body"]}]}"#).as_deref(),
            Some(r#"[{"loc":["body"]}]"#)
        );
        assert_eq!(error_detail(b"Internal Server Error"), None);
        assert_eq!(error_detail(br#"{"other":1}"#), None);
    }
}
