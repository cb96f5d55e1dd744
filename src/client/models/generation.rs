use serde::{Deserialize, Serialize};
use crate::common::error::GenerationError;

/// Which diagrams the service should produce. Sent on the wire as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Mode {
    /// Base diagram only.
    Base,
    /// Base diagram plus an enhanced one.
    #[default]
    Enhanced,
}

const ALL_MODES: [Mode; 2] = [Mode::Base, Mode::Enhanced];

impl Mode {
    pub fn all() -> &'static [Mode] {
        &ALL_MODES
    }

    pub fn as_u8(self) -> u8 {
        match self {
            Mode::Base => 1,
            Mode::Enhanced => 2,
        }
    }
}

impl From<Mode> for u8 {
    fn from(mode: Mode) -> u8 {
        mode.as_u8()
    }
}

impl TryFrom<u8> for Mode {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Mode::Base),
            2 => Ok(Mode::Enhanced),
            other => Err(format!("invalid mode {}, expected 1 or 2", other)),
        }
    }
}

impl std::str::FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u8 = s
            .trim()
            .parse()
            .map_err(|_| format!("invalid mode '{}', expected 1 or 2", s))?;
        Mode::try_from(value)
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Mode::Base => "Mode 1 (Base Diagram Only)",
            Mode::Enhanced => "Mode 2 (Base + Enhanced)",
        };
        write!(f, "{}", s)
    }
}

/// Rejects requirements that are empty once surrounding whitespace is removed.
pub fn validate_requirement(requirement: &str) -> Result<(), GenerationError> {
    if requirement.trim().is_empty() {
        Err(GenerationError::Validation)
    } else {
        Ok(())
    }
}

/// Body of `POST /generate`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationRequest {
    pub requirement: String,
    pub mode: Mode,
}

impl GenerationRequest {
    /// The requirement is kept as typed; trimming only decides validity.
    pub fn new(requirement: impl Into<String>, mode: Mode) -> Result<Self, GenerationError> {
        let requirement = requirement.into();
        validate_requirement(&requirement)?;
        Ok(Self { requirement, mode })
    }
}

/// Normalized, absolute image URLs for one completed generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationResult {
    Base { diagram: String },
    Enhanced { base: String, enhanced: String },
}

impl GenerationResult {
    pub fn mode(&self) -> Mode {
        match self {
            GenerationResult::Base { .. } => Mode::Base,
            GenerationResult::Enhanced { .. } => Mode::Enhanced,
        }
    }

    /// `(label, url)` pairs in display order.
    pub fn images(&self) -> Vec<(&'static str, &str)> {
        match self {
            GenerationResult::Base { diagram } => vec![("Base UML Diagram", diagram.as_str())],
            GenerationResult::Enhanced { base, enhanced } => vec![
                ("Base Diagram", base.as_str()),
                ("Enhanced Diagram", enhanced.as_str()),
            ],
        }
    }

    pub fn urls(&self) -> Vec<String> {
        self.images().into_iter().map(|(_, url)| url.to_string()).collect()
    }
}

// Wire shapes of the service response. Everything is optional so that a
// missing field is reported as an unexpected response rather than a parse error.

#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub diagram_url: Option<DiagramUrlField>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum DiagramUrlField {
    /// Older single-mode servers return the fragment directly.
    Fragment(String),
    Paths(DiagramPaths),
}

#[derive(Debug, Default, Deserialize)]
pub struct DiagramPaths {
    #[serde(default)]
    pub diagram_url: Option<String>,
    #[serde(default)]
    pub base_diagram_url: Option<String>,
    #[serde(default)]
    pub enhanced_diagram_url: Option<String>,
}

/// FastAPI-style error body, e.g. `{"detail": "Failed to generate diagram"}`.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub detail: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn mode_serializes_as_integer() {
        let request = GenerationRequest::new("A garage management system", Mode::Enhanced).unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "requirement": "A garage management system", "mode": 2 })
        );
        assert_eq!(serde_json::to_value(Mode::Base).unwrap(), json!(1));
    }

    #[test]
    fn mode_rejects_unknown_values() {
        assert!(serde_json::from_value::<Mode>(json!(3)).is_err());
        assert_eq!(serde_json::from_value::<Mode>(json!(1)).unwrap(), Mode::Base);
        assert!(Mode::try_from(0).is_err());
        assert_eq!(" 2 ".parse::<Mode>().unwrap(), Mode::Enhanced);
        assert!("two".parse::<Mode>().is_err());
    }

    #[test]
    fn default_mode_is_enhanced() {
        assert_eq!(Mode::default(), Mode::Enhanced);
    }

    #[test]
    fn blank_requirements_are_rejected() {
        for input in ["", "   ", "\n\t "] {
            assert!(matches!(
                GenerationRequest::new(input, Mode::Base),
                Err(GenerationError::Validation)
            ));
        }
    }

    #[test]
    fn requirement_is_sent_untrimmed() {
        let request = GenerationRequest::new("  library system ", Mode::Base).unwrap();
        assert_eq!(request.requirement, "  library system ");
    }

    #[test]
    fn images_are_labelled_in_display_order() {
        let result = GenerationResult::Enhanced {
            base: "http://localhost:8000/img/a.png".into(),
            enhanced: "http://localhost:8000/img/b.png".into(),
        };
        assert_eq!(
            result.images(),
            vec![
                ("Base Diagram", "http://localhost:8000/img/a.png"),
                ("Enhanced Diagram", "http://localhost:8000/img/b.png"),
            ]
        );
        assert_eq!(result.mode(), Mode::Enhanced);

        let single = GenerationResult::Base { diagram: "http://localhost:8000/d.png".into() };
        assert_eq!(single.urls(), vec!["http://localhost:8000/d.png".to_string()]);
    }
}
