use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use utoipa::ToSchema;

/// Three-way authenticity label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Verdict {
    #[serde(rename = "Real Image")]
    Real,
    #[serde(rename = "Possibly AI-Generated")]
    PossiblyAi,
    #[serde(rename = "AI-Generated")]
    Ai,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Real => "Real Image",
            Verdict::PossiblyAi => "Possibly AI-Generated",
            Verdict::Ai => "AI-Generated",
        }
    }
}

impl Display for Verdict {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.pad(self.as_str())
    }
}

/// The rule in the priority chain that produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    AiKeyword,
    RealKeyword,
    Document,
    HighResolution,
    Heuristic,
}

impl Display for Rule {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Rule::AiKeyword => write!(f, "ai_keyword"),
            Rule::RealKeyword => write!(f, "real_keyword"),
            Rule::Document => write!(f, "document"),
            Rule::HighResolution => write!(f, "high_resolution"),
            Rule::Heuristic => write!(f, "heuristic"),
        }
    }
}

/// Measurable facts about a decoded upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageFacts {
    /// Size of the stored file in bytes
    pub byte_len: u64,
    pub width: u32,
    pub height: u32,
}

impl ImageFacts {
    pub fn new(byte_len: u64, width: u32, height: u32) -> Self {
        Self {
            byte_len,
            width,
            height,
        }
    }

    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

/// Score and label for one upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ClassificationResult {
    /// Heuristic confidence that the image is AI-generated (0-100)
    pub score: u8,
    pub verdict: Verdict,
    pub rule: Rule,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_serializes_to_fixed_labels() {
        assert_eq!(
            serde_json::to_string(&Verdict::Real).unwrap(),
            "\"Real Image\""
        );
        assert_eq!(
            serde_json::to_string(&Verdict::PossiblyAi).unwrap(),
            "\"Possibly AI-Generated\""
        );
        assert_eq!(
            serde_json::to_string(&Verdict::Ai).unwrap(),
            "\"AI-Generated\""
        );
    }

    #[test]
    fn verdict_display_matches_serialized_label() {
        for verdict in [Verdict::Real, Verdict::PossiblyAi, Verdict::Ai] {
            let json = serde_json::to_string(&verdict).unwrap();
            assert_eq!(json.trim_matches('"'), verdict.to_string());
        }
    }

    #[test]
    fn area_does_not_overflow_u32() {
        let facts = ImageFacts::new(0, 70_000, 70_000);
        assert_eq!(facts.area(), 4_900_000_000);
    }
}
