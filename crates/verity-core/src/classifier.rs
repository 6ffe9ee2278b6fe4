//! Heuristic authenticity classifier
//!
//! A fixed chain of rules over the client filename, the decoded dimensions,
//! and the stored file size. Rules are evaluated in priority order and the
//! first match decides the result:
//!
//! 1. AI keyword in the filename → 100, AI-Generated
//! 2. Real keyword in the filename → 0, Real Image
//! 3. `.pdf` suffix, or "scan"/"document" in the filename → 100, AI-Generated
//! 4. Width > 3500 and height > 2500 → 90, AI-Generated
//! 5. Additive score from area, file size and aspect ratio, capped at 100
//!
//! Keyword matching is case-insensitive substring matching, so "mountain"
//! matches the AI keyword "ai" before the real keyword list is consulted.
//!
//! The classifier is pure: callers decode the image and measure the file,
//! then pass the resulting [`ImageFacts`] in.

use crate::constants::*;
use crate::models::{ClassificationResult, ImageFacts, Rule, Verdict};

/// Weights added by the fallback heuristic when its conditions hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeuristicWeights {
    /// Area above 5MP or below 0.2MP
    pub unusual_area: u8,
    /// File smaller than 60KB
    pub small_file: u8,
    /// File larger than 5MB
    pub large_file: u8,
    /// One side more than twice the other
    pub extreme_aspect: u8,
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        Self {
            unusual_area: 30,
            small_file: 40,
            large_file: 20,
            extreme_aspect: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Classifier {
    weights: HeuristicWeights,
}

impl Classifier {
    pub fn new(weights: HeuristicWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &HeuristicWeights {
        &self.weights
    }

    /// Run the full rule chain for one upload.
    pub fn classify(&self, filename: &str, facts: &ImageFacts) -> ClassificationResult {
        let name = filename.to_lowercase();

        if contains_any(&name, AI_KEYWORDS) {
            return early_exit(KEYWORD_AI_SCORE, Verdict::Ai, Rule::AiKeyword);
        }

        if contains_any(&name, REAL_KEYWORDS) {
            return early_exit(KEYWORD_REAL_SCORE, Verdict::Real, Rule::RealKeyword);
        }

        if name.ends_with(PDF_SUFFIX) || contains_any(&name, DOCUMENT_KEYWORDS) {
            return early_exit(DOCUMENT_SCORE, Verdict::Ai, Rule::Document);
        }

        if facts.width > HIGH_RES_MIN_WIDTH && facts.height > HIGH_RES_MIN_HEIGHT {
            return early_exit(HIGH_RES_SCORE, Verdict::Ai, Rule::HighResolution);
        }

        let score = self.heuristic_score(facts);
        ClassificationResult {
            score,
            verdict: verdict_for_score(score),
            rule: Rule::Heuristic,
        }
    }

    /// Sum of the heuristic weights that apply to `facts`, clamped to 100.
    pub fn heuristic_score(&self, facts: &ImageFacts) -> u8 {
        let area = facts.area();
        let mut score: u32 = 0;

        if area > LARGE_AREA_PIXELS || area < SMALL_AREA_PIXELS {
            score += u32::from(self.weights.unusual_area);
        }
        if facts.byte_len < SMALL_FILE_BYTES {
            score += u32::from(self.weights.small_file);
        }
        if facts.byte_len > LARGE_FILE_BYTES {
            score += u32::from(self.weights.large_file);
        }
        if has_extreme_aspect(facts.width, facts.height) {
            score += u32::from(self.weights.extreme_aspect);
        }

        score.min(u32::from(MAX_SCORE)) as u8
    }
}

/// Classify with the default weights.
pub fn classify(filename: &str, facts: &ImageFacts) -> ClassificationResult {
    Classifier::default().classify(filename, facts)
}

/// Label for a heuristic score.
pub fn verdict_for_score(score: u8) -> Verdict {
    if score < POSSIBLY_AI_THRESHOLD {
        Verdict::Real
    } else if score < AI_THRESHOLD {
        Verdict::PossiblyAi
    } else {
        Verdict::Ai
    }
}

fn early_exit(score: u8, verdict: Verdict, rule: Rule) -> ClassificationResult {
    ClassificationResult {
        score,
        verdict,
        rule,
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// `w / h > 2 || h / w > 2` without division. A zero side has no ratio.
fn has_extreme_aspect(width: u32, height: u32) -> bool {
    if width == 0 || height == 0 {
        return false;
    }
    let (w, h) = (u64::from(width), u64::from(height));
    w > EXTREME_ASPECT_RATIO * h || h > EXTREME_ASPECT_RATIO * w
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facts(byte_len: u64, width: u32, height: u32) -> ImageFacts {
        ImageFacts::new(byte_len, width, height)
    }

    #[test]
    fn ai_keyword_wins_regardless_of_content() {
        for name in [
            "AI_portrait.png",
            "my-midjourney-render.jpg",
            "Stable Diffusion output.webp",
            "robot.gif",
            "FAKE.jpeg",
            "cgi_scene.png",
            "generated.png",
        ] {
            for f in [facts(10, 1, 1), facts(9_000_000, 8000, 6000)] {
                let result = classify(name, &f);
                assert_eq!(result.score, 100, "{name}");
                assert_eq!(result.verdict, Verdict::Ai, "{name}");
                assert_eq!(result.rule, Rule::AiKeyword, "{name}");
            }
        }
    }

    #[test]
    fn ai_keyword_takes_priority_over_real_keyword() {
        let result = classify("dog_generated.png", &facts(100_000, 800, 600));
        assert_eq!(result.rule, Rule::AiKeyword);
        assert_eq!(result.score, 100);
    }

    #[test]
    fn substring_matching_is_literal() {
        // "mountain" contains "ai"
        let result = classify("mountain.jpg", &facts(100_000, 800, 600));
        assert_eq!(result.rule, Rule::AiKeyword);
        assert_eq!(result.verdict, Verdict::Ai);
    }

    #[test]
    fn real_keyword_scores_zero() {
        for name in [
            "Screenshot 2024-01-01.png",
            "WhatsApp Image.jpeg",
            "marksheet.jpg",
            "id.png",
            "card.jpg",
            "human.jpg",
            "animal.jpg",
            "dog.jpg",
            "cat.png",
            "place.png",
            "beach.jpg",
        ] {
            let result = classify(name, &facts(10, 5000, 5000));
            assert_eq!(result.score, 0, "{name}");
            assert_eq!(result.verdict, Verdict::Real, "{name}");
            assert_eq!(result.rule, Rule::RealKeyword, "{name}");
        }
    }

    #[test]
    fn documents_are_flagged() {
        for name in ["report.pdf", "REPORT.PDF", "scan_001.png", "document.jpg"] {
            let result = classify(name, &facts(500_000, 1000, 1000));
            assert_eq!(result.score, 100, "{name}");
            assert_eq!(result.verdict, Verdict::Ai, "{name}");
            assert_eq!(result.rule, Rule::Document, "{name}");
        }
    }

    #[test]
    fn high_resolution_scores_ninety() {
        let result = classify("photo.png", &facts(1_000_000, 4000, 3000));
        assert_eq!(result.score, 90);
        assert_eq!(result.verdict, Verdict::Ai);
        assert_eq!(result.rule, Rule::HighResolution);
    }

    #[test]
    fn high_resolution_needs_both_sides() {
        let result = classify("photo.png", &facts(1_000_000, 4000, 2500));
        assert_eq!(result.rule, Rule::Heuristic);
    }

    #[test]
    fn small_file_alone_is_possibly_ai() {
        let result = classify("photo.jpg", &facts(50_000, 1000, 1000));
        assert_eq!(result.score, 40);
        assert_eq!(result.verdict, Verdict::PossiblyAi);
        assert_eq!(result.rule, Rule::Heuristic);
    }

    #[test]
    fn large_file_alone_is_real() {
        let result = classify("x.jpg", &facts(6_000_000, 1000, 1000));
        assert_eq!(result.score, 20);
        assert_eq!(result.verdict, Verdict::Real);
    }

    #[test]
    fn area_size_and_aspect_weights_add_up() {
        // 100x300 is below the area floor and has a 3:1 aspect
        let result = classify("x.jpg", &facts(10_000, 100, 300));
        assert_eq!(result.score, 80);
        assert_eq!(result.verdict, Verdict::Ai);
    }

    #[test]
    fn heuristic_score_is_clamped_to_max() {
        let classifier = Classifier::new(HeuristicWeights {
            unusual_area: 90,
            small_file: 40,
            large_file: 20,
            extreme_aspect: 10,
        });
        let result = classifier.classify("x.jpg", &facts(10_000, 100, 300));
        assert_eq!(result.score, MAX_SCORE);
        assert_eq!(result.verdict, Verdict::Ai);
    }

    #[test]
    fn small_and_large_file_weights_are_exclusive() {
        let classifier = Classifier::default();
        assert_eq!(classifier.heuristic_score(&facts(60_000, 1000, 1000)), 0);
        assert_eq!(classifier.heuristic_score(&facts(5_000_000, 1000, 1000)), 0);
    }

    #[test]
    fn area_bounds_are_exclusive() {
        let classifier = Classifier::default();
        // exactly 200_000 and exactly 5_000_000 pixels
        assert_eq!(classifier.heuristic_score(&facts(100_000, 500, 400)), 0);
        assert_eq!(classifier.heuristic_score(&facts(100_000, 2500, 2000)), 0);
        assert_eq!(classifier.heuristic_score(&facts(100_000, 2501, 2000)), 30);
    }

    #[test]
    fn aspect_ratio_of_exactly_two_does_not_count() {
        let classifier = Classifier::default();
        assert_eq!(classifier.heuristic_score(&facts(100_000, 1000, 500)), 0);
        assert_eq!(classifier.heuristic_score(&facts(100_000, 1001, 500)), 10);
        assert_eq!(classifier.heuristic_score(&facts(100_000, 500, 1001)), 10);
    }

    #[test]
    fn score_is_clamped_with_inflated_weights() {
        let classifier = Classifier::new(HeuristicWeights {
            unusual_area: 90,
            small_file: 90,
            large_file: 90,
            extreme_aspect: 90,
        });
        let result = classifier.classify("x.jpg", &facts(10_000, 100, 300));
        assert_eq!(result.score, 100);
        assert_eq!(result.verdict, Verdict::Ai);
    }

    #[test]
    fn zero_dimensions_do_not_panic() {
        let result = classify("x.png", &facts(100, 0, 0));
        // area 0 (+30) and small file (+40), no aspect ratio
        assert_eq!(result.score, 70);
        let result = classify("x.png", &facts(100, 0, 10));
        assert_eq!(result.score, 70);
    }

    #[test]
    fn thresholds_map_to_labels() {
        assert_eq!(verdict_for_score(0), Verdict::Real);
        assert_eq!(verdict_for_score(39), Verdict::Real);
        assert_eq!(verdict_for_score(40), Verdict::PossiblyAi);
        assert_eq!(verdict_for_score(69), Verdict::PossiblyAi);
        assert_eq!(verdict_for_score(70), Verdict::Ai);
        assert_eq!(verdict_for_score(100), Verdict::Ai);
    }
}
