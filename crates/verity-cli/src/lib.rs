//! Offline classification of local image files with the same rule chain the
//! API server uses.

use serde::Serialize;
use std::path::Path;
use verity_core::constants::{
    AI_KEYWORDS, AI_THRESHOLD, DOCUMENT_KEYWORDS, HIGH_RES_MIN_HEIGHT, HIGH_RES_MIN_WIDTH,
    PDF_SUFFIX, POSSIBLY_AI_THRESHOLD, REAL_KEYWORDS,
};
use verity_core::{Classifier, HeuristicWeights, Rule, Verdict};
use verity_processing::ImageProcessor;

/// Result for one file on the command line.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum FileOutcome {
    Classified(FileReport),
    Failed { path: String, error: String },
}

impl FileOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, FileOutcome::Failed { .. })
    }
}

#[derive(Debug, Serialize)]
pub struct FileReport {
    pub path: String,
    pub width: u32,
    pub height: u32,
    pub byte_len: u64,
    pub score: u8,
    pub result: Verdict,
    pub rule: Rule,
}

/// Decode `path` and classify it by its file name.
pub fn classify_path(classifier: &Classifier, path: &Path) -> FileOutcome {
    let shown = path.display().to_string();
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| shown.clone());

    match ImageProcessor::probe_file(path) {
        Ok(facts) => {
            let classification = classifier.classify(&filename, &facts);
            tracing::debug!(path = %shown, score = classification.score, "Classified");
            FileOutcome::Classified(FileReport {
                path: shown,
                width: facts.width,
                height: facts.height,
                byte_len: facts.byte_len,
                score: classification.score,
                result: classification.verdict,
                rule: classification.rule,
            })
        }
        Err(e) => {
            tracing::debug!(path = %shown, error = %e, "Failed to read image");
            FileOutcome::Failed {
                path: shown,
                error: e.to_string(),
            }
        }
    }
}

/// One table line per outcome.
pub fn format_outcome(outcome: &FileOutcome) -> String {
    match outcome {
        FileOutcome::Classified(report) => format!(
            "{:<40} {:>3}  {:<22} {:>5}x{:<5} {:>10}  {}",
            truncate_string(&report.path, 40),
            report.score,
            report.result,
            report.width,
            report.height,
            report.byte_len,
            report.rule
        ),
        FileOutcome::Failed { path, error } => {
            format!("{:<40} error: {}", truncate_string(path, 40), error)
        }
    }
}

/// Truncate a string to max_len characters, appending "..." if truncated.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// The rule chain in evaluation order, for `verity rules`.
#[derive(Debug, Serialize)]
pub struct RulesSummary {
    pub ai_keywords: Vec<&'static str>,
    pub real_keywords: Vec<&'static str>,
    pub document_suffix: &'static str,
    pub document_keywords: Vec<&'static str>,
    pub high_resolution: (u32, u32),
    pub weights: WeightsSummary,
    pub possibly_ai_threshold: u8,
    pub ai_threshold: u8,
}

#[derive(Debug, Serialize)]
pub struct WeightsSummary {
    pub unusual_area: u8,
    pub small_file: u8,
    pub large_file: u8,
    pub extreme_aspect: u8,
}

impl From<&HeuristicWeights> for WeightsSummary {
    fn from(w: &HeuristicWeights) -> Self {
        Self {
            unusual_area: w.unusual_area,
            small_file: w.small_file,
            large_file: w.large_file,
            extreme_aspect: w.extreme_aspect,
        }
    }
}

pub fn rules_summary(classifier: &Classifier) -> RulesSummary {
    RulesSummary {
        ai_keywords: AI_KEYWORDS.to_vec(),
        real_keywords: REAL_KEYWORDS.to_vec(),
        document_suffix: PDF_SUFFIX,
        document_keywords: DOCUMENT_KEYWORDS.to_vec(),
        high_resolution: (HIGH_RES_MIN_WIDTH, HIGH_RES_MIN_HEIGHT),
        weights: classifier.weights().into(),
        possibly_ai_threshold: POSSIBLY_AI_THRESHOLD,
        ai_threshold: AI_THRESHOLD,
    }
}

/// Human-readable rendering of [`RulesSummary`].
pub fn format_rules(summary: &RulesSummary) -> String {
    let w = &summary.weights;
    [
        format!("1. AI keyword -> 100: {}", summary.ai_keywords.join(", ")),
        format!("2. Real keyword -> 0: {}", summary.real_keywords.join(", ")),
        format!(
            "3. Document -> 100: suffix {} or {}",
            summary.document_suffix,
            summary.document_keywords.join(", ")
        ),
        format!(
            "4. High resolution -> 90: width > {} and height > {}",
            summary.high_resolution.0, summary.high_resolution.1
        ),
        format!(
            "5. Heuristic: unusual area +{}, small file +{}, large file +{}, extreme aspect +{}",
            w.unusual_area, w.small_file, w.large_file, w.extreme_aspect
        ),
        format!(
            "   Labels: < {} Real Image, < {} Possibly AI-Generated, otherwise AI-Generated",
            summary.possibly_ai_threshold, summary.ai_threshold
        ),
    ]
    .join("\n")
}

/// Initialize tracing for the CLI (stderr, `RUST_LOG`, default `warn`).
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage};
    use std::io::Cursor;

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> std::path::PathBuf {
        let img = RgbImage::from_pixel(width, height, Rgb([10, 20, 30]));
        let mut buffer = Vec::new();
        img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
            .unwrap();
        let path = dir.join(name);
        std::fs::write(&path, buffer).unwrap();
        path
    }

    #[test]
    fn classify_path_uses_file_name_not_directory() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("ai_renders");
        std::fs::create_dir(&sub).unwrap();
        let path = write_png(&sub, "photo.png", 1000, 1000);

        match classify_path(&Classifier::default(), &path) {
            FileOutcome::Classified(report) => {
                assert_eq!(report.path, path.display().to_string());
                assert_eq!(report.score, 40);
                assert_eq!(report.result, Verdict::PossiblyAi);
                assert_eq!(report.rule, Rule::Heuristic);
            }
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn classify_path_reports_unreadable_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.png");
        std::fs::write(&path, b"plain text").unwrap();

        let outcome = classify_path(&Classifier::default(), &path);
        assert!(outcome.is_failure());

        let missing = classify_path(&Classifier::default(), &dir.path().join("gone.png"));
        assert!(missing.is_failure());
    }

    #[test]
    fn outcome_json_shape() {
        let outcome = FileOutcome::Classified(FileReport {
            path: "dog.jpg".to_string(),
            width: 10,
            height: 10,
            byte_len: 100,
            score: 0,
            result: Verdict::Real,
            rule: Rule::RealKeyword,
        });
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["result"], "Real Image");
        assert_eq!(value["rule"], "real_keyword");

        let failed = FileOutcome::Failed {
            path: "x.png".to_string(),
            error: "Unrecognized image format".to_string(),
        };
        let value = serde_json::to_value(&failed).unwrap();
        assert_eq!(value["error"], "Unrecognized image format");
    }

    #[test]
    fn rules_summary_lists_default_weights() {
        let summary = rules_summary(&Classifier::default());
        assert_eq!(summary.weights.small_file, 40);
        assert!(summary.ai_keywords.contains(&"midjourney"));
        assert!(format_rules(&summary).contains("width > 3500 and height > 2500"));
    }

    #[test]
    fn truncate_string_long() {
        assert_eq!(truncate_string("hello", 10), "hello");
        assert_eq!(truncate_string("hello world", 8), "hello...");
    }
}
