pub mod classification;
pub mod upload;

pub use classification::{ClassificationResult, ImageFacts, Rule, Verdict};
pub use upload::{AnalyzeResponse, StoredUpload};
