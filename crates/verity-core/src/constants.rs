//! Rule constants for the filename/size/resolution classifier.

/// Filename fragments that mark an upload as AI-generated outright.
pub const AI_KEYWORDS: &[&str] = &[
    "ai",
    "generated",
    "midjourney",
    "stable diffusion",
    "robot",
    "fake",
    "render",
    "cgi",
];

/// Filename fragments that mark an upload as a real photo or capture.
pub const REAL_KEYWORDS: &[&str] = &[
    "screenshot",
    "whatsapp",
    "marksheet",
    "id",
    "card",
    "human",
    "animal",
    "dog",
    "cat",
    "place",
    "beach",
    "mountain",
];

/// Fragments that identify scanned documents.
pub const DOCUMENT_KEYWORDS: &[&str] = &["scan", "document"];

/// Suffix that identifies PDF uploads.
pub const PDF_SUFFIX: &str = ".pdf";

/// Width and height that must both be exceeded for the high-resolution rule.
pub const HIGH_RES_MIN_WIDTH: u32 = 3500;
pub const HIGH_RES_MIN_HEIGHT: u32 = 2500;

pub const KEYWORD_AI_SCORE: u8 = 100;
pub const KEYWORD_REAL_SCORE: u8 = 0;
pub const DOCUMENT_SCORE: u8 = 100;
pub const HIGH_RES_SCORE: u8 = 90;

/// Pixel area bounds outside of which the area weight applies.
pub const LARGE_AREA_PIXELS: u64 = 5_000_000;
pub const SMALL_AREA_PIXELS: u64 = 200_000;

/// File size bounds for the size weights.
pub const SMALL_FILE_BYTES: u64 = 60_000;
pub const LARGE_FILE_BYTES: u64 = 5_000_000;

/// Aspect ratio above which the aspect weight applies.
pub const EXTREME_ASPECT_RATIO: u64 = 2;

/// Scores at or above these thresholds move the heuristic label up a step.
pub const POSSIBLY_AI_THRESHOLD: u8 = 40;
pub const AI_THRESHOLD: u8 = 70;

pub const MAX_SCORE: u8 = 100;
