//! Image decoding for the analysis pipeline.
//!
//! Decoding is CPU-bound; async callers go through
//! [`ImageProcessor::probe_blocking`], which runs on tokio's blocking pool.

pub mod image;

pub use crate::image::{ImageProcessor, ProbeError};
