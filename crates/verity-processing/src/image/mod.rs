mod processor;

pub use processor::{ImageProcessor, ProbeError};
