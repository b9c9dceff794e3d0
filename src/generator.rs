//! Hand-off to the image generator
//!
//! The generator consumes a resolved [`GeneratorConfig`]. Assembling the
//! archive happens outside this crate; the only local implementation
//! writes the resolved build plan as JSON.

use std::io::{self, Write};

use crate::config::GeneratorConfig;

/// Errors reported by an image generator
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to serialize build plan: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Consumer of a resolved configuration
pub trait ImageGenerator {
    fn generate(&mut self, config: &GeneratorConfig) -> Result<(), GenerateError>;
}

/// Writes the build plan to any writer
#[derive(Debug)]
pub struct PlanWriter<W> {
    out: W,
}

impl<W: Write> PlanWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ImageGenerator for PlanWriter<W> {
    fn generate(&mut self, config: &GeneratorConfig) -> Result<(), GenerateError> {
        let json = config.to_json()?;
        writeln!(self.out, "{}", json)?;
        self.out.flush()?;
        Ok(())
    }
}
