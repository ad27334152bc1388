use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RtSettings {
    /// Path segments traced per sample
    pub max_bounces: u32,
    /// Camera rays per pixel per frame
    pub samples: u32,
    /// Size of a dedicated worker pool, `None` renders on rayon's global pool
    pub threads: Option<usize>,
}

impl Default for RtSettings {
    fn default() -> Self {
        Self {
            max_bounces: 2,
            samples: 1,
            threads: None,
        }
    }
}

impl RtSettings {
    pub fn new(max_bounces: u32, samples: u32) -> Self {
        Self {
            max_bounces,
            samples,
            ..Default::default()
        }
    }

    pub fn with_threads(self, threads: usize) -> Self {
        Self {
            threads: Some(threads),
            ..self
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_bounces < 1 {
            return Err(Error::InvalidConfiguration {
                name: "max_bounces",
                value: self.max_bounces,
            });
        }
        if self.samples < 1 {
            return Err(Error::InvalidConfiguration {
                name: "samples",
                value: self.samples,
            });
        }
        Ok(())
    }

    /// Whether switching to `other` invalidates accumulated frames.
    pub fn changes_output(&self, other: &Self) -> bool {
        self.max_bounces != other.max_bounces || self.samples != other.samples
    }
}
