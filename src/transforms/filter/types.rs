//! Mean filter configuration types

use crate::transforms::padding::PadMode;

/// Configuration for a [`MeanFilter`](super::MeanFilter)
#[derive(Debug, Clone)]
pub struct MeanFilterConfig {
    /// Filter diameter; must be odd
    pub filter_size: usize,
    /// How the borders are extended before averaging
    pub pad_mode: PadMode,
}

impl Default for MeanFilterConfig {
    fn default() -> Self {
        Self {
            filter_size: 3,
            pad_mode: PadMode::Reflect,
        }
    }
}

impl MeanFilterConfig {
    pub fn builder() -> MeanFilterConfigBuilder {
        MeanFilterConfigBuilder::default()
    }
}

/// Builder for MeanFilterConfig
#[derive(Default)]
pub struct MeanFilterConfigBuilder {
    filter_size: Option<usize>,
    pad_mode: Option<PadMode>,
}

impl MeanFilterConfigBuilder {
    pub fn filter_size(mut self, size: usize) -> Self {
        self.filter_size = Some(size);
        self
    }

    pub fn pad_mode(mut self, mode: PadMode) -> Self {
        self.pad_mode = Some(mode);
        self
    }

    pub fn build(self) -> MeanFilterConfig {
        let default = MeanFilterConfig::default();
        MeanFilterConfig {
            filter_size: self.filter_size.unwrap_or(default.filter_size),
            pad_mode: self.pad_mode.unwrap_or(default.pad_mode),
        }
    }
}
