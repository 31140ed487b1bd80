//! Box (mean) filtering built on padding and window shifting

mod types;
mod mean;


pub use types::{MeanFilterConfig, MeanFilterConfigBuilder};
pub use mean::{MeanFilter, mean_filter};
