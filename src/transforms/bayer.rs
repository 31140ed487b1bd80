//! Bayer mosaic handling
//!
//! Splits a single-channel sensor mosaic into its R, Gr, Gb and B
//! sub-lattices and scatters them back.

mod pattern;
mod split;


pub use pattern::{BayerChannel, BayerPattern, CellOffset, bayer_offsets};
pub use split::{reconstruct_bayer, split_bayer};
