//! Fixed-point color conversion

mod ycbcr;

pub use ycbcr::ycbcr_to_rgb;
