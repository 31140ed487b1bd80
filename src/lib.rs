//! Array transforms for decoding and pre-processing raw sensor images.
//!
//! Everything lives under [`transforms`]: Bayer channel splitting, boundary
//! padding, window shifting, box filtering and fixed-point YCbCr to RGB.

pub mod logger;
pub mod transforms;
