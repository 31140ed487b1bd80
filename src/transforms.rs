//! Sensor array transforms
//!
//! This module groups the building blocks used when decoding raw sensor
//! images: Bayer channel handling, boundary padding, window shifting,
//! box filtering and fixed-point color conversion. Every operation is a pure
//! function returning a freshly allocated array.

pub mod common;
pub mod bayer;
pub mod padding;
pub mod window;
pub mod filter;
pub mod color;

pub use common::{
    DType,
    Element,
    Result,
    TransformError,
};

pub use bayer::{
    BayerChannel,
    BayerPattern,
    CellOffset,
    bayer_offsets,
    reconstruct_bayer,
    split_bayer,
};

pub use padding::{
    Margins,
    PadMode,
    pad,
};

pub use window::{
    Shifts,
    WindowSize,
    shift_array,
};

pub use filter::{
    MeanFilter,
    MeanFilterConfig,
    MeanFilterConfigBuilder,
    mean_filter,
};

pub use color::ycbcr_to_rgb;
