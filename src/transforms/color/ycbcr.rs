use ndarray::{Array, ArrayBase, Axis, Data, Dimension, Zip};
use num_traits::AsPrimitive;
use tracing::{debug, instrument};

use crate::transforms::common::element::{DType, Element};
use crate::transforms::common::error::{Result, TransformError};

/// BT.601 studio-range YCbCr to RGB, scaled by 256. Row `c` yields output channel `c`.
const YCBCR_TO_RGB: [[i32; 3]; 3] = [
    [298, 0, 411],
    [298, -101, -211],
    [298, 519, 0],
];

/// Per-channel offsets, scaled by 256.
const BIAS: [i32; 3] = [-57344, 34739, -71117];

const FRACTION_BITS: u32 = 8;

/// Convert a YCbCr array (channels on the last axis) to 8-bit sRGB.
///
/// Only `u8` input is accepted. Each output sample is
/// `clamp((M · ycbcr + bias) >> 8, 0, 255)` computed in `i32`, where the
/// shift is arithmetic so negative sums floor rather than truncate.
///
/// # Examples
///
/// ```
/// use isp_helpers_rs::transforms::ycbcr_to_rgb;
/// use ndarray::array;
///
/// let white = ycbcr_to_rgb(&array![[[255u8, 128, 128]]]).unwrap();
/// assert_eq!(white, array![[[255u8, 255, 255]]]);
/// ```
#[instrument(skip(ycbcr), fields(shape = ?ycbcr.shape(), dtype = %A::DTYPE))]
pub fn ycbcr_to_rgb<A, S, D>(ycbcr: &ArrayBase<S, D>) -> Result<Array<u8, D>>
where
    A: Element,
    S: Data<Elem = A>,
    D: Dimension,
{
    if A::DTYPE != DType::U8 {
        return Err(TransformError::TypeMismatch(format!(
            "YCbCr input must be u8, got {}",
            A::DTYPE
        )));
    }

    let channels = ycbcr.shape().last().copied().unwrap_or(0);
    if channels != 3 {
        return Err(TransformError::ShapeMismatch(format!(
            "YCbCr input needs 3 channels on the last axis, got shape {:?}",
            ycbcr.shape()
        )));
    }

    let axis = Axis(ycbcr.ndim() - 1);
    let mut rgb = Array::<u8, D>::zeros(ycbcr.raw_dim());
    Zip::from(rgb.lanes_mut(axis))
        .and(ycbcr.lanes(axis))
        .for_each(|mut out, pixel| {
            // Lossless: the dtype check above guarantees 8-bit samples
            let sample: [i32; 3] = [pixel[0].as_(), pixel[1].as_(), pixel[2].as_()];
            for (c, row) in YCBCR_TO_RGB.iter().enumerate() {
                out[c] = fixed_point_channel(row, &sample, BIAS[c]);
            }
        });

    debug!("Converted {} pixels to RGB", rgb.len() / 3);
    Ok(rgb)
}

#[inline]
fn fixed_point_channel(row: &[i32; 3], sample: &[i32; 3], bias: i32) -> u8 {
    let acc = row[0] * sample[0] + row[1] * sample[1] + row[2] * sample[2] + bias;
    (acc >> FRACTION_BITS).clamp(0, u8::MAX as i32) as u8
}
