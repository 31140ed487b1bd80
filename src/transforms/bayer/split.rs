use ndarray::{Array2, ArrayBase, Data, Ix2, s};
use tracing::{debug, instrument};

use crate::transforms::bayer::pattern::BayerPattern;
use crate::transforms::common::error::{Result, TransformError};

/// Split a mosaic into its `[R, Gr, Gb, B]` sub-arrays, each `(H/2, W/2)`.
///
/// Odd heights or widths are rejected rather than truncated, so every sample
/// of the mosaic ends up in exactly one channel.
#[instrument(skip(mosaic), fields(shape = ?mosaic.dim()))]
pub fn split_bayer<A, S>(mosaic: &ArrayBase<S, Ix2>, pattern: BayerPattern) -> Result<[Array2<A>; 4]>
where
    A: Clone,
    S: Data<Elem = A>,
{
    let (height, width) = mosaic.dim();
    if height % 2 != 0 || width % 2 != 0 {
        return Err(TransformError::InvalidArgument(format!(
            "Bayer mosaic must have even dimensions, got {height}x{width}"
        )));
    }

    let channels = pattern
        .offsets()
        .map(|offset| {
            // Clamped so an empty axis slices to empty instead of past the end
            let (y0, x0) = (offset.y.min(height), offset.x.min(width));
            mosaic.slice(s![y0..;2, x0..;2]).to_owned()
        });

    debug!(%pattern, channel_shape = ?(height / 2, width / 2), "Split Bayer mosaic");
    Ok(channels)
}

/// Inverse of [`split_bayer`]: interleave `[R, Gr, Gb, B]` back into one mosaic.
#[instrument(skip(channels), fields(shape = ?channels[0].dim()))]
pub fn reconstruct_bayer<A, S>(channels: &[ArrayBase<S, Ix2>; 4], pattern: BayerPattern) -> Result<Array2<A>>
where
    A: Clone + Default,
    S: Data<Elem = A>,
{
    let (height, width) = channels[0].dim();
    if let Some(other) = channels.iter().find(|c| c.dim() != (height, width)) {
        return Err(TransformError::ShapeMismatch(format!(
            "Bayer channels must share one shape, got {:?} and {:?}",
            (height, width),
            other.dim()
        )));
    }

    let mut mosaic = Array2::default((2 * height, 2 * width));
    for (offset, channel) in pattern.offsets().into_iter().zip(channels) {
        let (y0, x0) = (offset.y.min(2 * height), offset.x.min(2 * width));
        mosaic
            .slice_mut(s![y0..;2, x0..;2])
            .assign(channel);
    }

    debug!(%pattern, mosaic_shape = ?mosaic.dim(), "Reconstructed Bayer mosaic");
    Ok(mosaic)
}
