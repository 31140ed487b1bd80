use ndarray::{Array, ArrayBase, Axis, Data, RemoveAxis, Slice};
use tracing::{debug, instrument};

use crate::transforms::common::error::{Result, TransformError, ensure_spatial};
use crate::transforms::padding::types::{Margins, PadMode};

/// Pad the first two axes of `array`; trailing axes are left untouched.
///
/// Margins that the chosen mode cannot fill from real samples fail with
/// [`TransformError::InvalidArgument`]:
/// `Reflect` and `Symmetric` need `margin <= len`, and `Edge`/`Wrap` need a
/// non-empty axis.
///
/// # Examples
///
/// ```
/// use isp_helpers_rs::transforms::{pad, Margins, PadMode};
/// use ndarray::array;
///
/// let padded = pad(&array![[1, 2, 3]], Margins::from((0, 2)), PadMode::Reflect).unwrap();
/// assert_eq!(padded, array![[3, 2, 1, 2, 3, 2, 1]]);
/// ```
#[instrument(skip(array), fields(shape = ?array.shape()))]
pub fn pad<A, S, D>(array: &ArrayBase<S, D>, margins: Margins, mode: PadMode) -> Result<Array<A, D>>
where
    A: Clone + Default,
    S: Data<Elem = A>,
    D: RemoveAxis,
{
    ensure_spatial(array.ndim(), "pad")?;

    let (top, bottom, left, right) = margins.sides();
    let (height, width) = (array.len_of(Axis(0)), array.len_of(Axis(1)));
    check_margins(mode, top, bottom, height, "vertical")?;
    check_margins(mode, left, right, width, "horizontal")?;

    let padded = match mode {
        PadMode::Constant => {
            let mut dim = array.raw_dim();
            dim[0] += top + bottom;
            dim[1] += left + right;

            let mut padded = Array::default(dim);
            padded
                .slice_each_axis_mut(|desc| match desc.axis.index() {
                    0 => Slice::from(top..top + height),
                    1 => Slice::from(left..left + width),
                    _ => Slice::from(..),
                })
                .assign(array);
            padded
        }
        _ => {
            let rows = index_map(mode, top, bottom, height);
            let cols = index_map(mode, left, right, width);
            array.select(Axis(0), &rows).select(Axis(1), &cols)
        }
    };

    debug!(?mode, padded_shape = ?padded.shape(), "Padded array");
    Ok(padded)
}

fn check_margins(mode: PadMode, before: usize, after: usize, len: usize, axis: &str) -> Result<()> {
    let margin = before.max(after);
    if margin == 0 {
        return Ok(());
    }

    let limit = match mode {
        PadMode::Constant => return Ok(()),
        PadMode::Reflect | PadMode::Symmetric => len,
        PadMode::Edge | PadMode::Wrap if len > 0 => return Ok(()),
        PadMode::Edge | PadMode::Wrap => 0,
    };

    if margin > limit {
        return Err(TransformError::InvalidArgument(format!(
            "{mode:?} padding of {margin} exceeds the {axis} axis length {len} (limit {limit})"
        )));
    }
    Ok(())
}

/// Source index along one axis for every position of the padded axis.
fn index_map(mode: PadMode, before: usize, after: usize, len: usize) -> Vec<usize> {
    (0..before + len + after)
        .map(|p| source_index(mode, p as isize - before as isize, len as isize))
        .collect()
}

fn source_index(mode: PadMode, i: isize, len: isize) -> usize {
    let src = match mode {
        _ if (0..len).contains(&i) => i,
        PadMode::Reflect if len == 1 => 0,
        PadMode::Reflect => {
            // Bounces back and forth with period 2 * (len - 1)
            let period = 2 * (len - 1);
            let folded = i.rem_euclid(period);
            if folded < len { folded } else { period - folded }
        }
        PadMode::Symmetric if i < 0 => -i - 1,
        PadMode::Symmetric => 2 * len - 1 - i,
        PadMode::Edge => i.clamp(0, len - 1),
        PadMode::Wrap => i.rem_euclid(len),
        // filled separately
        PadMode::Constant => 0,
    };
    src as usize
}

#[cfg(test)]
mod tests {
    use ndarray::{Array3, array};

    use super::*;

    #[test]
    fn test_reflect_uniform() {
        let input = array![
            [1, 2, 3],
            [4, 5, 6],
            [7, 8, 9],
        ];
        let padded = pad(&input, Margins::from(1), PadMode::Reflect).unwrap();
        let expected = array![
            [5, 4, 5, 6, 5],
            [2, 1, 2, 3, 2],
            [5, 4, 5, 6, 5],
            [8, 7, 8, 9, 8],
            [5, 4, 5, 6, 5],
        ];
        assert_eq!(padded, expected);
    }

    #[test]
    fn test_default_mode_is_reflect() {
        assert_eq!(PadMode::default(), PadMode::Reflect);
    }

    #[test]
    fn test_per_side_margins() {
        let input = array![[1, 2], [3, 4]];
        let padded = pad(&input, Margins::from([1, 0, 0, 1]), PadMode::Edge).unwrap();
        let expected = array![
            [1, 2, 2],
            [1, 2, 2],
            [3, 4, 4],
        ];
        assert_eq!(padded, expected);
    }

    #[test]
    fn test_symmetric_wrap_constant_rows() {
        let input = array![[1, 2, 3]];
        let margins = Margins::from((0, 2));

        let symmetric = pad(&input, margins, PadMode::Symmetric).unwrap();
        assert_eq!(symmetric, array![[2, 1, 1, 2, 3, 3, 2]]);

        let wrap = pad(&input, margins, PadMode::Wrap).unwrap();
        assert_eq!(wrap, array![[2, 3, 1, 2, 3, 1, 2]]);

        let constant = pad(&input, margins, PadMode::Constant).unwrap();
        assert_eq!(constant, array![[0, 0, 1, 2, 3, 0, 0]]);
    }

    #[test]
    fn test_trailing_axes_are_not_padded() {
        let input = Array3::from_shape_fn((2, 3, 4), |(y, x, c)| (y * 100 + x * 10 + c) as i32);
        let padded = pad(&input, Margins::from(1), PadMode::Reflect).unwrap();

        assert_eq!(padded.shape(), &[4, 5, 4]);
        // Corner (0, 0) mirrors source (1, 1) across both edges.
        for c in 0..4 {
            assert_eq!(padded[[0, 0, c]], input[[1, 1, c]]);
            assert_eq!(padded[[1, 1, c]], input[[0, 0, c]]);
        }

        let constant = pad(&input, Margins::from([0, 1, 2, 0]), PadMode::Constant).unwrap();
        assert_eq!(constant.shape(), &[3, 5, 4]);
        assert_eq!(constant[[0, 2, 3]], input[[0, 0, 3]]);
        assert_eq!(constant[[2, 4, 0]], 0);
    }

    #[test]
    fn test_slice_margins() {
        assert_eq!(Margins::try_from(&[2usize][..]).unwrap(), Margins::Uniform(2));
        assert_eq!(
            Margins::try_from(&[1usize, 2][..]).unwrap().sides(),
            (1, 1, 2, 2)
        );
        assert_eq!(
            Margins::try_from(&[1usize, 2, 3, 4][..]).unwrap().sides(),
            (1, 2, 3, 4)
        );
    }

    #[test]
    fn test_three_element_margins_not_supported() {
        let result = Margins::try_from(&[1usize, 2, 3][..]);
        assert!(matches!(result, Err(TransformError::NotSupported(_))));

        let empty: &[usize] = &[];
        let result = Margins::try_from(empty);
        assert!(matches!(result, Err(TransformError::NotSupported(_))));
    }

    #[test]
    fn test_reflect_margin_up_to_axis_length() {
        let input = array![[1, 2, 3], [4, 5, 6]];

        let padded = pad(&input, Margins::from((2, 3)), PadMode::Reflect).unwrap();
        assert_eq!(padded.dim(), (6, 9));
        // Rows -2 and -1 fold back onto rows 0 and 1
        assert_eq!(padded.row(0), padded.row(2));
        assert_eq!(padded.row(1), padded.row(3));

        let result = pad(&input, Margins::from((3, 0)), PadMode::Reflect);
        assert!(matches!(result, Err(TransformError::InvalidArgument(_))));

        let result = pad(&input, Margins::from((0, 4)), PadMode::Reflect);
        assert!(matches!(result, Err(TransformError::InvalidArgument(_))));
    }

    #[test]
    fn test_reflect_margin_equal_to_length_bounces() {
        let input = array![[1, 2, 3]];
        let padded = pad(&input, Margins::from((0, 3)), PadMode::Reflect).unwrap();
        assert_eq!(padded, array![[2, 3, 2, 1, 2, 3, 2, 1, 2]]);
    }

    #[test]
    fn test_reflect_single_sample_axis() {
        let input = array![[7, 8]];
        let padded = pad(&input, Margins::from((1, 0)), PadMode::Reflect).unwrap();
        assert_eq!(padded, array![[7, 8], [7, 8], [7, 8]]);
    }

    #[test]
    fn test_symmetric_allows_full_axis() {
        let input = array![[1, 2, 3]];
        assert!(pad(&input, Margins::from((1, 3)), PadMode::Symmetric).is_ok());

        let result = pad(&input, Margins::from((2, 0)), PadMode::Symmetric);
        assert!(matches!(result, Err(TransformError::InvalidArgument(_))));
    }

    #[test]
    fn test_wrap_and_edge_on_empty_axis() {
        let input = ndarray::Array2::<u8>::zeros((0, 3));
        assert!(pad(&input, Margins::from((0, 1)), PadMode::Wrap).is_ok());

        let result = pad(&input, Margins::from((1, 0)), PadMode::Edge);
        assert!(matches!(result, Err(TransformError::InvalidArgument(_))));

        let constant = pad(&input, Margins::from(1), PadMode::Constant).unwrap();
        assert_eq!(constant.dim(), (2, 5));
    }

    #[test]
    fn test_zero_margin_copies() {
        let input = array![[1.5f32, 2.5]];
        let padded = pad(&input, Margins::from(0), PadMode::Reflect).unwrap();
        assert_eq!(padded, input);
    }

    #[test]
    fn test_one_dimensional_input_rejected() {
        let input = array![1, 2, 3];
        let result = pad(&input, Margins::from(1), PadMode::Reflect);
        assert!(matches!(result, Err(TransformError::ShapeMismatch(_))));
    }
}
