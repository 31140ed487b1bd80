use std::iter::FusedIterator;

use ndarray::{ArrayBase, ArrayView, Axis, Data, Dimension, Slice};
use tracing::{debug, instrument};

use crate::transforms::common::error::{Result, TransformError, ensure_spatial};

/// Odd window extent as `(height, width)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    pub height: usize,
    pub width: usize,
}

impl WindowSize {
    pub fn square(size: usize) -> Self {
        Self { height: size, width: size }
    }

    /// Number of positions in the window.
    pub fn area(&self) -> usize {
        self.height * self.width
    }

    /// Half extents `(ry, rx)`, i.e. the padding each side needs.
    pub fn radius(&self) -> (usize, usize) {
        (self.height / 2, self.width / 2)
    }

    pub fn validate(&self) -> Result<()> {
        if self.height % 2 == 0 || self.width % 2 == 0 {
            return Err(TransformError::InvalidArgument(format!(
                "window size must be odd, got {}x{}",
                self.height, self.width
            )));
        }
        Ok(())
    }
}

impl From<usize> for WindowSize {
    fn from(size: usize) -> Self {
        Self::square(size)
    }
}

impl From<(usize, usize)> for WindowSize {
    fn from((height, width): (usize, usize)) -> Self {
        Self { height, width }
    }
}

/// Every shifted crop of a padded array, row-major over the window.
///
/// Items borrow the padded buffer, nothing is copied. The iterator cannot
/// be rewound; call [`shift_array`] again for a fresh pass.
pub struct Shifts<'a, A, D: Dimension> {
    padded: ArrayView<'a, A, D>,
    window: WindowSize,
    height: usize,
    width: usize,
    position: usize,
}

impl<'a, A, D: Dimension> Shifts<'a, A, D> {
    /// Spatial extent `(height, width)` of each crop.
    pub fn crop_dim(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn window(&self) -> WindowSize {
        self.window
    }
}

impl<'a, A, D: Dimension> Iterator for Shifts<'a, A, D> {
    type Item = ArrayView<'a, A, D>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.window.area() {
            return None;
        }
        let dy = self.position / self.window.width;
        let dx = self.position % self.window.width;
        self.position += 1;

        let (height, width) = (self.height, self.width);
        let mut crop = self.padded.clone();
        crop.slice_each_axis_inplace(|desc| match desc.axis.index() {
            0 => Slice::from(dy..dy + height),
            1 => Slice::from(dx..dx + width),
            _ => Slice::from(..),
        });
        Some(crop)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.window.area() - self.position;
        (remaining, Some(remaining))
    }
}

impl<A, D: Dimension> ExactSizeIterator for Shifts<'_, A, D> {}

impl<A, D: Dimension> FusedIterator for Shifts<'_, A, D> {}

/// Shift a padded array within `window`.
///
/// The padded array is expected to carry exactly `window.radius()` samples of
/// padding on each side; each crop then has the unpadded extent and the crop
/// at the window's center is the unpadded array itself.
///
/// # Examples
///
/// ```
/// use isp_helpers_rs::transforms::{pad, shift_array, Margins, PadMode};
/// use ndarray::array;
///
/// let input = array![[1, 2], [3, 4]];
/// let padded = pad(&input, Margins::from(1), PadMode::Reflect).unwrap();
/// let shifts: Vec<_> = shift_array(&padded, 3).unwrap().collect();
///
/// assert_eq!(shifts.len(), 9);
/// assert_eq!(shifts[4], input);
/// ```
#[instrument(skip(padded, window), fields(shape = ?padded.shape()))]
pub fn shift_array<'a, A, S, D>(
    padded: &'a ArrayBase<S, D>,
    window: impl Into<WindowSize>,
) -> Result<Shifts<'a, A, D>>
where
    S: Data<Elem = A>,
    D: Dimension,
{
    let window = window.into();
    window.validate()?;
    ensure_spatial(padded.ndim(), "shift_array")?;

    let (padded_height, padded_width) = (padded.len_of(Axis(0)), padded.len_of(Axis(1)));
    if padded_height < window.height || padded_width < window.width {
        return Err(TransformError::InvalidArgument(format!(
            "padded array {padded_height}x{padded_width} is smaller than the {}x{} window",
            window.height, window.width
        )));
    }

    let height = padded_height - window.height + 1;
    let width = padded_width - window.width + 1;
    debug!(?window, crop = ?(height, width), "Shifting array");

    Ok(Shifts {
        padded: padded.view(),
        window,
        height,
        width,
        position: 0,
    })
}

#[cfg(test)]
mod tests {
    use ndarray::{Array2, Array3, array, s};

    use super::*;
    use crate::transforms::padding::{Margins, PadMode, pad};

    #[test]
    fn test_count_matches_window_area() {
        let padded = Array2::<u8>::zeros((7, 9));
        let shifts = shift_array(&padded, (3, 5)).unwrap();
        assert_eq!(shifts.len(), 15);
        assert_eq!(shifts.crop_dim(), (5, 5));
        assert_eq!(shifts.window(), WindowSize { height: 3, width: 5 });
        assert_eq!(shifts.count(), 15);
    }

    #[test]
    fn test_center_shift_is_original() {
        let input = Array2::from_shape_fn((4, 6), |(y, x)| (y * 6 + x) as i32);
        for radius in 1..=3 {
            let size = 2 * radius + 1;
            let padded = pad(&input, Margins::from(radius), PadMode::Reflect).unwrap();
            let center = shift_array(&padded, size)
                .unwrap()
                .nth(radius * size + radius)
                .unwrap();
            assert_eq!(center, input, "center mismatch for window {size}");
        }
    }

    #[test]
    fn test_rectangular_window_center() {
        let input = Array2::from_shape_fn((5, 5), |(y, x)| (y * 5 + x) as u16);
        let window = WindowSize::from((3, 5));
        assert_eq!(window.radius(), (1, 2));

        let padded = pad(&input, Margins::from(window.radius()), PadMode::Symmetric).unwrap();
        let shifts: Vec<_> = shift_array(&padded, window).unwrap().collect();

        assert_eq!(shifts.len(), 15);
        assert_eq!(shifts[5 + 2], input);
    }

    #[test]
    fn test_row_major_order() {
        let padded = Array2::from_shape_fn((4, 4), |(y, x)| (y * 4 + x) as u32);
        let shifts: Vec<_> = shift_array(&padded, 3).unwrap().collect();

        assert_eq!(shifts[0], padded.slice(s![0..2, 0..2]));
        assert_eq!(shifts[1], padded.slice(s![0..2, 1..3]));
        assert_eq!(shifts[3], padded.slice(s![1..3, 0..2]));
        assert_eq!(shifts[8], padded.slice(s![2..4, 2..4]));
    }

    #[test]
    fn test_trailing_axes_preserved() {
        let input = Array3::from_shape_fn((3, 3, 2), |(y, x, c)| (y * 10 + x + 100 * c) as i16);
        let padded = pad(&input, Margins::from(1), PadMode::Edge).unwrap();

        for crop in shift_array(&padded, 3).unwrap() {
            assert_eq!(crop.shape(), &[3, 3, 2]);
        }
        let center = shift_array(&padded, 3).unwrap().nth(4).unwrap();
        assert_eq!(center, input);
    }

    #[test]
    fn test_even_window_rejected() {
        let padded = Array2::<u8>::zeros((5, 5));
        assert!(matches!(
            shift_array(&padded, 4),
            Err(TransformError::InvalidArgument(_))
        ));
        assert!(matches!(
            shift_array(&padded, (3, 2)),
            Err(TransformError::InvalidArgument(_))
        ));
        assert!(matches!(
            shift_array(&padded, 0),
            Err(TransformError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_window_larger_than_array() {
        let padded = array![[1, 2], [3, 4]];
        assert!(matches!(
            shift_array(&padded, 3),
            Err(TransformError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_fresh_pass_after_exhaustion() {
        let padded = Array2::<u8>::ones((3, 3));
        let mut shifts = shift_array(&padded, 3).unwrap();
        assert_eq!(shifts.by_ref().count(), 9);
        assert!(shifts.next().is_none());
        assert_eq!(shift_array(&padded, 3).unwrap().count(), 9);
    }
}
