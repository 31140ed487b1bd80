use ndarray::{Array, ArrayBase, Data, RemoveAxis, Zip};
use tracing::{debug, instrument};

use crate::transforms::common::element::Element;
use crate::transforms::common::error::{Result, TransformError};
use crate::transforms::filter::types::MeanFilterConfig;
use crate::transforms::padding::{Margins, pad};
use crate::transforms::window::{WindowSize, shift_array};

/// Box filter over the two spatial axes; trailing axes are filtered independently.
#[derive(Debug, Clone)]
pub struct MeanFilter {
    config: MeanFilterConfig,
}

impl MeanFilter {
    pub fn new(config: MeanFilterConfig) -> Result<Self> {
        if config.filter_size % 2 == 0 {
            return Err(TransformError::InvalidArgument(format!(
                "filter size must be odd, got {}",
                config.filter_size
            )));
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &MeanFilterConfig {
        &self.config
    }

    /// Average every `filter_size x filter_size` neighborhood.
    ///
    /// Sums run in the element's accumulator type, so they are exact for
    /// integers; the mean truncates toward zero for integer types.
    #[instrument(skip(self, array), fields(shape = ?array.shape(), filter_size = self.config.filter_size))]
    pub fn apply<A, S, D>(&self, array: &ArrayBase<S, D>) -> Result<Array<A, D>>
    where
        A: Element,
        S: Data<Elem = A>,
        D: RemoveAxis,
    {
        let window = WindowSize::square(self.config.filter_size);
        let (vertical, horizontal) = window.radius();
        let padded = pad(array, Margins::Symmetric { vertical, horizontal }, self.config.pad_mode)?;

        let mut sum = Array::<A::Accumulator, D>::zeros(array.raw_dim());
        for shifted in shift_array(&padded, window)? {
            Zip::from(&mut sum)
                .and(&shifted)
                .for_each(|acc, &value| *acc += value.widen());
        }

        let area = window.area();
        debug!(dtype = %A::DTYPE, "Averaging {} shifted views", area);
        Ok(sum.mapv(|acc| A::mean_of(acc, area)))
    }
}

/// Mean filter with reflect padding, keeping the input's element type.
///
/// # Examples
///
/// ```
/// use isp_helpers_rs::transforms::mean_filter;
/// use ndarray::Array2;
///
/// let flat = Array2::<u8>::from_elem((4, 4), 42);
/// assert_eq!(mean_filter(&flat, 3).unwrap(), flat);
/// ```
pub fn mean_filter<A, S, D>(array: &ArrayBase<S, D>, filter_size: usize) -> Result<Array<A, D>>
where
    A: Element,
    S: Data<Elem = A>,
    D: RemoveAxis,
{
    let config = MeanFilterConfig::builder().filter_size(filter_size).build();
    MeanFilter::new(config)?.apply(array)
}
