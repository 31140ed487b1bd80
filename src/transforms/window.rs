//! Window shifting over a padded array

mod shift;

pub use shift::{Shifts, WindowSize, shift_array};
