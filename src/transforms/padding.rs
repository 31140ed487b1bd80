//! Boundary padding of the two spatial axes

mod types;
mod pad;

pub use types::{Margins, PadMode};
pub use pad::pad;
