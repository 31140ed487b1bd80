//! Common utilities module
//!
//! Error type and element model shared by every transform.

pub mod error;
pub mod element;

pub use error::{TransformError, Result};
pub use element::{DType, Element};
