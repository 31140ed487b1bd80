//! Padding configuration types

use crate::transforms::common::error::{Result, TransformError};

/// Boundary-extension rules, named after their `numpy.pad` counterparts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PadMode {
    /// Mirror about the edge sample without repeating it: `d c b | a b c d | c b a`
    #[default]
    Reflect,
    /// Mirror including the edge sample: `c b a | a b c d | d c b`
    Symmetric,
    /// Repeat the edge sample: `a a a | a b c d | d d d`
    Edge,
    /// Periodic extension: `b c d | a b c d | a b c`
    Wrap,
    /// Fill with the element's default value (zero for numbers)
    Constant,
}

/// How many samples to add on each side of the two spatial axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Margins {
    /// Same margin on all four sides
    Uniform(usize),
    /// One margin for top and bottom, one for left and right
    Symmetric { vertical: usize, horizontal: usize },
    /// Independent margin per side
    PerSide { top: usize, bottom: usize, left: usize, right: usize },
}

impl Margins {
    /// `(top, bottom, left, right)`
    pub fn sides(&self) -> (usize, usize, usize, usize) {
        match *self {
            Self::Uniform(m) => (m, m, m, m),
            Self::Symmetric { vertical, horizontal } => (vertical, vertical, horizontal, horizontal),
            Self::PerSide { top, bottom, left, right } => (top, bottom, left, right),
        }
    }
}

impl From<usize> for Margins {
    fn from(margin: usize) -> Self {
        Self::Uniform(margin)
    }
}

impl From<(usize, usize)> for Margins {
    fn from((vertical, horizontal): (usize, usize)) -> Self {
        Self::Symmetric { vertical, horizontal }
    }
}

impl From<[usize; 2]> for Margins {
    fn from([vertical, horizontal]: [usize; 2]) -> Self {
        Self::Symmetric { vertical, horizontal }
    }
}

impl From<[usize; 4]> for Margins {
    fn from([top, bottom, left, right]: [usize; 4]) -> Self {
        Self::PerSide { top, bottom, left, right }
    }
}

impl TryFrom<&[usize]> for Margins {
    type Error = TransformError;

    fn try_from(margins: &[usize]) -> Result<Self> {
        match *margins {
            [m] => Ok(Self::Uniform(m)),
            [vertical, horizontal] => Ok(Self::Symmetric { vertical, horizontal }),
            [top, bottom, left, right] => Ok(Self::PerSide { top, bottom, left, right }),
            _ => Err(TransformError::NotSupported(format!(
                "margins must have 1, 2 or 4 elements, got {}",
                margins.len()
            ))),
        }
    }
}
