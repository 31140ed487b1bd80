use std::fmt;
use std::str::FromStr;

use crate::transforms::common::error::{Result, TransformError};

/// The four 2x2 Bayer layouts, named by their top-left cell read row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BayerPattern {
    Gbrg,
    Rggb,
    Bggr,
    Grbg,
}

/// Color sites of a Bayer cell. Channel arrays always come in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BayerChannel {
    R = 0,
    Gr = 1,
    Gb = 2,
    B = 3,
}

impl BayerChannel {
    pub const ALL: [BayerChannel; 4] = [Self::R, Self::Gr, Self::Gb, Self::B];
}

impl fmt::Display for BayerChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::R => f.write_str("R"),
            Self::Gr => f.write_str("Gr"),
            Self::Gb => f.write_str("Gb"),
            Self::B => f.write_str("B"),
        }
    }
}

/// Column (`x`) and row (`y`) of a channel inside the 2x2 cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellOffset {
    pub x: usize,
    pub y: usize,
}

const fn at(x: usize, y: usize) -> CellOffset {
    CellOffset { x, y }
}

impl BayerPattern {
    pub const ALL: [BayerPattern; 4] = [Self::Gbrg, Self::Rggb, Self::Bggr, Self::Grbg];

    /// Offsets of the R, Gr, Gb and B sites, in that order.
    pub const fn offsets(self) -> [CellOffset; 4] {
        match self {
            Self::Gbrg => [at(0, 1), at(1, 1), at(0, 0), at(1, 0)],
            Self::Rggb => [at(0, 0), at(1, 0), at(0, 1), at(1, 1)],
            Self::Bggr => [at(1, 1), at(0, 1), at(1, 0), at(0, 0)],
            Self::Grbg => [at(1, 0), at(0, 0), at(1, 1), at(0, 1)],
        }
    }

    pub const fn offset(self, channel: BayerChannel) -> CellOffset {
        self.offsets()[channel as usize]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Gbrg => "gbrg",
            Self::Rggb => "rggb",
            Self::Bggr => "bggr",
            Self::Grbg => "grbg",
        }
    }
}

impl fmt::Display for BayerPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BayerPattern {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|pattern| pattern.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                TransformError::InvalidArgument(format!(
                    "unknown Bayer pattern '{s}', expected one of gbrg, rggb, bggr, grbg"
                ))
            })
    }
}

impl From<BayerPattern> for ::bayer::CFA {
    fn from(pattern: BayerPattern) -> Self {
        match pattern {
            BayerPattern::Gbrg => ::bayer::CFA::GBRG,
            BayerPattern::Rggb => ::bayer::CFA::RGGB,
            BayerPattern::Bggr => ::bayer::CFA::BGGR,
            BayerPattern::Grbg => ::bayer::CFA::GRBG,
        }
    }
}

/// Look up the R, Gr, Gb and B offsets for a pattern name (case-insensitive).
pub fn bayer_offsets(name: &str) -> Result<[CellOffset; 4]> {
    Ok(name.parse::<BayerPattern>()?.offsets())
}
