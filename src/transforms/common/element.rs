//! Element types accepted by the transforms

use std::fmt;
use std::ops::AddAssign;

use num_traits::{AsPrimitive, Zero};

/// Runtime tag for an array's element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::F32 => "f32",
            Self::F64 => "f64",
        };
        f.write_str(name)
    }
}

/// A numeric sample type.
///
/// Sums of samples run in [`Element::Accumulator`]: `i128` for integers, which
/// holds any sum of 64-bit samples exactly, and `f64` for floats.
pub trait Element: Copy + Default + PartialOrd + fmt::Debug + AsPrimitive<i32> + 'static {
    const DTYPE: DType;

    type Accumulator: Copy + Zero + AddAssign + fmt::Debug;

    fn widen(self) -> Self::Accumulator;

    /// `sum / count` cast back to the element type; integers truncate toward zero.
    fn mean_of(sum: Self::Accumulator, count: usize) -> Self;
}

macro_rules! impl_element {
    ($acc:ty; $($ty:ty => $dtype:ident),* $(,)?) => {
        $(
            impl Element for $ty {
                const DTYPE: DType = DType::$dtype;

                type Accumulator = $acc;

                #[inline]
                fn widen(self) -> $acc {
                    self as $acc
                }

                #[inline]
                fn mean_of(sum: $acc, count: usize) -> Self {
                    (sum / count as $acc) as $ty
                }
            }
        )*
    };
}

impl_element! {
    i128;
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
}

impl_element! {
    f64;
    f32 => F32,
    f64 => F64,
}
