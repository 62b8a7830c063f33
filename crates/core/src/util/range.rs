use derive_more::Display;
use std::{
    fmt::{Debug, Display},
    ops,
};

/// A numeric type that we can build ranges out of
pub trait Rangeable:
    Copy
    + Debug
    + Display
    + PartialOrd
    + ops::Add<Self, Output = Self>
    + ops::Sub<Self, Output = Self>
    + ops::Mul<Self, Output = Self>
    + ops::Div<Self, Output = Self>
{
    fn zero() -> Self;
}

impl Rangeable for f32 {
    fn zero() -> Self {
        0.0
    }
}

impl Rangeable for f64 {
    fn zero() -> Self {
        0.0
    }
}

/// A range between two numeric values, inclusive on both ends.
#[derive(Copy, Clone, Debug, Display, PartialEq)]
#[display(fmt = "[{}, {}]", min, max)]
pub struct NumRange<T: Rangeable> {
    pub min: T,
    pub max: T,
}

impl<T: Rangeable> NumRange<T> {
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// Max minus min
    pub fn span(&self) -> T {
        self.max - self.min
    }

    /// Check if a value is in this range. Ranges are inclusive on both ends.
    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }

    /// Map a value from this range to the range [0, 1]. If the span of this
    /// range is zero, there's no meaningful answer, so we return zero.
    pub fn normalize(&self, value: T) -> T {
        let span = self.span();
        if span > T::zero() {
            (value - self.min) / span
        } else {
            T::zero()
        }
    }

    /// Force a value into this range. If it's outside the range, return the
    /// bound (lower or upper) that's closest to the value.
    pub fn clamp(&self, value: T) -> T {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }
}
