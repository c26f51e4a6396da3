use static_assertions::const_assert;

use crate::error::{Error, Result};

pub(crate) mod imp;
mod dynarr;
mod slice_range;

pub use dynarr::*;
pub use slice_range::*;

//--------------------------------------------------------------

macro_rules! impl_slice_partial_eq_generic {
    ([$($vars:tt)*] $lhs:ty, $rhs:ty) => {
        impl<T, U, $($vars)*> PartialEq<$rhs> for $lhs where
            T : PartialEq<U>
        {
            #[inline]
            fn eq(&self, other: &$rhs) -> bool { self[..] == other[..] }
            #[inline]
            #[allow(clippy::partialeq_ne_impl)]
            fn ne(&self, other: &$rhs) -> bool { self[..] != other[..] }
        }
    };
}
use impl_slice_partial_eq_generic;

//--------------------------------------------------------------

/// Multiplier used to grow and shrink the backing store of a [`DynArr`].
///
/// Growing multiplies the capacity by the factor, shrinking divides it.
/// A backing store is shrunk once its load drops to `1 / factor²`, so a single removal never causes a grow/shrink ping-pong.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct GrowthFactor(usize);

impl GrowthFactor {
    /// Smallest factor that still grows a backing store of capacity 1.
    pub const MIN: usize = 2;
    /// Factor used by [`DynArr::new`].
    pub const DEFAULT: GrowthFactor = GrowthFactor(2);

    /// Create a new growth factor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGrowthFactor`] if `factor` is smaller than [`GrowthFactor::MIN`].
    pub const fn new(factor: usize) -> Result<Self> {
        if factor < Self::MIN {
            Err(Error::InvalidGrowthFactor(factor))
        } else {
            Ok(Self(factor))
        }
    }

    /// Get the raw factor.
    pub const fn get(self) -> usize {
        self.0
    }

    /// Calculate the capacity after growing a full backing store of `capacity` slots.
    ///
    /// Returns `Err(Error::CapacityOverflow)` if the capacity were to overflow
    pub const fn grow(self, capacity: usize) -> Result<usize> {
        match capacity.checked_mul(self.0) {
            Some(new_cap) if new_cap <= isize::MAX as usize => Ok(new_cap),
            _ => Err(Error::CapacityOverflow),
        }
    }

    /// Calculate the capacity after shrinking a backing store of `capacity` slots, never less than 1.
    pub const fn shrink(self, capacity: usize) -> usize {
        let new_cap = capacity / self.0;
        if new_cap == 0 { 1 } else { new_cap }
    }

    /// Check if a backing store of `capacity` slots holding `len` elements is sparse enough to shrink.
    pub const fn should_shrink(self, len: usize, capacity: usize) -> bool {
        capacity > self.0 && len <= capacity / self.0.saturating_mul(self.0)
    }
}

impl Default for GrowthFactor {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<usize> for GrowthFactor {
    type Error = Error;

    fn try_from(factor: usize) -> Result<Self> {
        Self::new(factor)
    }
}

const_assert!(GrowthFactor::DEFAULT.get() >= GrowthFactor::MIN);
