use crate::algorithms::{dispatch, float_normalizer};
use crate::{Observer, SortConfig, SortError, Workspace};

mod sealed {
    pub trait Sealed {}
}

/// Natural ordering of a fixed-width element kind.
///
/// The engine only ever uses `<`, `>`, `<=`, `>=` and `==` of [`PartialOrd`]; for
/// floating kinds NaN is removed before any comparison takes place.
pub trait SortKey: Copy + PartialOrd + sealed::Sealed {}

/// Kinds whose whole value domain can be histogrammed.
pub trait BoundedKey: SortKey {
    const DOMAIN_BITS: u32;
    const DOMAIN: usize = 1 << Self::DOMAIN_BITS;

    /// Position of `self` in ascending value order, in `0..DOMAIN`.
    fn rank(self) -> usize;
    fn from_rank(rank: usize) -> Self;
}

pub trait FloatKey: SortKey {
    const ZERO: Self;
    const NEG_ZERO: Self;

    fn is_nan(self) -> bool;
    /// Raw sign bit; the only way to tell `-0.0` from `0.0`.
    fn has_sign_bit(self) -> bool;
}

/// Element kinds accepted by [`crate::sort`] and friends.
pub trait Element: SortKey {
    /// Sorts the half-open range `lo..hi` with the strategy of this kind.
    #[doc(hidden)]
    fn dispatch<O: Observer + ?Sized>(
        seq: &mut [Self],
        lo: usize,
        hi: usize,
        workspace: Option<Workspace<'_, Self>>,
        config: &SortConfig,
        observer: &mut O,
    ) -> Result<(), SortError>;
}

macro_rules! impl_general {
    ($($t:ty),* $(,)?) => {$(
        impl sealed::Sealed for $t {}
        impl SortKey for $t {}

        impl Element for $t {
            #[inline]
            fn dispatch<O: Observer + ?Sized>(
                seq: &mut [Self],
                lo: usize,
                hi: usize,
                workspace: Option<Workspace<'_, Self>>,
                config: &SortConfig,
                observer: &mut O,
            ) -> Result<(), SortError> {
                dispatch::sort_general(seq, lo, hi, workspace, config, observer)
            }
        }
    )*};
}

macro_rules! impl_bounded {
    ($($t:ty => $bits:expr, $unsigned:ty, $flip:expr);* $(;)?) => {$(
        impl sealed::Sealed for $t {}
        impl SortKey for $t {}

        impl BoundedKey for $t {
            const DOMAIN_BITS: u32 = $bits;

            #[inline]
            fn rank(self) -> usize {
                ((self as $unsigned) ^ $flip) as usize
            }

            #[inline]
            fn from_rank(rank: usize) -> Self {
                ((rank as $unsigned) ^ $flip) as $t
            }
        }

        impl Element for $t {
            #[inline]
            fn dispatch<O: Observer + ?Sized>(
                seq: &mut [Self],
                lo: usize,
                hi: usize,
                workspace: Option<Workspace<'_, Self>>,
                config: &SortConfig,
                observer: &mut O,
            ) -> Result<(), SortError> {
                dispatch::sort_bounded(seq, lo, hi, workspace, config, observer)
            }
        }
    )*};
}

macro_rules! impl_float {
    ($($t:ty),* $(,)?) => {$(
        impl sealed::Sealed for $t {}
        impl SortKey for $t {}

        impl FloatKey for $t {
            const ZERO: Self = 0.0;
            const NEG_ZERO: Self = -0.0;

            #[inline]
            fn is_nan(self) -> bool {
                <$t>::is_nan(self)
            }

            #[inline]
            fn has_sign_bit(self) -> bool {
                self.is_sign_negative()
            }
        }

        impl Element for $t {
            #[inline]
            fn dispatch<O: Observer + ?Sized>(
                seq: &mut [Self],
                lo: usize,
                hi: usize,
                workspace: Option<Workspace<'_, Self>>,
                config: &SortConfig,
                observer: &mut O,
            ) -> Result<(), SortError> {
                float_normalizer::sort(seq, lo, hi, workspace, config, observer)
            }
        }
    )*};
}

impl_general!(i32, u32, i64, u64, i128, u128, isize, usize);

// Signed kinds flip the sign bit so that ranks follow value order.
impl_bounded! {
    i8 => 8, u8, 0x80;
    u8 => 8, u8, 0;
    i16 => 16, u16, 0x8000;
    u16 => 16, u16, 0;
}

impl_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rank_order<T: BoundedKey + std::fmt::Debug>() {
        let mut prev = T::from_rank(0);
        assert_eq!(prev.rank(), 0);
        for rank in 1..T::DOMAIN {
            let value = T::from_rank(rank);
            assert_eq!(value.rank(), rank);
            assert!(prev < value, "{prev:?} !< {value:?}");
            prev = value;
        }
    }

    #[test]
    fn ranks_follow_value_order() {
        assert_rank_order::<i8>();
        assert_rank_order::<u8>();
        assert_rank_order::<i16>();
        assert_rank_order::<u16>();
        assert_eq!(i8::MIN.rank(), 0);
        assert_eq!(i8::MAX.rank(), 255);
        assert_eq!(i16::MIN.rank(), 0);
        assert_eq!(u16::MAX.rank(), 65535);
    }

    #[test]
    fn sign_bit_distinguishes_zeros() {
        assert!(FloatKey::has_sign_bit(-0.0_f64));
        assert!(!FloatKey::has_sign_bit(0.0_f64));
        assert!(FloatKey::has_sign_bit(-0.0_f32));
        assert!(!FloatKey::has_sign_bit(<f32 as FloatKey>::ZERO));
        assert!(FloatKey::is_nan(f64::NAN));
        assert!(!FloatKey::is_nan(f64::INFINITY));
    }
}
