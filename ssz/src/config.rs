//! Limits applied while decoding length-prefixed values.
//!
//! A length prefix read from an untrusted buffer controls how much memory a decoder
//! allocates. Decoders that take a [RangeCfg] reject any declared length outside the
//! configured range before copying a single byte.

use crate::Error;
use core::ops::{Bound, RangeBounds};

/// Configuration for limiting a decoded length (in bytes or elements).
///
/// # Examples
///
/// ```
/// use commonware_ssz::RangeCfg;
///
/// // Limit lengths to 0..=1024
/// let cfg = RangeCfg::new(0..=1024);
/// assert!(cfg.contains(500));
/// assert!(!cfg.contains(2000));
///
/// // Allow any length >= 1
/// let cfg: RangeCfg = (1..).into();
/// assert!(cfg.contains(1));
/// assert!(!cfg.contains(0));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct RangeCfg {
    start: Bound<usize>,
    end: Bound<usize>,
}

impl RangeCfg {
    /// Creates a new `RangeCfg` from any range of lengths.
    pub fn new(r: impl RangeBounds<usize>) -> Self {
        Self {
            start: r.start_bound().cloned(),
            end: r.end_bound().cloned(),
        }
    }

    /// Creates a `RangeCfg` that only accepts exactly `len`.
    pub fn exact(len: usize) -> Self {
        Self {
            start: Bound::Included(len),
            end: Bound::Included(len),
        }
    }

    /// Creates a `RangeCfg` that accepts every length.
    pub fn unbounded() -> Self {
        Self {
            start: Bound::Unbounded,
            end: Bound::Unbounded,
        }
    }

    /// Returns true if `len` is within this range.
    pub fn contains(&self, len: usize) -> bool {
        let above_start = match self.start {
            Bound::Included(s) => len >= s,
            Bound::Excluded(s) => len > s,
            Bound::Unbounded => true,
        };
        let below_end = match self.end {
            Bound::Included(e) => len <= e,
            Bound::Excluded(e) => len < e,
            Bound::Unbounded => true,
        };
        above_start && below_end
    }

    /// Returns `len` if it is within this range, otherwise [Error::InvalidLength].
    pub fn check(&self, len: usize) -> Result<usize, Error> {
        if !self.contains(len) {
            return Err(Error::InvalidLength(len));
        }
        Ok(len)
    }
}

impl Default for RangeCfg {
    fn default() -> Self {
        Self::unbounded()
    }
}

macro_rules! impl_from_range {
    ($($range:ty),*) => {
        $(
            impl From<$range> for RangeCfg {
                fn from(r: $range) -> Self {
                    Self::new(r)
                }
            }
        )*
    };
}

impl_from_range!(
    core::ops::Range<usize>,
    core::ops::RangeInclusive<usize>,
    core::ops::RangeFrom<usize>,
    core::ops::RangeTo<usize>,
    core::ops::RangeToInclusive<usize>,
    core::ops::RangeFull
);

impl RangeBounds<usize> for RangeCfg {
    fn start_bound(&self) -> Bound<&usize> {
        self.start.as_ref()
    }

    fn end_bound(&self) -> Bound<&usize> {
        self.end.as_ref()
    }
}
