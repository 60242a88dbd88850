//! Exact interval arithmetic baseline

use std::fmt;

use nu_core::Nu;

/// A closed interval `[lo, hi]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub lo: f64,
    pub hi: f64,
}

impl Interval {
    /// Create an interval; the endpoints are reordered if given reversed.
    pub fn new(lo: f64, hi: f64) -> Self {
        if lo <= hi {
            Interval { lo, hi }
        } else {
            Interval { lo: hi, hi: lo }
        }
    }

    /// Width of the interval, `hi - lo`.
    #[inline]
    pub fn width(self) -> f64 {
        self.hi - self.lo
    }

    /// Half-width, the interval counterpart of an uncertainty bound.
    #[inline]
    pub fn half_width(self) -> f64 {
        self.width() / 2.0
    }

    /// Midpoint of the interval.
    #[inline]
    pub fn midpoint(self) -> f64 {
        (self.lo + self.hi) / 2.0
    }

    /// Whether `x` lies inside the interval (endpoints included).
    #[inline]
    pub fn contains(self, x: f64) -> bool {
        x >= self.lo && x <= self.hi
    }

    /// Exact interval product via the four-corner rule.
    pub fn mul(self, other: Interval) -> Interval {
        let corners = [
            self.lo * other.lo,
            self.lo * other.hi,
            self.hi * other.lo,
            self.hi * other.hi,
        ];
        let lo = corners.iter().cloned().fold(f64::MAX, f64::min);
        let hi = corners.iter().cloned().fold(f64::MIN, f64::max);
        Interval { lo, hi }
    }

    /// Product of a whole sequence, folded left to right.
    pub fn product(intervals: &[Interval]) -> Interval {
        intervals
            .iter()
            .fold(Interval::new(1.0, 1.0), |acc, &i| acc.mul(i))
    }
}

impl From<Nu> for Interval {
    /// The bound interval `[n - u, n + u]` of a pair.
    fn from(p: Nu) -> Self {
        Interval {
            lo: p.lower_bound(),
            hi: p.upper_bound(),
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}
