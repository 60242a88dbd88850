//! Primitive operators and the infix operator surface
//!
//! Uncertainties accumulate under every operator. Addition and subtraction
//! sum the bounds; multiplication propagates first-order worst case using
//! absolute nominals so a negative nominal never shrinks the result bound.
//! The `std::ops` impls are a notational layer over the named methods and
//! add no semantics of their own.

use std::ops::{Add, Mul, Neg, Sub};

use crate::pair::Nu;

impl Nu {
    /// Addition: `(n1 + n2, u1 + u2)`.
    ///
    /// Uncertainties always add, even when the nominals have opposite sign.
    #[inline]
    pub fn add(self, other: Nu) -> Nu {
        Nu {
            n: self.n + other.n,
            u: self.u + other.u,
        }
    }

    /// Subtraction: `(n1 - n2, u1 + u2)`.
    ///
    /// A sign flip of one operand cannot decrease the deviation bound, so
    /// the uncertainty still adds.
    #[inline]
    pub fn sub(self, other: Nu) -> Nu {
        Nu {
            n: self.n - other.n,
            u: self.u + other.u,
        }
    }

    /// Multiplication: `(n1*n2, |n1|*u2 + |n2|*u1)`.
    #[inline]
    pub fn mul(self, other: Nu) -> Nu {
        Nu {
            n: self.n * other.n,
            u: self.n.abs() * other.u + other.n.abs() * self.u,
        }
    }

    /// Scaling by a constant: `(k*n, |k|*u)`.
    #[inline]
    pub fn scalar(self, k: f64) -> Nu {
        Nu {
            n: k * self.n,
            u: k.abs() * self.u,
        }
    }

    /// Affine map `k*x + c`: `(k*n + c, |k|*u)`.
    ///
    /// The additive constant carries no uncertainty of its own.
    #[inline]
    pub fn affine(self, k: f64, c: f64) -> Nu {
        Nu {
            n: k * self.n + c,
            u: k.abs() * self.u,
        }
    }

    /// Negation: `(-n, u)`. Equal to `scalar(-1)`.
    #[inline]
    pub fn negate(self) -> Nu {
        Nu {
            n: -self.n,
            u: self.u,
        }
    }
}

impl Add for Nu {
    type Output = Nu;

    #[inline]
    fn add(self, rhs: Nu) -> Nu {
        Nu::add(self, rhs)
    }
}

impl Sub for Nu {
    type Output = Nu;

    #[inline]
    fn sub(self, rhs: Nu) -> Nu {
        Nu::sub(self, rhs)
    }
}

impl Mul for Nu {
    type Output = Nu;

    #[inline]
    fn mul(self, rhs: Nu) -> Nu {
        Nu::mul(self, rhs)
    }
}

impl Neg for Nu {
    type Output = Nu;

    #[inline]
    fn neg(self) -> Nu {
        self.negate()
    }
}

/// A bare scalar on either side of `+` lifts to the exact pair `(k, 0)`.
impl Add<f64> for Nu {
    type Output = Nu;

    #[inline]
    fn add(self, rhs: f64) -> Nu {
        Nu::add(self, Nu::exact(rhs))
    }
}

impl Add<Nu> for f64 {
    type Output = Nu;

    #[inline]
    fn add(self, rhs: Nu) -> Nu {
        Nu::add(Nu::exact(self), rhs)
    }
}

/// `a * k` scales by magnitude; commutative with [`Mul<Nu> for f64`].
impl Mul<f64> for Nu {
    type Output = Nu;

    #[inline]
    fn mul(self, rhs: f64) -> Nu {
        self.scalar(rhs)
    }
}

impl Mul<Nu> for f64 {
    type Output = Nu;

    #[inline]
    fn mul(self, rhs: Nu) -> Nu {
        rhs.scalar(self)
    }
}
